//! Rotating "typewriter" text: type a word, pause, delete it, move on.
//!
//! [`Typewriter`] is a pure state machine. The caller waits
//! [`next_delay`](Typewriter::next_delay), calls [`tick`](Typewriter::tick)
//! and renders [`text`](Typewriter::text).

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterOptions {
    pub typing_speed: Duration,
    pub deleting_speed: Duration,
    /// Hold time once a word is fully typed.
    pub pause: Duration,
    /// Start over after the last word instead of stopping.
    pub looping: bool,
}

impl Default for TypewriterOptions {
    fn default() -> Self {
        Self {
            typing_speed: Duration::from_millis(60),
            deleting_speed: Duration::from_millis(40),
            pause: Duration::from_millis(1200),
            looping: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<Vec<char>>,
    options: TypewriterOptions,
    index: usize,
    visible: usize,
    deleting: bool,
    finished: bool,
}

impl Typewriter {
    pub fn new<I, S>(words: I, options: TypewriterOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<Vec<char>> = words
            .into_iter()
            .map(|w| w.as_ref().chars().collect())
            .collect();
        if words.is_empty() {
            words.push(Vec::new());
        }

        Self {
            words,
            options,
            index: 0,
            visible: 0,
            deleting: false,
            finished: false,
        }
    }

    /// The currently visible prefix of the current word.
    pub fn text(&self) -> String {
        self.current().iter().take(self.visible).collect()
    }

    pub fn word_index(&self) -> usize {
        self.index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Time to wait before the next [`tick`](Self::tick), or `None` once
    /// the animation has stopped.
    pub fn next_delay(&self) -> Option<Duration> {
        if self.finished {
            None
        } else if self.fully_typed() {
            Some(self.options.pause)
        } else if self.deleting {
            Some(self.options.deleting_speed)
        } else {
            Some(self.options.typing_speed)
        }
    }

    /// Apply the transition scheduled by [`next_delay`](Self::next_delay).
    pub fn tick(&mut self) {
        if self.finished {
            return;
        }

        if self.fully_typed() {
            self.deleting = true;
        } else if self.deleting {
            self.visible -= 1;
        } else {
            self.visible += 1;
        }

        if self.deleting && self.visible == 0 {
            self.rotate();
        }
    }

    fn rotate(&mut self) {
        if self.index + 1 >= self.words.len() && !self.options.looping {
            self.finished = true;
            return;
        }
        self.index = (self.index + 1) % self.words.len();
        self.deleting = false;
    }

    fn fully_typed(&self) -> bool {
        !self.deleting && self.visible == self.current().len()
    }

    fn current(&self) -> &[char] {
        &self.words[self.index]
    }
}
