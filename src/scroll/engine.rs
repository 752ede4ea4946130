use super::Page;

/// Distance in pixels at which a damped scroll snaps onto its target.
const SNAP_THRESHOLD: f64 = 0.5;

/// Progress curve for timed scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    CubicOut,
}

impl Easing {
    /// Map progress in `[0, 1]` onto eased progress in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollOptions {
    /// Length of a programmatic scroll, in seconds.
    pub duration: f64,
    pub easing: Easing,
    /// Per-frame damping factor for wheel scrolling, at 60 fps.
    pub lerp: f64,
    pub smooth_wheel: bool,
    pub smooth_touch: bool,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            duration: 1.05,
            easing: Easing::CubicOut,
            lerp: 0.1,
            smooth_wheel: true,
            smooth_touch: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Animation {
    Timed { from: f64, to: f64, elapsed: f64 },
    Damped { to: f64 },
}

/// Frame-rate independent exponential approach from `from` to `to`.
pub fn damp(from: f64, to: f64, lambda: f64, dt: f64) -> f64 {
    let t = 1.0 - (-lambda * dt).exp();
    from + (to - from) * t
}

/// Eased scrolling engine driven one animation frame at a time.
///
/// The engine keeps its own notion of the scroll position while animating
/// and writes it back through [`Page::set_scroll_y`] on every frame.
#[derive(Debug)]
pub struct SmoothScroll {
    options: ScrollOptions,
    animated: f64,
    animation: Option<Animation>,
    last_frame: Option<f64>,
}

impl SmoothScroll {
    pub fn new(options: ScrollOptions) -> Self {
        Self {
            options,
            animated: 0.0,
            animation: None,
            last_frame: None,
        }
    }

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    pub fn is_scrolling(&self) -> bool {
        self.animation.is_some()
    }

    /// Where the running animation will end, if one is running.
    pub fn target(&self) -> Option<f64> {
        self.animation.map(|a| match a {
            Animation::Timed { to, .. } | Animation::Damped { to } => to,
        })
    }

    pub fn handles_touch(&self) -> bool {
        self.options.smooth_touch
    }

    /// Start a timed scroll towards `target + offset`.
    pub fn scroll_to<P: Page>(&mut self, target: f64, offset: f64, page: &P) {
        let from = self.current(page);
        let to = (target + offset).clamp(0.0, page.scroll_limit().max(0.0));
        tracing::trace!(from, to, "Timed scroll");
        self.animated = from;
        self.animation = Some(Animation::Timed {
            from,
            to,
            elapsed: 0.0,
        });
    }

    /// Feed a wheel delta. Returns `false` when wheel smoothing is off and
    /// the platform should scroll natively.
    pub fn on_wheel<P: Page>(&mut self, delta: f64, page: &P) -> bool {
        if !self.options.smooth_wheel {
            return false;
        }

        let base = self.target().unwrap_or_else(|| self.current(page));
        let to = (base + delta).clamp(0.0, page.scroll_limit().max(0.0));
        self.animated = self.current(page);
        self.animation = Some(Animation::Damped { to });
        true
    }

    /// Abandon any animation at its current position.
    pub fn stop(&mut self) {
        self.animation = None;
    }

    /// Advance one frame at `time_ms` and write the new position.
    pub fn raf<P: Page>(&mut self, time_ms: f64, page: &mut P) {
        let dt = self
            .last_frame
            .map_or(0.0, |last| ((time_ms - last) / 1000.0).max(0.0));
        self.last_frame = Some(time_ms);

        let (value, done) = match &mut self.animation {
            None => {
                self.animated = page.scroll_y();
                return;
            }
            Some(Animation::Timed { from, to, elapsed }) => {
                *elapsed += dt;
                let progress = if self.options.duration <= 0.0 {
                    1.0
                } else {
                    (*elapsed / self.options.duration).min(1.0)
                };
                let value = *from + (*to - *from) * self.options.easing.apply(progress);
                if progress >= 1.0 {
                    (*to, true)
                } else {
                    (value, false)
                }
            }
            Some(Animation::Damped { to }) => {
                let value = damp(self.animated, *to, self.options.lerp * 60.0, dt);
                if (*to - value).abs() < SNAP_THRESHOLD {
                    (*to, true)
                } else {
                    (value, false)
                }
            }
        };

        self.animated = value;
        page.set_scroll_y(value);
        if done {
            self.animation = None;
        }
    }

    fn current<P: Page>(&self, page: &P) -> f64 {
        if self.animation.is_some() {
            self.animated
        } else {
            page.scroll_y()
        }
    }
}
