//! In-page anchor navigation with sticky-header compensation.
//!
//! The browser is reached through two small seams:
//! - [`Page`]: layout queries and scroll mutation for the current document
//! - [`FrameScheduler`]: animation-frame requests and cancellation
//!
//! [`ScrollController`] is the service object that owns the optional
//! [`SmoothScroll`] engine. It is constructed once by the root layout and
//! handed by reference to every navigation trigger.

mod engine;
mod frame;
mod parallax;

pub use engine::*;
pub use frame::*;
pub use parallax::*;

/// Header offset used when the sticky header cannot be measured.
pub const FALLBACK_HEADER_OFFSET: f64 = 72.0;

/// The document a controller scrolls.
pub trait Page {
    /// Top of the element with the given id, relative to the viewport.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Rendered height of the sticky header, if there is one to measure.
    fn header_height(&self) -> Option<f64>;

    /// Current vertical scroll position.
    fn scroll_y(&self) -> f64;

    /// Largest reachable scroll position.
    fn scroll_limit(&self) -> f64;

    /// Jump to a position immediately. Used by the engine once per frame.
    fn set_scroll_y(&mut self, y: f64);

    /// Platform smooth scroll, used when no engine is present.
    fn smooth_scroll_to(&mut self, top: f64);

    /// Replace the URL fragment without adding a history entry.
    fn replace_fragment(&mut self, fragment: &str);
}

/// A click on a navigation link.
#[derive(Debug, Default)]
pub struct NavigationEvent {
    default_prevented: bool,
}

impl NavigationEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What [`ScrollController::handle_anchor_click`] did with a click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationOutcome {
    /// Not a fragment link; default navigation proceeds.
    PassThrough,
    /// Fragment link with no matching element.
    MissingTarget,
    /// Handed to the smooth-scroll engine with this absolute element top.
    Engine { target: f64 },
    /// Native smooth scroll to this position.
    Native { top: f64 },
}

/// Owns the smooth-scroll engine and turns anchor clicks into scrolls.
#[derive(Debug)]
pub struct ScrollController {
    options: ScrollOptions,
    engine: Option<SmoothScroll>,
}

impl ScrollController {
    /// A controller without an engine. Navigation falls back to native
    /// smooth scrolling until [`mount`](Self::mount) is called.
    pub fn new(options: ScrollOptions) -> Self {
        Self {
            options,
            engine: None,
        }
    }

    pub fn engine(&self) -> Option<&SmoothScroll> {
        self.engine.as_ref()
    }

    pub fn engine_mut(&mut self) -> Option<&mut SmoothScroll> {
        self.engine.as_mut()
    }

    /// Create the engine if it does not exist yet.
    pub fn ensure_engine(&mut self) -> &mut SmoothScroll {
        let options = &self.options;
        self.engine.get_or_insert_with(|| {
            tracing::debug!(
                duration = options.duration,
                lerp = options.lerp,
                "Creating smooth-scroll engine"
            );
            SmoothScroll::new(options.clone())
        })
    }

    /// Attach to a layout: make sure the engine exists and start driving it
    /// every frame. Mounting again reuses the same engine.
    pub fn mount<S: FrameScheduler>(&mut self, scheduler: &mut S) -> FrameLoop {
        self.ensure_engine();
        FrameLoop::start(scheduler)
    }

    /// Height to keep clear above a scroll target.
    pub fn sticky_offset<P: Page>(page: &P) -> f64 {
        page.header_height().unwrap_or(FALLBACK_HEADER_OFFSET)
    }

    /// Handle a click on a link pointing at `href`.
    ///
    /// Only `#fragment` links are intercepted. A fragment with no matching
    /// element is left alone and does not prevent default navigation.
    pub fn handle_anchor_click<P: Page>(
        &mut self,
        page: &mut P,
        event: &mut NavigationEvent,
        href: &str,
    ) -> NavigationOutcome {
        let Some(id) = href.strip_prefix('#') else {
            return NavigationOutcome::PassThrough;
        };

        let Some(element_top) = page.element_top(id) else {
            tracing::debug!(href, "No element for anchor");
            return NavigationOutcome::MissingTarget;
        };

        event.prevent_default();
        let offset = Self::sticky_offset(page);
        let scroll_y = page.scroll_y();

        let outcome = match self.engine.as_mut() {
            Some(engine) => {
                let target = element_top + scroll_y;
                engine.scroll_to(target, -offset, page);
                NavigationOutcome::Engine { target }
            }
            None => {
                let top = element_top + scroll_y - offset;
                page.smooth_scroll_to(top);
                NavigationOutcome::Native { top }
            }
        };

        page.replace_fragment(href);
        outcome
    }
}

impl Default for ScrollController {
    fn default() -> Self {
        Self::new(ScrollOptions::default())
    }
}
