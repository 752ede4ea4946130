/// Linear scroll-to-offset mapping for a parallax layer, clamped at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl Parallax {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    /// Page background drifting up as the hero scrolls away.
    pub const PAGE_BACKGROUND: Parallax = Parallax::new((0.0, 600.0), (0.0, -120.0));
    pub const PORTRAIT: Parallax = Parallax::new((0.0, 600.0), (0.0, -40.0));
    pub const HERO_BACKGROUND: Parallax = Parallax::new((0.0, 400.0), (0.0, -40.0));
    pub const HERO_MIDDLE: Parallax = Parallax::new((0.0, 400.0), (0.0, -20.0));
    pub const HERO_FOREGROUND: Parallax = Parallax::new((0.0, 400.0), (0.0, -8.0));

    /// Layer offset for the given scroll position.
    pub fn offset(&self, scroll_y: f64) -> f64 {
        let (start, end) = self.input;
        let (from, to) = self.output;
        if end == start {
            return if scroll_y < start { from } else { to };
        }
        let progress = ((scroll_y - start) / (end - start)).clamp(0.0, 1.0);
        from + (to - from) * progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_inside_range() {
        assert_eq!(Parallax::PAGE_BACKGROUND.offset(300.0), -60.0);
        assert_eq!(Parallax::HERO_MIDDLE.offset(200.0), -10.0);
    }

    #[test]
    fn clamps_outside_range() {
        assert_eq!(Parallax::PORTRAIT.offset(-50.0), 0.0);
        assert_eq!(Parallax::PORTRAIT.offset(5_000.0), -40.0);
        assert_eq!(Parallax::HERO_FOREGROUND.offset(400.0), -8.0);
    }

    #[test]
    fn degenerate_range_steps() {
        let step = Parallax::new((100.0, 100.0), (0.0, 10.0));
        assert_eq!(step.offset(99.0), 0.0);
        assert_eq!(step.offset(100.0), 10.0);
    }
}
