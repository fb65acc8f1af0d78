//! Viewport-driven presentation selection.
//!
//! The expanded sidebar and the compact dock both render the same catalog,
//! and both carry interactive per-item state (tooltips, the auth gate), so
//! exactly one of them may be mounted at a time.

/// Logical-pixel width at and above which the wide layout is used.
pub const WIDE_LAYOUT_MIN_WIDTH: f64 = 1024.0;

/// The two mutually exclusive presentation modes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SurfaceMode {
    /// Expanded sidebar / full header navigation
    Wide,
    /// Compact bottom dock
    Compact,
}

/// Tracks which side of the breakpoint the viewport is on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ResponsiveSurfaceSelector {
    wide: bool,
}

impl ResponsiveSurfaceSelector {
    /// Compute the initial mode from the bootstrap width. This runs
    /// synchronously before the first meaningful render, so there is no
    /// flash of the wrong layout.
    pub fn new(width: f64) -> Self {
        Self {
            wide: width >= WIDE_LAYOUT_MIN_WIDTH,
        }
    }

    pub fn mode(&self) -> SurfaceMode {
        if self.wide {
            SurfaceMode::Wide
        } else {
            SurfaceMode::Compact
        }
    }

    pub fn is_wide(&self) -> bool {
        self.wide
    }

    /// Recompute on a resize signal.
    ///
    /// Returns the new mode only when the breakpoint was crossed; resizes
    /// that stay on the same side are no-ops, so callers can skip redundant
    /// re-renders without affecting correctness.
    pub fn on_resize(&mut self, width: f64) -> Option<SurfaceMode> {
        let wide = width >= WIDE_LAYOUT_MIN_WIDTH;
        if wide == self.wide {
            return None;
        }
        self.wide = wide;
        Some(self.mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_mode_is_computed_from_width() {
        assert_eq!(
            ResponsiveSurfaceSelector::new(1280.0).mode(),
            SurfaceMode::Wide
        );
        assert_eq!(
            ResponsiveSurfaceSelector::new(390.0).mode(),
            SurfaceMode::Compact
        );
    }

    #[test]
    fn breakpoint_is_inclusive_on_the_wide_side() {
        assert_eq!(
            ResponsiveSurfaceSelector::new(WIDE_LAYOUT_MIN_WIDTH).mode(),
            SurfaceMode::Wide
        );
        assert_eq!(
            ResponsiveSurfaceSelector::new(WIDE_LAYOUT_MIN_WIDTH - 1.0).mode(),
            SurfaceMode::Compact
        );
    }

    #[test]
    fn crossing_the_breakpoint_switches_exactly_once() {
        let mut selector = ResponsiveSurfaceSelector::new(1023.0);
        assert_eq!(selector.on_resize(1025.0), Some(SurfaceMode::Wide));
        // Already wide; widening further is a no-op.
        assert_eq!(selector.on_resize(1030.0), None);
    }

    #[test]
    fn same_side_resizes_are_no_ops() {
        let mut selector = ResponsiveSurfaceSelector::new(500.0);
        assert_eq!(selector.on_resize(700.0), None);
        assert_eq!(selector.on_resize(1023.9), None);
        assert_eq!(selector.mode(), SurfaceMode::Compact);
    }

    #[test]
    fn crossing_back_switches_again() {
        let mut selector = ResponsiveSurfaceSelector::new(1400.0);
        assert_eq!(selector.on_resize(800.0), Some(SurfaceMode::Compact));
        assert_eq!(selector.on_resize(1200.0), Some(SurfaceMode::Wide));
    }
}
