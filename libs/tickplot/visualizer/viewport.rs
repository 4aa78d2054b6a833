//! Chart viewport
//!
//! Holds the visible x/y bounds and the pan/zoom operations that move
//! them. Axis zoom uses step fractions (0.3 in, 1.3 out); scroll zoom
//! scales both axes about the viewport center.

use crate::series::SeriesSet;

/// Fraction of the range removed from each end on a zoom-in step
pub const ZOOM_IN_FRACTION: f64 = 0.3;
/// Fraction of the range added to each end on a zoom-out step
pub const ZOOM_OUT_FRACTION: f64 = 1.3;
/// Scroll-wheel zoom base
pub const SCROLL_SCALE: f64 = 1.1;

const FIT_PADDING: f64 = 0.02;

/// Visible chart bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: (f64, f64),
    pub y: (f64, f64),
    home_x: (f64, f64),
    home_y: (f64, f64),
}

impl Viewport {
    /// Fit the viewport to a series set with a small margin.
    ///
    /// An empty set falls back to unit bounds so the chart still draws.
    pub fn fit(series: &SeriesSet) -> Self {
        let x = padded(series.x_extent().unwrap_or((0.0, 1.0)));
        let y = padded(series.y_extent().unwrap_or((0.0, 1.0)));
        Self {
            x,
            y,
            home_x: x,
            home_y: y,
        }
    }

    /// Restore the fitted bounds
    pub fn reset(&mut self) {
        self.x = self.home_x;
        self.y = self.home_y;
    }

    /// Step-zoom the x axis. Fractions below 1 zoom in, above 1 zoom out.
    pub fn zoom_x(&mut self, fraction: f64) {
        self.x = step_zoom(self.x, fraction);
    }

    /// Step-zoom the y axis. Fractions below 1 zoom in, above 1 zoom out.
    pub fn zoom_y(&mut self, fraction: f64) {
        self.y = step_zoom(self.y, fraction);
    }

    /// Scale both axes about the viewport center.
    ///
    /// A factor below 1 zooms in, above 1 zooms out.
    pub fn zoom_scroll(&mut self, factor: f64) {
        self.x = center_scale(self.x, factor);
        self.y = center_scale(self.y, factor);
    }

    /// Shift the x axis by a signed fraction of its range
    pub fn pan_x(&mut self, fraction: f64) {
        let shift = (self.x.1 - self.x.0) * fraction;
        self.x = (self.x.0 + shift, self.x.1 + shift);
    }

    /// Shift the y axis by a signed fraction of its range
    pub fn pan_y(&mut self, fraction: f64) {
        let shift = (self.y.1 - self.y.0) * fraction;
        self.y = (self.y.0 + shift, self.y.1 + shift);
    }
}

fn padded((lo, hi): (f64, f64)) -> (f64, f64) {
    let range = hi - lo;
    // Degenerate extents (single point) still need a visible range
    let pad = if range > 0.0 { range * FIT_PADDING } else { 1.0 };
    (lo - pad, hi + pad)
}

fn step_zoom((lo, hi): (f64, f64), fraction: f64) -> (f64, f64) {
    let range = hi - lo;
    if fraction < 1.0 {
        (lo + range * fraction, hi - range * fraction)
    } else {
        (lo - range * fraction, hi + range * fraction)
    }
}

fn center_scale((lo, hi): (f64, f64), factor: f64) -> (f64, f64) {
    let center = (lo + hi) * 0.5;
    let half = (hi - lo) * 0.5 * factor;
    (center - half, center + half)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport {
            x: (0.0, 100.0),
            y: (10.0, 20.0),
            home_x: (0.0, 100.0),
            home_y: (10.0, 20.0),
        }
    }

    #[test]
    fn test_zoom_in_shrinks_range() {
        let mut v = viewport();
        v.zoom_x(ZOOM_IN_FRACTION);
        assert_eq!(v.x, (30.0, 70.0));
        // y untouched
        assert_eq!(v.y, (10.0, 20.0));
    }

    #[test]
    fn test_zoom_out_grows_range() {
        let mut v = viewport();
        v.zoom_y(ZOOM_OUT_FRACTION);
        assert_eq!(v.y, (-3.0, 33.0));
    }

    #[test]
    fn test_scroll_zoom_preserves_center() {
        let mut v = viewport();
        v.zoom_scroll(1.0 / SCROLL_SCALE);
        let x_center = (v.x.0 + v.x.1) * 0.5;
        let y_center = (v.y.0 + v.y.1) * 0.5;
        assert!((x_center - 50.0).abs() < 1e-9);
        assert!((y_center - 15.0).abs() < 1e-9);
        assert!(v.x.1 - v.x.0 < 100.0);
    }

    #[test]
    fn test_pan() {
        let mut v = viewport();
        v.pan_x(0.1);
        assert_eq!(v.x, (10.0, 110.0));
        v.pan_y(-0.5);
        assert_eq!(v.y, (5.0, 15.0));
    }

    #[test]
    fn test_reset_restores_home() {
        let mut v = viewport();
        v.zoom_x(ZOOM_IN_FRACTION);
        v.pan_y(0.4);
        v.reset();
        assert_eq!(v.x, (0.0, 100.0));
        assert_eq!(v.y, (10.0, 20.0));
    }

    #[test]
    fn test_fit_empty_series() {
        let v = Viewport::fit(&SeriesSet::default());
        assert!(v.x.0 < v.x.1);
        assert!(v.y.0 < v.y.1);
    }
}
