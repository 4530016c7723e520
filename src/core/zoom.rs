//! Zoom/pan limits applied to incoming gesture transforms.

use crate::core::scale::ChartGeometry;
use crate::models::ZoomTransform;

pub const DEFAULT_MIN_ZOOM: f64 = 0.1;
pub const DEFAULT_MAX_ZOOM: f64 = 40.0;

/// Scale and translate extents of the chart's zoom behaviour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub scale_extent: (f64, f64),
    /// `[[x0, y0], [x1, y1]]` in chart space.
    pub translate_extent: [[f64; 2]; 2],
    /// Viewport size in pixels.
    pub viewport: (f64, f64),
}

impl ZoomLimits {
    /// Limits for a chart `timeline_width` pixels wide inside `geo`.
    ///
    /// The translate extent lets the chart move a full viewport past either
    /// end, scaled for the most zoomed-out level.
    pub fn for_chart(geo: &ChartGeometry, timeline_width: f64, min_zoom: f64, max_zoom: f64) -> Self {
        let (min_zoom, max_zoom) = sane_extent(min_zoom, max_zoom);
        let (w, h) = (geo.width, geo.height);
        Self {
            scale_extent: (min_zoom, max_zoom),
            translate_extent: [
                [(-10.0 - w) / min_zoom, -100.0 / min_zoom],
                [(timeline_width + w + 10.0) / min_zoom, (h + 100.0) / min_zoom],
            ],
            viewport: (w, h),
        }
    }

    /// Clamp `k` to the scale extent, then shift the translation so the
    /// viewport stays inside the translate extent.
    pub fn constrain(&self, t: ZoomTransform) -> ZoomTransform {
        let (kmin, kmax) = sane_extent(self.scale_extent.0, self.scale_extent.1);
        let k = if t.k.is_finite() { t.k.clamp(kmin, kmax) } else { 1.0 };
        let t = ZoomTransform::new(
            k,
            if t.x.is_finite() { t.x } else { 0.0 },
            if t.y.is_finite() { t.y } else { 0.0 },
        );

        let [[ex0, ey0], [ex1, ey1]] = self.translate_extent;
        let (vw, vh) = self.viewport;

        let dx0 = t.invert_x(0.0) - ex0;
        let dx1 = t.invert_x(vw) - ex1;
        let dy0 = t.invert_y(0.0) - ey0;
        let dy1 = t.invert_y(vh) - ey1;

        t.translate(shift(dx0, dx1), shift(dy0, dy1))
    }
}

/// Scale extent usable by `f64::clamp`: finite, positive and ordered.
/// Anything else falls back to the default extent.
pub(crate) fn sane_extent(min: f64, max: f64) -> (f64, f64) {
    if min.is_finite() && max.is_finite() && min > 0.0 && min <= max {
        (min, max)
    } else {
        (DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM)
    }
}

fn shift(d0: f64, d1: f64) -> f64 {
    if d1 > d0 {
        return (d0 + d1) / 2.0;
    }
    let low = d0.min(0.0);
    if low != 0.0 { low } else { d1.max(0.0) }
}
