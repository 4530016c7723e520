//! Scale builder: calendar time → horizontal pixels, clock time → vertical pixels.

use crate::models::{Entry, ZoomTransform};
use crate::utils::time::{ceil_day, floor_day, seconds_from_midnight};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Viewport and bar geometry the scales are computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub bar_size: f64,
    pub bar_padding: f64,
    pub day_start_hour: u32,
    pub day_end_hour: u32,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
            bar_size: 30.0,
            bar_padding: 5.0,
            day_start_hour: 7,
            day_end_hour: 19,
        }
    }
}

impl ChartGeometry {
    /// Horizontal space reserved for one day.
    pub fn slot(&self) -> f64 {
        self.bar_size + self.bar_padding
    }
}

/// Continuous linear mapping between a numeric domain and a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return d0;
        }
        d0 + (px - r0) / (r1 - r0) * (d1 - d0)
    }

    /// The scale as seen through a zoom transform on the horizontal axis.
    pub fn rescale_x(&self, t: &ZoomTransform) -> Self {
        self.rescaled(t.invert_x(self.range.0), t.invert_x(self.range.1))
    }

    /// The scale as seen through a zoom transform on the vertical axis.
    pub fn rescale_y(&self, t: &ZoomTransform) -> Self {
        self.rescaled(t.invert_y(self.range.0), t.invert_y(self.range.1))
    }

    fn rescaled(&self, px0: f64, px1: f64) -> Self {
        Self {
            domain: (self.invert(px0), self.invert(px1)),
            range: self.range,
        }
    }
}

/// Calendar time scale; the domain is kept in seconds since the epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    pub inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (NaiveDateTime, NaiveDateTime), range: (f64, f64)) -> Self {
        Self {
            inner: LinearScale::new((epoch(domain.0), epoch(domain.1)), range),
        }
    }

    pub fn apply(&self, t: NaiveDateTime) -> f64 {
        self.inner.apply(epoch(t))
    }

    pub fn invert(&self, px: f64) -> NaiveDateTime {
        from_epoch(self.inner.invert(px))
    }

    pub fn domain(&self) -> (NaiveDateTime, NaiveDateTime) {
        (from_epoch(self.inner.domain.0), from_epoch(self.inner.domain.1))
    }

    pub fn range(&self) -> (f64, f64) {
        self.inner.range
    }

    pub fn rescale(&self, t: &ZoomTransform) -> Self {
        Self {
            inner: self.inner.rescale_x(t),
        }
    }
}

/// Time-of-day scale; the domain is kept in seconds from midnight of the
/// reference day and may leave `0..86400` once rescaled by a zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockScale {
    pub inner: LinearScale,
}

impl ClockScale {
    pub fn new(from: NaiveTime, to: NaiveTime, range: (f64, f64)) -> Self {
        Self {
            inner: LinearScale::new((seconds_from_midnight(from), seconds_from_midnight(to)), range),
        }
    }

    pub fn apply(&self, t: NaiveTime) -> f64 {
        self.inner.apply(seconds_from_midnight(t))
    }

    pub fn apply_seconds(&self, secs: f64) -> f64 {
        self.inner.apply(secs)
    }

    /// Seconds from midnight at vertical pixel `px`.
    pub fn invert_seconds(&self, px: f64) -> f64 {
        self.inner.invert(px)
    }

    pub fn domain_seconds(&self) -> (f64, f64) {
        self.inner.domain
    }

    pub fn rescale(&self, t: &ZoomTransform) -> Self {
        Self {
            inner: self.inner.rescale_y(t),
        }
    }
}

/// Every scale the renderer needs for one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Scales {
    pub x: TimeScale,
    pub y: ClockScale,
    pub x_grid: TimeScale,
    pub y_grid: ClockScale,
    pub timeline_width: f64,
}

impl Scales {
    /// Compute scales for `entries` inside `geo`.
    ///
    /// `today` is only used when there is nothing to draw: the domain then
    /// collapses to that single day.
    pub fn compute(entries: &[Entry], geo: &ChartGeometry, today: NaiveDate) -> Self {
        let (d0, d1) = x_domain(entries).unwrap_or_else(|| {
            let start = today.and_time(NaiveTime::MIN);
            (start, start + Duration::days(1))
        });

        let timeline_width = timeline_width(d0, d1, geo);
        let half = geo.slot() / 2.0;

        let y_from = NaiveTime::from_hms_opt(geo.day_start_hour.min(23), 0, 0).unwrap_or(NaiveTime::MIN);
        let y_to = if geo.day_end_hour >= 24 {
            NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
        } else {
            NaiveTime::from_hms_opt(geo.day_end_hour, 0, 0).unwrap_or(NaiveTime::MIN)
        };

        Self {
            x: TimeScale::new((d0, d1), (0.0, timeline_width)),
            y: ClockScale::new(y_from, y_to, (0.0, geo.height)),
            x_grid: TimeScale::new((d0, d1), (-half, timeline_width - half)),
            y_grid: ClockScale::new(y_from, y_to, (0.0, geo.height)),
            timeline_width,
        }
    }
}

/// `[floor_day(min start), ceil_day(max end)]`, `None` for an empty set.
pub fn x_domain(entries: &[Entry]) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let min_start = entries.iter().map(|e| floor_day(e.start)).min()?;
    let max_end = entries.iter().map(|e| ceil_day(e.end)).max()?;
    Some((min_start, max_end))
}

/// `max(viewport width, span_days * (bar_size + bar_padding))`.
pub fn timeline_width(d0: NaiveDateTime, d1: NaiveDateTime, geo: &ChartGeometry) -> f64 {
    let span_days = (epoch(d1) - epoch(d0)) / SECONDS_PER_DAY;
    (span_days * geo.slot()).max(geo.width)
}

fn epoch(t: NaiveDateTime) -> f64 {
    let utc = t.and_utc();
    utc.timestamp() as f64 + utc.timestamp_subsec_nanos() as f64 / 1e9
}

fn from_epoch(secs: f64) -> NaiveDateTime {
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
        .map(|dt| dt.naive_utc())
        .unwrap_or_default()
}
