//! Axis and gridline tick generation.

use crate::core::scale::{ClockScale, SECONDS_PER_DAY, TimeScale};
use crate::utils::time::ceil_day;
use chrono::{Datelike, Duration, NaiveDateTime};

pub const MIN_TICK_DAYS: u32 = 1;
pub const MAX_TICK_DAYS: u32 = 14;

/// Hard stop for tick loops on pathological domains.
const MAX_TICKS: usize = 5_000;

/// Candidate clock tick steps, in seconds.
const CLOCK_STEPS: [f64; 8] = [
    60.0, 300.0, 900.0, 1_800.0, 3_600.0, 10_800.0, 21_600.0, 43_200.0,
];

const CLOCK_TICK_TARGET: f64 = 10.0;

/// Days between x-axis ticks for a zoom scale `k`:
/// `clamp(floor(2^(4·(1−k))), 1, 14)`; `None` (no gesture yet) means every day.
pub fn tick_interval(k: Option<f64>) -> u32 {
    let Some(k) = k else {
        return MIN_TICK_DAYS;
    };

    let raw = 2f64.powf(4.0 * (1.0 - k)).floor();
    if raw.is_nan() || raw < MIN_TICK_DAYS as f64 {
        MIN_TICK_DAYS
    } else if raw > MAX_TICK_DAYS as f64 {
        MAX_TICK_DAYS
    } else {
        raw as u32
    }
}

/// Midnights inside the scale's domain whose day of month satisfies
/// `(day - 1) % every == 0`.
pub fn day_ticks(scale: &TimeScale, every: u32) -> Vec<NaiveDateTime> {
    let every = every.max(1);
    let (a, b) = scale.domain();
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    let mut out = Vec::new();
    let mut d = ceil_day(lo);
    while d <= hi && out.len() < MAX_TICKS {
        if (d.day() - 1) % every == 0 {
            out.push(d);
        }
        d += Duration::days(1);
    }
    out
}

/// X-axis label; blank for ticks outside `bounds` (the unzoomed domain).
pub fn day_label(d: NaiveDateTime, bounds: (NaiveDateTime, NaiveDateTime)) -> String {
    if d < bounds.0 || d > bounds.1 {
        return String::new();
    }
    d.format("%a, %d %b").to_string()
}

/// Step for the y axis, chosen to land near ten ticks over the visible span.
pub fn clock_step(scale: &ClockScale) -> f64 {
    let (a, b) = scale.domain_seconds();
    let target = (b - a).abs() / CLOCK_TICK_TARGET;

    let idx = CLOCK_STEPS.iter().position(|s| *s >= target);
    match idx {
        None => CLOCK_STEPS[CLOCK_STEPS.len() - 1],
        Some(0) => CLOCK_STEPS[0],
        Some(i) => {
            let (lower, upper) = (CLOCK_STEPS[i - 1], CLOCK_STEPS[i]);
            if target / lower < upper / target {
                lower
            } else {
                upper
            }
        }
    }
}

/// Multiples of `step` seconds inside the scale's domain.
pub fn clock_ticks(scale: &ClockScale, step: f64) -> Vec<f64> {
    let (a, b) = scale.domain_seconds();
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if step <= 0.0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut t = (lo / step).ceil() * step;
    while t <= hi && out.len() < MAX_TICKS {
        out.push(t);
        t += step;
    }
    out
}

/// `HH:MM` for a seconds-from-midnight tick, wrapping across days.
pub fn clock_label(secs: f64) -> String {
    let s = secs.rem_euclid(SECONDS_PER_DAY).round() as i64 % SECONDS_PER_DAY as i64;
    format!("{:02}:{:02}", s / 3600, (s % 3600) / 60)
}

