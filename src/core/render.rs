//! SVG render pass: legend, axes, gridlines, bars and tooltip.
//!
//! Everything here is a pure function of its inputs except the colour
//! assignment, which hands out palette slots in bar order.

use crate::core::axis::{clock_label, clock_step, clock_ticks, day_label, day_ticks, tick_interval};
use crate::core::palette::ColorAssignment;
use crate::core::scale::{ChartGeometry, Scales};
use crate::models::{Category, Entry, Point, ZoomTransform};
use crate::utils::formatting::{escape_xml, px};
use std::collections::BTreeSet;
use unicode_width::UnicodeWidthStr;

pub const LEGEND_OFFSET: f64 = 20.0;
pub const LEGEND_SPACING: f64 = 100.0;
pub const TOOLTIP_LIFT: f64 = 28.0;
pub const DIM_OPACITY: f64 = 0.3;
const GRID_HOURS: f64 = 2.0;

/// Tooltip contents and anchor, present only while hovering.
#[derive(Debug, Clone, Copy)]
pub struct Tooltip<'a> {
    pub entry: &'a Entry,
    pub at: Point,
}

/// Everything one render pass reads.
pub struct Frame<'a> {
    pub geo: &'a ChartGeometry,
    pub scales: &'a Scales,
    pub entries: &'a [Entry],
    pub categories: &'a [Category],
    pub hidden: &'a BTreeSet<Category>,
    pub highlighted: Option<&'a str>,
    pub transform: ZoomTransform,
    /// Zoom scale of the last gesture, `None` before the first one.
    pub gesture_k: Option<f64>,
    pub tooltip: Option<Tooltip<'a>>,
}

impl Frame<'_> {
    pub fn is_visible(&self, e: &Entry) -> bool {
        !self.hidden.contains(&e.category)
    }
}

/// Full document, in paint order.
pub fn render_svg(frame: &Frame<'_>, colors: &mut ColorAssignment) -> String {
    let (w, h) = (px(frame.geo.width), px(frame.geo.height));

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
    ));
    svg.push_str(&render_legend(frame));
    svg.push_str(&render_axes(frame));
    svg.push_str(&render_bars(frame, colors));
    if let Some(tip) = &frame.tooltip {
        svg.push_str(&render_tooltip(tip));
    }
    svg.push_str("</svg>\n");
    svg
}

/// X axis, both grids and the y axis, drawn through the current transform.
pub fn render_axes(frame: &Frame<'_>) -> String {
    let mut out = String::new();
    out.push_str(&render_x_axis(frame));
    out.push_str(&render_x_grid(frame));
    out.push_str(&render_y_grid(frame));
    out.push_str(&render_y_axis(frame));
    out
}

pub fn render_legend(frame: &Frame<'_>) -> String {
    let mut out = format!(
        "  <g class=\"legend-layer\" transform=\"translate({},{})\">\n",
        px(LEGEND_OFFSET),
        px(LEGEND_OFFSET)
    );

    for (i, cat) in frame.categories.iter().enumerate() {
        let color = cat.color();
        let fill = if frame.hidden.contains(cat) { "white" } else { color };

        out.push_str(&format!(
            "    <g class=\"legend clickable\" data-category=\"{cat}\" transform=\"translate({},0)\">\n",
            px(i as f64 * LEGEND_SPACING)
        ));
        out.push_str(&format!(
            "      <rect class=\"checkbox-edge\" width=\"16\" height=\"16\" stroke=\"{color}\" stroke-width=\"2\" fill=\"white\"/>\n"
        ));
        out.push_str(&format!(
            "      <rect class=\"checkbox\" transform=\"translate(2,2)\" width=\"12\" height=\"12\" stroke-width=\"0\" fill=\"{fill}\"/>\n"
        ));
        out.push_str(&format!(
            "      <text x=\"25\" y=\"9\" dy=\".35em\">{cat}</text>\n"
        ));
        out.push_str("    </g>\n");
    }

    out.push_str("  </g>\n");
    out
}

fn render_x_axis(frame: &Frame<'_>) -> String {
    let every = tick_interval(frame.gesture_k);
    let bounds = frame.scales.x.domain();
    let x = frame.scales.x.rescale(&frame.transform);
    let (r0, r1) = x.range();

    let mut out = format!(
        "  <g class=\"axis axis--x\" transform=\"translate(0,{})\">\n",
        px(frame.geo.height)
    );
    out.push_str(&format!(
        "    <path class=\"domain\" stroke=\"currentColor\" d=\"M{},-6V0H{}V-6\"/>\n",
        px(r0),
        px(r1)
    ));

    for d in day_ticks(&x, every) {
        out.push_str(&format!(
            "    <g class=\"tick\" transform=\"translate({},0)\"><line stroke=\"currentColor\" y2=\"-6\"/><text fill=\"currentColor\" y=\"10\" x=\"9\" dy=\"-.7em\" transform=\"rotate(-90)\" style=\"text-anchor: start\">{}</text></g>\n",
            px(x.apply(d)),
            escape_xml(&day_label(d, bounds))
        ));
    }

    out.push_str("  </g>\n");
    out
}

fn render_x_grid(frame: &Frame<'_>) -> String {
    let every = tick_interval(frame.gesture_k);
    let grid = frame.scales.x_grid.rescale(&frame.transform);

    let mut out = String::from("  <g class=\"x grid\">\n");
    for d in day_ticks(&grid, every) {
        out.push_str(&format!(
            "    <g class=\"tick\" transform=\"translate({},0)\"><line stroke=\"currentColor\" y2=\"{}\"/></g>\n",
            px(grid.apply(d)),
            px(frame.geo.height)
        ));
    }
    out.push_str("  </g>\n");
    out
}

fn render_y_grid(frame: &Frame<'_>) -> String {
    let grid = frame.scales.y_grid.rescale(&frame.transform);

    let mut out = String::from("  <g class=\"y grid\">\n");
    for secs in clock_ticks(&grid, GRID_HOURS * 3_600.0) {
        out.push_str(&format!(
            "    <g class=\"tick\" transform=\"translate(0,{})\"><line stroke=\"currentColor\" x2=\"{}\"/></g>\n",
            px(grid.apply_seconds(secs)),
            px(frame.geo.width)
        ));
    }
    out.push_str("  </g>\n");
    out
}

fn render_y_axis(frame: &Frame<'_>) -> String {
    let y = frame.scales.y.rescale(&frame.transform);
    let step = clock_step(&y);
    let (r0, r1) = y.inner.range;

    let mut out = format!(
        "  <g class=\"axis axis--y\" transform=\"translate({},0)\">\n",
        px(frame.geo.width)
    );
    out.push_str(&format!(
        "    <path class=\"domain\" stroke=\"currentColor\" d=\"M-6,{}H0V{}H-6\"/>\n",
        px(r0),
        px(r1)
    ));
    for secs in clock_ticks(&y, step) {
        out.push_str(&format!(
            "    <g class=\"tick\" transform=\"translate(0,{})\"><line stroke=\"currentColor\" x2=\"-6\"/><text fill=\"currentColor\" x=\"-9\" dy=\"0.32em\" text-anchor=\"end\">{}</text></g>\n",
            px(y.apply_seconds(secs)),
            clock_label(secs)
        ));
    }
    out.push_str("  </g>\n");
    out
}

/// Geometry of one bar in untransformed chart space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRect {
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

/// Day bucket on x, time of day on y; height is never negative.
pub fn bar_rect(e: &Entry, scales: &Scales, geo: &ChartGeometry) -> BarRect {
    let day = e.day().and_time(chrono::NaiveTime::MIN);
    let y0 = scales.y.apply(e.start_tod());
    let y1 = scales.y.apply(e.end_tod());

    BarRect {
        x: scales.x.apply(day) - geo.bar_size / 2.0,
        y: y0,
        width: geo.bar_size,
        height: (y1 - y0).max(0.0),
    }
}

pub fn fill_opacity(e: &Entry, highlighted: Option<&str>) -> f64 {
    if highlighted == Some(e.pretty.as_str()) {
        1.0
    } else {
        DIM_OPACITY
    }
}

pub fn render_bars(frame: &Frame<'_>, colors: &mut ColorAssignment) -> String {
    let mut out = format!(
        "  <g class=\"graph\" transform=\"{}\">\n",
        frame.transform.to_svg()
    );

    for e in frame.entries.iter().filter(|e| frame.is_visible(e)) {
        let r = bar_rect(e, frame.scales, frame.geo);
        let fill = colors.pick(&e.pretty);

        out.push_str(&format!(
            "    <rect class=\"times bar\" data-category=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"3\" ry=\"3\" stroke-width=\"2\" stroke=\"{}\" fill=\"{}\" fill-opacity=\"{}\"><title>{}\n{}</title></rect>\n",
            e.category,
            px(r.x),
            px(r.y),
            px(r.width),
            px(r.height),
            e.category.color(),
            fill,
            px(fill_opacity(e, frame.highlighted)),
            escape_xml(&e.pretty),
            e.category
        ));
    }

    out.push_str("  </g>\n");
    out
}

pub fn render_tooltip(tip: &Tooltip<'_>) -> String {
    let label = tip.entry.pretty.as_str();
    let kind = tip.entry.category.as_str();
    let cols = UnicodeWidthStr::width(label).max(kind.len()) as f64;

    format!(
        "  <g class=\"tooltip\" opacity=\"0.8\" transform=\"translate({},{})\"><rect width=\"{}\" height=\"36\" rx=\"4\" ry=\"4\" fill=\"white\" stroke=\"#333\"/><text font-size=\"12\"><tspan x=\"4\" dy=\"1.2em\">{}</tspan><tspan x=\"4\" dy=\"1.2em\">{}</tspan></text></g>\n",
        px(tip.at.x),
        px(tip.at.y - TOOLTIP_LIFT),
        px(cols * 7.0 + 8.0),
        escape_xml(label),
        kind
    )
}
