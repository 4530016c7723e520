//! `TimelineView`: the owned chart context and its interaction state machine.
//!
//! Pointer positions, zoom transforms and legend clicks arrive as explicit
//! [`ViewEvent`]s; the view updates its state and reports which layers need
//! repainting. Rendering reads the state back through [`TimelineView::render`].

use crate::core::loader::{self, Dataset};
use crate::core::palette::ColorAssignment;
use crate::core::render::{self, BarRect, Frame, Tooltip};
use crate::core::scale::{ChartGeometry, Scales};
use crate::core::zoom::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, ZoomLimits, sane_extent};
use crate::errors::AppResult;
use crate::models::{Category, Entry, Point, ZoomTransform};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::path::Path;

/// Categories currently hidden from the bar layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilitySet {
    hidden: BTreeSet<Category>,
}

impl VisibilitySet {
    /// Flip membership of `c`; returns `true` when `c` is now hidden.
    pub fn toggle(&mut self, c: Category) -> bool {
        if self.hidden.remove(&c) {
            false
        } else {
            self.hidden.insert(c);
            true
        }
    }

    pub fn is_hidden(&self, c: Category) -> bool {
        self.hidden.contains(&c)
    }

    pub fn hidden(&self) -> &BTreeSet<Category> {
        &self.hidden
    }
}

/// Input to the interaction handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    /// Pointer entered the bar of entry `entry` (index into `entries()`).
    PointerEnter { entry: usize, at: Point },
    PointerMove { at: Point },
    PointerLeave,
    /// Pan/zoom gesture produced a new transform.
    Zoom(ZoomTransform),
    LegendClick(Category),
    Resize { width: f64, height: f64 },
}

/// Layers an event invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    None,
    /// Tooltip position only.
    Tooltip,
    /// Bar layer (filtering or highlight opacity), plus the tooltip.
    Bars,
    /// Axes, gridlines and the graph transform; bars keep their geometry.
    Axes,
    /// Everything, scales included.
    Full,
}

/// Observable interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewState {
    Idle,
    Hovering(usize),
    Zoomed(ZoomTransform),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Hover {
    entry: usize,
    at: Point,
}

pub struct TimelineView {
    geo: ChartGeometry,
    zoom_extent: (f64, f64),
    today: NaiveDate,

    data: Dataset,
    scales: Scales,
    limits: ZoomLimits,

    visibility: VisibilitySet,
    colors: ColorAssignment,

    transform: ZoomTransform,
    gesture_k: Option<f64>,
    hover: Option<Hover>,
}

impl TimelineView {
    /// Empty view; `today` anchors the domain while no data is loaded.
    pub fn new(geo: ChartGeometry, today: NaiveDate) -> Self {
        let scales = Scales::compute(&[], &geo, today);
        let limits = ZoomLimits::for_chart(&geo, scales.timeline_width, DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM);

        Self {
            geo,
            zoom_extent: (DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM),
            today,
            data: Dataset::default(),
            scales,
            limits,
            visibility: VisibilitySet::default(),
            colors: ColorAssignment::new(),
            transform: ZoomTransform::IDENTITY,
            gesture_k: None,
            hover: None,
        }
    }

    /// Override the scale extent; a non-finite, non-positive or inverted
    /// extent keeps the defaults.
    pub fn with_zoom_extent(mut self, min: f64, max: f64) -> Self {
        self.zoom_extent = sane_extent(min, max);
        self.relayout();
        self
    }

    /// Replace the in-memory dataset. Visibility and colours survive, the
    /// transform and hover state do not.
    pub fn load(&mut self, data: Dataset) {
        self.data = data;
        self.transform = ZoomTransform::IDENTITY;
        self.gesture_k = None;
        self.hover = None;
        self.relayout();
    }

    pub fn load_file(&mut self, path: &Path) -> AppResult<()> {
        let data = loader::load_file(path)?;
        self.load(data);
        Ok(())
    }

    fn relayout(&mut self) {
        self.scales = Scales::compute(&self.data.entries, &self.geo, self.today);
        self.limits = ZoomLimits::for_chart(
            &self.geo,
            self.scales.timeline_width,
            self.zoom_extent.0,
            self.zoom_extent.1,
        );
    }

    pub fn handle(&mut self, event: ViewEvent) -> Redraw {
        match event {
            ViewEvent::PointerEnter { entry, at } => self.pointer_enter(entry, at),
            ViewEvent::PointerMove { at } => match self.hover.as_mut() {
                Some(h) => {
                    h.at = at;
                    Redraw::Tooltip
                }
                None => Redraw::None,
            },
            ViewEvent::PointerLeave => {
                if self.hover.take().is_some() {
                    Redraw::Bars
                } else {
                    Redraw::None
                }
            }
            ViewEvent::Zoom(t) => {
                self.transform = self.limits.constrain(t);
                self.gesture_k = Some(self.transform.k);
                Redraw::Axes
            }
            ViewEvent::LegendClick(c) => {
                self.visibility.toggle(c);
                if self.hover.is_some_and(|h| self.data.entries[h.entry].category == c) {
                    self.hover = None;
                }
                Redraw::Bars
            }
            ViewEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    fn pointer_enter(&mut self, entry: usize, at: Point) -> Redraw {
        let Some(e) = self.data.entries.get(entry) else {
            return Redraw::None;
        };
        if self.visibility.is_hidden(e.category) {
            return Redraw::None;
        }

        let same_label = self
            .hover
            .is_some_and(|h| self.data.entries[h.entry].pretty == e.pretty);
        self.hover = Some(Hover { entry, at });

        if same_label { Redraw::Tooltip } else { Redraw::Bars }
    }

    fn resize(&mut self, width: f64, height: f64) -> Redraw {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Redraw::None;
        }

        self.geo.width = width;
        self.geo.height = height;
        self.transform = ZoomTransform::IDENTITY;
        self.gesture_k = None;
        self.hover = None;
        self.relayout();
        Redraw::Full
    }

    pub fn state(&self) -> ViewState {
        if let Some(h) = self.hover {
            ViewState::Hovering(h.entry)
        } else if self.gesture_k.is_some() {
            ViewState::Zoomed(self.transform)
        } else {
            ViewState::Idle
        }
    }

    // ---------------------------
    // Rendering
    // ---------------------------

    fn frame(&self) -> Frame<'_> {
        frame_of(
            &self.geo,
            &self.scales,
            &self.data,
            &self.visibility,
            self.transform,
            self.gesture_k,
            self.hover,
        )
    }

    /// Run a render pass that may assign new colours.
    fn with_frame<R>(&mut self, pass: impl FnOnce(&Frame<'_>, &mut ColorAssignment) -> R) -> R {
        let frame = frame_of(
            &self.geo,
            &self.scales,
            &self.data,
            &self.visibility,
            self.transform,
            self.gesture_k,
            self.hover,
        );
        pass(&frame, &mut self.colors)
    }

    /// Whole SVG document for the current state.
    pub fn render(&mut self) -> String {
        self.with_frame(render::render_svg)
    }

    /// Bar layer only (`<g class="graph">`).
    pub fn render_bars(&mut self) -> String {
        self.with_frame(render::render_bars)
    }

    /// Axes and gridlines only.
    pub fn render_axes(&self) -> String {
        render::render_axes(&self.frame())
    }

    /// Legend layer only.
    pub fn render_legend(&self) -> String {
        render::render_legend(&self.frame())
    }

    // ---------------------------
    // Queries
    // ---------------------------

    pub fn entries(&self) -> &[Entry] {
        &self.data.entries
    }

    pub fn dataset(&self) -> &Dataset {
        &self.data
    }

    pub fn categories(&self) -> &[Category] {
        &self.data.categories
    }

    pub fn visible_entries(&self) -> Vec<&Entry> {
        self.data
            .entries
            .iter()
            .filter(|e| !self.visibility.is_hidden(e.category))
            .collect()
    }

    pub fn visibility(&self) -> &VisibilitySet {
        &self.visibility
    }

    pub fn colors(&self) -> &ColorAssignment {
        &self.colors
    }

    pub fn geometry(&self) -> &ChartGeometry {
        &self.geo
    }

    pub fn scales(&self) -> &Scales {
        &self.scales
    }

    pub fn transform(&self) -> ZoomTransform {
        self.transform
    }

    /// Pretty name currently raised to full opacity.
    pub fn highlighted(&self) -> Option<&str> {
        self.hover.map(|h| self.data.entries[h.entry].pretty.as_str())
    }

    /// Index of the first visible entry with this pretty name.
    pub fn find_entry(&self, pretty: &str) -> Option<usize> {
        self.data
            .entries
            .iter()
            .position(|e| e.pretty == pretty && !self.visibility.is_hidden(e.category))
    }

    /// Untransformed bar geometry of entry `idx`.
    pub fn bar(&self, idx: usize) -> Option<BarRect> {
        self.data
            .entries
            .get(idx)
            .map(|e| render::bar_rect(e, &self.scales, &self.geo))
    }

    /// Centre of entry `idx`'s bar on screen, through the current transform.
    pub fn bar_center(&self, idx: usize) -> Option<Point> {
        let r = self.bar(idx)?;
        Some(Point::new(
            self.transform.apply_x(r.x + r.width / 2.0),
            self.transform.apply_y(r.y + r.height / 2.0),
        ))
    }

    /// Topmost visible bar under a screen point; later bars paint on top.
    pub fn entry_at(&self, p: Point) -> Option<usize> {
        let local = Point::new(self.transform.invert_x(p.x), self.transform.invert_y(p.y));
        self.data
            .entries
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, e)| !self.visibility.is_hidden(e.category))
            .find(|(_, e)| render::bar_rect(e, &self.scales, &self.geo).contains(local))
            .map(|(i, _)| i)
    }
}

fn frame_of<'a>(
    geo: &'a ChartGeometry,
    scales: &'a Scales,
    data: &'a Dataset,
    visibility: &'a VisibilitySet,
    transform: ZoomTransform,
    gesture_k: Option<f64>,
    hover: Option<Hover>,
) -> Frame<'a> {
    Frame {
        geo,
        scales,
        entries: &data.entries,
        categories: &data.categories,
        hidden: visibility.hidden(),
        highlighted: hover.map(|h| data.entries[h.entry].pretty.as_str()),
        transform,
        gesture_k,
        tooltip: hover.map(|h| Tooltip {
            entry: &data.entries[h.entry],
            at: h.at,
        }),
    }
}
