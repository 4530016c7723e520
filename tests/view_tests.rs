mod common;
use common::{SAMPLE, count, sample, sample_view, today, write_dataset};
use rtimeline::core::palette::{ColorAssignment, PALETTE};
use rtimeline::core::{ChartGeometry, Redraw, TimelineView, ViewEvent, ViewState};
use rtimeline::models::{Category, Point, ZoomTransform};
use std::path::Path;

fn visible_categories(view: &TimelineView) -> Vec<Category> {
    view.visible_entries().iter().map(|e| e.category).collect()
}

#[test]
fn test_initial_render_draws_every_layer() {
    let mut view = sample_view();
    let svg = view.render();

    assert!(svg.starts_with("<svg"));
    assert_eq!(count(&svg, "class=\"times bar\""), 5);
    assert_eq!(count(&svg, "class=\"legend clickable\""), 5);
    assert!(svg.contains("class=\"axis axis--x\""));
    assert!(svg.contains("class=\"axis axis--y\""));
    assert!(svg.contains("class=\"x grid\""));
    assert!(svg.contains("class=\"y grid\""));
    assert!(svg.contains("Mon, 04 Mar"));
    assert!(!svg.contains("class=\"tooltip\""));
    assert!(svg.contains(&view.render_legend()));
    assert!(svg.contains(&view.render_axes()));
    assert_eq!(view.state(), ViewState::Idle);
}

#[test]
fn test_legend_toggle_hides_only_that_category() {
    let mut view = sample_view();
    let before = visible_categories(&view);

    assert_eq!(view.handle(ViewEvent::LegendClick(Category::Ops)), Redraw::Bars);
    let after = visible_categories(&view);

    assert_eq!(after.len(), 4);
    assert!(!after.contains(&Category::Ops));
    let expected: Vec<Category> = before.into_iter().filter(|c| *c != Category::Ops).collect();
    assert_eq!(after, expected);

    let svg = view.render();
    assert_eq!(count(&svg, "class=\"times bar\""), 4);
    assert!(!svg.contains("data-category=\"ops\" x="));
    // the legend row stays, with an empty checkbox
    assert!(svg.contains("data-category=\"ops\" transform="));
}

#[test]
fn test_legend_toggle_twice_restores() {
    let mut view = sample_view();
    let original = view.render();

    view.handle(ViewEvent::LegendClick(Category::Calendar));
    view.handle(ViewEvent::LegendClick(Category::Calendar));

    assert_eq!(view.visible_entries().len(), 5);
    assert_eq!(view.render(), original);
}

#[test]
fn test_legend_toggle_leaves_scales_alone() {
    let mut view = sample_view();
    let scales = view.scales().clone();

    view.handle(ViewEvent::LegendClick(Category::Calendar));

    assert_eq!(view.scales(), &scales);
}

#[test]
fn test_hover_highlights_same_label() {
    let mut view = sample_view();

    let redraw = view.handle(ViewEvent::PointerEnter {
        entry: 0,
        at: Point::new(10.0, 20.0),
    });
    assert_eq!(redraw, Redraw::Bars);
    assert_eq!(view.state(), ViewState::Hovering(0));
    assert_eq!(view.highlighted(), Some("Standup"));

    let svg = view.render();
    // both Standup bars at full opacity, the other three dimmed
    assert_eq!(count(&svg, "fill-opacity=\"1\""), 2);
    assert_eq!(count(&svg, "fill-opacity=\"0.3\""), 3);
    assert!(svg.contains("class=\"tooltip\" opacity=\"0.8\" transform=\"translate(10,-8)\""));
    assert!(svg.contains(">Standup</tspan>"));
    assert!(svg.contains(">calendar</tspan>"));
}

#[test]
fn test_pointer_move_and_leave() {
    let mut view = sample_view();

    assert_eq!(
        view.handle(ViewEvent::PointerMove {
            at: Point::new(1.0, 1.0)
        }),
        Redraw::None
    );

    view.handle(ViewEvent::PointerEnter {
        entry: 1,
        at: Point::new(10.0, 20.0),
    });
    assert_eq!(
        view.handle(ViewEvent::PointerMove {
            at: Point::new(50.0, 60.0)
        }),
        Redraw::Tooltip
    );
    assert!(view.render().contains("translate(50,32)"));

    assert_eq!(view.handle(ViewEvent::PointerLeave), Redraw::Bars);
    assert_eq!(view.state(), ViewState::Idle);
    assert_eq!(view.highlighted(), None);

    let svg = view.render();
    assert!(!svg.contains("class=\"tooltip\""));
    assert_eq!(count(&svg, "fill-opacity=\"0.3\""), 5);
}

#[test]
fn test_moving_between_bars_with_same_label_only_moves_tooltip() {
    let mut view = sample_view();
    view.handle(ViewEvent::PointerEnter {
        entry: 0,
        at: Point::new(0.0, 0.0),
    });

    let redraw = view.handle(ViewEvent::PointerEnter {
        entry: 4,
        at: Point::new(5.0, 5.0),
    });
    assert_eq!(redraw, Redraw::Tooltip);
    assert_eq!(view.state(), ViewState::Hovering(4));
}

#[test]
fn test_hover_ignores_hidden_or_missing_entries() {
    let mut view = sample_view();
    view.handle(ViewEvent::LegendClick(Category::Ops));

    let redraw = view.handle(ViewEvent::PointerEnter {
        entry: 1,
        at: Point::default(),
    });
    assert_eq!(redraw, Redraw::None);

    let redraw = view.handle(ViewEvent::PointerEnter {
        entry: 99,
        at: Point::default(),
    });
    assert_eq!(redraw, Redraw::None);
    assert_eq!(view.state(), ViewState::Idle);
}

#[test]
fn test_hiding_hovered_category_clears_hover() {
    let mut view = sample_view();
    view.handle(ViewEvent::PointerEnter {
        entry: 1,
        at: Point::default(),
    });

    view.handle(ViewEvent::LegendClick(Category::Ops));

    assert_eq!(view.state(), ViewState::Idle);
}

#[test]
fn test_zoom_is_clamped_and_recorded() {
    let mut view = sample_view();

    let redraw = view.handle(ViewEvent::Zoom(ZoomTransform::new(100.0, 0.0, 0.0)));
    assert_eq!(redraw, Redraw::Axes);
    assert_eq!(view.transform(), ZoomTransform::new(40.0, 0.0, 0.0));
    assert_eq!(view.state(), ViewState::Zoomed(ZoomTransform::new(40.0, 0.0, 0.0)));

    view.handle(ViewEvent::Zoom(ZoomTransform::new(0.01, 0.0, 0.0)));
    assert_eq!(view.transform().k, 0.1);
}

#[test]
fn test_pan_is_kept_inside_translate_extent() {
    let mut view = sample_view();

    // extent starts at (-10 - 1200) / 0.1 = -12100
    view.handle(ViewEvent::Zoom(ZoomTransform::new(1.0, 50_000.0, 0.0)));
    assert_eq!(view.transform(), ZoomTransform::new(1.0, 12_100.0, 0.0));
}

#[test]
fn test_zoom_changes_axis_density_not_bars() {
    let mut view = sample_view();
    let bars_before = view.render_bars();

    view.handle(ViewEvent::Zoom(ZoomTransform::new(0.5, 0.0, 0.0)));
    let svg = view.render();

    assert!(svg.contains("class=\"graph\" transform=\"translate(0,0) scale(0.5)\""));
    // every 4th day: only the 5th of March inside the original domain
    assert!(svg.contains("Tue, 05 Mar"));
    assert!(!svg.contains("Mon, 04 Mar"));
    // bar geometry is untouched, only the group transform differs
    let bars_after = view.render_bars();
    assert_eq!(
        bars_before.replace("translate(0,0) scale(1)", ""),
        bars_after.replace("translate(0,0) scale(0.5)", "")
    );
}

#[test]
fn test_resize_keeps_data_and_filters() {
    let mut view = sample_view();
    view.handle(ViewEvent::LegendClick(Category::Sprint));
    view.handle(ViewEvent::Zoom(ZoomTransform::new(2.0, 0.0, 0.0)));

    let redraw = view.handle(ViewEvent::Resize {
        width: 50.0,
        height: 120.0,
    });
    assert_eq!(redraw, Redraw::Full);

    assert_eq!(view.entries().len(), 5);
    assert!(view.visibility().is_hidden(Category::Sprint));
    assert_eq!(view.visible_entries().len(), 4);
    assert_eq!(view.scales().timeline_width, 105.0);
    assert_eq!(view.transform(), ZoomTransform::IDENTITY);
    assert_eq!(view.state(), ViewState::Idle);

    // 10px per hour: Standup 09:00-09:30 → y 20, height 5
    let bar = view.bar(0).unwrap();
    assert_eq!((bar.y, bar.height), (20.0, 5.0));
}

#[test]
fn test_resize_rejects_empty_viewport() {
    let mut view = sample_view();
    let redraw = view.handle(ViewEvent::Resize {
        width: 0.0,
        height: 100.0,
    });

    assert_eq!(redraw, Redraw::None);
    assert_eq!(view.geometry().width, 1200.0);
}

#[test]
fn test_reload_resets_transform_but_keeps_filters() {
    let mut view = sample_view();
    view.handle(ViewEvent::LegendClick(Category::Unknown));
    view.handle(ViewEvent::Zoom(ZoomTransform::new(3.0, 0.0, 0.0)));

    view.load(sample());

    assert_eq!(view.transform(), ZoomTransform::IDENTITY);
    assert_eq!(view.state(), ViewState::Idle);
    assert!(view.visibility().is_hidden(Category::Unknown));
}

#[test]
fn test_colors_follow_pretty_names() {
    let mut view = sample_view();
    view.render();

    let colors = view.colors();
    assert_eq!(colors.len(), 4);
    assert_eq!(colors.get("Standup"), Some(PALETTE[0]));
    assert_eq!(colors.get("Fix pager"), Some(PALETTE[1]));
    assert_eq!(colors.get("Reading"), Some(PALETTE[3]));
}

#[test]
fn test_color_assignment_wraps() {
    let mut colors = ColorAssignment::new();

    let a = colors.pick("a");
    assert_eq!(colors.pick("a"), a);
    assert_ne!(colors.pick("b"), a);

    for i in 0..PALETTE.len() - 2 {
        colors.pick(&format!("name {i}"));
    }
    // 24th distinct name reuses the first slot
    assert_eq!(colors.pick("wrapped"), a);
}

#[test]
fn test_hit_testing_through_transform() {
    let mut view = sample_view();
    let center = view.bar_center(1).unwrap();
    assert_eq!(view.entry_at(center), Some(1));

    view.handle(ViewEvent::Zoom(ZoomTransform::new(2.0, 100.0, 0.0)));
    let center = view.bar_center(1).unwrap();
    assert_eq!(view.entry_at(center), Some(1));
    assert_eq!(view.entry_at(Point::new(-500.0, -500.0)), None);
}

#[test]
fn test_empty_view_renders_legendless_chart() {
    let mut view = TimelineView::new(ChartGeometry::default(), today());
    let svg = view.render();

    assert_eq!(count(&svg, "class=\"times bar\""), 0);
    assert_eq!(count(&svg, "class=\"legend clickable\""), 0);
    assert!(svg.contains("Sun, 10 Mar"));
}

#[test]
fn test_load_file_replaces_dataset() {
    let path = write_dataset("view_load", SAMPLE);
    let mut view = TimelineView::new(ChartGeometry::default(), today());

    view.load_file(Path::new(&path)).unwrap();

    assert_eq!(view.entries().len(), 5);
    assert_eq!(view.dataset().dropped.len(), 1);
    assert_eq!(view.categories().len(), 5);
    assert!(view.load_file(Path::new("/nonexistent/rtimeline.json")).is_err());
}

#[test]
fn test_bad_zoom_extent_falls_back_to_defaults() {
    for (min, max) in [(0.1, f64::NAN), (f64::NAN, 40.0), (5.0, 1.0), (0.0, 40.0)] {
        let mut view = TimelineView::new(ChartGeometry::default(), today())
            .with_zoom_extent(min, max);
        view.load(sample());

        view.handle(ViewEvent::Zoom(ZoomTransform::new(100.0, 0.0, 0.0)));
        assert_eq!(view.transform().k, 40.0, "extent {min}..{max}");
    }
}
