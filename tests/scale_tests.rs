mod common;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use common::{sample, today};
use rtimeline::core::axis::{
    clock_label, clock_step, clock_ticks, day_label, day_ticks, tick_interval,
};
use rtimeline::core::render::bar_rect;
use rtimeline::core::scale::{ChartGeometry, Scales, timeline_width};
use rtimeline::models::ZoomTransform;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn small_geo() -> ChartGeometry {
    ChartGeometry {
        width: 50.0,
        height: 120.0,
        ..ChartGeometry::default()
    }
}

#[test]
fn test_horizontal_domain_spans_whole_days() {
    let scales = Scales::compute(&sample().entries, &ChartGeometry::default(), today());

    assert_eq!(
        scales.x.domain(),
        (at(2024, 3, 4, 0, 0), at(2024, 3, 7, 0, 0))
    );
}

#[test]
fn test_width_is_floored_at_viewport() {
    let geo = ChartGeometry::default();
    let scales = Scales::compute(&sample().entries, &geo, today());

    // 3 days * 35px = 105 < 1200
    assert_eq!(scales.timeline_width, 1200.0);
    assert_eq!(scales.x.range(), (0.0, 1200.0));
}

#[test]
fn test_width_grows_with_span() {
    let scales = Scales::compute(&sample().entries, &small_geo(), today());
    assert_eq!(scales.timeline_width, 105.0);

    let geo = ChartGeometry::default();
    let w = timeline_width(at(2024, 1, 1, 0, 0), at(2024, 3, 1, 0, 0), &geo);
    // 60 days (leap year) * 35px
    assert_eq!(w, 2100.0);
}

#[test]
fn test_vertical_scale_is_working_hours_window() {
    let scales = Scales::compute(&sample().entries, &ChartGeometry::default(), today());
    let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();

    assert_eq!(scales.y.apply(t(7, 0)), 0.0);
    assert_eq!(scales.y.apply(t(13, 0)), 300.0);
    assert_eq!(scales.y.apply(t(19, 0)), 600.0);
}

#[test]
fn test_scales_invert() {
    let scales = Scales::compute(&sample().entries, &ChartGeometry::default(), today());

    assert_eq!(scales.x.invert(400.0), at(2024, 3, 5, 0, 0));
    assert_eq!(scales.y.invert_seconds(300.0), 46_800.0);
}

#[test]
fn test_grid_scale_is_shifted_half_a_slot() {
    let scales = Scales::compute(&sample().entries, &ChartGeometry::default(), today());
    let d = at(2024, 3, 5, 0, 0);

    assert_eq!(scales.x.apply(d) - scales.x_grid.apply(d), 17.5);
}

#[test]
fn test_bar_geometry() {
    let data = sample();
    let geo = ChartGeometry::default();
    let scales = Scales::compute(&data.entries, &geo, today());

    // Standup, 2024-03-04 09:00-09:30
    let r = bar_rect(&data.entries[0], &scales, &geo);
    assert_eq!((r.x, r.y, r.width, r.height), (-15.0, 100.0, 30.0, 25.0));

    // Fix pager, 2024-03-05 10:00-12:00; one day = 400px
    let r = bar_rect(&data.entries[1], &scales, &geo);
    assert_eq!((r.x, r.y, r.height), (385.0, 150.0, 100.0));
}

#[test]
fn test_bar_height_never_negative() {
    let doc = r#"[["k", [
        {"name": "late", "path": "", "filename": "",
         "start": "2024-01-01T22:00:00", "end": "2024-01-02T01:00:00"}
    ]]]"#;
    let data = rtimeline::core::loader::load_str(doc).unwrap();
    let geo = ChartGeometry::default();
    let scales = Scales::compute(&data.entries, &geo, today());

    assert_eq!(bar_rect(&data.entries[0], &scales, &geo).height, 0.0);
}

#[test]
fn test_empty_dataset_uses_today() {
    let scales = Scales::compute(&[], &ChartGeometry::default(), today());

    assert_eq!(
        scales.x.domain(),
        (at(2024, 3, 10, 0, 0), at(2024, 3, 11, 0, 0))
    );
    assert_eq!(scales.timeline_width, 1200.0);
}

#[test]
fn test_tick_interval_formula() {
    assert_eq!(tick_interval(None), 1);
    assert_eq!(tick_interval(Some(1.0)), 1);
    assert_eq!(tick_interval(Some(0.75)), 2);
    assert_eq!(tick_interval(Some(0.5)), 4);
    assert_eq!(tick_interval(Some(0.25)), 8);
    assert_eq!(tick_interval(Some(0.1)), 12);
    assert_eq!(tick_interval(Some(0.0)), 14);
    assert_eq!(tick_interval(Some(3.0)), 1);
}

#[test]
fn test_day_ticks_follow_day_of_month() {
    let scales = Scales::compute(&sample().entries, &ChartGeometry::default(), today());

    assert_eq!(day_ticks(&scales.x, 1).len(), 4);
    assert_eq!(day_ticks(&scales.x, 4), vec![at(2024, 3, 5, 0, 0)]);
}

#[test]
fn test_day_label_blank_outside_domain() {
    let bounds = (at(2024, 3, 4, 0, 0), at(2024, 3, 7, 0, 0));

    assert_eq!(day_label(at(2024, 3, 4, 0, 0), bounds), "Mon, 04 Mar");
    assert_eq!(day_label(at(2024, 3, 8, 0, 0), bounds), "");
}

#[test]
fn test_zoomed_scale_widens_visible_days() {
    let scales = Scales::compute(&sample().entries, &ChartGeometry::default(), today());
    let zoomed = scales.x.rescale(&ZoomTransform::new(0.5, 0.0, 0.0));

    // half the zoom shows twice the days
    assert_eq!(
        zoomed.domain(),
        (at(2024, 3, 4, 0, 0), at(2024, 3, 10, 0, 0))
    );
    assert_eq!(zoomed.apply(at(2024, 3, 5, 0, 0)), 200.0);
}

#[test]
fn test_clock_ticks() {
    let scales = Scales::compute(&sample().entries, &ChartGeometry::default(), today());

    let step = clock_step(&scales.y);
    assert_eq!(step, 3_600.0);

    let ticks = clock_ticks(&scales.y, step);
    assert_eq!(ticks.len(), 13);
    assert_eq!(clock_label(ticks[0]), "07:00");
    assert_eq!(clock_label(ticks[12]), "19:00");

    let grid = clock_ticks(&scales.y_grid, 7_200.0);
    let labels: Vec<String> = grid.iter().map(|s| clock_label(*s)).collect();
    assert_eq!(labels, ["08:00", "10:00", "12:00", "14:00", "16:00", "18:00"]);
}

#[test]
fn test_clock_label_wraps() {
    assert_eq!(clock_label(-3_600.0), "23:00");
    assert_eq!(clock_label(90_000.0), "01:00");
}
