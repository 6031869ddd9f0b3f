use careboard_rs::api::{
    BarChartConfig, ChartConfig, LineChartConfig, RenderHandle, StackedBarConfig,
    StackedSeriesSpec,
};
use careboard_rs::core::{SeriesSpec, Viewport};
use careboard_rs::error::CoreError;
use careboard_rs::render::{Color, NullSurface};

const BLUE: Color = Color::rgb(0.15, 0.39, 0.92);
const RED: Color = Color::rgb(0.94, 0.27, 0.27);

fn week() -> Vec<String> {
    ["Mon", "Tue", "Wed"].map(str::to_owned).to_vec()
}

#[test]
fn update_draws_a_full_frame() {
    let model = ChartConfig::Line(LineChartConfig::new(
        week(),
        vec![SeriesSpec::aligned("Adherence", BLUE, vec![92.0, 88.0, 95.0])],
    ))
    .compile()
    .expect("compile");

    let mut handle = RenderHandle::mount(NullSurface::default());
    handle
        .update(&model, Viewport::new(800, 400))
        .expect("update");

    let surface = handle.unmount().expect("unmount");
    assert_eq!(surface.frames_drawn, 1);
    assert_eq!(surface.last_line_count, 2);
    assert_eq!(surface.last_point_count, 3);
    assert_eq!(surface.last_polygon_count, 1);
    assert_eq!(surface.last_text_count, 3);
}

#[test]
fn update_replaces_rather_than_merges_previous_state() {
    let line = ChartConfig::Line(LineChartConfig::new(
        week(),
        vec![SeriesSpec::aligned("Adherence", BLUE, vec![92.0, 88.0, 95.0])],
    ))
    .compile()
    .expect("compile line");
    let bars = ChartConfig::Bar(BarChartConfig::new(week(), "Doses", vec![3.0, 4.0, 2.0]))
        .compile()
        .expect("compile bars");

    let viewport = Viewport::new(800, 400);
    let mut handle = RenderHandle::mount(NullSurface::default());
    handle.update(&line, viewport).expect("first update");
    handle.update(&bars, viewport).expect("second update");

    let surface = handle.unmount().expect("unmount");
    assert_eq!(surface.frames_drawn, 2);
    // The bar frame fully replaced the line frame: no stale series leak.
    assert_eq!(surface.last_line_count, 0);
    assert_eq!(surface.last_polygon_count, 0);
    assert_eq!(surface.last_rect_count, 3);
}

#[test]
fn update_after_unmount_is_a_configuration_error() {
    let model = ChartConfig::Bar(BarChartConfig::new(week(), "Doses", vec![3.0, 4.0, 2.0]))
        .compile()
        .expect("compile");

    let mut handle = RenderHandle::mount(NullSurface::default());
    handle.unmount().expect("unmount");
    assert!(!handle.is_mounted());

    let err = handle
        .update(&model, Viewport::new(800, 400))
        .expect_err("update after unmount must fail");
    assert!(matches!(err, CoreError::Configuration(_)));
}

#[test]
fn double_unmount_is_a_configuration_error() {
    let mut handle = RenderHandle::mount(NullSurface::default());
    handle.unmount().expect("first unmount");

    let err = handle.unmount().expect_err("second unmount must fail");
    assert!(matches!(err, CoreError::Configuration(_)));
}

#[test]
fn generation_counts_applied_updates() {
    let model = ChartConfig::StackedBar(StackedBarConfig::new(
        week(),
        vec![StackedSeriesSpec::new("Alert", vec![1.0, 2.0, 0.0], RED)],
    ))
    .compile()
    .expect("compile");

    let viewport = Viewport::new(800, 400);
    let mut handle = RenderHandle::mount(NullSurface::default());
    assert_eq!(handle.generation(), 0);
    handle.update(&model, viewport).expect("update one");
    handle.update(&model, viewport).expect("update two");
    assert_eq!(handle.generation(), 2);
}

#[test]
fn empty_input_draws_an_explicit_placeholder_frame() {
    let model = ChartConfig::Line(LineChartConfig::new(Vec::new(), Vec::new()))
        .compile()
        .expect("compile empty");

    let mut handle = RenderHandle::mount(NullSurface::default());
    handle
        .update(&model, Viewport::new(800, 400))
        .expect("empty update must not crash");

    let surface = handle.unmount().expect("unmount");
    assert_eq!(surface.frames_drawn, 1);
    assert_eq!(surface.last_line_count, 0);
    assert_eq!(surface.last_rect_count, 0);
    assert_eq!(surface.last_text_count, 0);
}

#[test]
fn invalid_viewport_leaves_the_previous_state_untouched() {
    let model = ChartConfig::Bar(BarChartConfig::new(week(), "Doses", vec![3.0, 4.0, 2.0]))
        .compile()
        .expect("compile");

    let mut handle = RenderHandle::mount(NullSurface::default());
    handle
        .update(&model, Viewport::new(800, 400))
        .expect("good update");
    let err = handle
        .update(&model, Viewport::new(0, 0))
        .expect_err("zero viewport must fail");
    assert!(matches!(err, CoreError::InvalidViewport { .. }));

    let surface = handle.unmount().expect("unmount");
    assert_eq!(surface.frames_drawn, 1);
    assert_eq!(handle.generation(), 1);
}
