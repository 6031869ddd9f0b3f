use careboard_rs::api::{
    BarChartConfig, ChartConfig, LineChartConfig, Presentation, StackedBarConfig,
    StackedSeriesSpec,
};
use careboard_rs::core::{AxisSlot, Marker, ScatterSample, SeriesSpec};
use careboard_rs::error::CoreError;
use careboard_rs::render::Color;

const BLUE: Color = Color::rgb(0.15, 0.39, 0.92);
const AMBER: Color = Color::rgb(0.96, 0.62, 0.04);

fn week() -> Vec<String> {
    ["Mon", "Tue", "Wed"].map(str::to_owned).to_vec()
}

#[test]
fn line_config_compiles_with_markers_and_dual_axis() {
    let config = LineChartConfig::new(
        week(),
        vec![
            SeriesSpec::aligned("Adherence", BLUE, vec![92.0, 88.0, 95.0]),
            SeriesSpec::aligned("Alerts", AMBER, vec![2.0, 5.0, 1.0]).with_axis(AxisSlot::Secondary),
        ],
    )
    .with_markers(vec![Marker::new("Tue", "Missed evening dose")]);

    let model = ChartConfig::Line(config).compile().expect("compile");
    assert_eq!(model.series().len(), 2);
    assert_eq!(model.markers().len(), 1);
    assert_eq!(model.markers()[0].value, 88.0);
    // Default suggested max keeps percentage charts on a 0..100 scale.
    assert_eq!(model.axes().primary.max, 100.0);
    assert_eq!(model.axes().secondary.expect("secondary").max, 5.0);
    assert!(matches!(
        model.presentation(),
        Presentation::Line { show_fill: true }
    ));
}

#[test]
fn line_config_rejects_misaligned_series() {
    let config = LineChartConfig::new(
        week(),
        vec![SeriesSpec::aligned("Short", BLUE, vec![1.0, 2.0])],
    );

    let err = ChartConfig::Line(config).compile().expect_err("must fail");
    assert!(matches!(err, CoreError::Validation(_)));
}

#[test]
fn line_config_rejects_duplicate_categories() {
    let config = LineChartConfig::new(
        ["Mon", "Mon"].map(str::to_owned).to_vec(),
        vec![SeriesSpec::aligned("A", BLUE, vec![1.0, 2.0])],
    );

    let err = ChartConfig::Line(config).compile().expect_err("must fail");
    assert!(matches!(err, CoreError::Validation(_)));
}

#[test]
fn scatter_overlays_never_fail_on_missing_categories() {
    let config = LineChartConfig::new(
        week(),
        vec![
            SeriesSpec::aligned("Adherence", BLUE, vec![92.0, 88.0, 95.0]),
            SeriesSpec::scatter("Events", AMBER, vec![ScatterSample::new("Sun", 10.0)]),
        ],
    );

    let model = ChartConfig::Line(config).compile().expect("compile");
    assert_eq!(model.series().len(), 2);
}

#[test]
fn bar_config_uses_the_default_color_when_none_is_set() {
    let config = BarChartConfig::new(week(), "Doses", vec![3.0, 4.0, 2.0]);

    let model = ChartConfig::Bar(config).compile().expect("compile");
    assert_eq!(model.series().len(), 1);
    assert_eq!(model.presentation(), Presentation::Bar);
    // No suggested max on plain bar charts: the data decides.
    assert_eq!(model.axes().primary.max, 4.0);
}

#[test]
fn stacked_config_sums_per_category_for_the_axis() {
    let config = StackedBarConfig::new(
        week(),
        vec![
            StackedSeriesSpec::new("Normal", vec![2.0, 3.0, 1.0], BLUE),
            StackedSeriesSpec::new("Alert", vec![1.0, 5.0, 0.0], AMBER),
        ],
    );

    let model = ChartConfig::StackedBar(config).compile().expect("compile");
    // Tallest stack is Tue at 8, below the default suggested max of 10.
    assert_eq!(model.axes().primary.max, 10.0);
    assert_eq!(model.presentation(), Presentation::StackedBar);
}

#[test]
fn stacked_data_above_the_suggested_max_wins() {
    let config = StackedBarConfig::new(
        week(),
        vec![StackedSeriesSpec::new("Alert", vec![2.0, 30.0, 1.0], AMBER)],
    );

    let model = ChartConfig::StackedBar(config).compile().expect("compile");
    assert_eq!(model.axes().primary.max, 30.0);
}

#[test]
fn config_round_trips_through_json() {
    let config = ChartConfig::Line(
        LineChartConfig::new(
            week(),
            vec![SeriesSpec::aligned("Adherence", BLUE, vec![92.0, 88.0, 95.0])],
        )
        .with_show_fill(false),
    );

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartConfig::from_json_str(&json).expect("deserialize");
    assert_eq!(parsed, config);
}
