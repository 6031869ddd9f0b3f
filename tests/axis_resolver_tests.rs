use careboard_rs::core::{
    AxisOptions, AxisSlot, CategoryAxis, ScatterSample, SeriesSpec, normalize, resolve,
};
use careboard_rs::error::CoreError;
use careboard_rs::render::Color;

const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);

fn axis() -> CategoryAxis {
    CategoryAxis::new(["Mon", "Tue"]).expect("valid axis")
}

#[test]
fn stacked_max_is_the_tallest_per_category_sum() {
    let series = normalize(
        &[
            SeriesSpec::aligned("A", GRAY, vec![2.0, 3.0]),
            SeriesSpec::aligned("B", GRAY, vec![1.0, 5.0]),
        ],
        &axis(),
    )
    .expect("normalize");

    // Mon sums to 3, Tue to 8.
    let spec = resolve(&series, AxisOptions::stacked()).expect("resolve");
    assert_eq!(spec.primary.min, 0.0);
    assert_eq!(spec.primary.max, 8.0);
    assert!(spec.secondary.is_none());
}

#[test]
fn secondary_series_never_influence_the_primary_domain() {
    let series = normalize(
        &[
            SeriesSpec::aligned("Adherence", GRAY, vec![40.0, 60.0]),
            SeriesSpec::aligned("Alerts", GRAY, vec![900.0, 1200.0]).with_axis(AxisSlot::Secondary),
        ],
        &axis(),
    )
    .expect("normalize");

    let spec = resolve(&series, AxisOptions::default().with_dual_axis(true)).expect("resolve");
    assert_eq!(spec.primary.max, 60.0);
    let secondary = spec.secondary.expect("secondary domain");
    assert_eq!(secondary.min, 0.0);
    assert_eq!(secondary.max, 1200.0);
}

#[test]
fn without_dual_axis_every_series_feeds_the_primary_domain() {
    let series = normalize(
        &[
            SeriesSpec::aligned("Adherence", GRAY, vec![40.0, 60.0]),
            SeriesSpec::aligned("Alerts", GRAY, vec![900.0, 1200.0]).with_axis(AxisSlot::Secondary),
        ],
        &axis(),
    )
    .expect("normalize");

    let spec = resolve(&series, AxisOptions::default()).expect("resolve");
    assert_eq!(spec.primary.max, 1200.0);
    assert!(spec.secondary.is_none());
}

#[test]
fn dual_axis_without_secondary_series_resolves_no_secondary_domain() {
    let series = normalize(&[SeriesSpec::aligned("A", GRAY, vec![1.0, 2.0])], &axis())
        .expect("normalize");

    let spec = resolve(&series, AxisOptions::default().with_dual_axis(true)).expect("resolve");
    assert!(spec.secondary.is_none());
}

#[test]
fn suggested_max_extends_a_lower_data_domain() {
    let series = normalize(&[SeriesSpec::aligned("A", GRAY, vec![12.0, 30.0])], &axis())
        .expect("normalize");

    let spec = resolve(
        &series,
        AxisOptions::default().with_suggested_max(Some(100.0)),
    )
    .expect("resolve");
    assert_eq!(spec.primary.max, 100.0);
}

#[test]
fn data_above_the_suggested_max_wins() {
    let series = normalize(&[SeriesSpec::aligned("A", GRAY, vec![12.0, 130.0])], &axis())
        .expect("normalize");

    let spec = resolve(
        &series,
        AxisOptions::default().with_suggested_max(Some(100.0)),
    )
    .expect("resolve");
    assert_eq!(spec.primary.max, 130.0);
}

#[test]
fn scatter_values_contribute_to_their_slot_domain() {
    let series = normalize(
        &[
            SeriesSpec::aligned("Base", GRAY, vec![10.0, 20.0]),
            SeriesSpec::scatter("Spikes", GRAY, vec![ScatterSample::new("Mon", 75.0)]),
        ],
        &axis(),
    )
    .expect("normalize");

    let spec = resolve(&series, AxisOptions::default()).expect("resolve");
    assert_eq!(spec.primary.max, 75.0);
}

#[test]
fn empty_input_still_yields_a_drawable_domain() {
    let spec = resolve(&[], AxisOptions::default()).expect("resolve");
    assert_eq!(spec.primary.min, 0.0);
    assert_eq!(spec.primary.max, 1.0);
}

#[test]
fn non_finite_suggested_max_is_rejected() {
    let err = resolve(
        &[],
        AxisOptions::default().with_suggested_max(Some(f64::NAN)),
    )
    .expect_err("nan suggested max must fail");
    assert!(matches!(err, CoreError::Validation(_)));
}
