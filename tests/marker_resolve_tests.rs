use careboard_rs::core::{
    CategoryAxis, Marker, ScatterSample, SeriesSpec, normalize, resolve_markers,
};
use careboard_rs::error::CoreError;
use careboard_rs::render::Color;

const GREEN: Color = Color::rgb(0.06, 0.72, 0.51);

fn axis() -> CategoryAxis {
    CategoryAxis::new(["Mon", "Tue", "Wed"]).expect("valid axis")
}

#[test]
fn marker_with_explicit_value_keeps_it() {
    let series = normalize(
        &[SeriesSpec::aligned("Adherence", GREEN, vec![90.0, 80.0, 85.0])],
        &axis(),
    )
    .expect("normalize");
    let markers = vec![Marker::new("Tue", "Missed dose").with_value(42.0)];

    let resolved = resolve_markers(&markers, &axis(), &series).expect("resolve");
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].category_index, 1);
    assert_eq!(resolved[0].value, 42.0);
    assert_eq!(resolved[0].annotation, "Missed dose");
}

#[test]
fn marker_without_value_inherits_the_primary_series_value() {
    let series = normalize(
        &[
            SeriesSpec::scatter("Events", GREEN, vec![ScatterSample::new("Mon", 5.0)]),
            SeriesSpec::aligned("Adherence", GREEN, vec![90.0, 80.0, 85.0]),
        ],
        &axis(),
    )
    .expect("normalize");
    let markers = vec![Marker::new("Wed", "Low adherence")];

    // The anchor is the first aligned series, skipping the scatter overlay.
    let resolved = resolve_markers(&markers, &axis(), &series).expect("resolve");
    assert_eq!(resolved[0].value, 85.0);
}

#[test]
fn marker_outside_the_axis_is_dropped_silently() {
    let series = normalize(
        &[SeriesSpec::aligned("Adherence", GREEN, vec![90.0, 80.0, 85.0])],
        &axis(),
    )
    .expect("normalize");
    let markers = vec![
        Marker::new("Sun", "Out of range"),
        Marker::new("Mon", "Kept"),
    ];

    let resolved = resolve_markers(&markers, &axis(), &series).expect("resolve");
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].annotation, "Kept");
}

#[test]
fn marker_without_value_and_without_aligned_series_is_dropped() {
    let series = normalize(
        &[SeriesSpec::scatter(
            "Events",
            GREEN,
            vec![ScatterSample::new("Mon", 5.0)],
        )],
        &axis(),
    )
    .expect("normalize");
    let markers = vec![Marker::new("Mon", "No anchor")];

    let resolved = resolve_markers(&markers, &axis(), &series).expect("resolve");
    assert!(resolved.is_empty());
}

#[test]
fn non_finite_marker_value_is_rejected() {
    let series = normalize(
        &[SeriesSpec::aligned("Adherence", GREEN, vec![90.0, 80.0, 85.0])],
        &axis(),
    )
    .expect("normalize");
    let markers = vec![Marker::new("Mon", "Bad").with_value(f64::INFINITY)];

    let err = resolve_markers(&markers, &axis(), &series).expect_err("must fail");
    assert!(matches!(err, CoreError::Validation(_)));
}
