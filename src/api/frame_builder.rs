use tracing::trace;

use crate::core::{
    AxisSlot, BandScale, SeriesData, ValueScale, Viewport, project_area_polygon, project_bars,
    project_line_segments, project_scatter_dots, project_stacked_bars,
};
use crate::error::CoreResult;
use crate::render::{
    Color, LinePrimitive, PointPrimitive, PolygonPrimitive, RectPrimitive, RenderFrame,
    TextHAlign, TextPrimitive,
};

use super::chart_model::{ChartModel, Presentation};

const AXIS_LABEL_COLOR: Color = Color::rgb(0.28, 0.33, 0.41);
const AXIS_LABEL_FONT_PX: f64 = 11.0;
const AXIS_LABEL_BASELINE_INSET_PX: f64 = 4.0;
const LINE_STROKE_PX: f64 = 2.0;
const SERIES_POINT_RADIUS_PX: f64 = 3.5;
const MARKER_POINT_RADIUS_PX: f64 = 5.0;
const FILL_ALPHA: f64 = 0.2;
const MARKER_COLOR: Color = Color::rgb(0.937, 0.267, 0.267);

/// Materializes the complete draw state for one model and viewport.
///
/// The returned frame is the whole scene: callers replace, never merge.
/// Empty category input produces an empty frame, the explicit placeholder
/// state for charts without data.
pub(super) fn build_render_frame(
    model: &ChartModel,
    viewport: Viewport,
) -> CoreResult<RenderFrame> {
    let mut frame = RenderFrame::new(viewport);
    if model.categories().is_empty() {
        return Ok(frame);
    }

    let band = BandScale::new(model.categories().len())?;
    let primary = ValueScale::from_domain(model.axes().primary)?;
    let secondary = match model.axes().secondary {
        Some(domain) => Some(ValueScale::from_domain(domain)?),
        None => None,
    };

    for (index, label) in model.categories().iter().enumerate() {
        frame.texts.push(TextPrimitive::new(
            label,
            band.center_to_pixel(index, viewport)?,
            f64::from(viewport.height) - AXIS_LABEL_BASELINE_INSET_PX,
            AXIS_LABEL_FONT_PX,
            AXIS_LABEL_COLOR,
            TextHAlign::Center,
        ));
    }

    match model.presentation() {
        Presentation::Line { show_fill } => {
            build_line_layers(model, &mut frame, band, primary, secondary, show_fill, viewport)?;
        }
        Presentation::Bar => build_bar_layers(model, &mut frame, band, primary, viewport)?,
        Presentation::StackedBar => {
            build_stacked_layers(model, &mut frame, band, primary, viewport)?;
        }
    }

    for marker in model.markers() {
        let dots = project_scatter_dots(
            &[(marker.category_index, marker.value)],
            band,
            primary,
            viewport,
        )?;
        for dot in dots {
            frame
                .points
                .push(PointPrimitive::new(dot.x, dot.y, MARKER_POINT_RADIUS_PX, MARKER_COLOR));
        }
    }

    trace!(
        polygons = frame.polygons.len(),
        lines = frame.lines.len(),
        rects = frame.rects.len(),
        points = frame.points.len(),
        texts = frame.texts.len(),
        "built render frame"
    );
    Ok(frame)
}

fn build_line_layers(
    model: &ChartModel,
    frame: &mut RenderFrame,
    band: BandScale,
    primary: ValueScale,
    secondary: Option<ValueScale>,
    show_fill: bool,
    viewport: Viewport,
) -> CoreResult<()> {
    for series in model.series() {
        let scale = match (series.axis, secondary) {
            (AxisSlot::Secondary, Some(scale)) => scale,
            _ => primary,
        };

        match &series.data {
            SeriesData::Aligned(values) => {
                if show_fill && !values.is_empty() {
                    let polygon = project_area_polygon(values, band, scale, viewport)?;
                    frame.polygons.push(PolygonPrimitive::new(
                        polygon.iter().map(|v| (v.x, v.y)).collect(),
                        series.color.with_alpha(FILL_ALPHA),
                    ));
                }

                for segment in project_line_segments(values, band, scale, viewport)? {
                    frame.lines.push(LinePrimitive::new(
                        segment.x1,
                        segment.y1,
                        segment.x2,
                        segment.y2,
                        LINE_STROKE_PX,
                        series.color,
                    ));
                }

                let samples: Vec<(usize, f64)> =
                    values.iter().copied().enumerate().collect();
                for dot in project_scatter_dots(&samples, band, scale, viewport)? {
                    frame.points.push(PointPrimitive::new(
                        dot.x,
                        dot.y,
                        SERIES_POINT_RADIUS_PX,
                        series.color,
                    ));
                }
            }
            SeriesData::Scatter(samples) => {
                for dot in project_scatter_dots(samples, band, scale, viewport)? {
                    frame.points.push(PointPrimitive::new(
                        dot.x,
                        dot.y,
                        SERIES_POINT_RADIUS_PX,
                        series.color,
                    ));
                }
            }
        }
    }
    Ok(())
}

fn build_bar_layers(
    model: &ChartModel,
    frame: &mut RenderFrame,
    band: BandScale,
    primary: ValueScale,
    viewport: Viewport,
) -> CoreResult<()> {
    for series in model.series() {
        let SeriesData::Aligned(values) = &series.data else {
            continue;
        };
        for bar in project_bars(values, band, primary, viewport, super::config::BAR_FRACTION)? {
            frame.rects.push(RectPrimitive::new(
                bar.x_left,
                bar.y_top,
                bar.x_right - bar.x_left,
                bar.y_bottom - bar.y_top,
                series.color,
            ));
        }
    }
    Ok(())
}

fn build_stacked_layers(
    model: &ChartModel,
    frame: &mut RenderFrame,
    band: BandScale,
    primary: ValueScale,
    viewport: Viewport,
) -> CoreResult<()> {
    let group: Vec<(&crate::core::Series, &[f64])> = model
        .series()
        .iter()
        .filter_map(|series| match &series.data {
            SeriesData::Aligned(values) => Some((series, values.as_slice())),
            SeriesData::Scatter(_) => None,
        })
        .collect();

    let values: Vec<&[f64]> = group.iter().map(|(_, values)| *values).collect();
    let runs = project_stacked_bars(
        &values,
        band,
        primary,
        viewport,
        super::config::STACKED_BAR_FRACTION,
    )?;

    for ((series, _), run) in group.into_iter().zip(runs) {
        for bar in run {
            frame.rects.push(RectPrimitive::new(
                bar.x_left,
                bar.y_top,
                bar.x_right - bar.x_left,
                bar.y_bottom - bar.y_top,
                series.color,
            ));
        }
    }
    Ok(())
}
