use crate::core::{BandScale, ValueScale, Viewport};
use crate::error::CoreResult;
use serde::{Deserialize, Serialize};

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects an aligned series into adjacent line segments.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output.
pub fn project_line_segments(
    values: &[f64],
    band: BandScale,
    scale: ValueScale,
    viewport: Viewport,
) -> CoreResult<Vec<LineSegment>> {
    if values.len() < 2 {
        return Ok(Vec::new());
    }

    let mut mapped = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let x = band.center_to_pixel(index, viewport)?;
        let y = scale.value_to_pixel(*value, viewport)?;
        mapped.push((x, y));
    }

    let mut segments = Vec::with_capacity(mapped.len() - 1);
    for pair in mapped.windows(2) {
        segments.push(LineSegment {
            x1: pair[0].0,
            y1: pair[0].1,
            x2: pair[1].0,
            y2: pair[1].1,
        });
    }

    Ok(segments)
}

/// Vertex in pixel coordinates used by deterministic area geometry output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaVertex {
    pub x: f64,
    pub y: f64,
}

/// Projects an aligned series into a closed fill polygon against the axis
/// floor, for the filled-line presentation.
pub fn project_area_polygon(
    values: &[f64],
    band: BandScale,
    scale: ValueScale,
    viewport: Viewport,
) -> CoreResult<Vec<AreaVertex>> {
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let mut line_points = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let x = band.center_to_pixel(index, viewport)?;
        let y = scale.value_to_pixel(*value, viewport)?;
        line_points.push(AreaVertex { x, y });
    }

    let baseline_y = f64::from(viewport.height);
    let first_x = line_points[0].x;
    let last_x = line_points[line_points.len() - 1].x;

    let mut polygon = Vec::with_capacity(line_points.len() + 3);
    polygon.push(AreaVertex {
        x: first_x,
        y: baseline_y,
    });
    polygon.extend(line_points);
    polygon.push(AreaVertex {
        x: last_x,
        y: baseline_y,
    });
    // Explicitly repeat the first baseline vertex so consumers can render this
    // as a closed polygon without adding implicit closure rules.
    polygon.push(AreaVertex {
        x: first_x,
        y: baseline_y,
    });

    Ok(polygon)
}
