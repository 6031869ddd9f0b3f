use crate::core::{BandScale, ValueScale, Viewport};
use crate::error::CoreResult;
use serde::{Deserialize, Serialize};

/// Projected scatter dot in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterDot {
    pub x: f64,
    pub y: f64,
}

/// Projects category-index scatter samples into dots.
pub fn project_scatter_dots(
    samples: &[(usize, f64)],
    band: BandScale,
    scale: ValueScale,
    viewport: Viewport,
) -> CoreResult<Vec<ScatterDot>> {
    let mut dots = Vec::with_capacity(samples.len());
    for (index, value) in samples {
        let x = band.center_to_pixel(*index, viewport)?;
        let y = scale.value_to_pixel(*value, viewport)?;
        dots.push(ScatterDot { x, y });
    }
    Ok(dots)
}
