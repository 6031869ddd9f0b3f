use crate::core::{BandScale, ValueScale, Viewport};
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Axis-aligned bar rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x_left: f64,
    pub x_right: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

/// Projects one aligned series into category bars.
///
/// `bar_fraction` is the bar width as a fraction of the category band; bars
/// span from the zero baseline to the sample value.
pub fn project_bars(
    values: &[f64],
    band: BandScale,
    scale: ValueScale,
    viewport: Viewport,
    bar_fraction: f64,
) -> CoreResult<Vec<BarRect>> {
    validate_bar_fraction(bar_fraction)?;
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let baseline_y = scale.value_to_pixel(0.0, viewport)?;
    let half_width = band.band_width(viewport)? * bar_fraction * 0.5;

    let mut bars = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let x_center = band.center_to_pixel(index, viewport)?;
        let y_value = scale.value_to_pixel(*value, viewport)?;
        bars.push(BarRect {
            x_left: x_center - half_width,
            x_right: x_center + half_width,
            y_top: y_value.min(baseline_y),
            y_bottom: y_value.max(baseline_y),
        });
    }

    Ok(bars)
}

/// Projects a stacked group bottom-up into one rectangle run per series.
///
/// All series must already be aligned to the same category axis; each series'
/// rectangle for a category starts where the previous series' stack ended.
pub fn project_stacked_bars(
    group: &[&[f64]],
    band: BandScale,
    scale: ValueScale,
    viewport: Viewport,
    bar_fraction: f64,
) -> CoreResult<Vec<Vec<BarRect>>> {
    validate_bar_fraction(bar_fraction)?;
    if group.is_empty() {
        return Ok(Vec::new());
    }

    let category_count = group[0].len();
    for values in group {
        if values.len() != category_count {
            return Err(CoreError::Validation(
                "stacked series must share one category axis".to_owned(),
            ));
        }
    }

    let half_width = band.band_width(viewport)? * bar_fraction * 0.5;
    let mut stack_base = vec![0.0f64; category_count];
    let mut runs = Vec::with_capacity(group.len());

    for values in group {
        let mut run = Vec::with_capacity(category_count);
        for (index, value) in values.iter().enumerate() {
            let x_center = band.center_to_pixel(index, viewport)?;
            let y_bottom = scale.value_to_pixel(stack_base[index], viewport)?;
            stack_base[index] += value;
            let y_top = scale.value_to_pixel(stack_base[index], viewport)?;
            run.push(BarRect {
                x_left: x_center - half_width,
                x_right: x_center + half_width,
                y_top: y_top.min(y_bottom),
                y_bottom: y_top.max(y_bottom),
            });
        }
        runs.push(run);
    }

    Ok(runs)
}

fn validate_bar_fraction(bar_fraction: f64) -> CoreResult<()> {
    if !bar_fraction.is_finite() || bar_fraction <= 0.0 || bar_fraction > 1.0 {
        return Err(CoreError::Validation(
            "bar fraction must be finite and in (0, 1]".to_owned(),
        ));
    }
    Ok(())
}
