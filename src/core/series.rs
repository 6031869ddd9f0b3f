use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::category::CategoryAxis;
use crate::error::{CoreError, CoreResult};
use crate::render::Color;

/// Which vertical scale a series is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisSlot {
    Primary,
    Secondary,
}

/// Raw scatter sample addressed by category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSample {
    pub category: String,
    pub value: f64,
}

impl ScatterSample {
    #[must_use]
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}

/// Loosely shaped series input before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub label: String,
    pub axis: AxisSlot,
    pub color: Color,
    pub values: SeriesValues,
}

/// Series payload; the variant decides the series kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SeriesValues {
    /// Positionally aligned with the category axis (line/bar kinds).
    Aligned(Vec<f64>),
    /// Explicit `(category, value)` pairs (scatter kind).
    Scatter(Vec<ScatterSample>),
}

impl SeriesSpec {
    #[must_use]
    pub fn aligned(label: impl Into<String>, color: Color, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            axis: AxisSlot::Primary,
            color,
            values: SeriesValues::Aligned(values),
        }
    }

    #[must_use]
    pub fn scatter(label: impl Into<String>, color: Color, samples: Vec<ScatterSample>) -> Self {
        Self {
            label: label.into(),
            axis: AxisSlot::Primary,
            color,
            values: SeriesValues::Scatter(samples),
        }
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisSlot) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn is_scatter(&self) -> bool {
        matches!(self.values, SeriesValues::Scatter(_))
    }
}

/// Validated series ready for axis resolution and projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub axis: AxisSlot,
    pub color: Color,
    pub data: SeriesData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SeriesData {
    Aligned(Vec<f64>),
    /// Scatter samples with the category label resolved to its axis index.
    Scatter(Vec<(usize, f64)>),
}

impl Series {
    #[must_use]
    pub fn is_scatter(&self) -> bool {
        matches!(self.data, SeriesData::Scatter(_))
    }

    /// Iterates every value the series contributes to its axis domain.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        let (aligned, scatter) = match &self.data {
            SeriesData::Aligned(values) => (Some(values.iter().copied()), None),
            SeriesData::Scatter(samples) => (None, Some(samples.iter().map(|(_, v)| *v))),
        };
        aligned.into_iter().flatten().chain(scatter.into_iter().flatten())
    }
}

/// Normalizes raw series against the shared category axis.
///
/// Aligned series must match the axis length exactly; any mismatch aborts the
/// whole call so nothing half-validated reaches the renderer. Scatter samples
/// referencing a category outside the axis are dropped, not errored; an empty
/// overlap is a normal empty result.
pub fn normalize(specs: &[SeriesSpec], categories: &CategoryAxis) -> CoreResult<Vec<Series>> {
    let mut out = Vec::with_capacity(specs.len());
    for spec in specs {
        spec.color.validate()?;
        let data = match &spec.values {
            SeriesValues::Aligned(values) => {
                if values.len() != categories.len() {
                    return Err(CoreError::Validation(format!(
                        "series `{}` has {} values for {} categories",
                        spec.label,
                        values.len(),
                        categories.len()
                    )));
                }
                ensure_finite(&spec.label, values.iter().copied())?;
                SeriesData::Aligned(values.clone())
            }
            SeriesValues::Scatter(samples) => {
                ensure_finite(&spec.label, samples.iter().map(|s| s.value))?;
                let mut resolved = Vec::with_capacity(samples.len());
                let mut dropped = 0usize;
                for sample in samples {
                    match categories.index_of(&sample.category) {
                        Some(index) => resolved.push((index, sample.value)),
                        None => dropped += 1,
                    }
                }
                if dropped > 0 {
                    debug!(
                        series = %spec.label,
                        dropped,
                        "dropped scatter samples outside the category axis"
                    );
                }
                SeriesData::Scatter(resolved)
            }
        };

        out.push(Series {
            label: spec.label.clone(),
            axis: spec.axis,
            color: spec.color,
            data,
        });
    }
    Ok(out)
}

fn ensure_finite(label: &str, values: impl Iterator<Item = f64>) -> CoreResult<()> {
    for value in values {
        if !value.is_finite() {
            return Err(CoreError::Validation(format!(
                "series `{label}` contains a non-finite value"
            )));
        }
    }
    Ok(())
}
