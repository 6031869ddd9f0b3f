use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::category::CategoryAxis;
use crate::core::series::{Series, SeriesData};
use crate::error::{CoreError, CoreResult};

/// Annotated event overlaid on a chart at a specific category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub category: String,
    pub value: Option<f64>,
    pub annotation: String,
}

impl Marker {
    #[must_use]
    pub fn new(category: impl Into<String>, annotation: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            value: None,
            annotation: annotation.into(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}

/// Marker with its category and vertical anchor fully resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMarker {
    pub category_index: usize,
    pub value: f64,
    pub annotation: String,
}

/// Resolves marker overlays against the axis and the normalized series.
///
/// A marker addressing a category outside the axis is dropped, not errored.
/// A marker without an explicit value inherits the first aligned series'
/// value at the marker's category index; if no aligned series exists it is
/// dropped as well.
pub fn resolve_markers(
    markers: &[Marker],
    categories: &CategoryAxis,
    series: &[Series],
) -> CoreResult<Vec<ResolvedMarker>> {
    if markers.is_empty() {
        return Ok(Vec::new());
    }

    let anchor = series.iter().find_map(|s| match &s.data {
        SeriesData::Aligned(values) => Some(values.as_slice()),
        SeriesData::Scatter(_) => None,
    });

    let mut resolved = Vec::with_capacity(markers.len());
    let mut dropped = 0usize;
    for marker in markers {
        if let Some(value) = marker.value {
            if !value.is_finite() {
                return Err(CoreError::Validation(format!(
                    "marker `{}` has a non-finite value",
                    marker.annotation
                )));
            }
        }

        let Some(category_index) = categories.index_of(&marker.category) else {
            dropped += 1;
            continue;
        };

        let value = match marker.value {
            Some(value) => value,
            None => match anchor.and_then(|values| values.get(category_index).copied()) {
                Some(value) => value,
                None => {
                    dropped += 1;
                    continue;
                }
            },
        };

        resolved.push(ResolvedMarker {
            category_index,
            value,
            annotation: marker.annotation.clone(),
        });
    }

    if dropped > 0 {
        debug!(dropped, "dropped markers without an axis anchor");
    }
    Ok(resolved)
}
