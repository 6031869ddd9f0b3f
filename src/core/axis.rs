use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::series::{AxisSlot, Series, SeriesData};
use crate::error::{CoreError, CoreResult};

/// Options controlling how value domains are derived from the series set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    /// Sum aligned series per category and scale to the tallest stack.
    pub stacked: bool,
    /// Give `Secondary`-tagged series their own independent scale.
    pub dual_axis: bool,
    /// The primary axis extends at least this far even when data sits lower.
    pub suggested_max: Option<f64>,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            stacked: false,
            dual_axis: false,
            suggested_max: None,
        }
    }
}

impl AxisOptions {
    #[must_use]
    pub fn stacked() -> Self {
        Self {
            stacked: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_dual_axis(mut self, dual_axis: bool) -> Self {
        self.dual_axis = dual_axis;
        self
    }

    #[must_use]
    pub fn with_suggested_max(mut self, suggested_max: Option<f64>) -> Self {
        self.suggested_max = suggested_max;
        self
    }
}

/// Resolved value domain for one vertical scale.
///
/// The minimum is pinned at zero; negative inputs pass through unclamped and
/// project below the axis floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

/// Resolved vertical scales for one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub primary: ValueDomain,
    pub secondary: Option<ValueDomain>,
}

/// Computes scale domains for a normalized series set.
///
/// Stacked mode sums aligned series per category and scales to the tallest
/// stack. Dual-axis mode derives the secondary domain from `Secondary`-tagged
/// series alone; those series never influence the primary domain. Without
/// dual-axis mode every series contributes to the primary domain regardless
/// of its tag.
pub fn resolve(series: &[Series], opts: AxisOptions) -> CoreResult<AxisSpec> {
    if let Some(suggested) = opts.suggested_max {
        if !suggested.is_finite() {
            return Err(CoreError::Validation(
                "suggested axis maximum must be finite".to_owned(),
            ));
        }
    }

    let primary_data_max = if opts.stacked {
        stacked_max(series)
    } else if opts.dual_axis {
        slot_max(series, Some(AxisSlot::Primary))
    } else {
        slot_max(series, None)
    };

    let secondary = if opts.dual_axis {
        let has_secondary = series.iter().any(|s| s.axis == AxisSlot::Secondary);
        has_secondary.then(|| ValueDomain {
            min: 0.0,
            max: drawable_max(slot_max(series, Some(AxisSlot::Secondary)), None),
        })
    } else {
        None
    };

    Ok(AxisSpec {
        primary: ValueDomain {
            min: 0.0,
            max: drawable_max(primary_data_max, opts.suggested_max),
        },
        secondary,
    })
}

/// Maximum over categories of the per-category sum across aligned series.
fn stacked_max(series: &[Series]) -> f64 {
    let mut sums: SmallVec<[f64; 16]> = SmallVec::new();
    for s in series {
        let SeriesData::Aligned(values) = &s.data else {
            continue;
        };
        if sums.len() < values.len() {
            sums.resize(values.len(), 0.0);
        }
        for (sum, value) in sums.iter_mut().zip(values) {
            *sum += value;
        }
    }
    sums.iter()
        .copied()
        .map(OrderedFloat)
        .max()
        .map_or(0.0, |m| m.0)
}

fn slot_max(series: &[Series], slot: Option<AxisSlot>) -> f64 {
    series
        .iter()
        .filter(|s| slot.is_none_or(|slot| s.axis == slot))
        .flat_map(Series::values)
        .map(OrderedFloat)
        .max()
        .map_or(0.0, |m| m.0)
}

/// Applies the suggested maximum and guarantees a non-degenerate domain so an
/// all-zero or empty series set still yields a drawable scale.
fn drawable_max(data_max: f64, suggested: Option<f64>) -> f64 {
    let mut max = data_max;
    if let Some(suggested) = suggested {
        max = max.max(suggested);
    }
    if max <= 0.0 {
        max = 1.0;
    }
    max
}
