use serde::{Deserialize, Serialize};

use crate::core::{
    AxisOptions, AxisSlot, CategoryAxis, Marker, SeriesSpec, normalize, resolve, resolve_markers,
};
use crate::error::{CoreError, CoreResult};
use crate::render::Color;

use super::chart_model::{ChartModel, Presentation};

/// Suggested primary-axis maximum for line charts; adherence series are
/// percentages, so the axis reaches 100 even on quiet days.
pub const LINE_SUGGESTED_MAX: f64 = 100.0;

/// Suggested axis maximum for stacked severity bars.
pub const STACKED_SUGGESTED_MAX: f64 = 10.0;

/// Bar width as a fraction of the category band.
pub const BAR_FRACTION: f64 = 0.65;

/// Stacked bar width fraction: the bar fraction shrunk again by the
/// category fraction, matching the portal's stacked presentation.
pub const STACKED_BAR_FRACTION: f64 = 0.39;

/// Default single-series bar color.
pub const DEFAULT_BAR_COLOR_HEX: &str = "#2563eb";

/// Discriminated chart configurations.
///
/// Each variant fixes the required field set for one chart shape; compiling
/// validates everything up front so a `ChartModel` never carries misaligned
/// input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartConfig {
    Line(LineChartConfig),
    Bar(BarChartConfig),
    StackedBar(StackedBarConfig),
}

impl ChartConfig {
    pub fn compile(&self) -> CoreResult<ChartModel> {
        match self {
            Self::Line(config) => config.compile(),
            Self::Bar(config) => config.compile(),
            Self::StackedBar(config) => config.compile(),
        }
    }

    /// Serializes the config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> CoreResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Validation(format!("failed to serialize config: {e}")))
    }

    /// Deserializes a config from JSON.
    pub fn from_json_str(input: &str) -> CoreResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| CoreError::Validation(format!("failed to parse config: {e}")))
    }
}

/// Multi-series line chart with optional scatter overlays, event markers and
/// a secondary axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    pub categories: Vec<String>,
    pub series: Vec<SeriesSpec>,
    pub markers: Vec<Marker>,
    pub show_fill: bool,
    pub suggested_max: Option<f64>,
}

impl LineChartConfig {
    #[must_use]
    pub fn new(categories: Vec<String>, series: Vec<SeriesSpec>) -> Self {
        Self {
            categories,
            series,
            markers: Vec::new(),
            show_fill: true,
            suggested_max: Some(LINE_SUGGESTED_MAX),
        }
    }

    #[must_use]
    pub fn with_markers(mut self, markers: Vec<Marker>) -> Self {
        self.markers = markers;
        self
    }

    #[must_use]
    pub fn with_show_fill(mut self, show_fill: bool) -> Self {
        self.show_fill = show_fill;
        self
    }

    #[must_use]
    pub fn with_suggested_max(mut self, suggested_max: Option<f64>) -> Self {
        self.suggested_max = suggested_max;
        self
    }

    pub fn compile(&self) -> CoreResult<ChartModel> {
        let categories = CategoryAxis::new(self.categories.iter().cloned())?;
        let series = normalize(&self.series, &categories)?;
        let markers = resolve_markers(&self.markers, &categories, &series)?;
        // The secondary scale exists exactly when some series asks for it.
        let dual_axis = series.iter().any(|s| s.axis == AxisSlot::Secondary);
        let axes = resolve(
            &series,
            AxisOptions::default()
                .with_dual_axis(dual_axis)
                .with_suggested_max(self.suggested_max),
        )?;
        Ok(ChartModel::new(
            categories,
            series,
            markers,
            axes,
            Presentation::Line {
                show_fill: self.show_fill,
            },
        ))
    }
}

/// Single-series categorical bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub categories: Vec<String>,
    pub label: String,
    pub values: Vec<f64>,
    pub color: Option<Color>,
}

impl BarChartConfig {
    #[must_use]
    pub fn new(categories: Vec<String>, label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            categories,
            label: label.into(),
            values,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn compile(&self) -> CoreResult<ChartModel> {
        let color = match self.color {
            Some(color) => color,
            None => Color::from_hex(DEFAULT_BAR_COLOR_HEX)?,
        };
        let categories = CategoryAxis::new(self.categories.iter().cloned())?;
        let series = normalize(
            &[SeriesSpec::aligned(
                self.label.clone(),
                color,
                self.values.clone(),
            )],
            &categories,
        )?;
        let axes = resolve(&series, AxisOptions::default())?;
        Ok(ChartModel::new(
            categories,
            series,
            Vec::new(),
            axes,
            Presentation::Bar,
        ))
    }
}

/// One member of a stacked group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedSeriesSpec {
    pub label: String,
    pub values: Vec<f64>,
    pub color: Color,
}

impl StackedSeriesSpec {
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<f64>, color: Color) -> Self {
        Self {
            label: label.into(),
            values,
            color,
        }
    }
}

/// Stacked categorical bar chart; per-category values are summed for the
/// shared axis maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedBarConfig {
    pub categories: Vec<String>,
    pub series: Vec<StackedSeriesSpec>,
    pub suggested_max: Option<f64>,
}

impl StackedBarConfig {
    #[must_use]
    pub fn new(categories: Vec<String>, series: Vec<StackedSeriesSpec>) -> Self {
        Self {
            categories,
            series,
            suggested_max: Some(STACKED_SUGGESTED_MAX),
        }
    }

    #[must_use]
    pub fn with_suggested_max(mut self, suggested_max: Option<f64>) -> Self {
        self.suggested_max = suggested_max;
        self
    }

    pub fn compile(&self) -> CoreResult<ChartModel> {
        let categories = CategoryAxis::new(self.categories.iter().cloned())?;
        let specs: Vec<SeriesSpec> = self
            .series
            .iter()
            .map(|s| SeriesSpec::aligned(s.label.clone(), s.color, s.values.clone()))
            .collect();
        let series = normalize(&specs, &categories)?;
        let axes = resolve(
            &series,
            AxisOptions::stacked().with_suggested_max(self.suggested_max),
        )?;
        Ok(ChartModel::new(
            categories,
            series,
            Vec::new(),
            axes,
            Presentation::StackedBar,
        ))
    }
}
