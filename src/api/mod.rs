mod chart_model;
mod config;
mod frame_builder;
mod render_adapter;

pub use chart_model::{ChartModel, Presentation};
pub use config::{
    BAR_FRACTION, BarChartConfig, ChartConfig, DEFAULT_BAR_COLOR_HEX, LINE_SUGGESTED_MAX,
    LineChartConfig, STACKED_BAR_FRACTION, STACKED_SUGGESTED_MAX, StackedBarConfig,
    StackedSeriesSpec,
};
pub use render_adapter::RenderHandle;
