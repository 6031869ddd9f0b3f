pub mod axis;
pub mod bar_series;
pub mod category;
pub mod line_series;
pub mod marker;
pub mod scale;
pub mod scatter_series;
pub mod series;
pub mod types;

pub use axis::{AxisOptions, AxisSpec, ValueDomain, resolve};
pub use bar_series::{BarRect, project_bars, project_stacked_bars};
pub use category::CategoryAxis;
pub use line_series::{AreaVertex, LineSegment, project_area_polygon, project_line_segments};
pub use marker::{Marker, ResolvedMarker, resolve_markers};
pub use scale::{BandScale, ValueScale};
pub use scatter_series::{ScatterDot, project_scatter_dots};
pub use series::{AxisSlot, ScatterSample, Series, SeriesData, SeriesSpec, SeriesValues, normalize};
pub use types::Viewport;
