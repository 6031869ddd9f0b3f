use crate::core::{AxisSpec, CategoryAxis, ResolvedMarker, Series, Viewport};
use crate::error::CoreResult;
use crate::render::RenderFrame;

/// Compiled chart state: normalized series, resolved axes and markers.
///
/// A model is only constructed through a validated `ChartConfig`, so every
/// invariant (series/category alignment, marker anchoring, axis domains) has
/// already been checked by the time it reaches a render handle.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    categories: CategoryAxis,
    series: Vec<Series>,
    markers: Vec<ResolvedMarker>,
    axes: AxisSpec,
    presentation: Presentation,
}

/// Chart shape driving the draw-call mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Line { show_fill: bool },
    Bar,
    StackedBar,
}

impl ChartModel {
    pub(super) fn new(
        categories: CategoryAxis,
        series: Vec<Series>,
        markers: Vec<ResolvedMarker>,
        axes: AxisSpec,
        presentation: Presentation,
    ) -> Self {
        Self {
            categories,
            series,
            markers,
            axes,
            presentation,
        }
    }

    #[must_use]
    pub fn categories(&self) -> &CategoryAxis {
        &self.categories
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn markers(&self) -> &[ResolvedMarker] {
        &self.markers
    }

    #[must_use]
    pub fn axes(&self) -> AxisSpec {
        self.axes
    }

    #[must_use]
    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    /// Derives the complete draw state for one viewport on demand.
    pub fn build_render_frame(&self, viewport: Viewport) -> CoreResult<RenderFrame> {
        super::frame_builder::build_render_frame(self, viewport)
    }
}
