use crate::core::Viewport;
use crate::error::{CoreError, CoreResult};
use crate::render::{
    LinePrimitive, PointPrimitive, PolygonPrimitive, RectPrimitive, TextPrimitive,
};

/// Backend-agnostic scene for one chart draw pass.
///
/// A frame always carries the complete draw state; surfaces replace whatever
/// they previously drew rather than merging.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub polygons: Vec<PolygonPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub points: Vec<PointPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            polygons: Vec::new(),
            lines: Vec::new(),
            rects: Vec::new(),
            points: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_point(mut self, point: PointPrimitive) -> Self {
        self.points.push(point);
        self
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.polygons.push(polygon);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !self.viewport.is_valid() {
            return Err(CoreError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for point in &self.points {
            point.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    /// An empty frame is the explicit placeholder state for empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
            && self.lines.is_empty()
            && self.rects.is_empty()
            && self.points.is_empty()
            && self.texts.is_empty()
    }
}
