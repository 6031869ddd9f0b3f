use crate::error::CoreResult;
use crate::render::{RenderFrame, Surface};

/// No-op surface used by tests and headless chart usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced. Counters reflect only the most
/// recent frame: every draw replaces the previous one.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub frames_drawn: u64,
    pub last_polygon_count: usize,
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_point_count: usize,
    pub last_text_count: usize,
}

impl Surface for NullSurface {
    fn draw(&mut self, frame: &RenderFrame) -> CoreResult<()> {
        frame.validate()?;
        self.frames_drawn += 1;
        self.last_polygon_count = frame.polygons.len();
        self.last_line_count = frame.lines.len();
        self.last_rect_count = frame.rects.len();
        self.last_point_count = frame.points.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
