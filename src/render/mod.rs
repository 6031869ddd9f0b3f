mod frame;
mod null_surface;
mod primitives;

pub use frame::RenderFrame;
pub use null_surface::NullSurface;
pub use primitives::{
    Color, LinePrimitive, PointPrimitive, PolygonPrimitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};

use crate::error::CoreResult;

/// Contract implemented by any drawing backend.
///
/// Surfaces receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain logic. Each call carries
/// the complete scene and replaces whatever was drawn before.
pub trait Surface {
    fn draw(&mut self, frame: &RenderFrame) -> CoreResult<()>;
}
