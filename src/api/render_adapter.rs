use tracing::{debug, trace};

use crate::core::Viewport;
use crate::error::{CoreError, CoreResult};
use crate::render::Surface;

use super::chart_model::ChartModel;

/// Owning handle for one mounted chart surface.
///
/// Exactly one live render exists per handle. `update` rebuilds the full
/// frame from the model, so every draw replaces the previous state — the
/// visible result is indistinguishable from destroy-and-recreate. The
/// exclusive borrow serializes rapid re-renders; the last completed update
/// wins. Dropping the handle releases the surface, and `update` after
/// `unmount` is rejected.
pub struct RenderHandle<S: Surface> {
    surface: Option<S>,
    generation: u64,
}

impl<S: Surface> RenderHandle<S> {
    /// Mounts a surface, taking ownership of its render lifecycle.
    #[must_use]
    pub fn mount(surface: S) -> Self {
        Self {
            surface: Some(surface),
            generation: 0,
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// Count of applied updates. Hosts handing work to another flow can
    /// capture this and discard results produced for an older generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the drawn state with a fresh frame built from `model`.
    ///
    /// Validation happens before any draw call, so a rejected frame leaves
    /// the previous state untouched.
    pub fn update(&mut self, model: &ChartModel, viewport: Viewport) -> CoreResult<()> {
        let Some(surface) = self.surface.as_mut() else {
            return Err(CoreError::Configuration(
                "update on an unmounted render handle".to_owned(),
            ));
        };

        let frame = model.build_render_frame(viewport)?;
        frame.validate()?;
        surface.draw(&frame)?;
        self.generation += 1;
        trace!(generation = self.generation, "render handle updated");
        Ok(())
    }

    /// Releases the surface and returns it; further updates are rejected.
    pub fn unmount(&mut self) -> CoreResult<S> {
        match self.surface.take() {
            Some(surface) => {
                debug!(generation = self.generation, "render handle unmounted");
                Ok(surface)
            }
            None => Err(CoreError::Configuration(
                "render handle already unmounted".to_owned(),
            )),
        }
    }
}
