use crate::components::spec::ComponentSpec;
use crate::composition::model::{Composition, Scene};
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::timeline::transitions::TransitionSpec;

/// Fluent construction of a [`Composition`] in code.
///
/// Scenes are appended in playback order; [`transition`](Self::transition)
/// attaches to the scene added last. Nothing is checked until [`build`](Self::build).
pub struct CompositionBuilder {
    id: String,
    fps: Fps,
    canvas: Canvas,
    seed: u64,
    background: Option<ComponentSpec>,
    scenes: Vec<Scene>,
}

impl CompositionBuilder {
    /// Start an empty composition with seed `0`.
    pub fn new(id: impl Into<String>, fps: Fps, canvas: Canvas) -> Self {
        Self {
            id: id.into(),
            fps,
            canvas,
            seed: 0,
            background: None,
            scenes: Vec::new(),
        }
    }

    /// Root seed for keyed randomness.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Component rendered under every scene on the global clock.
    pub fn background(mut self, component: ComponentSpec) -> Self {
        self.background = Some(component);
        self
    }

    /// Append a scene that cuts to whatever follows.
    pub fn scene(
        mut self,
        id: impl Into<String>,
        duration_frames: u64,
        component: ComponentSpec,
    ) -> Self {
        self.scenes.push(Scene {
            id: id.into(),
            duration_frames,
            component,
            transition_out: None,
        });
        self
    }

    /// Blend the most recently added scene into the next one.
    pub fn transition(mut self, spec: TransitionSpec) -> FramecastResult<Self> {
        let last = self.scenes.last_mut().ok_or_else(|| {
            FramecastError::validation("transition must follow a scene")
        })?;
        if last.transition_out.is_some() {
            return Err(FramecastError::validation(format!(
                "scene '{}' already has an outgoing transition",
                last.id
            )));
        }
        last.transition_out = Some(spec);
        Ok(self)
    }

    /// Validate and return the composition.
    pub fn build(self) -> FramecastResult<Composition> {
        let comp = Composition {
            id: self.id,
            fps: self.fps,
            canvas: self.canvas,
            seed: self.seed,
            background: self.background,
            scenes: self.scenes,
        };
        comp.validate()?;
        Ok(comp)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
