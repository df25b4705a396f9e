use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use anyhow::Context;

use crate::components::spec::ComponentSpec;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::timeline::sequence::{SegmentTiming, Timeline};
use crate::timeline::transitions::TransitionSpec;

/// One segment of a composition: a component shown for `duration_frames`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Unique within the composition; also keys the scene's random seed.
    pub id: String,
    /// Length of the scene including any transition overlap.
    pub duration_frames: u64,
    /// What the scene shows.
    pub component: ComponentSpec,
    /// Overlap into the next scene. Not allowed on the last scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_out: Option<TransitionSpec>,
}

impl Scene {
    fn timing(&self) -> SegmentTiming {
        SegmentTiming {
            duration_frames: self.duration_frames,
            transition_frames: self
                .transition_out
                .as_ref()
                .map(|t| t.duration_frames)
                .unwrap_or(0),
        }
    }
}

/// A video: scenes laid out back to back, over an optional persistent background.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Composition {
    /// Composition id.
    pub id: String,
    /// Frame rate.
    pub fps: Fps,
    /// Output size in pixels.
    pub canvas: Canvas,
    /// Root of every keyed random value in the composition.
    #[serde(default)]
    pub seed: u64,
    /// Rendered under every scene with the global frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<ComponentSpec>,
    /// Scenes in playback order.
    pub scenes: Vec<Scene>,
}

/// What a host needs to register a composition.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CompositionDecl {
    /// Composition id.
    pub id: String,
    /// Timeline span in frames.
    pub duration_frames: u64,
    /// Frame rate.
    pub fps: Fps,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl Composition {
    /// Check ids, frame rate, canvas, every component and transition, and the scene layout.
    pub fn validate(&self) -> FramecastResult<()> {
        if self.id.trim().is_empty() {
            return Err(FramecastError::validation("composition id must be non-empty"));
        }
        self.fps.validate()?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(FramecastError::validation("canvas width/height must be > 0"));
        }
        if self.scenes.is_empty() {
            return Err(FramecastError::validation(
                "composition must have at least one scene",
            ));
        }

        let mut seen = BTreeSet::new();
        for scene in &self.scenes {
            if scene.id.trim().is_empty() {
                return Err(FramecastError::validation("scene id must be non-empty"));
            }
            if !seen.insert(scene.id.as_str()) {
                return Err(FramecastError::validation(format!(
                    "duplicate scene id '{}'",
                    scene.id
                )));
            }
            scene.component.validate().map_err(|e| {
                FramecastError::validation(format!("scene '{}': {e}", scene.id))
            })?;
            if let Some(tr) = &scene.transition_out {
                tr.validate().map_err(|e| {
                    FramecastError::validation(format!("scene '{}': {e}", scene.id))
                })?;
            }
        }
        if let Some(bg) = &self.background {
            bg.validate()?;
        }

        let timeline = self.timeline()?;
        if timeline.span() == 0 {
            return Err(FramecastError::validation("duration must be > 0 frames"));
        }
        Ok(())
    }

    /// Segment layout of the scenes.
    pub fn timeline(&self) -> FramecastResult<Timeline> {
        let timings: Vec<SegmentTiming> = self.scenes.iter().map(Scene::timing).collect();
        Timeline::new(&timings)
    }

    /// Total frames once transitions overlap neighbouring scenes.
    pub fn duration_frames(&self) -> FramecastResult<u64> {
        Ok(self.timeline()?.span())
    }

    /// Host-facing summary of the composition.
    pub fn decl(&self) -> FramecastResult<CompositionDecl> {
        Ok(CompositionDecl {
            id: self.id.clone(),
            duration_frames: self.duration_frames()?,
            fps: self.fps,
            width: self.canvas.width,
            height: self.canvas.height,
        })
    }

    /// Parse and validate composition JSON.
    pub fn from_reader(r: impl Read) -> FramecastResult<Self> {
        let comp: Self = serde_json::from_reader(r)
            .map_err(|e| FramecastError::serde(format!("parse composition JSON: {e}")))?;
        comp.validate()?;
        Ok(comp)
    }

    /// Read, parse and validate a composition JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> FramecastResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("open composition '{}'", path.display()))?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
