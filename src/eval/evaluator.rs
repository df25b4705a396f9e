use crate::components::spec::render_component;
use crate::components::visual::{RenderCtx, Visual};
use crate::composition::model::{Composition, Scene};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::foundation::math::Fnv1a64;
use crate::timeline::sequence::{ActiveSegments, Timeline};
use crate::timeline::transitions::{TransitionKind, parse_transition};

/// Everything a compositor needs to draw one frame, bottom layer first.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameDescription {
    /// Global frame index.
    pub frame: FrameIndex,
    /// Layers in paint order.
    pub layers: Vec<Layer>,
}

/// Why a layer is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerRole {
    /// The composition background, drawn under every scene.
    Background,
    /// The only scene on screen.
    Scene,
    /// Scene leaving during a transition.
    Exiting,
    /// Scene arriving during a transition.
    Entering,
}

/// Transition state shared by the exiting and entering layers.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ResolvedTransition {
    /// How the compositor should blend the two scenes.
    pub kind: TransitionKind,
    /// Raw `local / T` in `[0, 1)`.
    pub blend: f64,
    /// `blend` shaped by the transition timing.
    pub progress: f64,
}

/// One rendered component with its compositing parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Layer {
    /// `None` for the background.
    pub scene_id: Option<String>,
    /// Position in the layer stack.
    pub role: LayerRole,
    /// Frame the component was rendered at; the global frame for the background.
    pub local_frame: FrameIndex,
    /// Compositing weight in `[0, 1]`.
    pub weight: f64,
    /// Set on the exiting and entering layers of a transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<ResolvedTransition>,
    /// What the component drew.
    pub visual: Visual,
}

/// Stateless frame evaluator.
///
/// Nothing is cached between calls: each frame is rebuilt from the composition alone,
/// so frames can be requested in any order and from any thread.
pub struct Evaluator;

impl Evaluator {
    /// Validate `comp` and describe `frame`.
    #[tracing::instrument(skip(comp), fields(comp = %comp.id))]
    pub fn eval_frame(comp: &Composition, frame: FrameIndex) -> FramecastResult<FrameDescription> {
        comp.validate()?;
        let timeline = comp.timeline()?;
        eval_with_timeline(comp, &timeline, frame)
    }
}

/// Describe `frame` of an already validated composition.
pub(crate) fn eval_with_timeline(
    comp: &Composition,
    timeline: &Timeline,
    frame: FrameIndex,
) -> FramecastResult<FrameDescription> {
    if frame.0 >= timeline.span() {
        return Err(FramecastError::evaluation(format!(
            "frame {} is out of bounds (duration {})",
            frame.0,
            timeline.span()
        )));
    }
    let active = timeline.resolve(frame)?;

    let mut layers = Vec::with_capacity(3);
    if let Some(bg) = &comp.background {
        layers.push(Layer {
            scene_id: None,
            role: LayerRole::Background,
            local_frame: frame,
            weight: 1.0,
            transition: None,
            visual: render_component(bg, &ctx(comp, "background", frame))?,
        });
    }
    push_scene_layers(comp, &active, &mut layers)?;

    Ok(FrameDescription { frame, layers })
}

fn push_scene_layers(
    comp: &Composition,
    active: &ActiveSegments,
    layers: &mut Vec<Layer>,
) -> FramecastResult<()> {
    let primary = scene_at(comp, active.primary.index)?;
    let primary_visual = render_component(
        &primary.component,
        &ctx(comp, &primary.id, active.primary.local_frame),
    )?;

    let Some(entering) = active.entering else {
        layers.push(Layer {
            scene_id: Some(primary.id.clone()),
            role: LayerRole::Scene,
            local_frame: active.primary.local_frame,
            weight: 1.0,
            transition: None,
            visual: primary_visual,
        });
        return Ok(());
    };

    let spec = primary.transition_out.as_ref().ok_or_else(|| {
        FramecastError::evaluation(format!(
            "scene '{}' overlaps the next scene without a transition",
            primary.id
        ))
    })?;
    let progress = spec
        .timing
        .progress(entering.local_frame, entering.transition_frames, comp.fps);
    let transition = ResolvedTransition {
        kind: parse_transition(spec)?,
        blend: entering.blend,
        progress,
    };
    let weight = progress.clamp(0.0, 1.0);

    let next = scene_at(comp, entering.index)?;
    let next_visual = render_component(&next.component, &ctx(comp, &next.id, entering.local_frame))?;

    layers.push(Layer {
        scene_id: Some(primary.id.clone()),
        role: LayerRole::Exiting,
        local_frame: active.primary.local_frame,
        weight: 1.0 - weight,
        transition: Some(transition.clone()),
        visual: primary_visual,
    });
    layers.push(Layer {
        scene_id: Some(next.id.clone()),
        role: LayerRole::Entering,
        local_frame: entering.local_frame,
        weight,
        transition: Some(transition),
        visual: next_visual,
    });
    Ok(())
}

fn scene_at(comp: &Composition, index: usize) -> FramecastResult<&Scene> {
    comp.scenes
        .get(index)
        .ok_or_else(|| FramecastError::evaluation(format!("scene index {index} out of range")))
}

fn ctx(comp: &Composition, key: &str, local_frame: FrameIndex) -> RenderCtx {
    RenderCtx {
        frame: local_frame,
        fps: comp.fps,
        canvas: comp.canvas,
        seed: scene_seed(comp.seed, key),
    }
}

/// Per-scene seed derived from the composition seed and a stable key.
pub(crate) fn scene_seed(seed: u64, key: &str) -> u64 {
    let mut h = Fnv1a64::new(Fnv1a64::OFFSET_BASIS ^ seed);
    h.write_str(key);
    h.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
