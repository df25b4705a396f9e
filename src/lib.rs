//! framecast describes programmatic slide videos one frame at a time.
//!
//! Every visual property is a pure function of the frame index. Springs, eased
//! interpolations, typewriter reveals and scene transitions are recomputed from
//! scratch for each frame, so frames can be evaluated in any order or in parallel
//! and always come out identical.
//!
//! # Pipeline overview
//!
//! 1. **Author**: build a [`Composition`] in code ([`CompositionBuilder`]) or load it
//!    from JSON ([`Composition::from_path`]).
//! 2. **Sequence**: scenes become a [`Timeline`]; each frame resolves to one scene, or
//!    two during a transition.
//! 3. **Evaluate**: [`Evaluator::eval_frame`] renders each active component into a
//!    [`Visual`] and stacks them as a [`FrameDescription`].
//!
//! Rasterizing a `FrameDescription` is left to an external compositor.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod components;
mod composition;
mod eval;
mod foundation;
mod fx;
mod theme;
mod timeline;

pub use animation::curve::{AnimationCurve, CurveModel};
pub use animation::ease::Ease;
pub use animation::interpolate::{Extrapolate, InterpolateOpts, interpolate};
pub use animation::spring::{DEFAULT_REST_THRESHOLD, Spring, SpringConfig, measure_spring, spring};
pub use animation::typing::{TypeOn, visible_text};
pub use components::backgrounds::{ColorExplosionProps, StarfieldProps, TerminalRainProps};
pub use components::code_editor::CodeEditorProps;
pub use components::countdown::{CountdownProps, CountdownState};
pub use components::spec::{Component, ComponentSpec, render_component};
pub use components::title::{GradientTitleProps, TitleCardProps};
pub use components::visual::{Element, ElementKind, Fill, RenderCtx, Visual};
pub use composition::dsl::CompositionBuilder;
pub use composition::model::{Composition, CompositionDecl, Scene};
pub use composition::registry::Registry;
pub use eval::evaluator::{Evaluator, FrameDescription, Layer, LayerRole, ResolvedTransition};
pub use eval::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use eval::pipeline::{EvalThreading, digest_frames, eval_frames};
pub use foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Rgba8Premul, Vec2};
pub use foundation::error::{FramecastError, FramecastResult};
pub use fx::noise::noise2d;
pub use fx::particles::{DriftParams, drift, scatter};
pub use fx::random::{Rng64, random, random_range};
pub use theme::color::Color;
pub use theme::palette::{EditorTheme, SyntaxColors, ThemeName, theme, theme_by_name};
pub use timeline::sequence::{
    ActiveSegments, EnteringSegment, SegmentTiming, SegmentView, SegmentWindow, Timeline,
};
pub use timeline::transitions::{
    Direction, TransitionKind, TransitionSpec, TransitionTiming, parse_transition,
};
