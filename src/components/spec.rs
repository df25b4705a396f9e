use crate::components::backgrounds::{ColorExplosionProps, StarfieldProps, TerminalRainProps};
use crate::components::code_editor::CodeEditorProps;
use crate::components::countdown::CountdownProps;
use crate::components::title::{GradientTitleProps, TitleCardProps};
use crate::components::visual::{RenderCtx, Visual};
use crate::foundation::error::FramecastResult;

/// A pure `(frame, props) -> Visual` function.
pub trait Component {
    /// Reject props that could never render.
    fn validate(&self) -> FramecastResult<()>;

    /// Describe the component at `ctx.frame`. Must not depend on anything but `self` and `ctx`.
    fn render(&self, ctx: &RenderCtx) -> FramecastResult<Visual>;
}

/// Component selected by `kind`, with its typed `props`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "props", rename_all = "snake_case")]
pub enum ComponentSpec {
    /// Springy title with a delayed subtitle.
    TitleCard(TitleCardProps),
    /// Gradient background with a scaling title.
    GradientTitle(GradientTitleProps),
    /// Code typed out inside an editor frame.
    CodeEditor(CodeEditorProps),
    /// Countdown ring with remaining seconds.
    Countdown(CountdownProps),
    /// Twinkling, drifting stars.
    Starfield(StarfieldProps),
    /// Particles bursting from the center.
    ColorExplosion(ColorExplosionProps),
    /// Falling shell commands.
    TerminalRain(TerminalRainProps),
}

impl ComponentSpec {
    /// The `kind` tag this variant serializes with.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::TitleCard(_) => "title_card",
            Self::GradientTitle(_) => "gradient_title",
            Self::CodeEditor(_) => "code_editor",
            Self::Countdown(_) => "countdown",
            Self::Starfield(_) => "starfield",
            Self::ColorExplosion(_) => "color_explosion",
            Self::TerminalRain(_) => "terminal_rain",
        }
    }

    fn as_component(&self) -> &dyn Component {
        match self {
            Self::TitleCard(p) => p,
            Self::GradientTitle(p) => p,
            Self::CodeEditor(p) => p,
            Self::Countdown(p) => p,
            Self::Starfield(p) => p,
            Self::ColorExplosion(p) => p,
            Self::TerminalRain(p) => p,
        }
    }

    /// Validate the wrapped props.
    pub fn validate(&self) -> FramecastResult<()> {
        self.as_component().validate()
    }
}

/// Render `spec` for one frame.
pub fn render_component(spec: &ComponentSpec, ctx: &RenderCtx) -> FramecastResult<Visual> {
    spec.as_component().render(ctx)
}

#[cfg(test)]
#[path = "../../tests/unit/components/spec.rs"]
mod tests;
