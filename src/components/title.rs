use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::animation::spring::{SpringConfig, spring};
use crate::components::spec::Component;
use crate::components::visual::{Element, ElementKind, Fill, RenderCtx, Visual};
use crate::foundation::core::{FrameIndex, Vec2};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::theme::color::Color;

const TITLE_SPRING: SpringConfig = SpringConfig::new(100.0, 200.0, 0.5);

/// Centered title that springs in, followed by a subtitle sliding up.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TitleCardProps {
    /// Main heading.
    pub title: String,
    /// Line under the title; empty hides it.
    #[serde(default)]
    pub subtitle: String,
    /// Default `#61dafb`.
    #[serde(default = "default_title_color")]
    pub title_color: Color,
    /// Default white.
    #[serde(default = "default_subtitle_color")]
    pub subtitle_color: Color,
    /// Frames between the title and the subtitle entrance.
    #[serde(default = "default_subtitle_delay")]
    pub subtitle_delay_frames: u64,
    /// Entrance spring for both lines; damping 100, stiffness 200, mass 0.5 by default.
    #[serde(default = "default_title_spring")]
    pub spring: SpringConfig,
}

fn default_title_color() -> Color {
    Color::rgb(0x61dafb)
}

fn default_subtitle_color() -> Color {
    Color::WHITE
}

fn default_subtitle_delay() -> u64 {
    15
}

fn default_title_spring() -> SpringConfig {
    TITLE_SPRING
}

impl TitleCardProps {
    /// Title card with default colors and timing.
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            title_color: default_title_color(),
            subtitle_color: default_subtitle_color(),
            subtitle_delay_frames: default_subtitle_delay(),
            spring: TITLE_SPRING,
        }
    }
}

impl Component for TitleCardProps {
    fn validate(&self) -> FramecastResult<()> {
        self.spring.validate()
    }

    fn render(&self, ctx: &RenderCtx) -> FramecastResult<Visual> {
        let title_p = spring(ctx.frame, FrameIndex(0), ctx.fps, self.spring);
        let sub_p = spring(
            ctx.frame,
            FrameIndex(self.subtitle_delay_frames),
            ctx.fps,
            self.spring,
        );
        let sub_y = interpolate(sub_p, &[0.0, 1.0], &[20.0, 0.0], InterpolateOpts::default())?;

        let center = ctx.canvas.center();
        let mut visual = Visual::default();
        visual.push(
            Element::new(
                "title",
                ElementKind::Text {
                    text: self.title.clone(),
                    font_size: 80.0,
                    color: self.title_color,
                },
                center - Vec2::new(0.0, 40.0),
            )
            .with_opacity(title_p)
            .with_scale(title_p),
        );
        if !self.subtitle.is_empty() {
            visual.push(
                Element::new(
                    "subtitle",
                    ElementKind::Text {
                        text: self.subtitle.clone(),
                        font_size: 40.0,
                        color: self.subtitle_color,
                    },
                    center + Vec2::new(0.0, 50.0),
                )
                .with_opacity(sub_p)
                .translated(Vec2::new(0.0, sub_y)),
            );
        }
        Ok(visual)
    }
}

/// Full-bleed two-color gradient with a bouncing title and optional emoji.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientTitleProps {
    /// Heading text.
    pub title: String,
    /// Drawn above the title when non-empty.
    #[serde(default)]
    pub emoji: String,
    /// Gradient start and end, `#ff0080` to `#7928ca` by default.
    #[serde(default = "default_gradient")]
    pub gradient_colors: [Color; 2],
    /// Damping of the scale-in spring (default 12).
    #[serde(default = "default_gradient_damping")]
    pub damping: f64,
}

fn default_gradient() -> [Color; 2] {
    [Color::rgb(0xff0080), Color::rgb(0x7928ca)]
}

fn default_gradient_damping() -> f64 {
    12.0
}

impl GradientTitleProps {
    /// Gradient title with the default colors.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            emoji: String::new(),
            gradient_colors: default_gradient(),
            damping: default_gradient_damping(),
        }
    }
}

impl Component for GradientTitleProps {
    fn validate(&self) -> FramecastResult<()> {
        if self.title.trim().is_empty() {
            return Err(FramecastError::validation("gradient_title.title must be non-empty"));
        }
        SpringConfig::with_damping(self.damping).validate()
    }

    fn render(&self, ctx: &RenderCtx) -> FramecastResult<Visual> {
        let scale = spring(
            ctx.frame,
            FrameIndex(0),
            ctx.fps,
            SpringConfig::with_damping(self.damping),
        );
        let center = ctx.canvas.center();

        let mut visual = Visual::with_background(Fill::LinearGradient {
            angle_deg: 45.0,
            stops: self.gradient_colors.to_vec(),
        });
        let title_y = if self.emoji.is_empty() {
            center.y
        } else {
            visual.push(
                Element::new(
                    "emoji",
                    ElementKind::Text {
                        text: self.emoji.clone(),
                        font_size: 128.0,
                        color: Color::WHITE,
                    },
                    center - Vec2::new(0.0, 80.0),
                )
                .with_scale(scale),
            );
            center.y + 60.0
        };
        visual.push(
            Element::new(
                "title",
                ElementKind::Text {
                    text: self.title.clone(),
                    font_size: 56.0,
                    color: Color::WHITE,
                },
                Vec2::new(center.x, title_y),
            )
            .with_scale(scale),
        );
        Ok(visual)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/title.rs"]
mod tests;
