use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::animation::spring::{SpringConfig, spring};
use crate::components::spec::Component;
use crate::components::visual::{Element, ElementKind, Fill, RenderCtx, Visual};
use crate::foundation::core::{FrameIndex, Vec2};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::theme::color::Color;

const RING_RADIUS: f64 = 135.0;
const RING_STROKE: f64 = 24.0;

/// Circular countdown with a pulsing ring and a message underneath.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CountdownProps {
    /// Length of the countdown.
    pub seconds: u32,
    /// Text under the ring.
    #[serde(default)]
    pub message: String,
    /// Damping of the entrance spring (default 15).
    #[serde(default = "default_damping")]
    pub damping: f64,
}

fn default_damping() -> f64 {
    15.0
}

/// Whole seconds still to go and the elapsed fraction of the countdown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountdownState {
    /// Seconds shown on the dial, rounded up.
    pub remaining_seconds: u64,
    /// Elapsed fraction in `0..=1`.
    pub progress: f64,
}

impl CountdownProps {
    /// Countdown of `seconds` with the default spring.
    pub fn new(seconds: u32, message: impl Into<String>) -> Self {
        Self {
            seconds,
            message: message.into(),
            damping: default_damping(),
        }
    }

    /// Countdown state at `ctx.frame`; never goes below zero.
    pub fn state(&self, ctx: &RenderCtx) -> CountdownState {
        let fps = ctx.fps.as_f64();
        let total = f64::from(self.seconds) * fps;
        let remaining = (total - ctx.frame.0 as f64).max(0.0);
        CountdownState {
            remaining_seconds: (remaining / fps).ceil() as u64,
            progress: if total > 0.0 {
                (1.0 - remaining / total).clamp(0.0, 1.0)
            } else {
                1.0
            },
        }
    }
}

impl Component for CountdownProps {
    fn validate(&self) -> FramecastResult<()> {
        if self.seconds == 0 {
            return Err(FramecastError::validation("countdown.seconds must be > 0"));
        }
        SpringConfig::with_damping(self.damping).validate()
    }

    fn render(&self, ctx: &RenderCtx) -> FramecastResult<Visual> {
        let state = self.state(ctx);
        let pulse = (ctx.frame.0 as f64 / 10.0).sin() * 0.05 + 1.0;
        let message_p = spring(
            ctx.frame,
            FrameIndex(0),
            ctx.fps,
            SpringConfig::with_damping(self.damping),
        );
        let message_y = interpolate(
            message_p,
            &[0.0, 1.0],
            &[30.0, 0.0],
            InterpolateOpts::default(),
        )?;

        let center = ctx.canvas.center();
        let ring_center = center - Vec2::new(0.0, 60.0);
        let mut visual = Visual::with_background(Fill::solid(Color::rgb(0x0a0a2a)));
        visual.push(
            Element::new(
                "ring_track",
                ElementKind::Arc {
                    radius: RING_RADIUS,
                    stroke_width: RING_STROKE,
                    color: Color::rgb(0x1e1e3f),
                    sweep: 1.0,
                },
                ring_center,
            )
            .with_scale(pulse),
        );
        visual.push(
            Element::new(
                "ring_progress",
                ElementKind::Arc {
                    radius: RING_RADIUS,
                    stroke_width: RING_STROKE,
                    color: Color::rgb(0x64dfdf),
                    sweep: state.progress,
                },
                ring_center,
            )
            .with_scale(pulse),
        );
        visual.push(
            Element::new(
                "digits",
                ElementKind::Text {
                    text: state.remaining_seconds.to_string(),
                    font_size: 128.0,
                    color: Color::WHITE,
                },
                ring_center,
            )
            .with_scale(pulse),
        );
        if !self.message.is_empty() {
            visual.push(
                Element::new(
                    "message",
                    ElementKind::Text {
                        text: self.message.clone(),
                        font_size: 48.0,
                        color: Color::WHITE,
                    },
                    ring_center + Vec2::new(0.0, RING_RADIUS + 80.0),
                )
                .with_opacity(message_p)
                .translated(Vec2::new(0.0, message_y)),
            );
        }
        Ok(visual)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/countdown.rs"]
mod tests;
