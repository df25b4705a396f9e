//! Decorative full-frame backgrounds.
//!
//! Every particle attribute comes from the keyed generator in [`crate::fx`], so a
//! background re-rendered for the same frame and seed is identical, on any thread.

use std::f64::consts::TAU;

use crate::animation::ease::Ease;
use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::components::spec::Component;
use crate::components::visual::{Element, ElementKind, Fill, RenderCtx, Visual};
use crate::foundation::core::Vec2;
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::fx::particles::{DriftParams, drift, scatter};
use crate::fx::random::{Rng64, random};
use crate::theme::color::Color;

const NIGHT: Color = Color::rgb(0x0a0a15);

/// Twinkling stars drifting over a night sky.
///
/// Drift is measured in canvas fractions rather than pixels: the default
/// amplitude of `0.5` lets a star wander up to half the canvas width (and height)
/// from its home position, one noise cell every 100 frames.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StarfieldProps {
    /// Number of stars.
    pub count: u32,
    /// Wobble, with `amplitude` as a fraction of the canvas size on each axis.
    pub drift: DriftParams,
}

impl Default for StarfieldProps {
    fn default() -> Self {
        Self {
            count: 200,
            drift: DriftParams {
                amplitude: 0.5,
                speed: 0.01,
            },
        }
    }
}

impl Component for StarfieldProps {
    fn validate(&self) -> FramecastResult<()> {
        self.drift.validate()
    }

    fn render(&self, ctx: &RenderCtx) -> FramecastResult<Visual> {
        let mut visual = Visual::with_background(Fill::solid(NIGHT));
        let t = ctx.frame.0 as f64;
        let to_canvas = |d: Vec2| {
            Vec2::new(
                d.x * f64::from(ctx.canvas.width),
                d.y * f64::from(ctx.canvas.height),
            )
        };
        for i in 0..u64::from(self.count) {
            let home = scatter(ctx.seed, "star", i, ctx.canvas);
            let size = random(ctx.seed, "star.size", i) * 2.0 + 1.0;
            let brightness = random(ctx.seed, "star.brightness", i);
            let twinkle = (t * brightness * 0.1).sin() * 0.5 + 0.5;
            visual.push(
                Element::new(
                    format!("star/{i}"),
                    ElementKind::Circle {
                        radius: size / 2.0,
                        fill: Fill::solid(Color::WHITE),
                        blur: size * 2.0,
                    },
                    home + to_canvas(drift(ctx.seed, i, ctx.frame, &self.drift)),
                )
                .with_opacity(twinkle),
            );
        }
        Ok(visual)
    }
}

/// Blurred color particles bursting out from the center.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColorExplosionProps {
    /// Number of particles.
    pub count: u32,
    /// Particle colors, picked per particle by the keyed generator.
    pub colors: Vec<Color>,
    /// Particles start at a random delay in `0..max_delay_frames`.
    pub max_delay_frames: u32,
}

impl Default for ColorExplosionProps {
    fn default() -> Self {
        Self {
            count: 80,
            colors: vec![
                Color::rgb(0xff3366),
                Color::rgb(0x33ff99),
                Color::rgb(0x3366ff),
                Color::rgb(0xff9933),
                Color::rgb(0x9933ff),
                Color::rgb(0xffff33),
            ],
            max_delay_frames: 15,
        }
    }
}

impl Component for ColorExplosionProps {
    fn validate(&self) -> FramecastResult<()> {
        if self.colors.is_empty() {
            return Err(FramecastError::validation(
                "color_explosion.colors must be non-empty",
            ));
        }
        Ok(())
    }

    fn render(&self, ctx: &RenderCtx) -> FramecastResult<Visual> {
        self.validate()?;
        let grow = InterpolateOpts::clamp_right().with_ease(Ease::OutQuad);
        let fade = InterpolateOpts::clamp_right();

        let mut visual = Visual::with_background(Fill::RadialGradient {
            inner: Color::rgb(0x1a1a2e),
            outer: NIGHT,
        });
        for i in 0..u64::from(self.count) {
            let mut rng = Rng64::keyed(ctx.seed, "explosion", i);
            let size = rng.next_range(20.0, 50.0);
            let color = self.colors[rng.next_index(self.colors.len())];
            let speed = rng.next_range(0.5, 2.0);
            let angle = rng.next_f64_01() * TAU;
            let delay = (rng.next_f64_01() * f64::from(self.max_delay_frames)).floor();

            let active = (ctx.frame.0 as f64 - delay).max(0.0);
            let progress = interpolate(active, &[0.0, 100.0], &[0.8, 1.0], grow)?;
            let opacity = interpolate(
                active,
                &[0.0, 20.0, 80.0, 100.0],
                &[0.8, 0.6, 0.4, 0.0],
                fade,
            )?;

            // Distance is in percent of the canvas, measured from the center.
            let distance = speed * progress * 100.0;
            let fx = 0.5 + angle.cos() * distance / 100.0;
            let fy = 0.5 + angle.sin() * distance / 100.0;
            visual.push(
                Element::new(
                    format!("particle/{i}"),
                    ElementKind::Circle {
                        radius: size / 2.0,
                        fill: Fill::solid(color),
                        blur: 8.0,
                    },
                    ctx.canvas.at_fraction(fx, fy),
                )
                .with_opacity(opacity)
                .with_scale(progress),
            );
        }
        Ok(visual)
    }
}

/// Shell commands scrolling down behind a dimming overlay.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TerminalRainProps {
    /// Number of falling lines.
    pub count: u32,
    /// Commands to pick from.
    pub commands: Vec<String>,
    /// Text color (default `#2bbc8a`).
    pub color: Color,
}

impl Default for TerminalRainProps {
    fn default() -> Self {
        Self {
            count: 25,
            commands: [
                "npm install",
                "git commit -m 'feat: implement map'",
                "yarn build",
                "docker compose up",
                "kubectl get pods",
                "ssh root@server",
                "curl api/v1/data",
                "webpack --mode production",
                "eslint --fix src/",
                "jest --coverage",
                "prettier --write .",
                "tsc --watch",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            color: Color::rgb(0x2bbc8a),
        }
    }
}

/// Vertical position (percent) and opacity of a falling command.
pub(crate) fn rain_drop(start_pct: f64, speed: f64, frame: u64) -> (f64, f64) {
    let y = (start_pct + frame as f64 * speed) % 120.0 - 20.0;
    let opacity = ((50.0 - (y - 50.0).abs()) / 50.0).clamp(0.1, 0.15);
    (y, opacity)
}

impl Component for TerminalRainProps {
    fn validate(&self) -> FramecastResult<()> {
        if self.commands.is_empty() {
            return Err(FramecastError::validation(
                "terminal_rain.commands must be non-empty",
            ));
        }
        Ok(())
    }

    fn render(&self, ctx: &RenderCtx) -> FramecastResult<Visual> {
        self.validate()?;
        let mut visual = Visual::with_background(Fill::solid(NIGHT));
        for i in 0..u64::from(self.count) {
            let mut rng = Rng64::keyed(ctx.seed, "terminal", i);
            let x = rng.next_range(0.0, 100.0);
            let start = rng.next_range(0.0, 100.0);
            let speed = rng.next_range(0.2, 0.5);
            let (y, opacity) = rain_drop(start, speed, ctx.frame.0);

            let cmd = &self.commands[(i as usize) % self.commands.len()];
            visual.push(
                Element::new(
                    format!("command/{i}"),
                    ElementKind::Text {
                        text: format!("$ {cmd}"),
                        font_size: 19.2,
                        color: self.color,
                    },
                    ctx.canvas.at_fraction(x / 100.0, y / 100.0),
                )
                .with_opacity(opacity),
            );
        }
        visual.push(Element::new(
            "overlay",
            ElementKind::Rect {
                size: Vec2::new(f64::from(ctx.canvas.width), f64::from(ctx.canvas.height)),
                fill: Fill::RadialGradient {
                    inner: NIGHT.with_opacity(0.75),
                    outer: NIGHT.with_opacity(0.85),
                },
                corner_radius: 0.0,
            },
            ctx.canvas.center(),
        ));
        Ok(visual)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/backgrounds.rs"]
mod tests;
