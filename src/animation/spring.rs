//! Damped harmonic oscillator easing.
//!
//! A spring starts at rest displaced by one unit from its target and is released
//! with zero velocity at the start frame. Progress is `1 - displacement`, so it
//! reads `0` at the start frame and settles at `1`. Underdamped configurations
//! overshoot past `1` before settling.

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::foundation::math::lerp;

/// Distance from rest under which a spring counts as settled.
pub const DEFAULT_REST_THRESHOLD: f64 = 0.005;

// One hour at the given frame rate.
const MAX_SETTLE_SECS: f64 = 3600.0;

/// Physical constants of a spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Damping coefficient; must be finite and > 0.
    pub damping: f64,
    /// Stiffness coefficient; must be finite and > 0.
    pub stiffness: f64,
    /// Mass; must be finite and > 0.
    pub mass: f64,
    /// Never let progress exceed `1`.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            stiffness: 100.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Build a config from the three physical constants.
    pub const fn new(damping: f64, stiffness: f64, mass: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass,
            overshoot_clamping: false,
        }
    }

    /// Default stiffness and mass with a custom damping.
    pub const fn with_damping(damping: f64) -> Self {
        Self::new(damping, 100.0, 1.0)
    }

    /// Reject non-finite or non-positive constants.
    pub fn validate(&self) -> FramecastResult<()> {
        for (name, v) in [
            ("damping", self.damping),
            ("stiffness", self.stiffness),
            ("mass", self.mass),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(FramecastError::animation(format!(
                    "spring {name} must be finite and > 0 (got {v})"
                )));
            }
        }
        Ok(())
    }

    /// `damping / (2 * sqrt(stiffness * mass))`; `1` is critical damping.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Normalized progress `t` seconds after release.
    pub fn progress_at_secs(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let p = 1.0 - self.displacement(t);
        if self.overshoot_clamping {
            p.min(1.0)
        } else {
            p
        }
    }

    // Closed-form displacement for x(0) = 1, x'(0) = 0.
    fn displacement(&self, t: f64) -> f64 {
        let mass = self.mass.max(f64::MIN_POSITIVE);
        let beta = self.damping.max(0.0) / (2.0 * mass);
        let omega0 = (self.stiffness.max(0.0) / mass).sqrt();
        let envelope = (-beta * t).exp();

        if (beta - omega0).abs() <= f64::from(f32::EPSILON) * omega0.max(1.0) {
            // Critically damped.
            envelope * (1.0 + beta * t)
        } else if beta < omega0 {
            let omega1 = (omega0 * omega0 - beta * beta).sqrt();
            envelope * ((omega1 * t).cos() + (beta / omega1) * (omega1 * t).sin())
        } else {
            // Overdamped, written as a sum of two decaying exponentials so large `t`
            // never evaluates `0 * inf`.
            let omega2 = (beta * beta - omega0 * omega0).sqrt();
            let r_slow = -beta + omega2;
            let r_fast = -beta - omega2;
            let c_slow = (beta + omega2) / (2.0 * omega2);
            let c_fast = 1.0 - c_slow;
            c_slow * (r_slow * t).exp() + c_fast * (r_fast * t).exp()
        }
    }

    // Upper bound on |displacement| for every time >= t.
    fn displacement_bound(&self, t: f64) -> f64 {
        let mass = self.mass.max(f64::MIN_POSITIVE);
        let beta = self.damping.max(0.0) / (2.0 * mass);
        let omega0 = (self.stiffness.max(0.0) / mass).sqrt();
        if beta < omega0 && (omega0 - beta) > f64::from(f32::EPSILON) * omega0.max(1.0) {
            let omega1 = (omega0 * omega0 - beta * beta).sqrt();
            (-beta * t).exp() * (1.0 + beta / omega1)
        } else {
            // Non-oscillating responses decay monotonically.
            self.displacement(t).abs()
        }
    }
}

/// A spring animation between two values.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spring {
    /// Physical constants.
    #[serde(default)]
    pub config: SpringConfig,
    /// Value at and before the start frame.
    #[serde(default)]
    pub from: f64,
    /// Rest value.
    #[serde(default = "one")]
    pub to: f64,
    /// Stretch (or compress) the spring so it settles in exactly this many frames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_frames: Option<u64>,
}

fn one() -> f64 {
    1.0
}

impl Spring {
    /// A `0 -> 1` spring with the given constants.
    pub fn unit(config: SpringConfig) -> Self {
        Self {
            config,
            from: 0.0,
            to: 1.0,
            duration_frames: None,
        }
    }

    /// Change the endpoint values.
    pub fn between(mut self, from: f64, to: f64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Stretch the spring to settle in `frames` frames.
    pub fn stretched_to(mut self, frames: u64) -> Self {
        self.duration_frames = Some(frames);
        self
    }

    /// Validate constants, endpoints and the optional stretch duration.
    pub fn validate(&self) -> FramecastResult<()> {
        self.config.validate()?;
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(FramecastError::animation(
                "spring from/to must be finite",
            ));
        }
        if self.duration_frames == Some(0) {
            return Err(FramecastError::animation(
                "spring duration_frames must be > 0 when set",
            ));
        }
        Ok(())
    }

    /// Normalized progress at `frame` for a spring released at `start`.
    pub fn progress(&self, frame: FrameIndex, start: FrameIndex, fps: Fps) -> f64 {
        let elapsed = frame.since(start);
        if elapsed == 0 {
            return 0.0;
        }
        let mut elapsed = elapsed as f64;
        if let Some(target) = self.duration_frames.filter(|d| *d > 0) {
            let natural = settle_frames(fps, &self.config, DEFAULT_REST_THRESHOLD) as f64;
            elapsed *= natural / target as f64;
        }
        self.config.progress_at_secs(elapsed * fps.frame_duration_secs())
    }

    /// Interpolated value at `frame`.
    pub fn value(&self, frame: FrameIndex, start: FrameIndex, fps: Fps) -> f64 {
        lerp(self.from, self.to, self.progress(frame, start, fps))
    }
}

/// `0 -> 1` spring progress for a spring released at `start`.
pub fn spring(frame: FrameIndex, start: FrameIndex, fps: Fps, config: SpringConfig) -> f64 {
    Spring::unit(config).progress(frame, start, fps)
}

/// Number of frames after which the spring stays within `threshold` of rest.
pub fn measure_spring(fps: Fps, config: &SpringConfig, threshold: f64) -> FramecastResult<u64> {
    config.validate()?;
    fps.validate()?;
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(FramecastError::animation(
            "spring rest threshold must be finite and > 0",
        ));
    }
    Ok(settle_frames(fps, config, threshold))
}

pub(crate) fn settle_frames(fps: Fps, config: &SpringConfig, threshold: f64) -> u64 {
    let dt = fps.frame_duration_secs();
    let max_frames = fps.secs_to_frames_floor(MAX_SETTLE_SECS).max(1);
    let at = |f: u64| f as f64 * dt;

    // The envelope only shrinks, so bisect for the first frame it drops under `threshold`.
    let (mut lo, mut hi) = (0u64, max_frames + 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if config.displacement_bound(at(mid)) < threshold {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    // Walk back to the last frame still outside the rest band.
    let mut f = lo;
    while f > 0 {
        f -= 1;
        if config.displacement(at(f)).abs() >= threshold {
            return f + 1;
        }
    }
    1
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
