use crate::animation::ease::Ease;
use crate::animation::spring::{Spring, SpringConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::foundation::math::lerp;

/// How an [`AnimationCurve`] moves from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveModel {
    /// Damped spring; may overshoot when underdamped.
    Spring {
        /// Physical constants.
        #[serde(default)]
        config: SpringConfig,
        /// Optional settle duration override.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration_frames: Option<u64>,
    },
    /// Clamped interpolation over a fixed number of frames.
    Linear {
        /// Frames from start to rest; must be > 0.
        duration_frames: u64,
        /// Easing applied to normalized progress.
        #[serde(default)]
        ease: Ease,
    },
}

/// A pure function of frame producing one animated value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationCurve {
    /// Frame at which the animation is released.
    #[serde(default = "zero_frame")]
    pub start: FrameIndex,
    /// Motion model.
    pub model: CurveModel,
    /// Value at and before `start`.
    pub from: f64,
    /// Rest value.
    pub to: f64,
}

fn zero_frame() -> FrameIndex {
    FrameIndex(0)
}

impl AnimationCurve {
    /// Spring curve released at `start`.
    pub fn spring(start: FrameIndex, config: SpringConfig, from: f64, to: f64) -> Self {
        Self {
            start,
            model: CurveModel::Spring {
                config,
                duration_frames: None,
            },
            from,
            to,
        }
    }

    /// Linear (optionally eased) curve released at `start`.
    pub fn linear(start: FrameIndex, duration_frames: u64, from: f64, to: f64) -> Self {
        Self {
            start,
            model: CurveModel::Linear {
                duration_frames,
                ease: Ease::Linear,
            },
            from,
            to,
        }
    }

    /// Reject invalid physical constants, zero linear durations and non-finite endpoints.
    pub fn validate(&self) -> FramecastResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(FramecastError::animation("curve from/to must be finite"));
        }
        match self.model {
            CurveModel::Spring {
                config,
                duration_frames,
            } => self.as_spring(config, duration_frames).validate(),
            CurveModel::Linear {
                duration_frames, ..
            } => {
                if duration_frames == 0 {
                    return Err(FramecastError::animation(
                        "linear curve duration_frames must be > 0",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Normalized progress at `frame`; `0` at or before `start`.
    pub fn progress(&self, frame: FrameIndex, fps: Fps) -> f64 {
        match self.model {
            CurveModel::Spring {
                config,
                duration_frames,
            } => self
                .as_spring(config, duration_frames)
                .progress(frame, self.start, fps),
            CurveModel::Linear {
                duration_frames,
                ease,
            } => {
                if duration_frames == 0 {
                    return if frame.0 > self.start.0 { 1.0 } else { 0.0 };
                }
                let t = frame.since(self.start) as f64 / duration_frames as f64;
                ease.apply(t)
            }
        }
    }

    /// Value at `frame`.
    pub fn value(&self, frame: FrameIndex, fps: Fps) -> f64 {
        lerp(self.from, self.to, self.progress(frame, fps))
    }

    fn as_spring(&self, config: SpringConfig, duration_frames: Option<u64>) -> Spring {
        Spring {
            config,
            from: self.from,
            to: self.to,
            duration_frames,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
