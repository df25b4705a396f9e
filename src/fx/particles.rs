use crate::foundation::core::{Canvas, FrameIndex, Vec2};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::fx::noise::noise2d;
use crate::fx::random::random_salted;

/// Parameters of the noise-driven wobble applied to particles.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DriftParams {
    /// Peak displacement on each axis, in whatever unit the caller scales it to.
    pub amplitude: f64,
    /// Noise lattice cells travelled per frame.
    pub speed: f64,
}

impl Default for DriftParams {
    fn default() -> Self {
        Self {
            amplitude: 8.0,
            speed: 0.02,
        }
    }
}

impl DriftParams {
    /// Reject negative or non-finite parameters.
    pub fn validate(&self) -> FramecastResult<()> {
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(FramecastError::validation(
                "drift amplitude must be finite and >= 0",
            ));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(FramecastError::validation(
                "drift speed must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Smooth displacement of particle `index` at `frame`.
///
/// Each particle walks its own row of the noise field, so neighbours move
/// independently while every particle's path stays continuous in time.
pub fn drift(seed: u64, index: u64, frame: FrameIndex, params: &DriftParams) -> Vec2 {
    let t = frame.0 as f64 * params.speed;
    let row = index as f64 * 7.0;
    Vec2::new(
        params.amplitude * noise2d(seed, "drift.x", t, row),
        params.amplitude * noise2d(seed, "drift.y", t, row + 3.5),
    )
}

/// Stable pseudo-random position of particle `index` on the canvas.
pub fn scatter(seed: u64, channel: &str, index: u64, canvas: Canvas) -> Vec2 {
    canvas.at_fraction(
        random_salted(seed, channel, index, 0),
        random_salted(seed, channel, index, 1),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/fx/particles.rs"]
mod tests;
