use crate::animation::ease::Ease;
use crate::foundation::error::{FramecastError, FramecastResult};

/// Behavior outside the input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Extrapolate {
    /// Continue the outermost segment's slope.
    #[default]
    Extend,
    /// Hold the outermost output value.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

/// Options for [`interpolate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOpts {
    /// Behavior below the first input stop.
    #[serde(default)]
    pub extrapolate_left: Extrapolate,
    /// Behavior above the last input stop.
    #[serde(default)]
    pub extrapolate_right: Extrapolate,
    /// Easing applied inside each segment.
    #[serde(default)]
    pub ease: Ease,
}

impl InterpolateOpts {
    /// Clamp on both sides.
    pub fn clamped() -> Self {
        Self {
            extrapolate_left: Extrapolate::Clamp,
            extrapolate_right: Extrapolate::Clamp,
            ease: Ease::Linear,
        }
    }

    /// Extend on the left, clamp on the right.
    pub fn clamp_right() -> Self {
        Self {
            extrapolate_right: Extrapolate::Clamp,
            ..Self::default()
        }
    }

    /// Replace the easing.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Map `input` through a piecewise-linear function defined by matching stops.
///
/// `input_range` must be strictly increasing and the same length as `output_range`
/// (at least two stops). Easing only shapes the interior of a segment; extrapolated
/// values continue linearly.
pub fn interpolate(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
    opts: InterpolateOpts,
) -> FramecastResult<f64> {
    validate_ranges(input_range, output_range)?;

    let mut seg = 1;
    while seg < input_range.len() - 1 && input_range[seg] < input {
        seg += 1;
    }

    let (in_min, in_max) = (input_range[seg - 1], input_range[seg]);
    let (out_min, out_max) = (output_range[seg - 1], output_range[seg]);

    let mut x = input;
    if x < in_min {
        match opts.extrapolate_left {
            Extrapolate::Identity => return Ok(x),
            Extrapolate::Clamp => x = in_min,
            Extrapolate::Extend => {}
        }
    }
    if x > in_max {
        match opts.extrapolate_right {
            Extrapolate::Identity => return Ok(x),
            Extrapolate::Clamp => x = in_max,
            Extrapolate::Extend => {}
        }
    }

    if out_min == out_max {
        return Ok(out_min);
    }

    let mut t = (x - in_min) / (in_max - in_min);
    if (0.0..=1.0).contains(&t) {
        t = opts.ease.apply(t);
    }
    Ok(out_min + (out_max - out_min) * t)
}

fn validate_ranges(input_range: &[f64], output_range: &[f64]) -> FramecastResult<()> {
    if input_range.len() != output_range.len() {
        return Err(FramecastError::animation(format!(
            "interpolate input range has {} stops but output range has {}",
            input_range.len(),
            output_range.len()
        )));
    }
    if input_range.len() < 2 {
        return Err(FramecastError::animation(
            "interpolate needs at least two stops",
        ));
    }
    if input_range
        .iter()
        .chain(output_range.iter())
        .any(|v| !v.is_finite())
    {
        return Err(FramecastError::animation(
            "interpolate stops must be finite",
        ));
    }
    if !input_range.windows(2).all(|w| w[0] < w[1]) {
        return Err(FramecastError::animation(
            "interpolate input range must be strictly increasing",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
