use crate::animation::ease::Ease;
use crate::animation::spring::{Spring, SpringConfig};
use crate::foundation::core::{FrameIndex, Fps};
use crate::foundation::error::{FramecastError, FramecastResult};

/// How the presentation progress of a transition advances.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionTiming {
    /// Eased `local / T`.
    Linear(Ease),
    /// Spring stretched to settle at the end of the window.
    Spring(SpringConfig),
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self::Linear(Ease::Linear)
    }
}

impl TransitionTiming {
    /// Reject invalid spring constants.
    pub fn validate(&self) -> FramecastResult<()> {
        match self {
            Self::Linear(_) => Ok(()),
            Self::Spring(cfg) => cfg.validate(),
        }
    }

    /// Presentation progress `local_frame` frames into a `transition_frames` window.
    pub fn progress(&self, local_frame: FrameIndex, transition_frames: u64, fps: Fps) -> f64 {
        if transition_frames == 0 {
            return 1.0;
        }
        match *self {
            Self::Linear(ease) => ease.apply(local_frame.0 as f64 / transition_frames as f64),
            Self::Spring(cfg) => Spring::unit(cfg)
                .stretched_to(transition_frames)
                .progress(local_frame, FrameIndex(0), fps),
        }
    }
}

/// Transition as authored in composition JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionSpec {
    /// `crossfade` (or `fade`), `slide` or `wipe`; case-insensitive.
    pub kind: String,
    /// Overlap with the next scene; must be > 0.
    pub duration_frames: u64,
    /// Shape of the presentation progress (default linear).
    #[serde(default)]
    pub timing: TransitionTiming,
    /// Kind-specific options such as `dir` and `soft_edge`; `null` or an object.
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Travel direction of a slide or wipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards the right edge.
    LeftToRight,
    /// Towards the left edge.
    RightToLeft,
    /// Downwards.
    TopToBottom,
    /// Upwards.
    BottomToTop,
}

/// Parsed presentation of a transition, handed to the compositor.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransitionKind {
    /// Opacity cross-blend.
    Crossfade,
    /// The entering scene pushes the exiting one out.
    Slide {
        /// Travel direction.
        dir: Direction,
    },
    /// A moving edge reveals the entering scene.
    Wipe {
        /// Travel direction of the edge.
        dir: Direction,
        /// Feather width as a fraction of the canvas, `0..=1`.
        soft_edge: f64,
    },
}

impl TransitionSpec {
    /// Linear crossfade lasting `duration_frames`.
    pub fn crossfade(duration_frames: u64) -> Self {
        Self {
            kind: "crossfade".to_string(),
            duration_frames,
            timing: TransitionTiming::default(),
            params: serde_json::Value::Null,
        }
    }

    /// Replace the timing.
    pub fn with_timing(mut self, timing: TransitionTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Validate timing and parameters.
    pub fn validate(&self) -> FramecastResult<()> {
        if self.duration_frames == 0 {
            return Err(FramecastError::validation(
                "transition duration_frames must be > 0",
            ));
        }
        self.timing.validate()?;
        parse_transition(self).map(|_| ())
    }
}

/// Parse the presentation kind and its params.
///
/// Unknown kinds, non-object params and unknown directions are validation errors.
/// Directions default to left-to-right and accept short aliases such as `ltr`.
pub fn parse_transition(spec: &TransitionSpec) -> FramecastResult<TransitionKind> {
    let kind = spec.kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(FramecastError::validation("transition kind must be non-empty"));
    }

    let params = if spec.params.is_null() {
        None
    } else {
        Some(spec.params.as_object().ok_or_else(|| {
            FramecastError::validation(format!("{kind} params must be an object"))
        })?)
    };
    let dir = || -> FramecastResult<Direction> {
        match params.and_then(|p| p.get("dir")).and_then(|v| v.as_str()) {
            None => Ok(Direction::LeftToRight),
            Some(s) => parse_direction(s)
                .ok_or_else(|| FramecastError::validation(format!("unknown {kind}.dir '{s}'"))),
        }
    };

    match kind.as_str() {
        "crossfade" | "fade" => Ok(TransitionKind::Crossfade),
        "slide" => Ok(TransitionKind::Slide { dir: dir()? }),
        "wipe" => {
            let soft_edge = match params
                .and_then(|p| p.get("soft_edge"))
                .and_then(|v| v.as_f64())
            {
                None => 0.0,
                Some(v) if !v.is_finite() => {
                    return Err(FramecastError::validation(
                        "wipe.soft_edge must be finite when set",
                    ));
                }
                Some(v) => v.clamp(0.0, 1.0),
            };
            Ok(TransitionKind::Wipe {
                dir: dir()?,
                soft_edge,
            })
        }
        _ => Err(FramecastError::validation(format!(
            "unknown transition kind '{kind}'"
        ))),
    }
}

fn parse_direction(s: &str) -> Option<Direction> {
    let d = match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "left_to_right" | "lefttoright" | "ltr" | "from_left" => Direction::LeftToRight,
        "right_to_left" | "righttoleft" | "rtl" | "from_right" => Direction::RightToLeft,
        "top_to_bottom" | "toptobottom" | "ttb" | "from_top" => Direction::TopToBottom,
        "bottom_to_top" | "bottomtotop" | "btt" | "from_bottom" => Direction::BottomToTop,
        _ => return None,
    };
    Some(d)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/transitions.rs"]
mod tests;
