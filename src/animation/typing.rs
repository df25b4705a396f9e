use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FramecastError, FramecastResult};

/// Typewriter reveal keyed to elapsed frames.
///
/// The character budget is `floor((frame - start) * chars_per_frame)`. Lines are
/// revealed in order; each line spends its length plus one unit for the line
/// separator, and the separator only appears once it has been paid for. The
/// result at any frame is therefore a prefix of the text at every later frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TypeOn {
    /// Frame at which typing begins.
    pub start: FrameIndex,
    /// Characters revealed per frame; may be fractional.
    pub chars_per_frame: f64,
}

impl TypeOn {
    /// Build a reveal, rejecting non-finite or non-positive speeds.
    pub fn new(start: FrameIndex, chars_per_frame: f64) -> FramecastResult<Self> {
        let t = Self {
            start,
            chars_per_frame,
        };
        t.validate()?;
        Ok(t)
    }

    /// Reject non-finite or non-positive speeds.
    pub fn validate(&self) -> FramecastResult<()> {
        if !self.chars_per_frame.is_finite() || self.chars_per_frame <= 0.0 {
            return Err(FramecastError::validation(format!(
                "typing chars_per_frame must be finite and > 0 (got {})",
                self.chars_per_frame
            )));
        }
        Ok(())
    }

    /// Whole characters (separators included) typed by `frame`.
    pub fn budget(&self, frame: FrameIndex) -> usize {
        let typed = frame.since(self.start) as f64 * self.chars_per_frame;
        typed.floor().max(0.0) as usize
    }

    /// Lines reached by `frame`, each cut to its revealed prefix.
    pub fn visible_lines<'a>(&self, frame: FrameIndex, text: &'a str) -> Vec<&'a str> {
        let mut remaining = self.budget(frame);
        let mut out = Vec::new();
        for line in text.split('\n') {
            let len = line.chars().count();
            out.push(prefix_chars(line, len.min(remaining)));
            if remaining <= len {
                break;
            }
            remaining -= len + 1;
        }
        out
    }

    /// Revealed text at `frame`.
    pub fn visible_text(&self, frame: FrameIndex, text: &str) -> String {
        self.visible_lines(frame, text).join("\n")
    }

    /// Frames after `start` until the whole text is visible.
    ///
    /// This is the first frame whose [`budget`](Self::budget) covers every
    /// character, so it agrees with [`visible_text`](Self::visible_text) even when
    /// `chars_per_frame` is not exactly representable.
    pub fn frames_to_complete(&self, text: &str) -> u64 {
        let total = text.chars().count();
        let at = |n: u64| self.budget(FrameIndex(self.start.0.saturating_add(n)));
        let mut n = (total as f64 / self.chars_per_frame).ceil() as u64;
        while at(n) < total {
            n += 1;
        }
        while n > 0 && at(n - 1) >= total {
            n -= 1;
        }
        n
    }
}

/// Revealed prefix of `full_text` at `frame` for typing that began at `start`.
pub fn visible_text(
    frame: FrameIndex,
    start: FrameIndex,
    chars_per_frame: f64,
    full_text: &str,
) -> FramecastResult<String> {
    Ok(TypeOn::new(start, chars_per_frame)?.visible_text(frame, full_text))
}

fn prefix_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/typing.rs"]
mod tests;
