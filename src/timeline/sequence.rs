use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FramecastError, FramecastResult};

/// Length of one segment and of the transition into the following segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SegmentTiming {
    /// Frames the segment is visible for, transitions included.
    pub duration_frames: u64,
    /// Overlap with the next segment. Must be zero on the last segment.
    #[serde(default)]
    pub transition_frames: u64,
}

impl SegmentTiming {
    /// Segment with no outgoing transition.
    pub fn cut(duration_frames: u64) -> Self {
        Self {
            duration_frames,
            transition_frames: 0,
        }
    }

    /// Segment that overlaps the next one for `transition_frames`.
    pub fn with_transition(duration_frames: u64, transition_frames: u64) -> Self {
        Self {
            duration_frames,
            transition_frames,
        }
    }
}

/// Absolute placement of a segment on the global timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SegmentWindow {
    /// Position in the segment list.
    pub index: usize,
    /// First global frame of the segment.
    pub start: FrameIndex,
    /// Exclusive.
    pub end: FrameIndex,
    /// Overlap with the following segment.
    pub transition_frames: u64,
}

impl SegmentWindow {
    /// `end - start`.
    pub fn duration_frames(&self) -> u64 {
        self.end.0 - self.start.0
    }
}

/// The segment that owns a frame, with its local offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SegmentView {
    /// Segment index.
    pub index: usize,
    /// `frame - start` of that segment.
    pub local_frame: FrameIndex,
}

/// The segment fading in during a transition window.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EnteringSegment {
    /// Segment index; always the primary's index plus one.
    pub index: usize,
    /// Frames since the entering segment started, which is also the transition offset.
    pub local_frame: FrameIndex,
    /// Length of the transition window.
    pub transition_frames: u64,
    /// Raw blend weight `local_frame / transition_frames` in `[0, 1)`.
    pub blend: f64,
}

/// Everything active at one global frame: at most two segments.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ActiveSegments {
    /// Segment that owns the frame; the exiting one during a transition.
    pub primary: SegmentView,
    /// Next segment while the primary's outgoing transition runs.
    pub entering: Option<EnteringSegment>,
}

/// Back-to-back segments with optional overlapping transitions.
///
/// Segment `i + 1` starts at `start[i] + duration[i] - transition[i]`. Segment
/// ends never decrease, so the owner of a frame is the first segment whose end
/// lies after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeline {
    windows: Vec<SegmentWindow>,
    span: u64,
}

impl Timeline {
    /// Lay out `segments`, rejecting transitions that do not fit.
    pub fn new(segments: &[SegmentTiming]) -> FramecastResult<Self> {
        let n = segments.len();
        for (i, seg) in segments.iter().enumerate() {
            let t = seg.transition_frames;
            if t == 0 {
                continue;
            }
            if i + 1 == n {
                return Err(FramecastError::validation(format!(
                    "segment {i} is last and cannot carry an outgoing transition"
                )));
            }
            if t > seg.duration_frames {
                return Err(FramecastError::validation(format!(
                    "transition after segment {i} ({t} frames) exceeds its duration ({})",
                    seg.duration_frames
                )));
            }
            let next = segments[i + 1].duration_frames;
            if t > next {
                return Err(FramecastError::validation(format!(
                    "transition after segment {i} ({t} frames) exceeds the next segment's duration ({next})"
                )));
            }
        }
        for i in 1..n {
            let incoming = segments[i - 1].transition_frames;
            let outgoing = segments[i].transition_frames;
            if incoming.saturating_add(outgoing) > segments[i].duration_frames {
                return Err(FramecastError::validation(format!(
                    "segment {i}: incoming ({incoming}) and outgoing ({outgoing}) transitions overlap inside {} frames",
                    segments[i].duration_frames
                )));
            }
        }

        let mut windows = Vec::with_capacity(n);
        let mut start = 0u64;
        for (index, seg) in segments.iter().enumerate() {
            let end = start.checked_add(seg.duration_frames).ok_or_else(|| {
                FramecastError::validation("timeline span overflows u64 frames")
            })?;
            windows.push(SegmentWindow {
                index,
                start: FrameIndex(start),
                end: FrameIndex(end),
                transition_frames: seg.transition_frames,
            });
            start = end - seg.transition_frames;
        }
        let span = windows.last().map(|w| w.end.0).unwrap_or(0);

        tracing::debug!(segments = n, span, "timeline laid out");
        Ok(Self { windows, span })
    }

    /// Total frames covered; frames `>= span` are out of domain.
    pub fn span(&self) -> u64 {
        self.span
    }

    /// Number of segments, zero-length ones included.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// `true` when there are no segments.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Placement of every segment, in order.
    pub fn windows(&self) -> &[SegmentWindow] {
        &self.windows
    }

    /// Resolve the owning segment and, inside a transition, the entering one.
    pub fn resolve(&self, frame: FrameIndex) -> FramecastResult<ActiveSegments> {
        let f = frame.0;
        let i = self.windows.partition_point(|w| w.end.0 <= f);
        let Some(cur) = self.windows.get(i) else {
            return Err(FramecastError::evaluation(format!(
                "frame {f} is outside the timeline (span {})",
                self.span
            )));
        };

        let primary = SegmentView {
            index: i,
            local_frame: FrameIndex(f - cur.start.0),
        };

        let entering = match self.windows.get(i + 1) {
            Some(next) if cur.transition_frames > 0 && f >= next.start.0 => {
                let local = f - next.start.0;
                Some(EnteringSegment {
                    index: i + 1,
                    local_frame: FrameIndex(local),
                    transition_frames: cur.transition_frames,
                    blend: local as f64 / cur.transition_frames as f64,
                })
            }
            _ => None,
        };

        Ok(ActiveSegments { primary, entering })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequence.rs"]
mod tests;
