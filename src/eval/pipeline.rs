use rayon::prelude::*;

use crate::composition::model::Composition;
use crate::eval::evaluator::{FrameDescription, eval_with_timeline};
use crate::eval::fingerprint::{FrameFingerprint, fingerprint_frame};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{FramecastError, FramecastResult};

/// How [`eval_frames`] spreads work.
#[derive(Clone, Debug)]
pub struct EvalThreading {
    /// Evaluate on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Frames handed to the pool at a time.
    pub chunk_size: usize,
    /// Worker count; rayon's default when `None`.
    pub threads: Option<usize>,
}

impl Default for EvalThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Describe every frame in `range`, in order.
///
/// The parallel path evaluates the same pure function per frame and therefore
/// yields exactly what the sequential path does.
#[tracing::instrument(skip(comp, threading), fields(comp = %comp.id))]
pub fn eval_frames(
    comp: &Composition,
    range: FrameRange,
    threading: &EvalThreading,
) -> FramecastResult<Vec<FrameDescription>> {
    comp.validate()?;
    let timeline = comp.timeline()?;
    if range.end.0 > timeline.span() {
        return Err(FramecastError::evaluation(format!(
            "range end {} exceeds composition duration {}",
            range.end.0,
            timeline.span()
        )));
    }

    if !threading.parallel {
        return (range.start.0..range.end.0)
            .map(|f| eval_with_timeline(comp, &timeline, FrameIndex(f)))
            .collect();
    }

    let pool = build_thread_pool(threading.threads)?;
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    tracing::debug!(
        frames = range.len_frames(),
        threads = pool.current_num_threads(),
        chunk_size,
        "parallel frame evaluation"
    );

    let mut out = Vec::with_capacity(range.len_frames() as usize);
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let frames = pool.install(|| {
            (chunk_start..chunk_end)
                .into_par_iter()
                .map(|f| eval_with_timeline(comp, &timeline, FrameIndex(f)))
                .collect::<FramecastResult<Vec<_>>>()
        })?;
        out.extend(frames);
        chunk_start = chunk_end;
    }
    Ok(out)
}

/// Fingerprint every frame in `range`.
pub fn digest_frames(
    comp: &Composition,
    range: FrameRange,
    threading: &EvalThreading,
) -> FramecastResult<Vec<FrameFingerprint>> {
    eval_frames(comp, range, threading)?
        .iter()
        .map(fingerprint_frame)
        .collect()
}

fn build_thread_pool(threads: Option<usize>) -> FramecastResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FramecastError::validation(
            "eval threading 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| FramecastError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 { 1 } else { chunk_size as u64 }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/pipeline.rs"]
mod tests;
