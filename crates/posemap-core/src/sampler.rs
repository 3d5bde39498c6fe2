use std::ops::Range;

use rand::Rng;

use crate::error::{PosemapError, Result};

/// A contiguous run of frame indices `[start, start + len)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameWindow {
    pub start: usize,
    pub len: usize,
}

impl FrameWindow {
    pub fn frames(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// Draw a window of `seq_len` frames uniformly from a video of `frame_count`
/// frames. Every start in `[0, frame_count - seq_len]` is equally likely.
pub fn sample_window<R: Rng>(
    frame_count: usize,
    seq_len: usize,
    rng: &mut R,
) -> Result<FrameWindow> {
    if seq_len == 0 || frame_count < seq_len {
        return Err(PosemapError::InvalidRecord(format!(
            "video has {frame_count} frames, need at least {seq_len}"
        )));
    }
    let start = rng.gen_range(0..=frame_count - seq_len);
    Ok(FrameWindow {
        start,
        len: seq_len,
    })
}
