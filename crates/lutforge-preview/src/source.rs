//! Capture sources.

use lutforge_core::{CoreResult, ImageBuf};

/// A frame producer: a camera, a video decoder, or a synthetic pattern.
///
/// `next_frame` returns a borrow of the source's own capture buffer; the
/// preview session copies it before grading so the source can overwrite
/// it on the next capture without tearing.
pub trait FrameSource {
    /// Captures and returns the next frame, or `None` when the source is
    /// exhausted or unavailable.
    fn next_frame(&mut self) -> Option<&ImageBuf>;

    /// Releases the underlying device. Called synchronously on stop;
    /// further `next_frame` calls must return `None`.
    fn release(&mut self) {}
}

/// Deterministic animated gradient for tests and the CLI preview command.
///
/// Each frame shifts the gradient phase, so consecutive frames differ and
/// motion is visible in dumped output.
#[derive(Debug)]
pub struct SyntheticSource {
    width: u32,
    height: u32,
    frame_index: u64,
    frame_limit: Option<u64>,
    released: bool,
    buffer: ImageBuf,
}

impl SyntheticSource {
    /// Creates an unbounded source of `width` x `height` frames.
    pub fn new(width: u32, height: u32) -> CoreResult<Self> {
        let buffer = ImageBuf::new(width, height)?;
        Ok(Self { width, height, frame_index: 0, frame_limit: None, released: false, buffer })
    }

    /// Caps the number of frames produced.
    pub fn with_frame_limit(mut self, limit: u64) -> Self {
        self.frame_limit = Some(limit);
        self
    }

    /// Frames produced so far.
    pub fn frames_produced(&self) -> u64 {
        self.frame_index
    }
}

impl FrameSource for SyntheticSource {
    fn next_frame(&mut self) -> Option<&ImageBuf> {
        if self.released {
            return None;
        }
        if self.frame_limit.is_some_and(|limit| self.frame_index >= limit) {
            return None;
        }
        let phase = (self.frame_index % 60) as f32 / 60.0;
        let w = self.width;
        let h = self.height;
        let data = self.buffer.data_mut();
        for y in 0..h {
            for x in 0..w {
                let i = (y as usize * w as usize + x as usize) * ImageBuf::CHANNELS;
                data[i] = ((x as f32 / w as f32) + phase).fract();
                data[i + 1] = y as f32 / h as f32;
                data[i + 2] = 1.0 - phase;
                data[i + 3] = 1.0;
            }
        }
        self.frame_index += 1;
        Some(&self.buffer)
    }

    fn release(&mut self) {
        self.released = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_advance_the_pattern() {
        let mut source = SyntheticSource::new(8, 8).unwrap();
        let first = source.next_frame().unwrap().clone();
        let second = source.next_frame().unwrap().clone();
        assert_ne!(first, second);
        assert_eq!(source.frames_produced(), 2);
    }

    #[test]
    fn limit_exhausts_the_source() {
        let mut source = SyntheticSource::new(4, 4).unwrap().with_frame_limit(1);
        assert!(source.next_frame().is_some());
        assert!(source.next_frame().is_none());
    }

    #[test]
    fn release_cuts_off_capture() {
        let mut source = SyntheticSource::new(4, 4).unwrap();
        assert!(source.next_frame().is_some());
        source.release();
        assert!(source.next_frame().is_none());
    }
}
