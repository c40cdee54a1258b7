//! Owned RGBA float image buffer.
//!
//! [`ImageBuf`] is the unit of exchange at the ingestion boundary: decoders
//! produce one, the grade engine transforms it, encoders consume it. Data
//! is interleaved RGBA, 4 floats per pixel, row-major from the top-left.

use crate::error::{CoreError, CoreResult};
use crate::grade::ColorGrade;
use crate::pixel::{f32_to_u8, u8_to_f32};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Interleaved RGBA f32 image buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuf {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl ImageBuf {
    /// Channels per pixel. Alpha rides along untouched by grading.
    pub const CHANNELS: usize = 4;

    /// Creates a black, fully opaque buffer.
    pub fn new(width: u32, height: u32) -> CoreResult<Self> {
        Self::check_dims(width, height)?;
        let pixels = width as usize * height as usize;
        let mut data = vec![0.0; pixels * Self::CHANNELS];
        for px in data.chunks_exact_mut(Self::CHANNELS) {
            px[3] = 1.0;
        }
        Ok(Self { width, height, data })
    }

    /// Wraps an existing float buffer. Length must be `w * h * 4`.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> CoreResult<Self> {
        Self::check_dims(width, height)?;
        let expected = width as usize * height as usize * Self::CHANNELS;
        if data.len() != expected {
            return Err(CoreError::BufferSize { expected, actual: data.len() });
        }
        Ok(Self { width, height, data })
    }

    /// Builds a buffer from interleaved RGBA bytes (the 8-bit boundary).
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> CoreResult<Self> {
        Self::check_dims(width, height)?;
        let expected = width as usize * height as usize * Self::CHANNELS;
        if bytes.len() != expected {
            return Err(CoreError::BufferSize { expected, actual: bytes.len() });
        }
        let data = bytes.iter().map(|&b| u8_to_f32(b)).collect();
        Ok(Self { width, height, data })
    }

    /// Converts back to interleaved RGBA bytes, clamping each channel.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data.iter().map(|&v| f32_to_u8(v)).collect()
    }

    fn check_dims(width: u32, height: u32) -> CoreResult<()> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions(format!("{width}x{height}")));
        }
        Ok(())
    }

    /// Buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Longest edge in pixels.
    #[inline]
    pub fn long_edge(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Raw interleaved RGBA data.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable raw interleaved RGBA data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// RGB of the pixel at (x, y).
    #[inline]
    pub fn rgb_at(&self, x: u32, y: u32) -> [f32; 3] {
        let i = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Applies a grade to every pixel in place. Alpha is untouched.
    ///
    /// Identity grades return immediately.
    pub fn apply_grade<G: ColorGrade>(&mut self, grade: &G) {
        if grade.is_identity() {
            return;
        }
        for px in self.data.chunks_exact_mut(Self::CHANNELS) {
            let out = grade.grade([px[0], px[1], px[2]]);
            px[0] = out[0];
            px[1] = out[1];
            px[2] = out[2];
        }
    }

    /// Parallel [`apply_grade`](Self::apply_grade), one rayon job per row.
    #[cfg(feature = "parallel")]
    pub fn apply_grade_par<G: ColorGrade + Sync>(&mut self, grade: &G) {
        if grade.is_identity() {
            return;
        }
        let row_len = self.width as usize * Self::CHANNELS;
        self.data.par_chunks_exact_mut(row_len).for_each(|row| {
            for px in row.chunks_exact_mut(Self::CHANNELS) {
                let out = grade.grade([px[0], px[1], px[2]]);
                px[0] = out[0];
                px[1] = out[1];
                px[2] = out[2];
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubler;

    impl ColorGrade for Doubler {
        fn grade(&self, rgb: [f32; 3]) -> [f32; 3] {
            [
                (rgb[0] * 2.0).min(1.0),
                (rgb[1] * 2.0).min(1.0),
                (rgb[2] * 2.0).min(1.0),
            ]
        }
    }

    struct Identity;

    impl ColorGrade for Identity {
        fn grade(&self, rgb: [f32; 3]) -> [f32; 3] {
            rgb
        }

        fn is_identity(&self) -> bool {
            true
        }
    }

    #[test]
    fn rejects_mismatched_buffer() {
        assert!(ImageBuf::from_rgba8(2, 2, &[0u8; 15]).is_err());
        assert!(ImageBuf::from_rgba8(2, 2, &[0u8; 16]).is_ok());
        assert!(ImageBuf::new(0, 4).is_err());
    }

    #[test]
    fn grade_leaves_alpha_alone() {
        let mut img = ImageBuf::from_data(1, 1, vec![0.25, 0.25, 0.25, 0.5]).unwrap();
        img.apply_grade(&Doubler);
        assert_eq!(img.data(), &[0.5, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn identity_grade_is_a_no_op() {
        let mut img = ImageBuf::from_data(1, 1, vec![0.1, 0.2, 0.3, 1.0]).unwrap();
        let before = img.clone();
        img.apply_grade(&Identity);
        assert_eq!(img, before);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_serial() {
        let data: Vec<f32> = (0..8 * 4 * 4).map(|i| (i % 16) as f32 / 16.0).collect();
        let mut a = ImageBuf::from_data(8, 4, data.clone()).unwrap();
        let mut b = ImageBuf::from_data(8, 4, data).unwrap();
        a.apply_grade(&Doubler);
        b.apply_grade_par(&Doubler);
        assert_eq!(a, b);
    }

    #[test]
    fn round_trips_bytes() {
        let bytes: Vec<u8> = (0..16).map(|i| (i * 16) as u8).collect();
        let img = ImageBuf::from_rgba8(2, 2, &bytes).unwrap();
        assert_eq!(img.to_rgba8(), bytes);
    }
}
