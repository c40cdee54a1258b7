//! PNG format support.
//!
//! Decodes 8- and 16-bit PNGs into the RGBA float buffer (grayscale
//! expanded, 16-bit reduced, alpha synthesized where absent) and encodes
//! graded buffers back out as 8-bit RGBA.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use lutforge_core::ImageBuf;

use crate::error::{IoError, IoResult};

/// Reads a PNG file into an RGBA buffer.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageBuf> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::Decode(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::Decode("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::Decode(e.to_string()))?;

    let width = info.width;
    let height = info.height;
    let bytes = &buf[..info.buffer_size()];

    let rgba: Vec<u8> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgba, png::BitDepth::Eight) => bytes.to_vec(),
        (png::ColorType::Rgb, png::BitDepth::Eight) => {
            bytes.chunks_exact(3).flat_map(|px| [px[0], px[1], px[2], 255]).collect()
        }
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            bytes.iter().flat_map(|&g| [g, g, g, 255]).collect()
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => {
            bytes.chunks_exact(2).flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]]).collect()
        }
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => {
            wide_to_narrow(bytes).chunks_exact(4).flat_map(|px| [px[0], px[1], px[2], px[3]]).collect()
        }
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => {
            wide_to_narrow(bytes).chunks_exact(3).flat_map(|px| [px[0], px[1], px[2], 255]).collect()
        }
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!("{color_type:?} {bit_depth:?}")));
        }
    };

    ImageBuf::from_rgba8(width, height, &rgba).map_err(|e| IoError::Invalid(e.to_string()))
}

/// Reduces big-endian 16-bit samples to 8 bits (high byte).
fn wide_to_narrow(bytes: &[u8]) -> Vec<u8> {
    bytes.chunks_exact(2).map(|pair| pair[0]).collect()
}

/// Writes an RGBA buffer to an 8-bit RGBA PNG.
pub fn write<P: AsRef<Path>>(path: P, image: &ImageBuf) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::Encode(e.to_string()))?;
    writer
        .write_image_data(&image.to_rgba8())
        .map_err(|e| IoError::Encode(e.to_string()))?;
    Ok(())
}
