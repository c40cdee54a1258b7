//! JPEG format support.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lutforge_core::ImageBuf;
use lutforge_core::pixel::f32_to_u8;

use crate::error::{IoError, IoResult};

/// JPEG encode quality (0-100).
const QUALITY: u8 = 92;

/// Reads a JPEG file into an RGBA buffer (alpha synthesized at 1.0).
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageBuf> {
    let file = File::open(path.as_ref())?;
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));
    let pixels = decoder.decode().map_err(|e| IoError::Decode(e.to_string()))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::Decode("missing image info after decode".into()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let rgba: Vec<u8> = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => {
            pixels.chunks_exact(3).flat_map(|px| [px[0], px[1], px[2], 255]).collect()
        }
        jpeg_decoder::PixelFormat::L8 => pixels.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        other => {
            return Err(IoError::UnsupportedBitDepth(format!("{other:?}")));
        }
    };

    ImageBuf::from_rgba8(width, height, &rgba).map_err(|e| IoError::Invalid(e.to_string()))
}

/// Writes an RGBA buffer to a JPEG file (alpha dropped).
pub fn write<P: AsRef<Path>>(path: P, image: &ImageBuf) -> IoResult<()> {
    let rgb: Vec<u8> = image
        .data()
        .chunks_exact(ImageBuf::CHANNELS)
        .flat_map(|px| [f32_to_u8(px[0]), f32_to_u8(px[1]), f32_to_u8(px[2])])
        .collect();

    let encoder = jpeg_encoder::Encoder::new_file(path.as_ref(), QUALITY)
        .map_err(|e| IoError::Encode(e.to_string()))?;
    encoder
        .encode(
            &rgb,
            image.width() as u16,
            image.height() as u16,
            jpeg_encoder::ColorType::Rgb,
        )
        .map_err(|e| IoError::Encode(e.to_string()))?;
    Ok(())
}
