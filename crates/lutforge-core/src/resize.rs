//! Aspect-preserving downscale for ingest.
//!
//! Oversized sources are reduced before entering the pipeline so live
//! preview and whole-image grading stay interactive. Bilinear sampling is
//! plenty for a downscale feeding a per-pixel color transform.

use crate::error::CoreResult;
use crate::image::ImageBuf;

/// Downscales `src` so its long edge is at most `max_edge`, preserving
/// aspect ratio. Returns `None` when the image already fits (the common
/// case); never upscales.
pub fn fit_within(src: &ImageBuf, max_edge: u32) -> CoreResult<Option<ImageBuf>> {
    let long = src.long_edge();
    if long <= max_edge || max_edge == 0 {
        return Ok(None);
    }
    let scale = max_edge as f32 / long as f32;
    let new_w = ((src.width() as f32 * scale).round() as u32).max(1);
    let new_h = ((src.height() as f32 * scale).round() as u32).max(1);
    Ok(Some(resize_bilinear(src, new_w, new_h)?))
}

/// Bilinear resize to exact target dimensions.
pub fn resize_bilinear(src: &ImageBuf, new_w: u32, new_h: u32) -> CoreResult<ImageBuf> {
    let sw = src.width() as usize;
    let sh = src.height() as usize;
    let dw = new_w as usize;
    let dh = new_h as usize;
    let ch = ImageBuf::CHANNELS;
    let sdata = src.data();

    let x_ratio = sw as f32 / dw as f32;
    let y_ratio = sh as f32 / dh as f32;

    let mut out = vec![0.0f32; dw * dh * ch];
    for dy in 0..dh {
        // Sample at pixel centers to keep edges stable.
        let sy = ((dy as f32 + 0.5) * y_ratio - 0.5).max(0.0);
        let y0 = (sy.floor() as usize).min(sh - 1);
        let y1 = (y0 + 1).min(sh - 1);
        let fy = sy - y0 as f32;

        for dx in 0..dw {
            let sx = ((dx as f32 + 0.5) * x_ratio - 0.5).max(0.0);
            let x0 = (sx.floor() as usize).min(sw - 1);
            let x1 = (x0 + 1).min(sw - 1);
            let fx = sx - x0 as f32;

            let i00 = (y0 * sw + x0) * ch;
            let i10 = (y0 * sw + x1) * ch;
            let i01 = (y1 * sw + x0) * ch;
            let i11 = (y1 * sw + x1) * ch;
            let o = (dy * dw + dx) * ch;

            for c in 0..ch {
                let top = sdata[i00 + c] * (1.0 - fx) + sdata[i10 + c] * fx;
                let bottom = sdata[i01 + c] * (1.0 - fx) + sdata[i11 + c] * fx;
                out[o + c] = top * (1.0 - fy) + bottom * fy;
            }
        }
    }

    ImageBuf::from_data(new_w, new_h, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(w: u32, h: u32) -> ImageBuf {
        let mut data = Vec::with_capacity((w * h * 4) as usize);
        for y in 0..h {
            for x in 0..w {
                data.extend_from_slice(&[
                    x as f32 / (w - 1).max(1) as f32,
                    y as f32 / (h - 1).max(1) as f32,
                    0.5,
                    1.0,
                ]);
            }
        }
        ImageBuf::from_data(w, h, data).unwrap()
    }

    #[test]
    fn small_images_pass_through() {
        let img = gradient(100, 60);
        assert!(fit_within(&img, 1500).unwrap().is_none());
    }

    #[test]
    fn downscale_preserves_aspect() {
        let img = gradient(300, 150);
        let small = fit_within(&img, 150).unwrap().unwrap();
        assert_eq!(small.width(), 150);
        assert_eq!(small.height(), 75);
    }

    #[test]
    fn never_upscales() {
        let img = gradient(20, 10);
        assert!(fit_within(&img, 40).unwrap().is_none());
    }

    #[test]
    fn flat_image_stays_flat() {
        let img = ImageBuf::from_data(4, 4, vec![0.25; 4 * 4 * 4]).unwrap();
        let resized = resize_bilinear(&img, 2, 2).unwrap();
        for &v in resized.data() {
            assert!((v - 0.25).abs() < 1e-6);
        }
    }
}
