//! Image enhancement: brightness equalization plus edge-preserving denoise.
//!
//! The pipeline mirrors what you would do by hand before thresholding
//! satellite imagery: stretch the brightness channel so dim scenes use the
//! full intensity range, then knock down sensor noise without washing out
//! field and shoreline boundaries.

pub mod denoise;
pub mod equalize;

use image::RgbImage;

use crate::color::ycbcr::{rgb_to_ycrcb, ycrcb_to_rgb};
use crate::error::PipelineError;

/// Enhances an RGB image for classification.
///
/// Steps, in fixed order:
/// 1. convert to YCrCb and histogram-equalize the Y channel only,
/// 2. convert back to RGB,
/// 3. non-local-means denoise (strength 10/10, 7×7 patches, 21×21 window).
///
/// Output has the same dimensions as the input. A zero-sized buffer is
/// rejected with [`PipelineError::InvalidImage`].
pub fn enhance(img: &RgbImage) -> Result<RgbImage, PipelineError> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(PipelineError::InvalidImage("empty image".to_owned()));
    }

    // Split into luma + chroma planes.
    let n = (width * height) as usize;
    let mut luma = Vec::with_capacity(n);
    let mut chroma = Vec::with_capacity(n);
    for pixel in img.pixels() {
        let [y, cr, cb] = rgb_to_ycrcb(pixel.0);
        luma.push(y);
        chroma.push((cr, cb));
    }

    // Equalize brightness only; chroma passes through untouched.
    equalize::equalize_channel(&mut luma);

    let mut merged = RgbImage::new(width, height);
    for (i, pixel) in merged.pixels_mut().enumerate() {
        let (cr, cb) = chroma[i];
        pixel.0 = ycrcb_to_rgb([luma[i], cr, cb]);
    }

    Ok(denoise::nl_means(&merged, &denoise::DenoiseParams::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn enhance_preserves_dimensions() {
        let img = RgbImage::from_pixel(13, 7, Rgb([90, 120, 60]));
        let out = enhance(&img).unwrap();
        assert_eq!(out.dimensions(), (13, 7));
    }

    #[test]
    fn enhance_rejects_empty_input() {
        let img = RgbImage::new(0, 0);
        assert!(matches!(
            enhance(&img),
            Err(PipelineError::InvalidImage(_))
        ));
    }

    #[test]
    fn enhance_stretches_a_low_contrast_scene() {
        // Two dim brightness levels; equalization must push them apart.
        let mut img = RgbImage::new(8, 8);
        for (x, _, pixel) in img.enumerate_pixels_mut() {
            let v = if x < 4 { 100 } else { 110 };
            pixel.0 = [v, v, v];
        }
        let out = enhance(&img).unwrap();

        let mut min = u8::MAX;
        let mut max = u8::MIN;
        for pixel in out.pixels() {
            min = min.min(pixel.0[0]);
            max = max.max(pixel.0[0]);
        }
        assert!(
            max as i16 - min as i16 > 60,
            "expected stretched contrast, got {}..{}",
            min,
            max
        );
    }
}
