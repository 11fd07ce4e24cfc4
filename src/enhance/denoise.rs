use image::RgbImage;

/// Tuning for the non-local-means filter.
///
/// The defaults are the reference operating point for this pipeline:
/// strength 10 on luminance and 10 on color, 7×7 comparison patches,
/// 21×21 search window.
#[derive(Debug, Clone, Copy)]
pub struct DenoiseParams {
    /// Filter strength applied to brightness differences.
    pub strength: f32,
    /// Filter strength applied to color differences. Equal to `strength`
    /// here, so the joint-channel weight below uses a single exponent.
    pub color_strength: f32,
    /// Side length of the square comparison patch (odd).
    pub template_size: u32,
    /// Side length of the square search window (odd).
    pub search_size: u32,
}

impl Default for DenoiseParams {
    fn default() -> Self {
        DenoiseParams {
            strength: 10.0,
            color_strength: 10.0,
            template_size: 7,
            search_size: 21,
        }
    }
}

/// Non-local-means denoising of an RGB image.
///
/// Each output pixel is a weighted average of the pixels in its search
/// window, where a candidate's weight falls off exponentially with the
/// mean squared difference between its comparison patch and the center
/// pixel's patch. Patch similarity is measured jointly over all three
/// channels; the averaging itself runs per channel. Patches that overhang
/// the image edge read replicated border pixels.
///
/// Similar patches anywhere in the window reinforce each other, so flat
/// regions smooth out while edges (whose patches match nothing across the
/// boundary) stay put.
pub fn nl_means(img: &RgbImage, params: &DenoiseParams) -> RgbImage {
    let (width, height) = img.dimensions();
    let mut out = RgbImage::new(width, height);
    if width == 0 || height == 0 {
        return out;
    }

    let t_radius = (params.template_size / 2) as i64;
    let s_radius = (params.search_size / 2) as i64;
    let patch_area = (params.template_size * params.template_size * 3) as f32;
    let h2 = params.strength * params.color_strength;

    let clamp_px = |x: i64, y: i64| -> [u8; 3] {
        let cx = x.clamp(0, width as i64 - 1) as u32;
        let cy = y.clamp(0, height as i64 - 1) as u32;
        img.get_pixel(cx, cy).0
    };

    // Mean squared patch difference between centers (px, py) and (qx, qy),
    // over all three channels.
    let patch_dist = |px: i64, py: i64, qx: i64, qy: i64| -> f32 {
        let mut acc = 0.0f32;
        for dy in -t_radius..=t_radius {
            for dx in -t_radius..=t_radius {
                let a = clamp_px(px + dx, py + dy);
                let b = clamp_px(qx + dx, qy + dy);
                for c in 0..3 {
                    let d = a[c] as f32 - b[c] as f32;
                    acc += d * d;
                }
            }
        }
        acc / patch_area
    };

    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let mut weight_sum = 0.0f32;
            let mut acc = [0.0f32; 3];

            for sy in -s_radius..=s_radius {
                for sx in -s_radius..=s_radius {
                    let qx = x + sx;
                    let qy = y + sy;
                    if qx < 0 || qy < 0 || qx >= width as i64 || qy >= height as i64 {
                        continue;
                    }

                    let dist = patch_dist(x, y, qx, qy);
                    let w = (-dist / h2).exp();
                    let q = img.get_pixel(qx as u32, qy as u32).0;
                    for c in 0..3 {
                        acc[c] += w * q[c] as f32;
                    }
                    weight_sum += w;
                }
            }

            let pixel = out.get_pixel_mut(x as u32, y as u32);
            for c in 0..3 {
                pixel.0[c] = (acc[c] / weight_sum).round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use rand::prelude::*;
    use rand::rngs::StdRng;

    fn channel_variance(img: &RgbImage, channel: usize) -> f64 {
        let values: Vec<f64> = img.pixels().map(|p| p.0[channel] as f64).collect();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
    }

    #[test]
    fn constant_image_is_unchanged() {
        let img = RgbImage::from_pixel(9, 9, Rgb([80, 160, 40]));
        let out = nl_means(&img, &DenoiseParams::default());
        for pixel in out.pixels() {
            assert_eq!(pixel.0, [80, 160, 40]);
        }
    }

    #[test]
    fn noise_variance_drops() {
        // Constant mid-gray plus small uniform sensor noise.
        let mut rng = StdRng::seed_from_u64(7);
        let mut img = RgbImage::new(12, 12);
        for pixel in img.pixels_mut() {
            let jitter = |rng: &mut StdRng| 120u8 + rng.gen_range(0u8..11);
            pixel.0 = [jitter(&mut rng), jitter(&mut rng), jitter(&mut rng)];
        }

        let out = nl_means(&img, &DenoiseParams::default());
        let before = channel_variance(&img, 0);
        let after = channel_variance(&out, 0);
        assert!(
            after < before / 2.0,
            "variance {} did not drop enough from {}",
            after,
            before
        );
    }

    #[test]
    fn hard_edge_survives() {
        // Left half black, right half white.
        let mut img = RgbImage::new(10, 10);
        for (x, _, pixel) in img.enumerate_pixels_mut() {
            let v = if x < 5 { 0 } else { 255 };
            pixel.0 = [v, v, v];
        }
        let out = nl_means(&img, &DenoiseParams::default());
        assert!(out.get_pixel(0, 5).0[0] < 20);
        assert!(out.get_pixel(9, 5).0[0] > 235);
    }

    #[test]
    fn output_dimensions_match_input() {
        let img = RgbImage::from_pixel(5, 3, Rgb([1, 2, 3]));
        let out = nl_means(&img, &DenoiseParams::default());
        assert_eq!(out.dimensions(), (5, 3));
    }
}
