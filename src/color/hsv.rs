/// RGB → HSV in the 8-bit convention the mask ranges are written against:
/// hue on the half scale 0–180 (so it fits a byte), saturation and value
/// on 0–255.
pub fn rgb_to_hsv(rgb: [u8; 3]) -> [u8; 3] {
    let r = rgb[0] as f32 / 255.0;
    let g = rgb[1] as f32 / 255.0;
    let b = rgb[2] as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    // Hue in degrees, 0–360.
    let h_deg = if delta < 1e-6 {
        0.0
    } else if (max - r).abs() < 1e-6 {
        let h = 60.0 * ((g - b) / delta);
        if h < 0.0 { h + 360.0 } else { h }
    } else if (max - g).abs() < 1e-6 {
        60.0 * ((b - r) / delta) + 120.0
    } else {
        60.0 * ((r - g) / delta) + 240.0
    };

    let s = if max < 1e-6 { 0.0 } else { delta / max };

    let h = (h_deg / 2.0).round().clamp(0.0, 180.0) as u8;
    let s = (s * 255.0).round() as u8;
    let v = (max * 255.0).round() as u8;

    [h, s, v]
}
