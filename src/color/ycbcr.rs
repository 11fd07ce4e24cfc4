/// RGB ↔ YCrCb conversion, 8-bit BT.601 convention.
///
/// Y carries brightness, Cr/Cb carry chroma offset around 128. Equalizing Y
/// alone therefore stretches contrast without shifting hue, which is the
/// whole point of routing enhancement through this space.

fn clamp_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Converts one RGB pixel to (Y, Cr, Cb).
pub fn rgb_to_ycrcb(rgb: [u8; 3]) -> [u8; 3] {
    let r = rgb[0] as f32;
    let g = rgb[1] as f32;
    let b = rgb[2] as f32;

    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let cr = (r - y) * 0.713 + 128.0;
    let cb = (b - y) * 0.564 + 128.0;

    [clamp_u8(y), clamp_u8(cr), clamp_u8(cb)]
}

/// Converts one (Y, Cr, Cb) pixel back to RGB.
pub fn ycrcb_to_rgb(ycrcb: [u8; 3]) -> [u8; 3] {
    let y = ycrcb[0] as f32;
    let cr = ycrcb[1] as f32 - 128.0;
    let cb = ycrcb[2] as f32 - 128.0;

    let r = y + 1.403 * cr;
    let g = y - 0.714 * cr - 0.344 * cb;
    let b = y + 1.773 * cb;

    [clamp_u8(r), clamp_u8(g), clamp_u8(b)]
}
