use image::{GrayImage, Rgb, RgbImage};

use crate::classify::masks::{compute_masks, Masks};

pub const FOREST_GREEN: [u8; 3] = [34, 139, 34];
pub const DODGER_BLUE: [u8; 3] = [30, 144, 255];
pub const DARK_GRAY: [u8; 3] = [169, 169, 169];

fn paint(canvas: &mut RgbImage, mask: &GrayImage, color: [u8; 3]) {
    for (x, y, m) in mask.enumerate_pixels() {
        if m.0[0] > 0 {
            canvas.put_pixel(x, y, Rgb(color));
        }
    }
}

/// Builds the paint-by-mask visualization from precomputed masks.
///
/// Starts from an all-black canvas and paints vegetation, then water,
/// then urban. The order is load-bearing: a pixel matching several masks
/// keeps the last coat, so urban overrides water overrides vegetation.
/// Note this is the opposite priority from the label tie-break in
/// [`crate::classify::label`], which is reference behavior.
pub fn visual_from_masks(width: u32, height: u32, masks: &Masks) -> RgbImage {
    let mut canvas = RgbImage::new(width, height);
    paint(&mut canvas, &masks.vegetation, FOREST_GREEN);
    paint(&mut canvas, &masks.water, DODGER_BLUE);
    paint(&mut canvas, &masks.urban, DARK_GRAY);
    canvas
}

/// Recolors an RGB image into the class visualization.
pub fn classify_visual(img: &RgbImage) -> RgbImage {
    let (width, height) = img.dimensions();
    visual_from_masks(width, height, &compute_masks(img))
}
