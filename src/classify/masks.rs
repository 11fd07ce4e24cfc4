use image::{GrayImage, RgbImage};

use crate::color::hsv::rgb_to_hsv;

/// Inclusive HSV box on the 8-bit scale (hue 0–180, saturation and value
/// 0–255).
#[derive(Debug, Clone, Copy)]
pub struct HsvRange {
    pub hue: (u8, u8),
    pub saturation: (u8, u8),
    pub value: (u8, u8),
}

impl HsvRange {
    pub fn contains(&self, [h, s, v]: [u8; 3]) -> bool {
        self.hue.0 <= h
            && h <= self.hue.1
            && self.saturation.0 <= s
            && s <= self.saturation.1
            && self.value.0 <= v
            && v <= self.value.1
    }
}

/// Greens: crops, forest canopy, grassland.
pub const VEGETATION: HsvRange = HsvRange {
    hue: (36, 86),
    saturation: (25, 255),
    value: (25, 255),
};

/// Blues: open water, rivers, lakes.
pub const WATER: HsvRange = HsvRange {
    hue: (90, 130),
    saturation: (50, 255),
    value: (50, 255),
};

/// Bright desaturated pixels of any hue: concrete, rooftops, roads.
pub const URBAN: HsvRange = HsvRange {
    hue: (0, 180),
    saturation: (0, 50),
    value: (100, 255),
};

/// The three binary class masks for one image. Mask pixels are 255 where
/// the class range matched and 0 elsewhere; masks are not mutually
/// exclusive (a pixel may match several ranges, or none).
pub struct Masks {
    pub vegetation: GrayImage,
    pub water: GrayImage,
    pub urban: GrayImage,
}

/// Computes all three masks in a single HSV pass over the image.
pub fn compute_masks(img: &RgbImage) -> Masks {
    let (width, height) = img.dimensions();
    let mut vegetation = GrayImage::new(width, height);
    let mut water = GrayImage::new(width, height);
    let mut urban = GrayImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        let hsv = rgb_to_hsv(pixel.0);
        if VEGETATION.contains(hsv) {
            vegetation.put_pixel(x, y, image::Luma([255]));
        }
        if WATER.contains(hsv) {
            water.put_pixel(x, y, image::Luma([255]));
        }
        if URBAN.contains(hsv) {
            urban.put_pixel(x, y, image::Luma([255]));
        }
    }

    Masks {
        vegetation,
        water,
        urban,
    }
}
