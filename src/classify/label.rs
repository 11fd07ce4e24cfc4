use image::{GrayImage, RgbImage};
use serde::{Deserialize, Serialize};

use crate::classify::masks::{compute_masks, Masks};

/// Dominant land-cover class of a scene.
///
/// There is no mixed or unknown variant: one class is always chosen, with
/// ties falling to whichever class is evaluated first (vegetation, then
/// water, then urban).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandCover {
    Forest,
    WaterBodies,
    UrbanAreas,
}

impl LandCover {
    /// Human-readable label, as reported to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            LandCover::Forest => "Forest",
            LandCover::WaterBodies => "Water Bodies",
            LandCover::UrbanAreas => "Urban Areas",
        }
    }
}

/// Mask coverage: sum of mask bytes over pixel count.
///
/// Matched pixels contribute 255, so this is the matched fraction scaled
/// by 255 rather than a 0–1 value. All three classes share the scale and
/// only their relative order is ever compared, so the scaling is kept
/// as-is.
pub fn coverage(mask: &GrayImage) -> f64 {
    let total: u64 = mask.pixels().map(|p| p.0[0] as u64).sum();
    total as f64 / mask.len() as f64
}

/// Picks the dominant class from precomputed masks.
pub fn label_from_masks(masks: &Masks) -> LandCover {
    let vegetation = coverage(&masks.vegetation);
    let water = coverage(&masks.water);
    let urban = coverage(&masks.urban);

    let max = vegetation.max(water).max(urban);
    if max == vegetation {
        LandCover::Forest
    } else if max == water {
        LandCover::WaterBodies
    } else {
        LandCover::UrbanAreas
    }
}

/// Classifies the dominant land cover of an RGB image.
pub fn classify_label(img: &RgbImage) -> LandCover {
    label_from_masks(&compute_masks(img))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn mask_with(matched: u32, total: u32) -> GrayImage {
        let mut mask = GrayImage::new(total, 1);
        for x in 0..matched {
            mask.put_pixel(x, 0, Luma([255]));
        }
        mask
    }

    #[test]
    fn coverage_is_scaled_by_255() {
        let mask = mask_with(5, 10);
        assert_eq!(coverage(&mask), 127.5);
        assert_eq!(coverage(&mask_with(0, 10)), 0.0);
        assert_eq!(coverage(&mask_with(10, 10)), 255.0);
    }

    #[test]
    fn vegetation_wins_all_ties() {
        let masks = Masks {
            vegetation: mask_with(4, 8),
            water: mask_with(4, 8),
            urban: mask_with(4, 8),
        };
        assert_eq!(label_from_masks(&masks), LandCover::Forest);
    }

    #[test]
    fn water_beats_urban_on_a_tie() {
        let masks = Masks {
            vegetation: mask_with(1, 8),
            water: mask_with(4, 8),
            urban: mask_with(4, 8),
        };
        assert_eq!(label_from_masks(&masks), LandCover::WaterBodies);
    }

    #[test]
    fn strict_maximum_wins_regardless_of_order() {
        let masks = Masks {
            vegetation: mask_with(1, 8),
            water: mask_with(2, 8),
            urban: mask_with(7, 8),
        };
        assert_eq!(label_from_masks(&masks), LandCover::UrbanAreas);
    }

    #[test]
    fn display_labels_match_the_api_contract() {
        assert_eq!(LandCover::Forest.as_str(), "Forest");
        assert_eq!(LandCover::WaterBodies.as_str(), "Water Bodies");
        assert_eq!(LandCover::UrbanAreas.as_str(), "Urban Areas");
    }
}
