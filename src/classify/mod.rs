//! Land-cover classification by fixed HSV color-range masks.
//!
//! Two independent consumers of the same masks: a text label picked from
//! per-class pixel coverage, and a paint-by-mask visualization image.

pub mod label;
pub mod masks;
pub mod visual;
