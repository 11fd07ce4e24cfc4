pub mod color;
pub mod classify;
pub mod enhance;
pub mod error;

// Convenience re-exports
pub use classify::label::{classify_label, LandCover};
pub use classify::masks::{compute_masks, Masks};
pub use classify::visual::classify_visual;
pub use enhance::enhance;
pub use error::PipelineError;
