pub mod hsv;
pub mod ycbcr;
