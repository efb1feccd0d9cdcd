pub mod face;
pub mod image;

pub use face::{ClockFaceRenderer, ClockReading, HandAngles};
pub use image::ClockImage;
