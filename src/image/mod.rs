//! Minimal image containers used by the feature stage.
//!
//! - [`ImageF32`]: owned single-channel float buffer (feature maps).
//! - [`RgbaImage`]: borrowed interleaved RGBA view over caller-owned bytes.
//! - [`io`]: disk helpers used by the tools (not needed by the engine).
pub mod f32;
pub mod io;
pub mod rgba;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::rgba::RgbaImage;
pub use self::traits::{ImageView, Rows};
