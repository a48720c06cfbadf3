//! huekit converts colors between hex strings, 8-bit RGB channels and the HSL
//! notation, and derives a customized variant of a color that keeps its hue
//! but has a fixed saturation and lightness.
//!
//! ```
//! use huekit::{hex_to_rgb, Hsl, Rgb};
//!
//! let rgb = hex_to_rgb("#f80");
//! assert_eq!(rgb, Rgb::new(255, 136, 0));
//! assert_eq!(rgb.to_hsl().hue, 32.0);
//! assert_eq!(Hsl::new(32.0, 1.0, 0.5).to_rgb().to_hex(true), "#ff8800");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod customize;
mod error;
mod hex;
mod hsl;
mod math;
mod rgb;


pub use color::{Channel, Component};
pub use convert::{hsl_to_rgb, rgb_to_hsl};
pub use customize::customize_hex;
pub use error::HexError;
pub use hex::{format_hex, hex_to_rgb, rgb_to_hex, HexColor, HexFlags};
pub use hsl::{customize_hsl, Hsl, CUSTOM_LIGHTNESS, CUSTOM_SATURATION};
pub use math::{degrees_normalize, FULL_TURN};
pub use rgb::Rgb;
