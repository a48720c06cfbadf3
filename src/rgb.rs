//! Model a color with 8-bit red, green and blue channels in the sRGB color
//! space.

use crate::color::Channel;

huekit_macros::gen_model! {
    /// A color specified with 8-bit RGB channels.
    pub struct Rgb {
        /// The red channel of the color.
        red: Channel,
        /// The green channel of the color.
        green: Channel,
        /// The blue channel of the color.
        blue: Channel,
    }
}

impl Rgb {
    /// Black, also returned for hex strings that could not be parsed.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}
