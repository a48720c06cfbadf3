//! Model a color with the HSL notation in the sRGB color space.

use crate::{color::Component, math::degrees_normalize};

/// Saturation of every customized color.
pub const CUSTOM_SATURATION: Component = 0.85;

/// Lightness of every customized color.
pub const CUSTOM_LIGHTNESS: Component = 0.6;

huekit_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue of the color in degrees.
        hue: Component,
        /// The saturation of the color in `[0, 1]`.
        saturation: Component,
        /// The lightness of the color in `[0, 1]`.
        lightness: Component,
    }
}

impl Hsl {
    /// Keep the hue of this color, wrapped into `[0, 360)`, and replace the
    /// saturation and lightness with [`CUSTOM_SATURATION`] and
    /// [`CUSTOM_LIGHTNESS`].
    pub fn customize(&self) -> Self {
        Self::new(
            degrees_normalize(self.hue).into(),
            CUSTOM_SATURATION,
            CUSTOM_LIGHTNESS,
        )
    }
}

/// Derive the customized variant of a color. See [`Hsl::customize`].
pub fn customize_hsl(hsl: Hsl) -> Hsl {
    hsl.customize()
}
