//! Conversions between the RGB and HSL models.

use crate::{color::Components, Hsl, Rgb};

impl Rgb {
    /// Convert this color to the HSL notation. The hue is a whole number of
    /// degrees in `[0, 360)`.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&Components::from(self.to_array())).into()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to 8-bit RGB channels. Each
    /// channel is truncated, not rounded.
    pub fn to_rgb(&self) -> Rgb {
        util::hsl_to_rgb(&Components(self.hue, self.saturation, self.lightness))
    }
}

/// Convert 8-bit RGB channels to the HSL notation. See [`Rgb::to_hsl`].
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    rgb.to_hsl()
}

/// Convert a color in the HSL notation to 8-bit RGB channels. See
/// [`Hsl::to_rgb`].
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    hsl.to_rgb()
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{degrees_normalize, unit_to_channel, CHANNEL_MAX},
        Rgb,
    };

    /// Convert from 8-bit RGB channels to HSL notation.
    /// <http://www.niwa.nu/2013/05/math-behind-colorspace-conversions-rgb-hsl/>
    pub fn rgb_to_hsl(from: &Components) -> [Component; 3] {
        let unit = from.map(|channel| channel / CHANNEL_MAX);
        let Components(red, green, blue) = unit;

        let min = unit.min();
        let max = unit.max();

        if min == max {
            return [0.0, 0.0, min];
        }

        let sum = min + max;
        let range = max - min;

        let lightness = sum / 2.0;
        let saturation = range / if lightness < 0.5 { sum } else { 2.0 - sum };

        // Ties go to red, then green.
        let hue = 60.0
            * if max == red {
                (green - blue) / range
            } else if max == green {
                2.0 + (blue - red) / range
            } else {
                4.0 + (red - green) / range
            };

        [degrees_normalize(hue).into(), saturation, lightness]
    }

    /// Convert from HSL notation to 8-bit RGB channels.
    /// <https://en.wikipedia.org/wiki/HSL_and_HSV#From_HSL>
    pub fn hsl_to_rgb(from: &Components) -> Rgb {
        let Components(hue, saturation, lightness) = *from;

        let sextant = hue / 60.0;

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = chroma * (1.0 - (sextant % 2.0 - 1.0).abs());
        let m = lightness - chroma / 2.0;

        // Boundaries belong to the lower sextant. Both neighbours agree there,
        // so the choice does not change the result.
        let (red, green, blue) = match sextant {
            s if (0.0..=1.0).contains(&s) => (chroma, x, 0.0),
            s if (1.0..=2.0).contains(&s) => (x, chroma, 0.0),
            s if (2.0..=3.0).contains(&s) => (0.0, chroma, x),
            s if (3.0..=4.0).contains(&s) => (0.0, x, chroma),
            s if (4.0..=5.0).contains(&s) => (x, 0.0, chroma),
            s if (5.0..=6.0).contains(&s) => (chroma, 0.0, x),
            _ => (0.0, 0.0, 0.0),
        };

        Rgb::new(
            unit_to_channel(red + m),
            unit_to_channel(green + m),
            unit_to_channel(blue + m),
        )
    }
}
