//! Derive a customized variant of a hex color.

use crate::{
    convert::{hsl_to_rgb, rgb_to_hsl},
    hex::{hex_to_rgb, rgb_to_hex},
    hsl::customize_hsl,
};

/// Replace the saturation and lightness of a hex color with
/// [`CUSTOM_SATURATION`](crate::CUSTOM_SATURATION) and
/// [`CUSTOM_LIGHTNESS`](crate::CUSTOM_LIGHTNESS), keeping its hue.
///
/// The result has a leading `#` exactly when `hex` does. A string that is not
/// a hex color is treated as black, whose hue is `0`.
///
/// ```
/// assert_eq!(huekit::customize_hex("#ff0000"), "#ef4242");
/// assert_eq!(huekit::customize_hex("abc123"), "d8ef42");
/// ```
pub fn customize_hex(hex: &str) -> String {
    let hsl = customize_hsl(rgb_to_hsl(hex_to_rgb(hex)));
    let customized = rgb_to_hex(hsl_to_rgb(hsl), hex.starts_with('#'));

    tracing::trace!(hex, hue = hsl.hue, %customized, "customized hex color");

    customized
}
