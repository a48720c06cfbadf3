//! Parse and format colors written as hex strings, `#rrggbb` or `#rgb` with
//! an optional `#`.

use std::{fmt, str::FromStr};

use bitflags::bitflags;

use crate::{color::Channel, error::HexError, Rgb};

bitflags! {
    /// How a hex color is written.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HexFlags : u8 {
        /// The color starts with a `#`.
        const HASH = 1 << 0;
        /// The color was written with one digit per channel. Only set by
        /// parsing; formatting always writes two digits per channel.
        const SHORTHAND = 1 << 1;
        /// Format channels below `0x10` with a leading zero (`0a`) instead of
        /// doubling the digit (`aa`).
        const ZERO_PAD = 1 << 2;
    }
}

/// A color parsed from a hex string, along with how it was written.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexColor {
    /// The channels of the color.
    pub rgb: Rgb,
    /// How the color was written.
    pub flags: HexFlags,
}

impl HexColor {
    /// Parse a string matching `^#?([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$`. Three
    /// digit colors are expanded by doubling each digit, so `abc` is the same
    /// color as `aabbcc`.
    ///
    /// As with a regex `$`, a single line terminator at the very end of the
    /// input is accepted, so `"abc\n"` and `"#ff0000\r\n"` are colors.
    pub fn parse(hex: &str) -> Result<Self, HexError> {
        let mut flags = HexFlags::empty();

        let hex = strip_line_terminator(hex);
        let digits = match hex.strip_prefix('#') {
            Some(digits) => {
                flags |= HexFlags::HASH;
                digits
            }
            None => hex,
        };
        let offset = hex.len() - digits.len();

        if digits.len() > 6 {
            return Err(HexError::InvalidLength {
                length: digits.len(),
            });
        }

        let nibbles = digits
            .char_indices()
            .map(|(i, digit)| {
                digit
                    .to_digit(16)
                    .map(|n| n as Channel)
                    .ok_or(HexError::InvalidDigit {
                        digit,
                        position: offset + i,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rgb = match *nibbles.as_slice() {
            [r, g, b] => {
                flags |= HexFlags::SHORTHAND;
                Rgb::new(r * 0x11, g * 0x11, b * 0x11)
            }
            [r1, r0, g1, g0, b1, b0] => Rgb::new((r1 << 4) | r0, (g1 << 4) | g0, (b1 << 4) | b0),
            _ => {
                return Err(HexError::InvalidLength {
                    length: nibbles.len(),
                })
            }
        };

        Ok(Self { rgb, flags })
    }

    /// Whether the color was written with a leading `#`.
    pub fn has_hash(&self) -> bool {
        self.flags.contains(HexFlags::HASH)
    }

    /// Whether the color was written with one digit per channel.
    pub fn is_shorthand(&self) -> bool {
        self.flags.contains(HexFlags::SHORTHAND)
    }
}

/// Remove one line terminator from the end of `s`: `\r\n`, `\n`, `\r`,
/// `U+0085`, `U+2028` or `U+2029`.
fn strip_line_terminator(s: &str) -> &str {
    if let Some(line) = s.strip_suffix("\r\n") {
        return line;
    }
    s.strip_suffix(['\n', '\r', '\u{85}', '\u{2028}', '\u{2029}'])
        .unwrap_or(s)
}

impl FromStr for HexColor {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<HexColor> for Rgb {
    fn from(value: HexColor) -> Self {
        value.rgb
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hex(self.rgb, self.flags))
    }
}

/// Parse a hex color into its channels.
///
/// Anything that is not a valid hex color yields [`Rgb::BLACK`] instead of an
/// error. Use [`HexColor::parse`] to find out why a string was rejected.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    match HexColor::parse(hex) {
        Ok(color) => color.rgb,
        Err(err) => {
            tracing::debug!(hex, error = %err, "not a hex color, using black");
            Rgb::BLACK
        }
    }
}

/// Format channels as a lowercase hex color, with a leading `#` if
/// `include_hash` is set.
///
/// A channel below `0x10` has its single digit doubled, so `(10, 0, 255)`
/// formats as `aa00ff`. [`format_hex`] with [`HexFlags::ZERO_PAD`] writes
/// `0a00ff` instead.
pub fn rgb_to_hex(rgb: Rgb, include_hash: bool) -> String {
    let mut flags = HexFlags::empty();
    flags.set(HexFlags::HASH, include_hash);
    format_hex(rgb, flags)
}

/// Format channels as a lowercase hex color. [`HexFlags::HASH`] adds a
/// leading `#` and [`HexFlags::ZERO_PAD`] selects zero padding over digit
/// doubling. Other flags are ignored.
pub fn format_hex(rgb: Rgb, flags: HexFlags) -> String {
    let zero_pad = flags.contains(HexFlags::ZERO_PAD);

    let mut hex = String::with_capacity(7);
    if flags.contains(HexFlags::HASH) {
        hex.push('#');
    }

    for channel in rgb.to_array() {
        let digits = format!("{:x}", channel);
        if let [digit] = digits.as_bytes() {
            hex.push(if zero_pad { '0' } else { char::from(*digit) });
        }
        hex.push_str(&digits);
    }

    hex
}

impl Rgb {
    /// Format this color as a lowercase hex color. See [`rgb_to_hex`].
    pub fn to_hex(&self, include_hash: bool) -> String {
        rgb_to_hex(*self, include_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_six_digits() {
        let color = HexColor::parse("#0A00fF").unwrap();
        assert_eq!(color.rgb, Rgb::new(10, 0, 255));
        assert!(color.has_hash());
        assert!(!color.is_shorthand());

        assert_eq!(hex_to_rgb("336699"), Rgb::new(0x33, 0x66, 0x99));
    }

    #[test]
    fn parse_shorthand() {
        let color: HexColor = "a1f".parse().unwrap();
        assert_eq!(color.rgb, Rgb::new(0xaa, 0x11, 0xff));
        assert!(!color.has_hash());
        assert!(color.is_shorthand());

        assert_eq!(hex_to_rgb("abc"), hex_to_rgb("aabbcc"));
        assert_eq!(hex_to_rgb("#fff"), Rgb::WHITE);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            HexColor::parse("zzz"),
            Err(HexError::InvalidDigit {
                digit: 'z',
                position: 0
            })
        );
        assert_eq!(
            HexColor::parse("#12345g"),
            Err(HexError::InvalidDigit {
                digit: 'g',
                position: 6
            })
        );
        assert_eq!(
            HexColor::parse("12"),
            Err(HexError::InvalidLength { length: 2 })
        );
        assert_eq!(HexColor::parse(""), Err(HexError::InvalidLength { length: 0 }));
        assert_eq!(HexColor::parse("#"), Err(HexError::InvalidLength { length: 0 }));
        assert_eq!(
            HexColor::parse("##abc"),
            Err(HexError::InvalidDigit {
                digit: '#',
                position: 1
            })
        );
        assert_eq!(
            HexColor::parse("abcd"),
            Err(HexError::InvalidLength { length: 4 })
        );
        assert!(HexColor::parse(" abc").is_err());
        assert!(HexColor::parse("abc\n\n").is_err());
        assert!(HexColor::parse("ab\nc").is_err());
    }

    #[test]
    fn one_trailing_line_terminator_is_accepted() {
        assert_eq!(hex_to_rgb("abc\n"), Rgb::new(0xaa, 0xbb, 0xcc));
        assert_eq!(hex_to_rgb("#ff0000\r\n"), Rgb::new(255, 0, 0));
        assert_eq!(hex_to_rgb("#ff0000\r"), Rgb::new(255, 0, 0));
        assert_eq!(hex_to_rgb("abc\u{2028}"), Rgb::new(0xaa, 0xbb, 0xcc));

        let color = HexColor::parse("#abc\n").unwrap();
        assert!(color.has_hash());
        assert!(color.is_shorthand());
        assert_eq!(color.to_string(), "#aabbcc");
    }

    #[test]
    fn long_input_is_rejected_by_length() {
        let long = "z".repeat(10_000);
        assert_eq!(
            HexColor::parse(&long),
            Err(HexError::InvalidLength { length: 10_000 })
        );
        assert_eq!(
            HexColor::parse("#abcdef0"),
            Err(HexError::InvalidLength { length: 7 })
        );
        assert_eq!(hex_to_rgb(&long), Rgb::BLACK);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            HexError::InvalidLength { length: 2 }.to_string(),
            "expected 3 or 6 hex digits, found 2"
        );
        assert_eq!(
            HexError::InvalidDigit {
                digit: 'z',
                position: 0
            }
            .to_string(),
            "invalid hex digit 'z' at position 0"
        );
    }

    #[test]
    fn malformed_hex_is_black() {
        assert_eq!(hex_to_rgb("zzz"), Rgb::BLACK);
        assert_eq!(hex_to_rgb("12"), Rgb::BLACK);
        assert_eq!(hex_to_rgb("#ff00ff00"), Rgb::BLACK);
        assert_eq!(hex_to_rgb("red"), Rgb::BLACK);
    }

    #[test]
    fn format_with_and_without_hash() {
        assert_eq!(rgb_to_hex(Rgb::new(51, 102, 153), true), "#336699");
        assert_eq!(rgb_to_hex(Rgb::new(51, 102, 153), false), "336699");
        assert_eq!(Rgb::new(0xef, 0x42, 0x42).to_hex(true), "#ef4242");
    }

    #[test]
    fn format_doubles_single_digits() {
        assert_eq!(rgb_to_hex(Rgb::new(10, 0, 255), true), "#aa00ff");
        assert_eq!(rgb_to_hex(Rgb::new(10, 0, 255), false), "aa00ff");
        assert_eq!(rgb_to_hex(Rgb::new(1, 2, 15), false), "1122ff");
    }

    #[test]
    fn format_zero_padded() {
        let rgb = Rgb::new(10, 0, 255);
        assert_eq!(format_hex(rgb, HexFlags::HASH | HexFlags::ZERO_PAD), "#0a00ff");
        assert_eq!(format_hex(rgb, HexFlags::ZERO_PAD), "0a00ff");
        assert_eq!(format_hex(rgb, HexFlags::SHORTHAND), "aa00ff");
    }

    #[test]
    fn display_keeps_hash() {
        assert_eq!(HexColor::parse("#ABC").unwrap().to_string(), "#aabbcc");
        assert_eq!(HexColor::parse("AbC123").unwrap().to_string(), "abc123");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn six_digit_round_trip(
                channels in proptest::array::uniform3(0x10u8..=0xff),
                hash in any::<bool>(),
                upper in any::<bool>(),
            ) {
                let [r, g, b] = channels;
                let digits = if upper {
                    format!("{:02X}{:02X}{:02X}", r, g, b)
                } else {
                    format!("{:02x}{:02x}{:02x}", r, g, b)
                };
                let hex = if hash { format!("#{}", digits) } else { digits };

                prop_assert_eq!(rgb_to_hex(hex_to_rgb(&hex), hex.starts_with('#')), hex.to_lowercase());
            }

            #[test]
            fn zero_padded_round_trip(channels in any::<[u8; 3]>()) {
                let rgb = Rgb::from(channels);
                let hex = format_hex(rgb, HexFlags::HASH | HexFlags::ZERO_PAD);
                prop_assert_eq!(hex_to_rgb(&hex), rgb);
            }

            #[test]
            fn shorthand_matches_doubled_digits(digits in "[0-9a-fA-F]{3}") {
                let doubled: String = digits.chars().flat_map(|c| [c, c]).collect();
                prop_assert_eq!(hex_to_rgb(&digits), hex_to_rgb(&doubled));
            }

            #[test]
            fn parse_never_panics(s in "\\PC*") {
                let _ = HexColor::parse(&s);
            }
        }
    }
}
