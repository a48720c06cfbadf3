//! Math utility functions.

use num_traits::ToPrimitive;

use crate::color::{Channel, Component};

/// The number of degrees in a full turn of the hue circle.
pub const FULL_TURN: Component = 360.0;

/// The largest value of an RGB channel, as a component.
pub(crate) const CHANNEL_MAX: Component = Channel::MAX as Component;

/// Wrap an angle in degrees into `[0, 360)`.
///
/// The remainder of `value / 360` is taken on the real value and truncated
/// towards zero. A negative result is then moved forward by a full turn, so
/// `-30` becomes `330` and `-0.5` becomes `0`. Non-finite input maps to `0`.
pub fn degrees_normalize(value: impl Into<Component>) -> i32 {
    let degrees = (value.into() % FULL_TURN).to_i32().unwrap_or(0);

    if degrees < 0 {
        degrees + FULL_TURN as i32
    } else {
        degrees
    }
}

/// Scale a value in `[0, 1]` to an 8-bit channel. The fraction is truncated,
/// never rounded. Values outside of `[0, 1]` saturate at the channel bounds.
pub(crate) fn unit_to_channel(value: Component) -> Channel {
    (value * CHANNEL_MAX) as Channel
}
