//! Scalar types shared by all color models.

/// A 64-bit floating point value that HSL components are stored as.
pub type Component = f64;

/// An 8-bit integer that RGB channels are stored as.
pub type Channel = u8;

/// Three real valued components in model order, used as the intermediate form
/// during conversions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// The smallest of the three components.
    pub fn min(&self) -> Component {
        self.0.min(self.1).min(self.2)
    }

    /// The largest of the three components.
    pub fn max(&self) -> Component {
        self.0.max(self.1).max(self.2)
    }
}

impl From<[Channel; 3]> for Components {
    fn from([c0, c1, c2]: [Channel; 3]) -> Self {
        Self(c0.into(), c1.into(), c2.into())
    }
}
