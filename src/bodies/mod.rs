mod body;
mod tags;

pub use self::body::Body;
pub use self::tags::TagValue;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// An RGB color triple used for display purposes
///
/// The physics core never branches on color; it only carries it so a
/// rendering collaborator can read it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// The default disc color
    pub const RED: Self = Self(255, 0, 0);

    /// Highlight color used by interaction layers (e.g., a selected disc)
    pub const GREEN: Self = Self(0, 255, 0);
}

impl Default for Rgb {
    fn default() -> Self {
        Self::RED
    }
}
