#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A value stored in a body's tag bag
///
/// Tags carry transient, core-agnostic interaction state (e.g., whether a
/// disc is currently being dragged). They are written and read only by
/// external collaborators; nothing in the integration or collision code
/// inspects them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum TagValue {
    /// A boolean flag
    Bool(bool),

    /// An integer value
    Int(i64),

    /// A floating point value
    Float(f32),

    /// A string value
    Str(String),
}

impl TagValue {
    /// Returns the boolean payload, if this is a `Bool` tag
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an `Int` tag
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float payload, if this is a `Float` tag
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string payload, if this is a `Str` tag
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for TagValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for TagValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for TagValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}
