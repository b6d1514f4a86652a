//! Coefficient-table cell values.

use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// One cell of a coefficient table.
///
/// A cell is either a fitted numeric constant or a symbolic reference to a
/// caller-supplied parameter. References are resolved against a parameter
/// set at evaluation time and never stored resolved.
///
/// # Examples
///
/// ```
/// use geolca_core::Slot;
///
/// let constant: Slot = serde_json::from_str("0.073").unwrap();
/// assert_eq!(constant, Slot::Literal(0.073));
///
/// let reference: Slot = serde_json::from_str("\"average_depth_of_wells\"").unwrap();
/// assert_eq!(reference, Slot::Reference("average_depth_of_wells".into()));
///
/// // The preparation step serializes fitted floats as "%.6e" strings;
/// // those normalize back to literals.
/// let scientific: Slot = serde_json::from_str("\"2.500000e-03\"").unwrap();
/// assert_eq!(scientific, Slot::Literal(0.0025));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// A fitted numeric constant, used as-is.
    Literal(f64),

    /// The name of a parameter to be supplied by the caller.
    Reference(String),
}

impl Slot {
    /// Interprets a raw text cell: numeric text (including scientific
    /// notation) is a literal, anything else names a parameter.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        match text.trim().parse::<f64>() {
            Ok(value) => Slot::Literal(value),
            Err(_) => Slot::Reference(text),
        }
    }

    /// Returns the literal value, if this cell is one.
    pub fn as_literal(&self) -> Option<f64> {
        match self {
            Slot::Literal(value) => Some(*value),
            Slot::Reference(_) => None,
        }
    }

    /// Returns the referenced parameter name, if this cell is a reference.
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Slot::Literal(_) => None,
            Slot::Reference(name) => Some(name),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Literal(value) => write!(f, "{value}"),
            Slot::Reference(name) => write!(f, "`{name}`"),
        }
    }
}

impl From<f64> for Slot {
    fn from(value: f64) -> Self {
        Slot::Literal(value)
    }
}

impl From<&str> for Slot {
    fn from(text: &str) -> Self {
        Slot::from_text(text)
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Slot::Literal(value) => serializer.serialize_f64(*value),
            Slot::Reference(name) => serializer.serialize_str(name),
        }
    }
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum RawCell {
            Number(f64),
            Text(String),
        }

        match RawCell::deserialize(deserializer)? {
            RawCell::Number(value) => Ok(Slot::Literal(value)),
            RawCell::Text(text) => Ok(Slot::from_text(text)),
        }
    }
}
