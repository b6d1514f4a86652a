//! Caller-supplied plant design parameters.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A set of named plant design parameters.
///
/// Partial sets are legitimate: an archetype's coefficient tables only need
/// the parameters its reference cells name, and only the supplied values are
/// bounds-checked.
///
/// # Examples
///
/// ```
/// use geolca_core::Parameters;
///
/// let parameters = Parameters::new()
///     .with("average_depth_of_wells", 2250.0)
///     .with("producers_capacity", 5.9);
///
/// assert_eq!(parameters.get("producers_capacity"), Some(5.9));
/// assert_eq!(parameters.get("diesel_wells"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters {
    values: HashMap<String, f64>,
}

impl Parameters {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a parameter, replacing any existing value.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Looks up a parameter value by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Returns true if a parameter of this name was supplied.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterates over (name, value) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Number of supplied parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no parameter was supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, f64>> for Parameters {
    fn from(values: HashMap<String, f64>) -> Self {
        Parameters { values }
    }
}

impl<N: Into<String>> FromIterator<(N, f64)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (N, f64)>>(iter: I) -> Self {
        Parameters {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}
