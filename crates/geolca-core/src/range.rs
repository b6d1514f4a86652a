//! Literature-valid parameter ranges.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The literature-valid range of one parameter.
///
/// Bounds are inclusive: the regression fit is considered reliable at the
/// bounds themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidRange {
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
    /// Human-readable parameter label, used in diagnostics.
    pub label: String,
}

impl ValidRange {
    /// Creates a range with a diagnostic label.
    pub fn new(min: f64, max: f64, label: impl Into<String>) -> Self {
        ValidRange {
            min,
            max,
            label: label.into(),
        }
    }

    /// Returns true if `value` lies within the inclusive bounds.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The valid-range table of an archetype: parameter name → range.
///
/// Only parameters present here are bounds-checked; a parameter absent from
/// the table is unconstrained for the archetype. Row order is preserved from
/// the backing table so that diagnostics are deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidRanges {
    ranges: IndexMap<String, ValidRange>,
}

impl ValidRanges {
    /// Creates an empty table (every parameter unconstrained).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a range, replacing any existing entry for the same name.
    pub fn insert(&mut self, name: impl Into<String>, range: ValidRange) {
        self.ranges.insert(name.into(), range);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, range: ValidRange) -> Self {
        self.insert(name, range);
        self
    }

    /// Looks up the range registered for a parameter name.
    pub fn get(&self, name: &str) -> Option<&ValidRange> {
        self.ranges.get(name)
    }

    /// Iterates entries in table row order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidRange)> {
        self.ranges.iter().map(|(name, range)| (name.as_str(), range))
    }

    /// Number of registered ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns true if no range is registered.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl FromIterator<(String, ValidRange)> for ValidRanges {
    fn from_iter<I: IntoIterator<Item = (String, ValidRange)>>(iter: I) -> Self {
        ValidRanges {
            ranges: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let range = ValidRange::new(660.0, 4000.0, "Average depth of wells");
        assert!(range.contains(660.0));
        assert!(range.contains(4000.0));
        assert!(range.contains(2250.0));
        assert!(!range.contains(659.999));
        assert!(!range.contains(4000.001));
    }

    #[test]
    fn row_order_is_preserved() {
        let ranges = ValidRanges::new()
            .with("depth", ValidRange::new(660.0, 4000.0, "Depth"))
            .with("capacity", ValidRange::new(0.0, 20.0, "Capacity"));
        let names: Vec<&str> = ranges.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["depth", "capacity"]);
    }
}
