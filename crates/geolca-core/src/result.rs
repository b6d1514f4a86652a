//! Evaluated impact results.

use serde::{Deserialize, Serialize};

/// One evaluated impact category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactEntry {
    /// Category label, as assigned by the archetype's `alpha` table
    /// (e.g. "climate change", "ecotoxicity: freshwater").
    pub category: String,
    /// Impact value per functional unit. May be NaN or infinite when the
    /// underlying arithmetic produces them; such values are surfaced, not
    /// replaced.
    pub value: f64,
}

/// The ordered outcome of one evaluation: one entry per impact category.
///
/// Entries appear in the archetype's table row order, never sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImpactResult {
    entries: Vec<ImpactEntry>,
}

impl ImpactResult {
    /// Creates a result from (category, value) rows, preserving their order.
    pub fn from_rows<C: Into<String>, I: IntoIterator<Item = (C, f64)>>(rows: I) -> Self {
        ImpactResult {
            entries: rows
                .into_iter()
                .map(|(category, value)| ImpactEntry {
                    category: category.into(),
                    value,
                })
                .collect(),
        }
    }

    /// Entries in table row order.
    pub fn entries(&self) -> &[ImpactEntry] {
        &self.entries
    }

    /// Looks up the value for a category label.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.value)
    }

    /// Iterates entries in table row order.
    pub fn iter(&self) -> std::slice::Iter<'_, ImpactEntry> {
        self.entries.iter()
    }

    /// Number of impact categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the result holds no categories.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for ImpactResult {
    type Item = ImpactEntry;
    type IntoIter = std::vec::IntoIter<ImpactEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ImpactResult {
    type Item = &'a ImpactEntry;
    type IntoIter = std::slice::Iter<'a, ImpactEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_category() {
        let result = ImpactResult::from_rows([("climate change", 77.9), ("acidification", 0.4)]);
        assert_eq!(result.get("climate change"), Some(77.9));
        assert_eq!(result.get("ozone depletion"), None);
    }

    #[test]
    fn preserves_row_order() {
        let result = ImpactResult::from_rows([("z-category", 1.0), ("a-category", 2.0)]);
        let labels: Vec<&str> = result.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(labels, ["z-category", "a-category"]);
    }
}
