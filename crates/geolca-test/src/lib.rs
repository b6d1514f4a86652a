//! Shared test fixtures for geolca crates.
//!
//! This crate provides small, fully-specified archetype models for testing.
//! It does NOT depend on `geolca-store` or `geolca-engine`, so both can use
//! it as a dev-dependency without cycles.
//!
//! - [`ModelFixture`] - a buildable in-memory archetype model that can also
//!   be written out as a backing data directory
//! - [`single_term`] - the canonical one-category, one-term model
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! geolca-test = { workspace = true }
//! ```

use std::fs;
use std::io;
use std::path::Path;

use indexmap::IndexMap;

use geolca_core::{
    Archetype, ArchetypeData, CoefficientTable, Slot, TableKind, TableSet, ValidRange, ValidRanges,
};

/// A buildable archetype model for tests.
///
/// Starts from neutral cells (`alpha`,`x`,`y`,`z`,`u`,`v` = 1 and
/// `beta`,`gamma`,`w` = 0, so every term evaluates to 1) and lets tests
/// overwrite individual cells with literals or parameter references.
#[derive(Debug, Clone)]
pub struct ModelFixture {
    id: String,
    categories: Vec<String>,
    cells: [Vec<Vec<Slot>>; 9],
    valid_ranges: ValidRanges,
}

impl ModelFixture {
    /// Creates a neutral model: every term of every category evaluates to 1.
    pub fn neutral(id: impl Into<String>, categories: &[&str], terms: usize) -> Self {
        let cells = TableKind::ALL.map(|kind| {
            let fill = match kind {
                TableKind::Beta | TableKind::Gamma | TableKind::W => 0.0,
                _ => 1.0,
            };
            categories
                .iter()
                .map(|_| vec![Slot::Literal(fill); terms])
                .collect()
        });
        ModelFixture {
            id: id.into(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            cells,
            valid_ranges: ValidRanges::new(),
        }
    }

    /// Overwrites one cell. `slot` accepts `f64` literals and `&str` text
    /// (numeric text becomes a literal, other text a parameter reference).
    pub fn cell(mut self, kind: TableKind, row: usize, term: usize, slot: impl Into<Slot>) -> Self {
        self.cells[table_index(kind)][row][term] = slot.into();
        self
    }

    /// Registers a valid range for a parameter.
    pub fn range(mut self, name: &str, min: f64, max: f64, label: &str) -> Self {
        self.valid_ranges
            .insert(name, ValidRange::new(min, max, label));
        self
    }

    /// The archetype descriptor matching this fixture.
    pub fn archetype(&self) -> Archetype {
        Archetype::new(
            self.id.clone(),
            self.categories.len(),
            self.valid_ranges.len(),
        )
    }

    /// The nine symbolic tables.
    pub fn table_set(&self) -> TableSet {
        let mut tables = TableKind::ALL
            .iter()
            .map(|kind| {
                CoefficientTable::new(
                    *kind,
                    self.categories.clone(),
                    self.cells[table_index(*kind)].clone(),
                )
            })
            .collect::<Vec<_>>()
            .into_iter();
        // Order matches TableKind::ALL.
        TableSet {
            alpha: tables.next().unwrap(),
            beta: tables.next().unwrap(),
            gamma: tables.next().unwrap(),
            x: tables.next().unwrap(),
            y: tables.next().unwrap(),
            z: tables.next().unwrap(),
            u: tables.next().unwrap(),
            v: tables.next().unwrap(),
            w: tables.next().unwrap(),
        }
    }

    /// Validated archetype data.
    ///
    /// # Panics
    /// Panics if the fixture is internally inconsistent; fixtures are test
    /// code and expected to be well-formed.
    pub fn data(&self) -> ArchetypeData {
        ArchetypeData::new(self.archetype(), self.table_set(), self.valid_ranges.clone())
            .expect("fixture model must be well-formed")
    }

    /// Writes the fixture as a backing data directory: one JSON file per
    /// table (`<table>_<id>.json`) plus `valid_ranges_<id>.json`.
    pub fn write_dir(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)?;
        for kind in TableKind::ALL {
            let rows: IndexMap<&str, &Vec<Slot>> = self
                .categories
                .iter()
                .map(String::as_str)
                .zip(&self.cells[table_index(kind)])
                .collect();
            let path = dir.join(format!("{}_{}.json", kind.name(), self.id));
            fs::write(path, serde_json::to_vec_pretty(&rows)?)?;
        }

        let ranges: IndexMap<&str, (f64, f64, &str)> = self
            .valid_ranges
            .iter()
            .map(|(name, range)| (name, (range.min, range.max, range.label.as_str())))
            .collect();
        let path = dir.join(format!("valid_ranges_{}.json", self.id));
        fs::write(path, serde_json::to_vec_pretty(&ranges)?)?;
        Ok(())
    }
}

fn table_index(kind: TableKind) -> usize {
    TableKind::ALL
        .iter()
        .position(|k| *k == kind)
        .expect("kind is one of the nine tables")
}

/// The canonical one-category, one-term model:
/// `alpha=2, x=3, y=1, z=4, beta=1, gamma=0, w=0, u=1, v=1`, which evaluates
/// to `2*3*1*4^1*10^(0*0)/(1*1) = 24.0` for its single category.
pub fn single_term(id: &str) -> ModelFixture {
    ModelFixture::neutral(id, &["climate change"], 1)
        .cell(TableKind::Alpha, 0, 0, 2.0)
        .cell(TableKind::X, 0, 0, 3.0)
        .cell(TableKind::Z, 0, 0, 4.0)
        .cell(TableKind::Beta, 0, 0, 1.0)
}
