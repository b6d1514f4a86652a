//! Loading of prepared coefficient tables.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use geolca_core::{ArchetypeData, CoefficientTable, EngineError, Result, TableKind, TableSet};

use crate::config::StoreConfig;
use crate::format;

/// Read-only access to the prepared per-archetype coefficient tables.
///
/// The store never produces tables itself: when an archetype's files are
/// absent it fails with [`EngineError::MissingCoefficientData`] and the
/// caller is responsible for running the external preparation step before
/// retrying.
#[derive(Debug, Clone)]
pub struct CoefficientStore {
    config: StoreConfig,
}

impl CoefficientStore {
    /// Creates a store over a catalog.
    pub fn new(config: StoreConfig) -> Self {
        CoefficientStore { config }
    }

    /// The catalog this store serves.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Loads and validates the nine coefficient tables and the valid-range
    /// table of one archetype.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingCoefficientData`] if the id is not in the
    ///   catalog or any backing file is absent.
    /// - [`EngineError::MalformedCoefficientTable`] if a file cannot be read
    ///   or decoded, or the decoded tables violate the shape invariants.
    pub fn load(&self, id: &str) -> Result<ArchetypeData> {
        let archetype = self
            .config
            .get(id)
            .ok_or_else(|| EngineError::MissingCoefficientData(id.to_string()))?;

        let tables = TableSet {
            alpha: self.read_table(id, TableKind::Alpha)?,
            beta: self.read_table(id, TableKind::Beta)?,
            gamma: self.read_table(id, TableKind::Gamma)?,
            x: self.read_table(id, TableKind::X)?,
            y: self.read_table(id, TableKind::Y)?,
            z: self.read_table(id, TableKind::Z)?,
            u: self.read_table(id, TableKind::U)?,
            v: self.read_table(id, TableKind::V)?,
            w: self.read_table(id, TableKind::W)?,
        };

        let ranges_path = self.config.data_dir.join(format::ranges_file_name(id));
        let ranges_text = self.read_file(id, "valid_ranges", &ranges_path)?;
        let valid_ranges = format::decode_ranges(&ranges_text)
            .map_err(|e| malformed(id, "valid_ranges", e.to_string()))?;

        let data = ArchetypeData::new(archetype.clone(), tables, valid_ranges)?;
        let (categories, terms) = data.alpha().shape();
        debug!(
            archetype = id,
            categories,
            terms,
            ranges = data.valid_ranges().len(),
            "coefficient tables loaded"
        );
        Ok(data)
    }

    fn read_table(&self, id: &str, kind: TableKind) -> Result<CoefficientTable> {
        let path = self.config.data_dir.join(format::table_file_name(kind, id));
        let text = self.read_file(id, kind.name(), &path)?;
        format::decode_table(kind, &text).map_err(|e| malformed(id, kind.name(), e.to_string()))
    }

    /// Reads one backing file; an absent file means the preparation step has
    /// not run for this archetype, any other failure is a data defect.
    fn read_file(&self, id: &str, table: &str, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => EngineError::MissingCoefficientData(id.to_string()),
            _ => malformed(id, table, format!("{}: {e}", path.display())),
        })
    }
}

fn malformed(archetype: &str, table: &str, reason: String) -> EngineError {
    EngineError::MalformedCoefficientTable {
        archetype: archetype.to_string(),
        table: table.to_string(),
        reason,
    }
}
