//! On-disk table format.
//!
//! The preparation step writes, per archetype, one JSON file per table named
//! `<table>_<id>.json` (e.g. `alpha_egs_power_5.json`) plus
//! `valid_ranges_<id>.json`, all under the catalog's data directory.
//!
//! A coefficient-table file maps category label → array of term cells, in
//! category row order:
//!
//! ```json
//! {
//!   "climate change": [7.39e-1, "operational_CO2_emissions", 1.29],
//!   "ecotoxicity: freshwater": ["average_depth_of_wells", 1.0, 0.0]
//! }
//! ```
//!
//! A cell is a number, a numeric string (fitted floats are serialized as
//! `"%.6e"` text), or a parameter-name string. The valid-range file maps
//! parameter name → `[minimum, maximum, label]`.

use indexmap::IndexMap;

use geolca_core::{CoefficientTable, Slot, TableKind, ValidRange, ValidRanges};

/// File name of a coefficient table for an archetype.
pub(crate) fn table_file_name(kind: TableKind, id: &str) -> String {
    format!("{}_{id}.json", kind.name())
}

/// File name of the valid-range table for an archetype.
pub(crate) fn ranges_file_name(id: &str) -> String {
    format!("valid_ranges_{id}.json")
}

/// Decodes a coefficient-table document, preserving category row order.
pub(crate) fn decode_table(
    kind: TableKind,
    json: &str,
) -> Result<CoefficientTable, serde_json::Error> {
    let rows: IndexMap<String, Vec<Slot>> = serde_json::from_str(json)?;
    let (categories, cells) = rows.into_iter().unzip();
    Ok(CoefficientTable::new(kind, categories, cells))
}

/// Decodes a valid-range document, preserving parameter row order.
pub(crate) fn decode_ranges(json: &str) -> Result<ValidRanges, serde_json::Error> {
    let rows: IndexMap<String, (f64, f64, String)> = serde_json::from_str(json)?;
    Ok(rows
        .into_iter()
        .map(|(name, (min, max, label))| (name, ValidRange::new(min, max, label)))
        .collect())
}
