//! Plant archetypes and their immutable coefficient data.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::range::ValidRanges;
use crate::table::{CoefficientTable, OperandTable, TableKind};

/// Well-known archetype identifiers of the published simplified models.
///
/// The reliability-threshold variants (20/15/10/5 %) are distinct archetypes
/// with their own fitted coefficient tables; nothing in the engine branches
/// on the threshold.
pub mod well_known {
    /// Conventional plant, 20 % reliability threshold (Paulillo et al. 2022).
    pub const CONVENTIONAL_POWER_20: &str = "conventional_power_20";
    /// Conventional plant, 15 % reliability threshold.
    pub const CONVENTIONAL_POWER_15: &str = "conventional_power_15";
    /// Conventional plant, 10 % reliability threshold.
    pub const CONVENTIONAL_POWER_10: &str = "conventional_power_10";
    /// Conventional plant, 5 % reliability threshold.
    pub const CONVENTIONAL_POWER_5: &str = "conventional_power_5";
    /// Enhanced geothermal system, 20 % reliability threshold.
    pub const EGS_POWER_20: &str = "egs_power_20";
    /// Enhanced geothermal system, 15 % reliability threshold.
    pub const EGS_POWER_15: &str = "egs_power_15";
    /// Enhanced geothermal system, 10 % reliability threshold.
    pub const EGS_POWER_10: &str = "egs_power_10";
    /// Enhanced geothermal system, 5 % reliability threshold.
    pub const EGS_POWER_5: &str = "egs_power_5";
    /// Enhanced geothermal heat plant (Douziech et al. 2021).
    pub const EGS_HEAT: &str = "egs_heat";

    /// All published archetype identifiers.
    pub const ALL: [&str; 9] = [
        CONVENTIONAL_POWER_20,
        CONVENTIONAL_POWER_15,
        CONVENTIONAL_POWER_10,
        CONVENTIONAL_POWER_5,
        EGS_POWER_20,
        EGS_POWER_15,
        EGS_POWER_10,
        EGS_POWER_5,
        EGS_HEAT,
    ];
}

/// Descriptor of one plant archetype.
///
/// The category and parameter-slot counts determine the shapes of the
/// archetype's backing tables and are enforced when those tables load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archetype {
    /// Archetype identifier, e.g. `egs_power_5`.
    pub id: String,
    /// Number of impact categories (table rows).
    pub categories: usize,
    /// Number of rows in the valid-range table.
    pub parameter_slots: usize,
}

impl Archetype {
    /// Creates an archetype descriptor.
    pub fn new(id: impl Into<String>, categories: usize, parameter_slots: usize) -> Self {
        Archetype {
            id: id.into(),
            categories,
            parameter_slots,
        }
    }
}

/// The nine symbolic tables of one archetype, prior to validation.
#[derive(Debug, Clone)]
pub struct TableSet {
    /// Multiplicative coefficients (constants only).
    pub alpha: CoefficientTable,
    /// Exponents for `z` (constants only).
    pub beta: CoefficientTable,
    /// Power-of-ten coefficients for `w` (constants only).
    pub gamma: CoefficientTable,
    /// First multiplicative operand.
    pub x: CoefficientTable,
    /// Second multiplicative operand.
    pub y: CoefficientTable,
    /// Operand raised to `beta`.
    pub z: CoefficientTable,
    /// First divisor operand.
    pub u: CoefficientTable,
    /// Second divisor operand.
    pub v: CoefficientTable,
    /// Operand scaled by `gamma`.
    pub w: CoefficientTable,
}

impl TableSet {
    fn iter(&self) -> impl Iterator<Item = &CoefficientTable> {
        [
            &self.alpha, &self.beta, &self.gamma, &self.x, &self.y, &self.z, &self.u, &self.v,
            &self.w,
        ]
        .into_iter()
    }
}

/// An archetype's validated, immutable model data.
///
/// Built once per archetype from the external preparation output and shared
/// read-only by every subsequent evaluation. The operand tables stay
/// symbolic; binding happens per call and never writes back.
#[derive(Debug, Clone)]
pub struct ArchetypeData {
    archetype: Archetype,
    categories: Vec<String>,
    alpha: OperandTable,
    beta: OperandTable,
    gamma: OperandTable,
    x: CoefficientTable,
    y: CoefficientTable,
    z: CoefficientTable,
    u: CoefficientTable,
    v: CoefficientTable,
    w: CoefficientTable,
    valid_ranges: ValidRanges,
}

impl ArchetypeData {
    /// Assembles and validates an archetype's model data.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedCoefficientTable`] when the nine
    /// tables disagree in shape or category labels, when a row is ragged,
    /// when `alpha`/`beta`/`gamma` carry a parameter reference, or when the
    /// loaded shapes contradict the descriptor.
    pub fn new(archetype: Archetype, tables: TableSet, valid_ranges: ValidRanges) -> Result<Self> {
        let (rows, terms) = tables.alpha.shape();
        let categories = tables.alpha.categories().to_vec();

        if categories.len() != rows {
            return Err(malformed(
                &archetype.id,
                TableKind::Alpha,
                format!("{} category labels for {rows} rows", categories.len()),
            ));
        }
        if rows != archetype.categories {
            return Err(malformed(
                &archetype.id,
                TableKind::Alpha,
                format!(
                    "expected {} categories, found {rows}",
                    archetype.categories
                ),
            ));
        }
        if valid_ranges.len() != archetype.parameter_slots {
            return Err(EngineError::MalformedCoefficientTable {
                archetype: archetype.id.clone(),
                table: "valid_ranges".into(),
                reason: format!(
                    "expected {} parameter rows, found {}",
                    archetype.parameter_slots,
                    valid_ranges.len()
                ),
            });
        }

        for table in tables.iter() {
            check_aligned(&archetype.id, table, &categories, terms)?;
        }

        let alpha = numeric(&archetype.id, &tables.alpha)?;
        let beta = numeric(&archetype.id, &tables.beta)?;
        let gamma = numeric(&archetype.id, &tables.gamma)?;

        Ok(ArchetypeData {
            archetype,
            categories,
            alpha,
            beta,
            gamma,
            x: tables.x,
            y: tables.y,
            z: tables.z,
            u: tables.u,
            v: tables.v,
            w: tables.w,
            valid_ranges,
        })
    }

    /// The archetype descriptor.
    pub fn archetype(&self) -> &Archetype {
        &self.archetype
    }

    /// Category labels in table row order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Fitted `alpha` coefficients.
    pub fn alpha(&self) -> &OperandTable {
        &self.alpha
    }

    /// Fitted `beta` exponents.
    pub fn beta(&self) -> &OperandTable {
        &self.beta
    }

    /// Fitted `gamma` power-of-ten coefficients.
    pub fn gamma(&self) -> &OperandTable {
        &self.gamma
    }

    /// The six symbolic operand tables, in `x,y,z,u,v,w` order.
    pub fn operands(&self) -> [&CoefficientTable; 6] {
        [&self.x, &self.y, &self.z, &self.u, &self.v, &self.w]
    }

    /// The valid-range table for this archetype.
    pub fn valid_ranges(&self) -> &ValidRanges {
        &self.valid_ranges
    }
}

fn malformed(archetype: &str, kind: TableKind, reason: String) -> EngineError {
    EngineError::MalformedCoefficientTable {
        archetype: archetype.to_string(),
        table: kind.name().to_string(),
        reason,
    }
}

/// Shape and label agreement against the `alpha` reference.
fn check_aligned(
    archetype: &str,
    table: &CoefficientTable,
    categories: &[String],
    terms: usize,
) -> Result<()> {
    if table.categories() != categories {
        return Err(malformed(
            archetype,
            table.kind(),
            "category labels disagree with alpha".into(),
        ));
    }
    for (category, row) in categories.iter().zip(table.rows()) {
        if row.len() != terms {
            return Err(malformed(
                archetype,
                table.kind(),
                format!(
                    "row `{category}` has {} terms, expected {terms}",
                    row.len()
                ),
            ));
        }
    }
    Ok(())
}

/// Converts a constants-only table, rejecting parameter references.
fn numeric(archetype: &str, table: &CoefficientTable) -> Result<OperandTable> {
    let mut rows = Vec::with_capacity(table.rows().len());
    for (category, row) in table.categories().iter().zip(table.rows()) {
        let mut values = Vec::with_capacity(row.len());
        for slot in row {
            match slot.as_literal() {
                Some(value) => values.push(value),
                None => {
                    return Err(malformed(
                        archetype,
                        table.kind(),
                        format!(
                            "row `{category}` references parameter {slot}; only fitted constants are allowed here"
                        ),
                    ))
                }
            }
        }
        rows.push(values);
    }
    Ok(OperandTable::new(table.kind(), rows))
}
