//! Resolution of symbolic operand tables against caller parameters.

use geolca_core::{CoefficientTable, EngineError, OperandTable, Parameters, Result, Slot};

/// Resolves one symbolic table into a numeric operand table.
///
/// Literal cells pass through unchanged; reference cells are replaced by the
/// named parameter's value. Binding is pure: the source table stays symbolic
/// and is reused by later calls with other parameter sets.
///
/// # Errors
///
/// Returns [`EngineError::UnknownParameterReference`] for a reference cell
/// whose name the caller did not supply.
pub fn bind(table: &CoefficientTable, parameters: &Parameters) -> Result<OperandTable> {
    let mut rows = Vec::with_capacity(table.rows().len());
    for row in table.rows() {
        let mut values = Vec::with_capacity(row.len());
        for slot in row {
            values.push(resolve(slot, parameters)?);
        }
        rows.push(values);
    }
    Ok(OperandTable::new(table.kind(), rows))
}

fn resolve(slot: &Slot, parameters: &Parameters) -> Result<f64> {
    match slot {
        Slot::Literal(value) => Ok(*value),
        Slot::Reference(name) => parameters
            .get(name)
            .ok_or_else(|| EngineError::UnknownParameterReference(name.clone())),
    }
}
