//! Parameter range validation.

use geolca_core::{EngineError, Parameters, Result, ValidRanges};

/// Checks supplied parameters against an archetype's valid-range table.
///
/// Bounds are inclusive. Parameters without a registered range pass through
/// unchecked: partial parameter sets are legitimate, so an unregistered name
/// is not an error. When several supplied values violate their ranges, the
/// first in range-table row order is reported, keeping diagnostics
/// deterministic.
///
/// Runs once per evaluation, before any formula work; a single violation
/// aborts the whole call.
pub fn check_ranges(parameters: &Parameters, ranges: &ValidRanges) -> Result<()> {
    for (name, range) in ranges.iter() {
        if let Some(value) = parameters.get(name) {
            if !range.contains(value) {
                return Err(EngineError::OutOfRangeParameter {
                    name: name.to_string(),
                    value,
                    min: range.min,
                    max: range.max,
                    label: range.label.clone(),
                });
            }
        }
    }
    Ok(())
}
