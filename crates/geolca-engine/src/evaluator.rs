//! The generalized impact formula.

use geolca_core::{ImpactResult, OperandTable};

/// Evaluates the generalized regression model over fully numeric tables.
///
/// For category row `i` and term column `t`:
///
/// ```text
/// term(i,t) = alpha[i,t] * x[i,t] * y[i,t] * z[i,t]^beta[i,t]
///             * 10^(gamma[i,t] * w[i,t]) / (u[i,t] * v[i,t])
/// impact[i] = Σ_t term(i,t)
/// ```
///
/// One result entry is produced per category, in `categories` row order.
/// Arithmetic follows IEEE semantics throughout: a division by zero or a
/// negative base raised to a non-integer exponent yields infinity or NaN in
/// the affected category's value, surfaced as-is rather than trapped or
/// clamped — the caller sees exactly what the regression arithmetic
/// produced.
#[allow(clippy::too_many_arguments)]
pub fn evaluate(
    categories: &[String],
    alpha: &OperandTable,
    beta: &OperandTable,
    gamma: &OperandTable,
    x: &OperandTable,
    y: &OperandTable,
    z: &OperandTable,
    u: &OperandTable,
    v: &OperandTable,
    w: &OperandTable,
) -> ImpactResult {
    ImpactResult::from_rows(categories.iter().enumerate().map(|(i, category)| {
        let impact: f64 = alpha
            .row(i)
            .iter()
            .enumerate()
            .map(|(t, a)| {
                a * x.row(i)[t] * y.row(i)[t] * z.row(i)[t].powf(beta.row(i)[t])
                    * 10f64.powf(gamma.row(i)[t] * w.row(i)[t])
                    / (u.row(i)[t] * v.row(i)[t])
            })
            .sum();
        (category.clone(), impact)
    }))
}
