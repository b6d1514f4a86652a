//! Coefficient and operand tables.
//!
//! An archetype's regression model is stored as nine row-aligned tables
//! named `alpha`, `beta`, `gamma`, `x`, `y`, `z`, `u`, `v` and `w`. Rows are
//! impact categories, columns are the additive terms of the generalized
//! formula. The first three tables carry fitted constants only; the other
//! six may mix constants with symbolic parameter references.

use std::fmt;

use crate::slot::Slot;

/// Identifies one of the nine tables of an archetype model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Multiplicative regression coefficient.
    Alpha,
    /// Exponent applied to the `z` operand.
    Beta,
    /// Power-of-ten coefficient applied to the `w` operand.
    Gamma,
    /// First multiplicative operand.
    X,
    /// Second multiplicative operand.
    Y,
    /// Operand raised to `beta`.
    Z,
    /// First divisor operand.
    U,
    /// Second divisor operand.
    V,
    /// Operand scaled by `gamma` in the power-of-ten factor.
    W,
}

impl TableKind {
    /// All nine table kinds, in canonical order.
    pub const ALL: [TableKind; 9] = [
        TableKind::Alpha,
        TableKind::Beta,
        TableKind::Gamma,
        TableKind::X,
        TableKind::Y,
        TableKind::Z,
        TableKind::U,
        TableKind::V,
        TableKind::W,
    ];

    /// The six operand tables resolved against caller parameters.
    pub const OPERANDS: [TableKind; 6] = [
        TableKind::X,
        TableKind::Y,
        TableKind::Z,
        TableKind::U,
        TableKind::V,
        TableKind::W,
    ];

    /// Table name as used in file names and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TableKind::Alpha => "alpha",
            TableKind::Beta => "beta",
            TableKind::Gamma => "gamma",
            TableKind::X => "x",
            TableKind::Y => "y",
            TableKind::Z => "z",
            TableKind::U => "u",
            TableKind::V => "v",
            TableKind::W => "w",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A symbolic coefficient table: category rows of [`Slot`] cells.
///
/// The table stays symbolic for the lifetime of the archetype; resolution
/// against a parameter set produces a fresh [`OperandTable`] per call.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    kind: TableKind,
    categories: Vec<String>,
    cells: Vec<Vec<Slot>>,
}

impl CoefficientTable {
    /// Creates a table from category labels and their cell rows.
    ///
    /// Rows are expected to align one-to-one with `categories`; alignment
    /// across the nine tables of an archetype is enforced when the tables
    /// are assembled into archetype data.
    pub fn new(kind: TableKind, categories: Vec<String>, cells: Vec<Vec<Slot>>) -> Self {
        CoefficientTable {
            kind,
            categories,
            cells,
        }
    }

    /// Which of the nine tables this is.
    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// Category labels, in row order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// (row count, term count). The term count is taken from the first row.
    pub fn shape(&self) -> (usize, usize) {
        let terms = self.cells.first().map_or(0, Vec::len);
        (self.cells.len(), terms)
    }

    /// Cell rows, aligned with [`categories`](Self::categories).
    pub fn rows(&self) -> &[Vec<Slot>] {
        &self.cells
    }
}

/// A fully numeric table: fitted constants, or operands after binding.
#[derive(Debug, Clone, PartialEq)]
pub struct OperandTable {
    kind: TableKind,
    cells: Vec<Vec<f64>>,
}

impl OperandTable {
    /// Creates a numeric table.
    pub fn new(kind: TableKind, cells: Vec<Vec<f64>>) -> Self {
        OperandTable { kind, cells }
    }

    /// Which of the nine tables this is.
    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// (row count, term count). The term count is taken from the first row.
    pub fn shape(&self) -> (usize, usize) {
        let terms = self.cells.first().map_or(0, Vec::len);
        (self.cells.len(), terms)
    }

    /// The numeric row for a category index.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.cells[index]
    }
}
