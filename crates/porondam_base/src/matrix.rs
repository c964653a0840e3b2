//! Literal compatibility tables with directional lookup.
//!
//! Each matrix is written row by row exactly as the traditional table
//! gives it. Lookups always read the row of the first argument; no
//! symmetry is assumed, and a missing cell is an error rather than a
//! silent default.

use crate::error::CatalogError;

/// A classification value that can index a [`CompatibilityMatrix`].
pub trait MatrixClass: Copy + Eq + 'static {
    /// Label used in error messages.
    fn label(self) -> &'static str;
}

/// One literal row: the row class and its (column, value) cells.
pub type MatrixRow<K, V> = (K, &'static [(K, V)]);

/// An immutable, literal compatibility table.
#[derive(Debug)]
pub struct CompatibilityMatrix<K: 'static, V: 'static> {
    name: &'static str,
    rows: &'static [MatrixRow<K, V>],
}

impl<K: MatrixClass, V: Copy> CompatibilityMatrix<K, V> {
    pub const fn new(name: &'static str, rows: &'static [MatrixRow<K, V>]) -> Self {
        Self { name, rows }
    }

    /// Short name of the table ("yoni", "gana", "graha maitri").
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Value at `(row, column)`, read from the row of `row`.
    pub fn lookup(&self, row: K, column: K) -> Result<V, CatalogError> {
        self.rows
            .iter()
            .find(|(k, _)| *k == row)
            .and_then(|(_, cells)| cells.iter().find(|(k, _)| *k == column))
            .map(|&(_, v)| v)
            .ok_or(CatalogError::IncompleteMatrix {
                matrix: self.name,
                row: row.label(),
                column: column.label(),
            })
    }

    /// Verify that every ordered pair drawn from `classes` has a cell.
    pub fn check_complete(&self, classes: &[K]) -> Result<(), CatalogError> {
        for &row in classes {
            for &column in classes {
                self.lookup(row, column)?;
            }
        }
        Ok(())
    }
}
