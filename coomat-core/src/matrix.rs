//! Coordinate sparse matrix facade
//!
//! `CooMatrix` composes declared dimensions with a `CooStore` and
//! exposes construction, text loading, element access, and elementwise
//! addition.

use crate::element::MatrixElement;
use crate::error::{MatrixError, Result};
use crate::parse::{parse_matrix, ParsedMatrix};
use crate::store::CooStore;

/// Sparse matrix in coordinate-map representation
///
/// Dimensions are fixed at construction (or by a successful load) and
/// describe the logical shape; element access is not bounds-checked
/// against them. Out-of-range coordinates read as zero and are storable,
/// matching the relaxed contract of the text format, which carries no
/// per-entry bounds guarantee either. `add` compares declared
/// dimensions only.
#[derive(Debug, Clone, PartialEq)]
pub struct CooMatrix<E: MatrixElement = f64> {
    nrows: usize,
    ncols: usize,
    store: CooStore<E>,
}

impl<E: MatrixElement> CooMatrix<E> {
    /// Create an empty matrix with the given dimensions
    ///
    /// Construction is pure; loading is a separate, explicit step.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            store: CooStore::new(),
        }
    }

    /// Build a matrix by parsing the text encoding
    pub fn from_text(text: &str) -> Result<Self> {
        let parsed = parse_matrix(text)?;
        Ok(Self::from_parsed(&parsed))
    }

    /// Build a matrix from an already-parsed description
    ///
    /// Triples are applied in input order through `set_element`, so a
    /// later duplicate coordinate wins and an explicit zero erases an
    /// earlier value.
    pub fn from_parsed(parsed: &ParsedMatrix) -> Self {
        let mut matrix = Self::new(parsed.nrows, parsed.ncols);
        for &(row, col, value) in &parsed.entries {
            matrix.set_element(row, col, E::from_f64(value));
        }
        matrix
    }

    /// Replace this matrix's dimensions and entries from the text encoding
    ///
    /// Parses the whole text first; on any error the matrix is left
    /// exactly as it was. On success the previous dimensions and store
    /// are discarded.
    pub fn load_text(&mut self, text: &str) -> Result<()> {
        let parsed = parse_matrix(text)?;
        *self = Self::from_parsed(&parsed);
        Ok(())
    }

    /// Get the element at a coordinate, or zero if absent
    pub fn get_element(&self, row: usize, col: usize) -> E {
        self.store.get(row, col)
    }

    /// Set the element at a coordinate
    ///
    /// Setting exactly zero removes the entry.
    pub fn set_element(&mut self, row: usize, col: usize, value: E) {
        self.store.set(row, col, value);
    }

    /// Declared number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Declared number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of non-zero elements stored
    pub fn nnz(&self) -> usize {
        self.store.nnz()
    }

    /// Iterate over stored `(row, col, value)` triples
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, E)> + '_ {
        self.store.iter()
    }

    /// Elementwise sum of two matrices
    ///
    /// Both operands must declare identical dimensions; otherwise this
    /// fails with `DimensionMismatch` and produces no result matrix.
    pub fn add(&self, other: &CooMatrix<E>) -> Result<CooMatrix<E>> {
        if self.dimensions() != other.dimensions() {
            return Err(MatrixError::DimensionMismatch {
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }

        Ok(CooMatrix {
            nrows: self.nrows,
            ncols: self.ncols,
            store: self.store.merge_add(&other.store),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix_is_empty() {
        let matrix: CooMatrix = CooMatrix::new(4, 5);
        assert_eq!(matrix.dimensions(), (4, 5));
        assert_eq!(matrix.nnz(), 0);
        assert_eq!(matrix.get_element(0, 0), 0.0);
    }

    #[test]
    fn test_from_text() {
        let matrix: CooMatrix = CooMatrix::from_text("rows=3\ncols=3\n(0,0,5)\n(1,2,-3)").unwrap();
        assert_eq!(matrix.nrows(), 3);
        assert_eq!(matrix.ncols(), 3);
        assert_eq!(matrix.get_element(0, 0), 5.0);
        assert_eq!(matrix.get_element(1, 2), -3.0);
        assert_eq!(matrix.get_element(2, 2), 0.0);
    }

    #[test]
    fn test_duplicate_coordinates_last_write_wins() {
        let matrix: CooMatrix = CooMatrix::from_text("rows=2\ncols=2\n(0,0,1)\n(0,0,9)").unwrap();
        assert_eq!(matrix.get_element(0, 0), 9.0);
        assert_eq!(matrix.nnz(), 1);

        // A later explicit zero erases the earlier value
        let erased: CooMatrix = CooMatrix::from_text("rows=2\ncols=2\n(0,0,1)\n(0,0,0)").unwrap();
        assert_eq!(erased.get_element(0, 0), 0.0);
        assert_eq!(erased.nnz(), 0);
    }

    #[test]
    fn test_load_text_replaces_state() {
        let mut matrix: CooMatrix = CooMatrix::new(1, 1);
        matrix.set_element(0, 0, 7.0);

        matrix.load_text("rows=2\ncols=3\n(1,2,4)").unwrap();
        assert_eq!(matrix.dimensions(), (2, 3));
        assert_eq!(matrix.get_element(1, 2), 4.0);
        assert_eq!(matrix.get_element(0, 0), 0.0);
    }

    #[test]
    fn test_load_text_failure_leaves_matrix_untouched() {
        let mut matrix: CooMatrix = CooMatrix::new(2, 2);
        matrix.set_element(1, 1, 6.0);
        let before = matrix.clone();

        let result = matrix.load_text("rows=3\ncols=3\n(broken");
        assert!(result.is_err());
        assert_eq!(matrix, before);
    }

    #[test]
    fn test_add() {
        let x: CooMatrix = CooMatrix::from_text("rows=2\ncols=2\n(0,0,1)\n(1,1,2)").unwrap();
        let y: CooMatrix = CooMatrix::from_text("rows=2\ncols=2\n(0,0,3)\n(0,1,4)").unwrap();

        let sum = x.add(&y).unwrap();
        assert_eq!(sum.dimensions(), (2, 2));
        assert_eq!(sum.get_element(0, 0), 4.0);
        assert_eq!(sum.get_element(0, 1), 4.0);
        assert_eq!(sum.get_element(1, 1), 2.0);
        assert_eq!(sum.get_element(1, 0), 0.0);
    }

    #[test]
    fn test_add_is_commutative() {
        let x: CooMatrix = CooMatrix::from_text("rows=3\ncols=3\n(0,0,1.5)\n(2,1,-2)").unwrap();
        let y: CooMatrix = CooMatrix::from_text("rows=3\ncols=3\n(0,0,2.5)\n(1,1,8)").unwrap();

        let xy = x.add(&y).unwrap();
        let yx = y.add(&x).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(xy.get_element(row, col), yx.get_element(row, col));
            }
        }
    }

    #[test]
    fn test_add_zero_matrix_is_identity() {
        let x: CooMatrix = CooMatrix::from_text("rows=2\ncols=3\n(0,2,9)\n(1,0,-1)").unwrap();
        let zero: CooMatrix = CooMatrix::new(2, 3);

        let sum = x.add(&zero).unwrap();
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(sum.get_element(row, col), x.get_element(row, col));
            }
        }
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let a: CooMatrix = CooMatrix::new(2, 2);
        let b: CooMatrix = CooMatrix::new(3, 2);
        assert_eq!(
            a.add(&b),
            Err(MatrixError::DimensionMismatch {
                left: (2, 2),
                right: (3, 2),
            })
        );

        let c: CooMatrix = CooMatrix::new(2, 3);
        assert!(a.add(&c).is_err());
    }

    #[test]
    fn test_integer_elements() {
        let matrix: CooMatrix<i64> = CooMatrix::from_text("rows=2\ncols=2\n(0,1,3)").unwrap();
        assert_eq!(matrix.get_element(0, 1), 3);

        let sum = matrix.add(&matrix).unwrap();
        assert_eq!(sum.get_element(0, 1), 6);
    }
}
