//! Row kernels over read-only CSR matrices
//!
//! Every stored entry contributes, including repeated columns within a
//! row. Dense operands are `f64`; stored values are widened with
//! [`MatrixElement::to_f64`].

use crate::csr_matrix::{ReadOnlyCsrMatrix, RowView};
use csrkit_core::{validate_dense_len, MatrixElement, Result};
use rayon::prelude::*;

/// Below this row count `matvec` stays on the calling thread
const PARALLEL_ROW_THRESHOLD: usize = 256;

/// Dot product of one stored row with a dense vector
///
/// `dense` must cover every column of the matrix.
pub fn row_dot<T: MatrixElement>(
    matrix: &ReadOnlyCsrMatrix<T>,
    row: usize,
    dense: &[f64],
) -> Result<f64> {
    validate_dense_len(dense.len(), matrix.num_columns())?;
    Ok(dot(matrix.row(row)?, dense))
}

/// Matrix-vector product `matrix * dense`
///
/// Rows are processed in parallel once the matrix is large enough.
pub fn matvec<T: MatrixElement>(matrix: &ReadOnlyCsrMatrix<T>, dense: &[f64]) -> Result<Vec<f64>> {
    validate_dense_len(dense.len(), matrix.num_columns())?;

    if matrix.num_rows() < PARALLEL_ROW_THRESHOLD {
        return Ok(matrix.rows().map(|row| dot(row, dense)).collect());
    }

    let result = (0..matrix.num_rows())
        .into_par_iter()
        .map(|i| matrix.row(i).map(|row| dot(row, dense)))
        .collect::<Result<Vec<f64>>>()?;
    log::trace!("parallel matvec over {} rows", result.len());
    Ok(result)
}

fn dot<T: MatrixElement>(row: RowView<'_, T>, dense: &[f64]) -> f64 {
    row.into_iter()
        .map(|(col, val)| val.to_f64() * dense[col as usize])
        .sum()
}
