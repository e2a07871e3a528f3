//! Module with one builder per shape. Every determinant is derived from the construction itself.

use std::ops::Range;

use crate::{
    Error,
    domain::{Determinant, Matrix, TestCase},
    error::recipe_error,
    random::EntrySource,
};

/// From this size on the diagonal shape uses only ones, so the determinant stays 1.
const DIAGONAL_ALL_ONES_FROM: usize = 50;

const SINGULAR_ENTRIES: Range<i64> = 1..10;

const TRIANGULAR_SMALL_MAX: usize = 5;
const TRIANGULAR_MEDIUM_MAX: usize = 10;
const TRIANGULAR_SMALL_ENTRIES: Range<i64> = 1..6;
const TRIANGULAR_UPPER_ENTRIES: Range<i64> = 0..3;
const TRIANGULAR_MEDIUM_DIAGONAL: Range<i64> = 1..4;

pub(super) fn known(rows: Vec<Vec<i64>>, determinant: i64) -> Result<TestCase, Error> {
    let matrix = Matrix::from_rows(rows).map_err(|msg| recipe_error("known", msg))?;
    Ok(TestCase::new(matrix, Determinant::new(determinant)))
}

/// Diagonal alternating 1, 2, 1, ... below [`DIAGONAL_ALL_ONES_FROM`], all ones from there on.
pub(super) fn diagonal(size: usize) -> TestCase {
    if size >= DIAGONAL_ALL_ONES_FROM {
        return TestCase::new(Matrix::identity(size), Determinant::new(1));
    }

    let diagonal: Vec<i64> = (0..size).map(|i| if i % 2 == 0 { 1 } else { 2 }).collect();
    let matrix = Matrix::from_diagonal(&diagonal);
    // one 2 per pair of diagonal positions; size < 50 keeps the shift far below 63
    let determinant = 1i64 << (size / 2);
    debug_assert_eq!(matrix.diagonal_product(), Some(determinant));

    TestCase::new(matrix, Determinant::new(determinant))
}

pub(super) fn identity(size: usize) -> TestCase {
    TestCase::new(Matrix::identity(size), Determinant::new(1))
}

/// Random entries with row 1 overwritten by row 0, so the determinant is 0.
pub(super) fn singular(size: usize, source: &mut impl EntrySource) -> TestCase {
    debug_assert!(size >= 2, "a singular matrix needs two rows");

    let mut matrix = Matrix::zeros(size);
    for row in 0..size {
        for col in 0..size {
            matrix.set(row, col, source.draw(SINGULAR_ENTRIES));
        }
    }
    matrix.copy_row(0, 1);

    TestCase::new(matrix, Determinant::new(0))
}

/// Upper triangular matrix. The entry ranges shrink with the size to keep the diagonal product
/// inside `i64`:
/// - up to 5: upper triangle from [1, 6)
/// - up to 10: upper triangle from [0, 3), then a diagonal from [1, 4)
/// - above: strictly upper triangle from [0, 3), unit diagonal
pub(super) fn triangular(size: usize, source: &mut impl EntrySource) -> Result<TestCase, Error> {
    let mut matrix = Matrix::zeros(size);

    if size <= TRIANGULAR_SMALL_MAX {
        fill_upper(&mut matrix, source, TRIANGULAR_SMALL_ENTRIES, true);
    } else if size <= TRIANGULAR_MEDIUM_MAX {
        fill_upper(&mut matrix, source, TRIANGULAR_UPPER_ENTRIES, true);
        for i in 0..size {
            matrix.set(i, i, source.draw(TRIANGULAR_MEDIUM_DIAGONAL));
        }
    } else {
        fill_upper(&mut matrix, source, TRIANGULAR_UPPER_ENTRIES, false);
        for i in 0..size {
            matrix.set(i, i, 1);
        }
    }

    let determinant = matrix
        .diagonal_product()
        .ok_or_else(|| recipe_error("triangular", "diagonal product overflows i64"))?;

    Ok(TestCase::new(matrix, Determinant::new(determinant)))
}

fn fill_upper(
    matrix: &mut Matrix,
    source: &mut impl EntrySource,
    entries: Range<i64>,
    include_diagonal: bool,
) {
    let size = matrix.size();
    for row in 0..size {
        let first_col = if include_diagonal { row } else { row + 1 };
        for col in first_col..size {
            matrix.set(row, col, source.draw(entries.clone()));
        }
    }
}
