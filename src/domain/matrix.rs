//! Module defining the square integer matrix written into the `.dat` files

/// A square matrix of integers, stored row-major.
///
/// The matrix is never empty: every constructor either receives a validated size or rejects
/// size zero, so `size() >= 1` holds for every instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    size: usize,
    entries: Vec<i64>,
}

impl Matrix {
    pub(crate) fn zeros(size: usize) -> Self {
        debug_assert!(size > 0, "matrix size must be positive");
        Self {
            size,
            entries: vec![0; size * size],
        }
    }

    pub(crate) fn identity(size: usize) -> Self {
        Self::from_diagonal(&vec![1; size])
    }

    pub(crate) fn from_diagonal(diagonal: &[i64]) -> Self {
        let mut matrix = Self::zeros(diagonal.len());
        for (i, &value) in diagonal.iter().enumerate() {
            matrix.set(i, i, value);
        }
        matrix
    }

    /// Builds a matrix from explicit rows. Fails if there are no rows or any row length differs
    /// from the number of rows.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, String> {
        let size = rows.len();
        if size == 0 {
            return Err("a matrix needs at least one row".to_string());
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(format!(
                "row {i} has {} entries, expected {size} for a square matrix",
                row.len()
            ));
        }
        Ok(Self {
            size,
            entries: rows.into_iter().flatten().collect(),
        })
    }

    pub(crate) fn from_entries(size: usize, entries: Vec<i64>) -> Result<Self, String> {
        if size == 0 {
            return Err("matrix size must be positive".to_string());
        }
        if entries.len() != size * size {
            return Err(format!(
                "expected {} entries for a {size}x{size} matrix, got {}",
                size * size,
                entries.len()
            ));
        }
        Ok(Self { size, entries })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.entries[row * self.size + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: i64) {
        self.entries[row * self.size + col] = value;
    }

    pub fn row(&self, row: usize) -> &[i64] {
        let start = row * self.size;
        &self.entries[start..start + self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i64]> {
        self.entries.chunks_exact(self.size)
    }

    /// All entries in row-major order
    pub fn entries(&self) -> &[i64] {
        &self.entries
    }

    pub fn diagonal(&self) -> impl Iterator<Item = i64> + '_ {
        (0..self.size).map(|i| self.get(i, i))
    }

    /// Overwrites row `to` with a copy of row `from`.
    pub(crate) fn copy_row(&mut self, from: usize, to: usize) {
        let size = self.size;
        self.entries
            .copy_within(from * size..(from + 1) * size, to * size);
    }

    /// True if every entry strictly below the main diagonal is zero.
    pub fn is_upper_triangular(&self) -> bool {
        self.rows()
            .enumerate()
            .all(|(i, row)| row[..i].iter().all(|&value| value == 0))
    }

    /// Product of the diagonal entries, or `None` if it overflows `i64`.
    pub fn diagonal_product(&self) -> Option<i64> {
        self.diagonal()
            .try_fold(1i64, |product, value| product.checked_mul(value))
    }
}
