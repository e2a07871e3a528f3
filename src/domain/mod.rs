//! Module for the types defining the fixture domain.

use std::fmt;

mod matrix;


pub use matrix::Matrix;

/// Largest index addressable by the zero-padded 3-digit file names.
pub(crate) const MAX_TEST_INDEX: u16 = 999;

/// The expected determinant recorded in an `.ans` file.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Determinant(i64);

impl Determinant {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<Determinant> for i64 {
    fn from(value: Determinant) -> Self {
        value.0
    }
}

impl fmt::Display for Determinant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based sequential id of a fixture pair. Displayed zero-padded to 3 digits, which is also the
/// stem of both file names.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct TestIndex(u16);

impl TestIndex {
    pub(crate) fn new(index: u16) -> Self {
        debug_assert!(
            (1..=MAX_TEST_INDEX).contains(&index),
            "test index out of the 3-digit range"
        );
        Self(index)
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl From<TestIndex> for u16 {
    fn from(value: TestIndex) -> Self {
        value.0
    }
}

impl fmt::Display for TestIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// A matrix paired with its exact determinant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    matrix: Matrix,
    determinant: Determinant,
}

impl TestCase {
    pub(crate) fn new(matrix: Matrix, determinant: Determinant) -> Self {
        Self {
            matrix,
            determinant,
        }
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn determinant(&self) -> Determinant {
        self.determinant
    }
}
