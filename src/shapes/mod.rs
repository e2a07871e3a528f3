//! Module describing the matrix shapes whose determinant is known by construction

use crate::{
    Error,
    domain::TestCase,
    error::recipe_error,
    random::EntrySource,
};

mod builders;


/// Smallest matrix size any recipe may request. The singular shape needs two rows to duplicate.
pub const MIN_SIZE: usize = 2;

/// A recipe for one fixture: which shape to build and at which size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeRecipe {
    /// Hand-authored matrix with a manually verified determinant
    Known {
        rows: Vec<Vec<i64>>,
        determinant: i64,
        label: &'static str,
    },
    Diagonal {
        size: usize,
    },
    Identity {
        size: usize,
    },
    Singular {
        size: usize,
    },
    /// Upper triangular matrix with a size-dependent entry range
    Triangular {
        size: usize,
    },
}

impl ShapeRecipe {
    pub fn known(rows: Vec<Vec<i64>>, determinant: i64, label: &'static str) -> Self {
        Self::Known {
            rows,
            determinant,
            label,
        }
    }

    /// Short name of the shape kind, used in errors and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeRecipe::Known { .. } => "known",
            ShapeRecipe::Diagonal { .. } => "diagonal",
            ShapeRecipe::Identity { .. } => "identity",
            ShapeRecipe::Singular { .. } => "singular",
            ShapeRecipe::Triangular { .. } => "triangular",
        }
    }

    pub fn size(&self) -> usize {
        match self {
            ShapeRecipe::Known { rows, .. } => rows.len(),
            ShapeRecipe::Diagonal { size }
            | ShapeRecipe::Identity { size }
            | ShapeRecipe::Singular { size }
            | ShapeRecipe::Triangular { size } => *size,
        }
    }

    /// Human-readable description shown in the progress log.
    pub fn description(&self) -> String {
        match self {
            ShapeRecipe::Known { label, .. } => format!("({label})"),
            ShapeRecipe::Triangular { .. } => "upper triangular".to_string(),
            other => other.kind().to_string(),
        }
    }

    /// Builds the matrix and its exact determinant. Only the singular and triangular shapes
    /// consume values from `source`.
    pub fn build(&self, source: &mut impl EntrySource) -> Result<TestCase, Error> {
        let size = self.size();
        if size < MIN_SIZE {
            return Err(recipe_error(
                self.kind(),
                format!("size {size} is below the minimum of {MIN_SIZE}"),
            ));
        }

        match self {
            ShapeRecipe::Known {
                rows, determinant, ..
            } => builders::known(rows.clone(), *determinant),
            ShapeRecipe::Diagonal { size } => Ok(builders::diagonal(*size)),
            ShapeRecipe::Identity { size } => Ok(builders::identity(*size)),
            ShapeRecipe::Singular { size } => Ok(builders::singular(*size, source)),
            ShapeRecipe::Triangular { size } => builders::triangular(*size, source),
        }
    }
}
