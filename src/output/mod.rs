//! Module writing fixture pairs to disk and describing them to the caller

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    domain::{Determinant, Matrix, TestCase, TestIndex},
    error::io_error,
    shapes::ShapeRecipe,
};


pub(crate) const MATRIX_EXTENSION: &str = "dat";
pub(crate) const ANSWER_EXTENSION: &str = "ans";

/// Single-column record of an `.ans` file
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub(crate) struct AnswerRecord {
    pub(crate) determinant: i64,
}

pub(crate) fn record_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

/// Writes the `.dat` line: the size followed by all entries in row-major order.
pub fn write_matrix(writer: impl Write, matrix: &Matrix) -> Result<(), Error> {
    Ok(matrix_record(writer, matrix)?)
}

/// Writes the `.ans` line holding the determinant.
pub fn write_answer(writer: impl Write, determinant: Determinant) -> Result<(), Error> {
    Ok(answer_record(writer, determinant)?)
}

fn matrix_record(writer: impl Write, matrix: &Matrix) -> csv::Result<()> {
    let mut wtr = record_writer(writer);
    let fields = std::iter::once(matrix.size().to_string())
        .chain(matrix.entries().iter().map(i64::to_string));
    wtr.write_record(fields)?;
    wtr.flush()?;
    Ok(())
}

fn answer_record(writer: impl Write, determinant: Determinant) -> csv::Result<()> {
    let mut wtr = record_writer(writer);
    wtr.serialize(AnswerRecord {
        determinant: determinant.into(),
    })?;
    wtr.flush()?;
    Ok(())
}

/// Turns a failed write into an I/O error naming the file. Integer records cannot fail to
/// serialize, so every kind other than `Io` is reported through `io::Error::other`.
pub(crate) fn file_write_error(path: &Path, err: csv::Error) -> Error {
    match err.into_kind() {
        csv::ErrorKind::Io(source) => io_error(path, source),
        other => io_error(path, std::io::Error::other(format!("{other:?}"))),
    }
}

/// Persists fixture pairs as `<index>.dat` / `<index>.ans` inside one directory.
#[derive(Debug, Clone)]
pub struct FixtureWriter {
    dir: PathBuf,
}

impl FixtureWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn matrix_path(&self, index: TestIndex) -> PathBuf {
        self.dir.join(format!("{index}.{MATRIX_EXTENSION}"))
    }

    pub fn answer_path(&self, index: TestIndex) -> PathBuf {
        self.dir.join(format!("{index}.{ANSWER_EXTENSION}"))
    }

    /// Creates (or truncates) both files of the pair. Every failure is an [`Error::Io`] naming the
    /// file; files written before the failure are left in place.
    pub fn persist(&self, index: TestIndex, case: &TestCase) -> Result<(), Error> {
        let matrix_path = self.matrix_path(index);
        let file = File::create(&matrix_path).map_err(|e| io_error(&matrix_path, e))?;
        matrix_record(file, case.matrix()).map_err(|e| file_write_error(&matrix_path, e))?;

        let answer_path = self.answer_path(index);
        let file = File::create(&answer_path).map_err(|e| io_error(&answer_path, e))?;
        answer_record(file, case.determinant())
            .map_err(|e| file_write_error(&answer_path, e))?;

        Ok(())
    }
}

/// Public DTO describing one generated fixture pair. Its `Display` form is the progress log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRecord {
    pub index: u16,
    pub size: usize,
    pub description: String,
    pub determinant: i64,
}

impl GeneratedRecord {
    pub(crate) fn new(index: TestIndex, recipe: &ShapeRecipe, case: &TestCase) -> Self {
        Self {
            index: index.into(),
            size: case.matrix().size(),
            description: recipe.description(),
            determinant: case.determinant().into(),
        }
    }
}

impl fmt::Display for GeneratedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let GeneratedRecord {
            index,
            size,
            description,
            determinant,
        } = self;
        write!(f, " {index:03}: {size}x{size} {description}, det={determinant}")
    }
}
