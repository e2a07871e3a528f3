//! Module reading fixture pairs back, following the contract every consumer of the files relies on:
//! `N` followed by `N * N` integers in the `.dat` file, one integer in the `.ans` file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{
    domain::{Determinant, MAX_TEST_INDEX, Matrix, TestCase, TestIndex},
    error::{Error, fixture_error, io_error},
    output::{AnswerRecord, FixtureWriter},
};


/// Parses a `.dat` and an `.ans` stream into a test case.
pub fn read_fixture(matrix_reader: impl Read, answer_reader: impl Read) -> Result<TestCase, Error> {
    let matrix = parse_matrix(matrix_reader)?;
    let determinant = parse_answer(answer_reader)?;
    Ok(TestCase::new(matrix, determinant))
}

/// Loads the pair `<index>.dat` / `<index>.ans` from `dir`.
pub fn load_fixture(dir: impl AsRef<Path>, index: u16) -> Result<TestCase, Error> {
    if !(1..=MAX_TEST_INDEX).contains(&index) {
        return Err(fixture_error(format!(
            "index {index} is outside 1..={MAX_TEST_INDEX}"
        )));
    }
    let writer = FixtureWriter::new(dir.as_ref());
    let index = TestIndex::new(index);

    let matrix_path = writer.matrix_path(index);
    let answer_path = writer.answer_path(index);
    let matrix_file = File::open(&matrix_path).map_err(|e| io_error(&matrix_path, e))?;
    let answer_file = File::open(&answer_path).map_err(|e| io_error(&answer_path, e))?;

    read_fixture(matrix_file, answer_file)
}

fn record_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

pub(crate) fn parse_matrix(reader: impl Read) -> Result<Matrix, Error> {
    let mut tokens = Vec::new();
    for field in fields(reader)?.iter() {
        let value = field
            .parse::<i64>()
            .map_err(|e| fixture_error(format!("invalid integer {field:?}: {e}")))?;
        tokens.push(value);
    }

    let Some((&size, entries)) = tokens.split_first() else {
        return Err(fixture_error("empty matrix file"));
    };
    let size = usize::try_from(size)
        .ok()
        .filter(|&size| size > 0)
        .ok_or_else(|| fixture_error(format!("matrix size must be positive, got {size}")))?;
    let expected = size
        .checked_mul(size)
        .ok_or_else(|| fixture_error(format!("matrix size {size} is too large")))?;
    if entries.len() != expected {
        return Err(fixture_error(format!(
            "size {size} needs {expected} entries, found {}",
            entries.len()
        )));
    }

    Matrix::from_entries(size, entries.to_vec()).map_err(fixture_error)
}

pub(crate) fn parse_answer(reader: impl Read) -> Result<Determinant, Error> {
    let fields = fields(reader)?;
    if fields.len() != 1 {
        return Err(fixture_error(format!(
            "answer file must hold a single integer, found {} values",
            fields.len()
        )));
    }

    let answer: AnswerRecord = fields.deserialize(None)?;
    Ok(Determinant::new(answer.determinant))
}

/// Collects every whitespace-separated token of every line into one record. The reader only
/// splits on spaces, so runs of spaces show up as empty fields and tabs stay inside a field;
/// re-splitting each field on whitespace handles both.
fn fields(reader: impl Read) -> Result<csv::StringRecord, Error> {
    let mut fields = csv::StringRecord::new();
    for result in record_reader(reader).records() {
        let record = result?;
        for token in record.iter().flat_map(str::split_whitespace) {
            fields.push_field(token);
        }
    }
    Ok(fields)
}
