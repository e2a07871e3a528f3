mod domain;
mod engine;
mod error;
mod input;
mod output;
mod random;
mod shapes;
mod telemetry;

use std::path::PathBuf;

pub use domain::{Determinant, Matrix, TestCase};
pub use engine::standard_catalog;
pub use error::Error;
pub use input::{load_fixture, read_fixture};
pub use output::{GeneratedRecord, write_answer, write_matrix};
pub use random::{EntrySource, SeededSource};
pub use shapes::{MIN_SIZE, ShapeRecipe};
pub use telemetry::setup_logging;

/// Generates the full standard catalog of determinant fixtures into `out_dir`.
///
/// This is the main entry point of the crate. Each case of [`standard_catalog`] is built,
/// written as `<index>.dat` (size followed by the row-major entries) and `<index>.ans` (the
/// exact determinant), and then reported to `on_generated`. Indices start at `001` and have no
/// gaps. The return value is the number of written pairs.
///
/// # Error handling
///
/// Generation is all-or-nothing per case: the first error (an unwritable directory, for
/// instance) aborts the run and is returned. Pairs written before the failure remain on disk.
///
/// # Example
///
/// ```no_run
/// use det_fixture_gen::{SeededSource, generate};
///
/// let mut source = SeededSource::from_seed(42);
/// let total = generate("fixtures", &mut source, |record| println!("{record}")).unwrap();
/// println!("Generated {total} test pairs!");
/// ```
pub fn generate(
    out_dir: impl Into<PathBuf>,
    source: &mut impl EntrySource,
    on_generated: impl FnMut(GeneratedRecord),
) -> Result<usize, Error> {
    generate_from(standard_catalog(), out_dir, source, on_generated)
}

/// Same as [`generate`], but for a caller-provided sequence of recipes.
pub fn generate_from(
    recipes: impl IntoIterator<Item = ShapeRecipe>,
    out_dir: impl Into<PathBuf>,
    source: &mut impl EntrySource,
    on_generated: impl FnMut(GeneratedRecord),
) -> Result<usize, Error> {
    let writer = output::FixtureWriter::new(out_dir);
    engine::run_recipes(recipes, source, &writer, on_generated)
}
