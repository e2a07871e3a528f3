//! Module for the driver enumerating the catalog and handing every case to the writer

use tracing::{debug, info};

use crate::{
    Error,
    domain::{MAX_TEST_INDEX, TestIndex},
    output::{FixtureWriter, GeneratedRecord},
    random::EntrySource,
    shapes::ShapeRecipe,
};

mod catalog;


pub use catalog::standard_catalog;

/// Hands out the dense, gapless sequence of test indices 1, 2, 3, ...
#[derive(Debug)]
pub(crate) struct IndexCounter {
    next: u16,
}

impl Default for IndexCounter {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IndexCounter {
    pub(crate) fn advance(&mut self) -> Result<TestIndex, Error> {
        if self.next > MAX_TEST_INDEX {
            return Err(Error::IndexExhausted {
                last: MAX_TEST_INDEX,
            });
        }
        let index = TestIndex::new(self.next);
        self.next += 1;
        Ok(index)
    }

    /// Number of indices handed out so far.
    pub(crate) fn issued(&self) -> usize {
        usize::from(self.next - 1)
    }
}

///
/// Builds and persists every recipe in order and returns the number of written pairs.
/// Stops at the first error; pairs written before it stay on disk.
///
pub(crate) fn run_recipes(
    recipes: impl IntoIterator<Item = ShapeRecipe>,
    source: &mut impl EntrySource,
    writer: &FixtureWriter,
    mut on_generated: impl FnMut(GeneratedRecord),
) -> Result<usize, Error> {
    let mut counter = IndexCounter::default();

    for recipe in recipes {
        let case = recipe.build(source)?;
        let index = counter.advance()?;
        writer.persist(index, &case)?;

        debug!(
            index = %index,
            kind = recipe.kind(),
            size = recipe.size(),
            determinant = %case.determinant(),
            "wrote fixture pair"
        );
        on_generated(GeneratedRecord::new(index, &recipe, &case));
    }

    let total = counter.issued();
    info!(total, dir = %writer.dir().display(), "fixture generation finished");
    Ok(total)
}
