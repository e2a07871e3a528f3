//! Helpers shared by the integration tests.

use std::path::Path;

use det_fixture_gen::{GeneratedRecord, SeededSource, TestCase, generate, load_fixture};

/// Runs the full catalog into `dir` with a fixed seed and collects the reported records.
pub fn generate_into(dir: &Path, seed: u64) -> (usize, Vec<GeneratedRecord>) {
    let mut records = Vec::new();
    let total = generate(dir, &mut SeededSource::from_seed(seed), |r| records.push(r))
        .unwrap_or_else(|e| panic!("generation into {} failed: {e}", dir.display()));
    (total, records)
}

/// Reads the pair with the given index back through the crate's reader.
pub fn read_case(dir: &Path, index: u16) -> TestCase {
    load_fixture(dir, index).unwrap_or_else(|e| panic!("cannot read fixture {index:03}: {e}"))
}

/// Raw whitespace-separated integers of `<index>.dat`, independent of the crate's reader.
pub fn read_tokens(dir: &Path, index: u16) -> Vec<i64> {
    let path = dir.join(format!("{index:03}.dat"));
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
        .split_whitespace()
        .map(|token| token.parse().expect("integer token"))
        .collect()
}

pub fn read_answer(dir: &Path, index: u16) -> String {
    let path = dir.join(format!("{index:03}.ans"));
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}
