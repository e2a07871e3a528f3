use anyhow::{Context, Result};
use det_fixture_gen::{SeededSource, generate, setup_logging};
use std::{env, fs, path::PathBuf};

const SEED_VAR: &str = "FIXTURE_SEED";

fn main() -> Result<()> {
    setup_logging()?;

    let out_dir = get_output_dir()?;
    let mut source = get_entry_source()?;

    let rule = "=".repeat(60);
    println!("{rule}");
    println!("  Generating Matrix E2E Tests (Square Matrices Only)");
    println!("{rule}");

    let total = generate(&out_dir, &mut source, |record| println!("{record}"))?;

    println!("{rule}");
    println!("Generated {total} test pairs!");
    println!("{rule}");

    Ok(())
}

// Defaults to the working directory, like the fixtures were always generated
fn get_output_dir() -> Result<PathBuf> {
    let dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&dir)
        .with_context(|| format!("cannot create output directory {}", dir.display()))?;
    Ok(dir)
}

fn get_entry_source() -> Result<SeededSource> {
    let Ok(raw) = env::var(SEED_VAR) else {
        return Ok(SeededSource::from_entropy());
    };
    let seed = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{SEED_VAR} must be an unsigned integer, got {raw:?}"))?;
    tracing::info!(seed, "using a fixed seed, the run is reproducible");
    Ok(SeededSource::from_seed(seed))
}
