//! Module defining the errors which are exposed to the users of the crate

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Creating, writing, or reading one of the fixture files failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The space-separated record layer failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A recipe which cannot produce a valid square matrix, e.g., a singular matrix of size 1
    #[error("invalid recipe ({kind}): {message}")]
    InvalidRecipe { kind: &'static str, message: String },

    /// A fixture pair that does not follow the `.dat` / `.ans` format
    #[error("malformed fixture: {message}")]
    MalformedFixture { message: String },

    /// More cases than the 3-digit file names can address
    #[error("test index space exhausted after index {last}")]
    IndexExhausted { last: u16 },
}

pub(crate) fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
    Error::Io {
        path: path.into(),
        source,
    }
}

pub(crate) fn recipe_error(kind: &'static str, message: impl Into<String>) -> Error {
    Error::InvalidRecipe {
        kind,
        message: message.into(),
    }
}

pub(crate) fn fixture_error(message: impl Into<String>) -> Error {
    Error::MalformedFixture {
        message: message.into(),
    }
}
