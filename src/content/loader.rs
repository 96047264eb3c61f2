//! Loader for RON tuning files at startup.

use ron::Options;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::locomotion::LocomotionTuning;

/// Error type for content loading failures.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Failed to load {file}: IO error: {error}")]
    Io {
        file: String,
        #[source]
        error: std::io::Error,
    },
    #[error("Failed to load {file}: Parse error: {error}")]
    Parse {
        file: String,
        #[source]
        error: ron::error::SpannedError,
    },
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from RON text. Omitted fields keep their defaults.
pub fn parse_tuning(file: &str, contents: &str) -> Result<LocomotionTuning, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|error| ContentLoadError::Parse {
            file: file.to_string(),
            error,
        })
}

/// Load a single `LocomotionTuning` struct from a RON file.
pub fn load_tuning(path: &Path) -> Result<LocomotionTuning, ContentLoadError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|error| ContentLoadError::Io {
        file: file.clone(),
        error,
    })?;

    parse_tuning(&file, &contents)
}
