//! Loader for RON content files at startup.

use ron::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::movement::ControllerTuning;
use crate::respawn::RespawnTiming;

/// Error type for content loading failures.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Failed to load {file}: IO error: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load {file}: Parse error: {source}")]
    Parse {
        file: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Tunables for the controller and respawn sequence.
///
/// Every field is optional in the file; missing ones keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub tuning: ControllerTuning,
    pub respawn: RespawnTiming,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn parse_controller_config(
    file: &str,
    contents: &str,
) -> Result<ControllerConfig, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|source| ContentLoadError::Parse {
            file: file.to_string(),
            source,
        })
}

/// Load the controller config from a single RON file.
pub fn load_controller_config(path: &Path) -> Result<ControllerConfig, ContentLoadError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: file.clone(),
        source,
    })?;

    parse_controller_config(&file, &contents)
}
