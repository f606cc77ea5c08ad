use pxfilter_config::ConfigError;
use pxfilter_core::{
    codec::{DecodeError, TreeError},
    error::InternalError,
};
use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// CliError
///

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{}", .0.display_with_class())]
    Compile(#[from] InternalError),

    #[error("cannot decode filter: {0}")]
    Decode(#[from] DecodeError),

    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot decode filter: {0}")]
    Tree(#[from] TreeError),
}
