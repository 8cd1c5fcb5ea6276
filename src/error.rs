use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Failed to find path to binary \"{}\": {source}", path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to find directory of binary \"{}\"", path.display())]
    NoParentDir { path: PathBuf },

    #[error("Failed to execute \"{}\": {source}", path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Usage: find --name pattern")]
    MissingName,
}
