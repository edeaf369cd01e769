use std::io;
use std::path::PathBuf;

use fileshell::shell::{
    CompressError, ConfigError, CryptError, FileError, MemoryError, OpenError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Working directory not found: {0:?}")]
    DirectoryNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("REPL Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to open working directory: {0}")]
    Open(#[from] OpenError),

    #[error("{0}")]
    File(#[from] FileError),

    #[error("{0}")]
    Compress(#[from] CompressError),

    #[error("{0}")]
    Crypt(#[from] CryptError),

    #[error("{0}")]
    Memory(#[from] MemoryError),
}
