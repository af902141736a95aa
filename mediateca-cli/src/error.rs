use thiserror::Error;

use mediateca_lib::{CodecError, ContainerError, RecordError, SessionError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Record failed validation
    #[error("{0}")]
    Record(#[from] RecordError),

    /// Catalog rejected the operation
    #[error("{0}")]
    Catalog(#[from] ContainerError),

    /// Library file could not be read or written
    #[error("{0}")]
    Codec(#[from] CodecError),

    /// Session could not be opened or saved
    #[error("{0}")]
    Session(#[from] SessionError),

    /// Invalid combination of arguments
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}
