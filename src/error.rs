use std::io;

/// Errors returned by a puzzle store's own mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("invalid board dimensions: {attempts} attempts x {word_length} letters")]
    InvalidDimensions { attempts: usize, word_length: usize },
}

/// Errors raised by the board action panel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("board settings are not usable: {0}")]
    InvalidState(String),

    #[error("puzzle store is no longer available")]
    StoreUnavailable,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that stop the application from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}
