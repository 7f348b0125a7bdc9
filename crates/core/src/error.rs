use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Command failed: {reason}")]
    CommandFailed { reason: String },

    #[error("Duplicate command id: {id}")]
    DuplicateCommandId { id: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
