//! Error type shared by input handling and output

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The supplied text is not an integer
    #[error("invalid number of days: {input:?} is not an integer")]
    InvalidInput { input: String },

    /// The supplied integer is below one
    #[error("invalid number of days: {input} (must be at least 1)")]
    NotPositive { input: String },

    /// The supplied integer is too large to be counted up to
    #[error("invalid number of days: {input} (must be at most {})", u64::MAX)]
    OutOfRange { input: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Truth that this error was caused by the user's input rather than by
    /// the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::NotPositive { .. } | Self::OutOfRange { .. }
        )
    }
}
