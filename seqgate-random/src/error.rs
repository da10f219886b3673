use thiserror::Error;

#[derive(Error, Debug)]
pub enum RandomError {
    #[error("Unable to read a seed from the operating system entropy source: {0}")]
    EntropySourceUnavailable(String),

    #[error("Cannot draw below {n}: the range must be between 1 and {max}")]
    InvalidRange { n: u64, max: u64 },
}

pub type Result<T> = std::result::Result<T, RandomError>;
