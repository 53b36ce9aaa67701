use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("empty input")]
    Empty,
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("number '{literal}' does not fit in {bits} bits")]
    TooWide { literal: String, bits: u32 },
    #[error("bit index {0} is not between 0 and 31")]
    BitIndex(u64),
    #[error("descending bit range {first}.{last}")]
    Descending { first: u64, last: u64 },
    #[error("malformed bit range '{0}'")]
    MalformedRange(String),
}

pub type Result<T> = std::result::Result<T, Error>;
