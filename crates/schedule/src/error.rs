#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("invalid number {0}: must be a positive integer")]
    InvalidTier(i64),

    #[error("invalid date `{0}`: expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("visit date is outside the supported calendar range")]
    DateOutOfRange,

    #[error("no visit at position {index}, schedule holds {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{0}")]
    ComponentRange(#[from] time::error::ComponentRange),
}

pub type Result<T> = std::result::Result<T, Error>;
