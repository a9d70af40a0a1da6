use thiserror::Error;

/// Errors raised while building a trail context. The per-tick path never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrailError {
    #[error("invalid colour `{0}`: expected #rgb or #rrggbb")]
    InvalidColor(String),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, TrailError>;
