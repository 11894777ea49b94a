use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiftError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a DTMF symbol: {0:?}")]
    InvalidSymbol(char),
}

pub type Result<T> = std::result::Result<T, SiftError>;
