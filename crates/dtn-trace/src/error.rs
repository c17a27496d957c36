use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("trace configuration error: {0}")]
    Config(String),

    #[error("trace parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TraceResult<T> = Result<T, TraceError>;
