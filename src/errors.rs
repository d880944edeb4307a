use thiserror::Error;

#[derive(Debug, Error)]
pub enum BufferError {
    #[error("buffer too short: expected {expected} bytes, found {actual}")]
    UnexpectedEnd { expected: usize, actual: usize },
}
