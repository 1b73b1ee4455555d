use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("index {index} out of bounds for heap of length {len}")]
    OutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, HeapError>;
