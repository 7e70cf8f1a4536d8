use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("cell ({row}, {column}) is outside the {height}x{width} grid")]
    OutOfRange {
        row: usize,
        column: usize,
        height: usize,
        width: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("render failed: {0}")]
    Render(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
