use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The force model was evaluated at the position of the central mass.
    #[error("position ({x}, {y}) coincides with the central mass")]
    Domain { x: f64, y: f64 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A step produced a NaN or infinite component. `step` is 1-based.
    #[error("state became non-finite at step {step}")]
    NumericInstability { step: usize },

    #[error("integration cancelled after {completed} steps")]
    Cancelled { completed: usize },

    #[error("no body named {0:?} in the catalog")]
    UnknownBody(String),

    #[error("catalog line {line}: {reason}")]
    Catalog { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("render error: {0}")]
    Render(String),
}
