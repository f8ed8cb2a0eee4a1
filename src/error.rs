use thiserror::Error;

/// Startup failures. Anything after the loop starts is tolerated silently.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingCanvas(String),
    #[error("#{0} is not a canvas element")]
    NotACanvas(String),
    #[error("2d context unavailable: {0}")]
    NoContext2d(String),
}
