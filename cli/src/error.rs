use thiserror::Error;

/// Errors raised while parsing the stdin contract (spec §6). Internal core
/// invariants never surface here — malformed input is entirely this
/// boundary's concern (spec §7).
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("expected integer, got {0:?}")]
    BadInteger(String),

    #[error("grid size must be {expected}, got {actual}")]
    WrongGridSize { expected: usize, actual: usize },

    #[error("agent count must be in [1, {max}], got {actual}")]
    BadAgentCount { actual: usize, max: usize },

    #[error("coordinate out of range: {0}")]
    CoordinateOutOfRange(i64),

    #[error("wall row must be {expected} characters of '0'/'1', got {actual:?}")]
    BadWallRow { expected: usize, actual: String },
}
