use thiserror::Error;

/// Errors raised by the grid/agent data model.
///
/// Toggling an original wall is *not* an error (spec §7) — callers check
/// `WallGrid::is_original_*` before proposing a toggle, and the optimizer
/// skips such proposals as a no-op iteration rather than surfacing a
/// `CoreError`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("instance has no agents")]
    NoAgents,

    #[error("too many agents: {0} (max 100)")]
    TooManyAgents(usize),

    #[error("coordinate out of range: row={row}, col={col}")]
    OutOfRange { row: i32, col: i32 },

    #[error("wall edge out of range: r={r}, c={c}")]
    EdgeOutOfRange { r: i32, c: i32 },
}
