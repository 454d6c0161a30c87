use thiserror::Error;

/// Errors that can occur while deriving timeline geometry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("degenerate timeline window: start {start} is not before end {end}")]
    DegenerateWindow { start: i64, end: i64 },

    #[error("invalid blocked interval '{id}': end {end} is before start {start}")]
    InvalidInterval { id: String, start: i64, end: i64 },
}
