// ---------------------------------------------------------------------------
// LayoutError: typed failures for map decoding and lot lookup
// ---------------------------------------------------------------------------

use std::fmt;

use crate::grid::GridCoordinate;

/// Errors raised while decoding simulator output or resolving lots.
///
/// Decoding errors reject the whole document. `EmptyLotSet` only aborts the
/// collision report of the frame it happened in.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The document is not valid JSON or does not have the expected top-level shape.
    Json(String),
    /// A lot key could not be split into exactly two numeric tokens.
    MalformedCoordinateKey(String),
    /// A lot value is not a `[kind, primary, secondary]` triple.
    MalformedLotValue { key: String, reason: String },
    /// A block string did not contain exactly four numeric tokens.
    MalformedBlock(String),
    /// Block endpoints differ on both axes.
    DegenerateBlock {
        raw: String,
        start: GridCoordinate,
        end: GridCoordinate,
    },
    /// A proximity query ran against a map with no lots.
    EmptyLotSet,
    /// Lot kind token was not recognized. Decoding falls back to `Business`.
    UnknownBuildingKind(String),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Json(msg) => write!(f, "JSON decode error: {msg}"),
            LayoutError::MalformedCoordinateKey(key) => {
                write!(f, "Malformed coordinate key: {key:?}")
            }
            LayoutError::MalformedLotValue { key, reason } => {
                write!(f, "Malformed lot value at {key:?}: {reason}")
            }
            LayoutError::MalformedBlock(raw) => write!(f, "Malformed block: {raw:?}"),
            LayoutError::DegenerateBlock { raw, start, end } => write!(
                f,
                "Degenerate block {raw:?}: ({}, {}) -> ({}, {}) is neither horizontal nor vertical",
                start.x, start.y, end.x, end.y
            ),
            LayoutError::EmptyLotSet => write!(f, "Empty map: no lots loaded"),
            LayoutError::UnknownBuildingKind(token) => {
                write!(f, "Unknown building kind: {token:?}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<serde_json::Error> for LayoutError {
    fn from(e: serde_json::Error) -> Self {
        LayoutError::Json(e.to_string())
    }
}
