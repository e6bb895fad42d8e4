//! Error taxonomy for the request pipeline.
//!
//! Every variant here is surfaced to the client as a single `ERR ...\n`
//! line and then the connection is closed. Algorithmic "no such circuit" /
//! "no such cycle" outcomes are *not* errors — they are ordinary variants of
//! each algorithm's own result enum (see `crate::algo`).

use std::fmt;

/// Malformed header line, bad flag, or range-checked field out of bounds.
///
/// Usage and range failures are both detected while tokenizing/validating
/// the single header line and both terminate the connection the same way,
/// so they share one variant set rather than two parallel error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The header line did not even tokenize into a known shape.
    Usage(String),
    /// `<ALGO>` did not match any registered algorithm.
    UnknownAlgorithm(String),
    /// A numeric field failed its range check (`V >= 1`, `0 <= E <=
    /// V*(V-1)/2`, `SEED` in `[0, 2^32)`).
    Range(String),
    /// An edge line (`u v [w]`) was malformed, out of range, a self-loop,
    /// had a non-positive weight, or the input ended early.
    EdgeLine(String),
}

impl ProtocolError {
    /// Render as the wire-format `ERR ...` line, LF-terminated.
    pub fn to_wire(&self) -> String {
        format!("ERR {}\n", self)
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::Usage(msg) => write!(f, "usage: {}", msg),
            ProtocolError::UnknownAlgorithm(algo) => {
                write!(f, "unknown ALGO. got {:?}", algo)
            }
            ProtocolError::Range(msg) => write!(f, "invalid: {}", msg),
            ProtocolError::EdgeLine(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ProtocolError {}
