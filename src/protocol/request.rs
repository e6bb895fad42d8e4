//! `Request` and `SendTask`: the two payload types passed between
//! pipeline stages.

use crate::conn::ConnectionHandle;
use crate::graph::Graph;

/// A fully parsed, validated request, owned by whichever pipeline stage
/// currently holds it.
pub struct Request {
    /// Canonical wire name (`"EULER"`, `"MST"`, ...), already resolved
    /// against the registry — a `Request` only ever exists for a known
    /// algorithm.
    pub algorithm: &'static str,
    pub want_print: bool,
    pub graph: Graph,
    pub conn: ConnectionHandle,
}

/// Produced by an algorithm Active Object, consumed and destroyed by
/// `SENDER_AO`.
pub struct SendTask {
    pub conn: ConnectionHandle,
    pub text: String,
}
