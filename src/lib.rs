//! `graphd` — a networked compute server that answers graph-algorithm
//! queries (Euler circuit, MST, maximum clique, clique counting,
//! Hamiltonian cycle) over a small line-oriented TCP protocol.
//!
//! The binary lives in `src/bin/graphd-server.rs`; this crate root is the
//! library half, split along the same lines as the architecture itself:
//! a graph model and five algorithms (`graph`, `bitset`, `rng`, `algo`,
//! `registry`), a wire protocol (`protocol`, `conn`, `error`), and the
//! concurrency architecture that ties them to a listening socket
//! (`concurrency`, `server`).

pub mod algo;
pub mod bitset;
pub mod concurrency;
pub mod conn;
pub mod error;
pub mod graph;
pub mod protocol;
pub mod registry;
pub mod rng;
pub mod server;

pub use error::ProtocolError;
pub use graph::Graph;
pub use server::Server;
