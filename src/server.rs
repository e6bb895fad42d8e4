//! Listener lifecycle: wires the acceptor pool to the algorithm pipeline
//! and owns both until shutdown.

use std::collections::HashMap;
use std::io::{self, BufReader};
use std::net::TcpStream;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::concurrency::{ActiveObject, AcceptorPool, Sender};
use crate::conn::ConnectionHandle;
use crate::protocol::{parse_request, ParsedRequest, Request, SendTask};
use crate::registry;

const ALGORITHM_NAMES: [&str; 5] = ["EULER", "MST", "MAXCLIQUE", "COUNTCLQ3P", "HAMILTON"];

/// Environment variable naming the optional per-algorithm wall-clock
/// ceiling, in milliseconds. Unset by default — no ceiling, and
/// byte-identical behavior to running without this feature at all.
const ALGO_TIMEOUT_ENV_VAR: &str = "GRAPHD_ALGO_TIMEOUT_MS";

fn algo_timeout() -> Option<Duration> {
    std::env::var(ALGO_TIMEOUT_ENV_VAR)
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Run one algorithm to completion, or give up after `timeout` and return
/// `None`. The algorithm itself runs on a scoped watchdog thread that is
/// abandoned on timeout — there is no way to cancel a running algorithm,
/// only to stop waiting on it.
fn assemble_with_timeout(
    algo: &'static dyn crate::algo::Algorithm,
    graph: crate::graph::Graph,
    want_print: bool,
    timeout: Option<Duration>,
) -> Option<String> {
    let timeout = match timeout {
        Some(t) => t,
        None => return Some(crate::protocol::assemble(algo, &graph, want_print)),
    };

    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name(format!("{}-watchdog", algo.name()))
        .spawn(move || {
            let text = crate::protocol::assemble(algo, &graph, want_print);
            let _ = tx.send(text);
        })
        .expect("failed to spawn algorithm watchdog thread");

    match rx.recv_timeout(timeout) {
        Ok(text) => Some(text),
        Err(mpsc::RecvTimeoutError::Timeout) => {
            debug!(algo = algo.name(), ?timeout, "algorithm exceeded its wall-clock ceiling");
            None
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => None,
    }
}

/// One Active Object per algorithm plus the shared `SENDER_AO`: six
/// long-lived worker threads total, regardless of how many acceptor
/// threads or client connections are in flight.
struct Pipeline {
    stages: HashMap<&'static str, ActiveObject<Request>>,
    // Held so the field's drop order keeps the sender alive for as long as
    // any algorithm stage might still submit to it; see `concurrency::sender`.
    _sender: Arc<Sender>,
}

impl Pipeline {
    fn spawn() -> Self {
        let sender = Arc::new(Sender::spawn());
        let timeout = algo_timeout();
        let mut stages = HashMap::with_capacity(ALGORITHM_NAMES.len());
        for name in ALGORITHM_NAMES {
            let sender = Arc::clone(&sender);
            let ao = ActiveObject::spawn(name, move |req: Request| {
                let algo = registry::lookup(req.algorithm)
                    .expect("a Request only ever carries a registered algorithm name");
                let text = match assemble_with_timeout(algo, req.graph, req.want_print, timeout) {
                    Some(text) => text,
                    None => "ERR timeout\n".to_string(),
                };
                sender.submit(SendTask {
                    conn: req.conn,
                    text,
                });
            });
            stages.insert(name, ao);
        }
        Pipeline {
            stages,
            _sender: sender,
        }
    }

    fn dispatch(&self, request: Request) {
        let stage = self
            .stages
            .get(request.algorithm)
            .expect("the parser only ever produces requests for registered algorithms");
        stage.send(request);
    }
}

fn handle_connection(stream: TcpStream, pipeline: &Pipeline) {
    let mut conn = match ConnectionHandle::new(stream) {
        Ok(conn) => conn,
        Err(e) => {
            warn!(error = %e, "could not read peer address, dropping connection");
            return;
        }
    };
    let peer = conn.peer();

    let parsed = {
        let mut reader = BufReader::new(conn.stream_mut());
        parse_request(&mut reader)
    };

    match parsed {
        Ok(ParsedRequest {
            algorithm,
            want_print,
            graph,
        }) => {
            pipeline.dispatch(Request {
                algorithm,
                want_print,
                graph,
                conn,
            });
        }
        Err(err) => {
            warn!(%peer, %err, "rejecting malformed request");
            conn.send_and_close(&err.to_wire());
        }
    }
}

/// A bound `graphd` listener with its acceptor pool and algorithm
/// pipeline running. Dropping or shutting this down drains every Active
/// Object in turn.
pub struct Server {
    pool: AcceptorPool,
    // Keeps the pipeline (and therefore the sender) alive for as long as
    // the acceptor pool's connection handler closure might still run.
    _pipeline: Arc<Pipeline>,
}

impl Server {
    /// Bind `addr` and start `worker_count` acceptor threads sharing it.
    pub fn bind(addr: &str, worker_count: usize) -> io::Result<Self> {
        let listener = std::net::TcpListener::bind(addr)?;
        let pipeline = Arc::new(Pipeline::spawn());
        let handler_pipeline = Arc::clone(&pipeline);
        let pool = AcceptorPool::spawn(listener, worker_count, move |stream| {
            handle_connection(stream, &handler_pipeline);
        })?;
        Ok(Server {
            pool,
            _pipeline: pipeline,
        })
    }

    /// Stop accepting new connections and wait for every acceptor thread
    /// to exit. The pipeline's Active Objects drain and stop on their own
    /// once the last `Request`/`SendTask` sender is dropped.
    pub fn shutdown(&mut self) {
        self.pool.shutdown();
        self.pool.join();
    }
}
