//! Leader-Follower acceptor pool.
//!
//! `N` threads share one listening socket. Exactly one is ever "leader" —
//! the thread allowed to call `accept()` — at a time; the rest block on a
//! condition variable waiting for their turn. The leader promotes a
//! follower *before* it starts handling the connection it just accepted,
//! so a burst of connections gets spread across the pool instead of
//! serialized behind whichever thread happens to hold the socket.

use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info, warn};

/// How often a parked leader wakes up to re-check the shutdown flag, in
/// the absence of a new connection.
const LEADER_POLL_INTERVAL: Duration = Duration::from_millis(50);

struct LeaderState {
    has_leader: Mutex<bool>,
    cv: Condvar,
}

impl LeaderState {
    fn new() -> Self {
        LeaderState {
            has_leader: Mutex::new(false),
            cv: Condvar::new(),
        }
    }

    /// Block until this thread becomes leader, or `shutdown` fires first.
    fn become_leader(&self, shutdown: &AtomicBool) -> bool {
        let mut has_leader = self.has_leader.lock().unwrap();
        loop {
            if shutdown.load(Ordering::Relaxed) {
                return false;
            }
            if !*has_leader {
                *has_leader = true;
                return true;
            }
            let (guard, _timeout) = self
                .cv
                .wait_timeout(has_leader, LEADER_POLL_INTERVAL)
                .unwrap();
            has_leader = guard;
        }
    }

    /// Hand leadership back, waking exactly one follower. Called right
    /// after `accept()` returns, before the connection is handled.
    fn step_down(&self) {
        let mut has_leader = self.has_leader.lock().unwrap();
        *has_leader = false;
        self.cv.notify_one();
    }
}

/// Pool of acceptor threads sharing one `TcpListener`.
pub struct AcceptorPool {
    threads: Vec<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
}

impl AcceptorPool {
    /// Spawn `worker_count` acceptor threads against `listener`. Every
    /// accepted connection is handed to `handler`, running on whichever
    /// thread accepted it — there is no separate dispatch step.
    pub fn spawn<F>(listener: TcpListener, worker_count: usize, handler: F) -> std::io::Result<Self>
    where
        F: Fn(TcpStream) + Send + Sync + 'static,
    {
        listener.set_nonblocking(true)?;
        let listener = Arc::new(listener);
        let state = Arc::new(LeaderState::new());
        let handler = Arc::new(handler);
        let shutdown = Arc::new(AtomicBool::new(false));

        let mut threads = Vec::with_capacity(worker_count);
        for id in 0..worker_count {
            let listener = Arc::clone(&listener);
            let state = Arc::clone(&state);
            let handler = Arc::clone(&handler);
            let shutdown = Arc::clone(&shutdown);
            let name = format!("acceptor-{id}");
            let handle = thread::Builder::new()
                .name(name.clone())
                .spawn(move || acceptor_loop(&name, listener, state, shutdown, handler))
                .expect("failed to spawn acceptor thread");
            threads.push(handle);
        }

        Ok(AcceptorPool { threads, shutdown })
    }

    /// Signal every acceptor thread to stop taking new connections. Does
    /// not wait for in-flight connection handling to finish — call `join`
    /// for that.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    pub fn join(&mut self) {
        for handle in self.threads.drain(..) {
            let _ = handle.join();
        }
    }
}

fn acceptor_loop(
    name: &str,
    listener: Arc<TcpListener>,
    state: Arc<LeaderState>,
    shutdown: Arc<AtomicBool>,
    handler: Arc<dyn Fn(TcpStream) + Send + Sync>,
) {
    info!(acceptor = name, "acceptor thread started");
    loop {
        if !state.become_leader(&shutdown) {
            break;
        }

        let accepted = loop {
            match listener.accept() {
                Ok(pair) => break Some(pair),
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    if shutdown.load(Ordering::Relaxed) {
                        break None;
                    }
                    thread::sleep(LEADER_POLL_INTERVAL);
                }
                Err(e) => {
                    warn!(acceptor = name, error = %e, "accept failed");
                    break None;
                }
            }
        };

        // Promote a follower before doing any per-connection work, per
        // the Leader-Follower handoff this pool implements.
        state.step_down();

        if let Some((stream, peer)) = accepted {
            debug!(acceptor = name, %peer, "accepted connection");
            handler(stream);
        }
    }
    debug!(acceptor = name, "acceptor thread exiting");
}
