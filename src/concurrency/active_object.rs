//! Generic Active Object: a named mailbox plus the single long-lived
//! thread that drains it.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, info};

use super::mailbox::Mailbox;

/// One Active Object: a queue and the thread servicing it. Dropping the
/// handle does not stop the worker — call `shutdown` (closes the mailbox)
/// and then `join`.
pub struct ActiveObject<T: Send + 'static> {
    name: &'static str,
    mailbox: Arc<Mailbox<T>>,
    handle: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> ActiveObject<T> {
    /// Spawn the worker thread. `handle_item` runs on that thread for every
    /// item, in arrival order; it must not block indefinitely or it stalls
    /// this AO's entire queue, since there is exactly one consumer per
    /// stage.
    pub fn spawn<F>(name: &'static str, mut handle_item: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let mailbox = Arc::new(Mailbox::new());
        let worker_mailbox = Arc::clone(&mailbox);
        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                info!(ao = name, "active object started");
                while let Some(item) = worker_mailbox.recv() {
                    handle_item(item);
                }
                debug!(ao = name, "active object drained and exiting");
            })
            .expect("failed to spawn active object thread");

        ActiveObject {
            name,
            mailbox,
            handle: Some(handle),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Enqueue work for this Active Object. Never blocks the caller.
    pub fn send(&self, item: T) {
        self.mailbox.send(item);
    }

    /// Signal the worker to exit once its queue drains, without waiting
    /// for it.
    pub fn close(&self) {
        self.mailbox.close();
    }

    /// Block until the worker thread has exited. `close` must have been
    /// called first or this blocks forever.
    pub fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl<T: Send + 'static> Drop for ActiveObject<T> {
    fn drop(&mut self) {
        self.close();
        self.join();
    }
}
