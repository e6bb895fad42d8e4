//! `SENDER_AO`: the single Active Object permitted to write a response
//! onto a client socket.
//!
//! Funnelling every write through one worker is what makes "one write per
//! connection" true without a per-connection lock: only this thread ever
//! touches `ConnectionHandle::send_and_close`. Shutdown rides
//! `ActiveObject`'s own `Drop`: once the last `Arc<Sender>` clone held by
//! an algorithm Active Object goes away, this one follows and drains.

use crate::protocol::SendTask;

use super::active_object::ActiveObject;

pub struct Sender {
    ao: ActiveObject<SendTask>,
}

impl Sender {
    pub fn spawn() -> Self {
        let ao = ActiveObject::spawn("sender", |task: SendTask| {
            task.conn.send_and_close(&task.text);
        });
        Sender { ao }
    }

    pub fn submit(&self, task: SendTask) {
        self.ao.send(task);
    }
}
