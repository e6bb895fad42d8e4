//! Concurrency architecture: a Leader-Follower acceptor pool feeding a
//! fixed set of Active Object pipeline stages.

mod active_object;
mod leader_follower;
mod mailbox;
mod sender;

pub use active_object::ActiveObject;
pub use leader_follower::AcceptorPool;
pub use sender::Sender;
