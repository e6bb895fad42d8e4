//! Owning handle to a client's TCP connection.
//!
//! A thin wrapper around `std::net::TcpStream`. Exactly one component —
//! `SENDER_AO` on the success path, or the parsing worker itself on an
//! error path before a `Request` exists — ever writes to or closes a given
//! connection.

use std::io::{self, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};

#[derive(Debug)]
pub struct ConnectionHandle {
    stream: TcpStream,
    peer: SocketAddr,
}

impl ConnectionHandle {
    pub fn new(stream: TcpStream) -> io::Result<Self> {
        let peer = stream.peer_addr()?;
        Ok(ConnectionHandle { stream, peer })
    }

    /// Peer address, used only for log correlation — never echoed on the
    /// wire.
    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    pub fn stream_mut(&mut self) -> &mut TcpStream {
        &mut self.stream
    }

    pub fn into_stream(self) -> TcpStream {
        self.stream
    }

    /// Best-effort write of the full response, then a half-close of the
    /// write side. `write_all` already retries transparently on
    /// `ErrorKind::Interrupted`; a write error that isn't EINTR just means
    /// the connection is abandoned — not retried, not reported to the
    /// client.
    pub fn send_and_close(mut self, text: &str) {
        let _ = self.stream.write_all(text.as_bytes());
        let _ = self.stream.shutdown(Shutdown::Write);
    }
}
