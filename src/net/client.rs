//=========================================================================
// Client
//=========================================================================
//
// Connection to a room server.
//
// `connect` starts the attempt on a worker thread and returns at once;
// the outcome arrives on a channel that the owning scene drains with
// `poll` during its update.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, TryRecvError};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::error::NetError;

/// Per-address connect timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

//=== Client ==============================================================

pub struct Client {
    host: String,
    port: u16,
    timeout: Duration,
    stream: Option<TcpStream>,
    pending: Option<Receiver<Result<TcpStream, NetError>>>,
}

impl Client {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: CONNECT_TIMEOUT,
            stream: None,
            pending: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `host:port` this client connects to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    //--- Connection -------------------------------------------------------

    /// Starts a connection attempt in the background.
    ///
    /// Ignored while connected or while an attempt is in flight.
    pub fn connect(&mut self) -> Result<(), NetError> {
        if self.is_connected() || self.is_connecting() {
            debug!(target: "net", "Connect ignored, already connected or connecting");
            return Ok(());
        }

        let (tx, rx) = bounded(1);
        let (host, port, timeout) = (self.host.clone(), self.port, self.timeout);
        thread::Builder::new()
            .name("room-client".into())
            .spawn(move || {
                // The receiver is gone if the client was dropped meanwhile.
                let _ = tx.send(open(&host, port, timeout));
            })?;

        info!(target: "net", "Connecting to {}", self.address());
        self.pending = Some(rx);
        Ok(())
    }

    /// Collects the outcome of the attempt in flight, if it finished.
    pub fn poll(&mut self) -> Option<Result<SocketAddr, NetError>> {
        let outcome = match self.pending.as_ref()?.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(NetError::Abandoned),
        };
        self.pending = None;

        let result = outcome.and_then(|stream| {
            let peer = stream.peer_addr()?;
            self.stream = Some(stream);
            Ok(peer)
        });

        match &result {
            Ok(peer) => info!(target: "net", "Connected to {}", peer),
            Err(e) => warn!(target: "net", "Connection to {} failed: {}", self.address(), e),
        }
        Some(result)
    }

    pub fn disconnect(&mut self) {
        self.pending = None;
        if let Some(stream) = self.stream.take() {
            if let Err(e) = stream.shutdown(Shutdown::Both) {
                debug!(target: "net", "Shutdown after disconnect: {}", e);
            }
            info!(target: "net", "Disconnected from {}", self.address());
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    pub fn is_connecting(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        self.disconnect();
    }
}

//=== Internal Helpers ====================================================

/// Tries every resolved address in turn.
fn open(host: &str, port: u16, timeout: Duration) -> Result<TcpStream, NetError> {
    let mut last_error = None;
    for addr in (host, port).to_socket_addrs()? {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(stream) => return Ok(stream),
            Err(e) => last_error = Some(e),
        }
    }
    Err(last_error.map_or_else(|| NetError::Resolve(format!("{host}:{port}")), NetError::Io))
}

//=========================================================================
// Unit Tests
//=========================================================================
