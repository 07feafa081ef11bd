//=========================================================================
// Server
//=========================================================================
//
// Accept loop for a multiplayer room.
//
// Architecture:
//   Server::start() ─spawn─► accept thread
//                               ├─ nonblocking accept() every ACCEPT_POLL
//                               └─ clients: Arc<Mutex<HashMap<SocketAddr, TcpStream>>>
//   Server::stop()  ─stop flag─► accept thread exits ─► join
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::io;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use crate::error::NetError;

/// Sleep between accept attempts when no connection is pending.
const ACCEPT_POLL: Duration = Duration::from_millis(20);

type Clients = Arc<Mutex<HashMap<SocketAddr, TcpStream>>>;

//=== Server ==============================================================

pub struct Server {
    host: String,
    port: u16,
    max_connections: usize,
    clients: Clients,
    listening: Option<Listening>,
}

/// State of a started server.
struct Listening {
    addr: SocketAddr,
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl Server {
    pub fn new(host: impl Into<String>, port: u16, max_connections: usize) -> Self {
        Self {
            host: host.into(),
            port,
            max_connections,
            clients: Arc::default(),
            listening: None,
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Binds the listener and spawns the accept thread.
    ///
    /// Returns the bound address, which differs from the configured one
    /// when port 0 was requested.
    pub fn start(&mut self) -> Result<SocketAddr, NetError> {
        if self.listening.is_some() {
            return Err(NetError::AlreadyRunning);
        }

        let listener = TcpListener::bind((self.host.as_str(), self.port))?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;

        let stop = Arc::new(AtomicBool::new(false));
        let handle = {
            let stop = Arc::clone(&stop);
            let clients = Arc::clone(&self.clients);
            let max_connections = self.max_connections;
            thread::Builder::new()
                .name("room-server".into())
                .spawn(move || accept_loop(listener, clients, max_connections, stop))?
        };

        info!(target: "net", "Server listening on {}", addr);
        self.listening = Some(Listening { addr, stop, handle });
        Ok(addr)
    }

    /// Stops accepting, joins the accept thread and drops every client.
    pub fn stop(&mut self) {
        let Some(listening) = self.listening.take() else {
            return;
        };

        listening.stop.store(true, Ordering::Release);
        if listening.handle.join().is_err() {
            error!(target: "net", "Accept thread panicked");
        }
        self.lock_clients().clear();
        info!(target: "net", "Server on {} stopped", listening.addr);
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_running(&self) -> bool {
        self.listening.is_some()
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listening.as_ref().map(|l| l.addr)
    }

    pub fn client_count(&self) -> usize {
        self.lock_clients().len()
    }

    pub fn max_connections(&self) -> usize {
        self.max_connections
    }

    fn lock_clients(&self) -> std::sync::MutexGuard<'_, HashMap<SocketAddr, TcpStream>> {
        self.clients.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        self.stop();
    }
}

//=== Accept Loop =========================================================

fn accept_loop(listener: TcpListener, clients: Clients, max_connections: usize, stop: Arc<AtomicBool>) {
    while !stop.load(Ordering::Acquire) {
        match listener.accept() {
            Ok((stream, peer)) => {
                let mut clients = clients.lock().unwrap_or_else(PoisonError::into_inner);
                if clients.len() >= max_connections {
                    info!(target: "net", "Rejected {}: room is full ({})", peer, max_connections);
                    continue;
                }
                clients.insert(peer, stream);
                info!(target: "net", "Client {} connected ({}/{})", peer, clients.len(), max_connections);
            }
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => thread::sleep(ACCEPT_POLL),
            Err(e) => {
                warn!(target: "net", "Accept failed: {}", e);
                thread::sleep(ACCEPT_POLL);
            }
        }
    }
    debug!(target: "net", "Accept loop exited");
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn wait_for(mut condition: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            if condition() {
                return true;
            }
            thread::sleep(Duration::from_millis(10));
        }
        condition()
    }

    #[test]
    fn accepts_clients_until_stopped() {
        let mut server = Server::new("127.0.0.1", 0, 4);
        let addr = server.start().unwrap();
        assert!(server.is_running());
        assert_eq!(server.local_addr(), Some(addr));

        let _a = TcpStream::connect(addr).unwrap();
        let _b = TcpStream::connect(addr).unwrap();
        assert!(wait_for(|| server.client_count() == 2));

        server.stop();
        assert!(!server.is_running());
        assert_eq!(server.client_count(), 0);
    }

    #[test]
    fn extra_connections_are_dropped() {
        let mut server = Server::new("127.0.0.1", 0, 1);
        let addr = server.start().unwrap();

        let _a = TcpStream::connect(addr).unwrap();
        assert!(wait_for(|| server.client_count() == 1));
        let _b = TcpStream::connect(addr).unwrap();
        thread::sleep(ACCEPT_POLL * 5);

        assert_eq!(server.client_count(), 1);
    }

    #[test]
    fn start_twice_fails() {
        let mut server = Server::new("127.0.0.1", 0, 1);
        server.start().unwrap();
        assert!(matches!(server.start(), Err(NetError::AlreadyRunning)));
    }

    #[test]
    fn stop_without_start_is_noop() {
        let mut server = Server::new("127.0.0.1", 0, 1);
        server.stop();
        assert!(!server.is_running());
    }
}
