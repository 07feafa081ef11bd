//=========================================================================
// Networking
//=========================================================================
//
// TCP server and client stubs for multiplayer rooms.
//
// Neither side speaks a protocol yet: the server accepts and holds up to
// `max_connections` sockets, and the client opens one. Both run their
// blocking socket work on background threads so the core tick never waits
// on the network.
//
//=========================================================================

//=== Module Declarations =================================================

mod client;
mod server;

//=== Public API ==========================================================

pub use client::Client;
pub use server::Server;
