//! Link-layer awareness. Only the pre-flight gate lives here; nothing in
//! `core` depends on this module.

pub mod connectivity;

pub use connectivity::is_network_available;
