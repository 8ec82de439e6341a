//! Hyprland IPC client for canvas window placement
//!
//! This module provides communication with the Hyprland compositor via its
//! control socket. It enables hypr-canvas to:
//! - Find the terminal window a canvas is drawn over
//! - Discover the focused output and its scale factor
//! - Apply window rules and move the canvas window into place
//!
//! ## Architecture
//!
//! - `HyprlandClient`: High-level operations built on request/response
//! - `Transport`: One request/response exchange (`UnixSocketTransport` in production)
//! - `Query` / `Command`: The closed set of strings written to the socket
//! - `HyprError`: Error types for IPC operations
//!
//! ## Protocol
//!
//! Hyprland listens on `$XDG_RUNTIME_DIR/hypr/<signature>/.socket.sock`
//! (`/tmp/hypr/...` before 0.40). Clients connect, write one command, read
//! until the compositor closes the connection. Queries prefixed with `j/`
//! reply with JSON.

mod client;
mod command;
mod error;
#[cfg(test)]
pub(crate) mod testing;
mod transport;
mod types;

pub use client::{pixel_position, HyprlandClient};
pub use command::{Command, Dispatch, Query, WindowRule};
pub use error::HyprError;
pub use transport::{
    instance_signature, resolve_socket_path, socket_path_from_env, Transport,
    UnixSocketTransport, SIGNATURE_ENV,
};
pub use types::{ClientWindow, FocusedOutput, Monitor, WindowAddress, WindowGeometry, WorkspaceRef};
