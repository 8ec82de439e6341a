//! Hyprland integration for terminal image canvases
//!
//! Talks to the compositor's control socket to find the terminal window an
//! image canvas belongs to and to float, undecorate and position the canvas
//! window over it.

pub mod hypr_ipc;
pub mod multiplexer;

pub use hypr_ipc::*;
