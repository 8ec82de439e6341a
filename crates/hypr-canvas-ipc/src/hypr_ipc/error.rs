//! Error types for Hyprland IPC operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when communicating with the Hyprland compositor
#[derive(Debug, Error)]
pub enum HyprError {
    /// The HYPRLAND_INSTANCE_SIGNATURE environment variable is not set
    #[error("HYPRLAND_INSTANCE_SIGNATURE environment variable not set - is Hyprland running?")]
    SignatureNotSet,

    /// Failed to connect to the Hyprland socket
    #[error("Failed to connect to Hyprland socket at {path}: {source}")]
    ConnectionFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a command to the socket
    #[error("Failed to send command to Hyprland: {0}")]
    SendFailed(#[source] std::io::Error),

    /// Failed to read the reply from the socket
    #[error("Failed to receive response from Hyprland: {0}")]
    ReceiveFailed(#[source] std::io::Error),

    /// The reply to a JSON query was not the expected shape
    #[error("Failed to parse Hyprland response to `{command}`: {source}")]
    DeserializeFailed {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    /// The cached active window address is not in the client list
    #[error("Active window {address} not found among Hyprland clients")]
    ActiveWindowNotFound { address: String },

    /// No monitor reported itself as focused
    #[error("Hyprland reported no focused monitor")]
    NoFocusedOutput,
}
