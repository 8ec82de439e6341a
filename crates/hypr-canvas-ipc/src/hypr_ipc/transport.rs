//! Socket discovery and the one-shot request transport

use std::ffi::OsString;
use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};

use super::HyprError;

/// Environment variable holding the Hyprland instance signature
pub const SIGNATURE_ENV: &str = "HYPRLAND_INSTANCE_SIGNATURE";

/// Environment variable for the per-user runtime directory
const RUNTIME_DIR_ENV: &str = "XDG_RUNTIME_DIR";

/// Base directory used when no runtime directory is set, and by Hyprland < 0.40
const LEGACY_BASE_DIR: &str = "/tmp";

/// Read the Hyprland instance signature from the environment
///
/// # Errors
///
/// Returns `HyprError::SignatureNotSet` if `$HYPRLAND_INSTANCE_SIGNATURE`
/// is unset or empty.
pub fn instance_signature() -> Result<String, HyprError> {
    match std::env::var(SIGNATURE_ENV) {
        Ok(signature) if !signature.is_empty() => Ok(signature),
        _ => Err(HyprError::SignatureNotSet),
    }
}

/// Locate the control socket for a Hyprland instance
///
/// Hyprland 0.40 and later place the socket at
/// `$XDG_RUNTIME_DIR/hypr/<signature>/.socket.sock`. When that file does not
/// exist (older releases, or the variable is set but unused) the legacy
/// `/tmp/hypr/<signature>/.socket.sock` is returned instead. The fallback is
/// not checked for existence; connecting to it reports the failure.
pub fn resolve_socket_path(runtime_dir: Option<&Path>, signature: &str) -> PathBuf {
    let relative = Path::new("hypr").join(signature).join(".socket.sock");
    let base = runtime_dir.unwrap_or_else(|| Path::new(LEGACY_BASE_DIR));

    let primary = base.join(&relative);
    if primary.exists() {
        return primary;
    }

    Path::new(LEGACY_BASE_DIR).join(relative)
}

/// Runtime directory from a raw `$XDG_RUNTIME_DIR` value; empty counts as unset
fn runtime_dir(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// [`resolve_socket_path`] using `$XDG_RUNTIME_DIR`
pub fn socket_path_from_env(signature: &str) -> PathBuf {
    let runtime_dir = runtime_dir(std::env::var_os(RUNTIME_DIR_ENV));
    resolve_socket_path(runtime_dir.as_deref(), signature)
}

/// A request/response exchange with the compositor
///
/// One call is one complete exchange: the payload is written, the whole reply
/// is read, and any connection state is released before returning.
pub trait Transport {
    /// Send `payload` and return the full reply text
    fn request(&self, payload: &str) -> Result<String, HyprError>;
}

/// Transport over Hyprland's Unix domain control socket
///
/// Opens a new connection for every request. Hyprland closes its end after
/// replying, so the reply is read until end of stream.
#[derive(Debug, Clone)]
pub struct UnixSocketTransport {
    socket_path: PathBuf,
}

impl UnixSocketTransport {
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
        }
    }

    /// Transport for the given instance signature, resolved from the environment
    pub fn for_signature(signature: &str) -> Self {
        Self::new(socket_path_from_env(signature))
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }
}

impl Transport for UnixSocketTransport {
    fn request(&self, payload: &str) -> Result<String, HyprError> {
        let mut stream =
            UnixStream::connect(&self.socket_path).map_err(|e| HyprError::ConnectionFailed {
                path: self.socket_path.clone(),
                source: e,
            })?;

        stream
            .write_all(payload.as_bytes())
            .map_err(HyprError::SendFailed)?;
        stream.flush().map_err(HyprError::SendFailed)?;

        let mut reply = String::new();
        stream
            .read_to_string(&mut reply)
            .map_err(HyprError::ReceiveFailed)?;

        Ok(reply)
    }
}
