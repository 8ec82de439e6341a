//! Hyprland IPC client implementation
//!
//! This module provides the `HyprlandClient` used to find the terminal window
//! a canvas belongs to and to place the canvas window over it. Every
//! operation is a blocking request/response exchange on a fresh socket
//! connection; the client keeps no connection open between calls.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::command::{Command, Query, WindowRule};
use super::transport::{instance_signature, Transport, UnixSocketTransport};
use super::types::{ClientWindow, FocusedOutput, Monitor, WindowAddress, WindowGeometry};
use super::HyprError;
use crate::multiplexer;

/// Offset added to each coordinate after halving on a scaled output
const SCALED_OUTPUT_OFFSET: i32 = 10;

/// Acknowledgement Hyprland sends for an accepted keyword or dispatch
const ACK_OK: &str = "ok";

/// Map a requested canvas position into the coordinates `movewindowpixel` expects
///
/// On outputs with a scale factor above 1.0 both coordinates are halved
/// (integer division) and shifted by 10 pixels. Otherwise they pass through
/// unchanged.
///
/// # Example
///
/// ```
/// use hypr_canvas_ipc::pixel_position;
///
/// assert_eq!(pixel_position(1.0, 100, 200), (100, 200));
/// assert_eq!(pixel_position(2.0, 100, 200), (60, 110));
/// ```
pub fn pixel_position(scale: f64, x: i32, y: i32) -> (i32, i32) {
    if scale > 1.0 {
        (x / 2 + SCALED_OUTPUT_OFFSET, y / 2 + SCALED_OUTPUT_OFFSET)
    } else {
        (x, y)
    }
}

/// The only field needed from `j/activewindow` to track the terminal
#[derive(Debug, Deserialize)]
struct ActiveWindowRef {
    address: WindowAddress,
}

fn fetch<T: Transport, R: DeserializeOwned>(transport: &T, query: Query) -> Result<R, HyprError> {
    let command = query.to_string();
    debug!("Running socket query {}", command);

    let reply = transport.request(&command)?;
    serde_json::from_str(&reply).map_err(|source| HyprError::DeserializeFailed { command, source })
}

fn fetch_active_address<T: Transport>(transport: &T) -> Result<WindowAddress, HyprError> {
    let active: ActiveWindowRef = fetch(transport, Query::ActiveWindow)?;
    Ok(active.address)
}

fn fetch_focused_output<T: Transport>(transport: &T) -> Result<FocusedOutput, HyprError> {
    let monitors: Vec<Monitor> = fetch(transport, Query::Monitors)?;
    FocusedOutput::from_monitors(&monitors).ok_or(HyprError::NoFocusedOutput)
}

/// Client for the Hyprland control socket
///
/// Construction captures the focused window (the terminal the caller runs
/// in) and the focused output. Both are snapshots: the output is only
/// re-read through [`refresh_focused_output`](Self::refresh_focused_output),
/// and the window address is re-read before each lookup only when a
/// terminal multiplexer is in use.
///
/// # Example
///
/// ```ignore
/// let mut client = HyprlandClient::from_env()?;
/// client.apply_initial_window_rules("ueberzugpp_canvas")?;
/// client.move_window("ueberzugpp_canvas", 100, 200)?;
/// ```
#[derive(Debug)]
pub struct HyprlandClient<T: Transport = UnixSocketTransport> {
    transport: T,
    active_address: WindowAddress,
    output: FocusedOutput,
    /// Re-resolve the active window before every lookup
    multiplexed: bool,
}

impl HyprlandClient<UnixSocketTransport> {
    /// Connect to the Hyprland instance identified by `signature`
    ///
    /// Resolves the socket path (falling back to the pre-0.40 location when
    /// the runtime directory socket is missing), then captures the active
    /// window and the focused output.
    ///
    /// # Errors
    ///
    /// Returns `HyprError::ConnectionFailed` if the socket cannot be reached,
    /// `HyprError::DeserializeFailed` if a reply is malformed (including the
    /// empty object Hyprland sends when no window has focus), and
    /// `HyprError::NoFocusedOutput` if no monitor is focused.
    pub fn new(signature: &str) -> Result<Self, HyprError> {
        let transport = UnixSocketTransport::for_signature(signature);
        info!("Using hyprland socket {}", transport.socket_path().display());

        Self::with_transport(transport, multiplexer::tmux_in_use())
    }

    /// Connect using `$HYPRLAND_INSTANCE_SIGNATURE`
    ///
    /// # Errors
    ///
    /// Returns `HyprError::SignatureNotSet` if the variable is missing, or any
    /// error from [`new`](Self::new).
    pub fn from_env() -> Result<Self, HyprError> {
        let signature = instance_signature()?;
        Self::new(&signature)
    }
}

impl<T: Transport> HyprlandClient<T> {
    /// Build a client over an arbitrary transport
    ///
    /// `multiplexed` should be true when running inside tmux or a similar
    /// multiplexer, which can move focus between terminal windows without
    /// this client noticing.
    pub fn with_transport(transport: T, multiplexed: bool) -> Result<Self, HyprError> {
        let active_address = fetch_active_address(&transport)?;
        let output = fetch_focused_output(&transport)?;

        debug!(
            address = %active_address,
            output = %output.name,
            scale = output.scale,
            multiplexed,
            "Captured Hyprland state"
        );

        Ok(Self {
            transport,
            active_address,
            output,
            multiplexed,
        })
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a JSON query and deserialize the reply
    ///
    /// # Errors
    ///
    /// Returns a transport error if the exchange fails, or
    /// `HyprError::DeserializeFailed` if the reply does not parse as `R`.
    pub fn query<R: DeserializeOwned>(&self, query: Query) -> Result<R, HyprError> {
        fetch(&self.transport, query)
    }

    /// Send a keyword or dispatch command
    ///
    /// The reply is not parsed. An acknowledgement other than `ok` is logged
    /// and otherwise ignored.
    pub fn send(&self, command: &Command) -> Result<(), HyprError> {
        let payload = command.to_string();
        debug!("Running socket command {}", payload);

        let reply = self.transport.request(&payload)?;
        let reply = reply.trim();
        if reply == ACK_OK {
            debug!(reply, "Command acknowledged");
        } else {
            warn!(command = %payload, reply, "Hyprland did not acknowledge command");
        }

        Ok(())
    }

    /// Name of the output that was focused when it was last captured
    pub fn focused_output_name(&self) -> &str {
        &self.output.name
    }

    /// Name and scale of the output that was focused when it was last captured
    pub fn focused_output(&self) -> &FocusedOutput {
        &self.output
    }

    /// Re-read the focused output from `j/monitors`
    pub fn refresh_focused_output(&mut self) -> Result<&FocusedOutput, HyprError> {
        self.output = fetch_focused_output(&self.transport)?;
        Ok(&self.output)
    }

    /// Address of the window this client tracks
    pub fn active_window_address(&self) -> &WindowAddress {
        &self.active_address
    }

    /// Re-read the tracked address from `j/activewindow`
    pub fn refresh_active_window(&mut self) -> Result<&WindowAddress, HyprError> {
        self.active_address = fetch_active_address(&self.transport)?;
        Ok(&self.active_address)
    }

    /// All monitors
    pub fn monitors(&self) -> Result<Vec<Monitor>, HyprError> {
        self.query(Query::Monitors)
    }

    /// All mapped windows
    pub fn clients(&self) -> Result<Vec<ClientWindow>, HyprError> {
        self.query(Query::Clients)
    }

    /// Look up the tracked window in the current client list
    ///
    /// Under a multiplexer the tracked address is refreshed first.
    ///
    /// # Errors
    ///
    /// Returns `HyprError::ActiveWindowNotFound` if no client has the tracked
    /// address.
    pub fn active_window(&mut self) -> Result<ClientWindow, HyprError> {
        if self.multiplexed {
            self.refresh_active_window()?;
        }

        self.clients()?
            .into_iter()
            .find(|client| client.address == self.active_address)
            .ok_or_else(|| HyprError::ActiveWindowNotFound {
                address: self.active_address.to_string(),
            })
    }

    /// Size and position of the tracked window
    pub fn window_geometry(&mut self) -> Result<WindowGeometry, HyprError> {
        let window = self.active_window()?;
        Ok(window.geometry())
    }

    /// Make the canvas window float without focus, border or rounding
    ///
    /// Rules are sent one by one; if one fails the remaining rules are not
    /// sent and the rules already applied stay in place.
    pub fn apply_initial_window_rules(&self, app_id: &str) -> Result<(), HyprError> {
        for rule in WindowRule::INITIAL {
            self.send(&Command::window_rule(rule, app_id))?;
        }
        Ok(())
    }

    /// Move the canvas window to `workspace_id` without switching to it
    pub fn change_workspace(&self, app_id: &str, workspace_id: i32) -> Result<(), HyprError> {
        self.send(&Command::move_to_workspace_silent(workspace_id, app_id))
    }

    /// Place the canvas window at (`x`, `y`) on the tracked window's workspace
    ///
    /// The canvas is first moved to the workspace the tracked window is on,
    /// then positioned with [`pixel_position`] applied for the captured
    /// output scale.
    pub fn move_window(&mut self, app_id: &str, x: i32, y: i32) -> Result<(), HyprError> {
        let window = self.active_window()?;
        self.change_workspace(app_id, window.workspace.id)?;

        let (x, y) = pixel_position(self.output.scale, x, y);
        self.send(&Command::move_window_pixel_exact(x, y, app_id))
    }
}
