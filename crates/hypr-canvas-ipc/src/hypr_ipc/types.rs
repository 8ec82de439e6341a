//! Typed views of Hyprland's JSON replies
//!
//! Only the fields this crate acts on are required. Informational fields
//! default when a Hyprland version does not report them, so a reply from an
//! older or newer compositor still parses as long as the required keys are
//! present.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque window address as reported by Hyprland (e.g. `0x55d1c0a3e2f0`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowAddress(pub String);

impl WindowAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Workspace reference embedded in a window record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceRef {
    /// Numeric workspace id; special workspaces are negative
    pub id: i32,

    #[serde(default)]
    pub name: String,
}

/// A single window, as returned by `j/clients` and `j/activewindow`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientWindow {
    pub address: WindowAddress,

    /// Top-left corner in layout coordinates: `[x, y]`
    pub at: [i32; 2],

    /// Window size: `[width, height]`
    pub size: [i32; 2],

    pub workspace: WorkspaceRef,

    #[serde(default)]
    pub class: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub floating: bool,

    #[serde(default)]
    pub pid: i64,

    /// Id of the monitor the window is on
    #[serde(default)]
    pub monitor: i64,
}

impl ClientWindow {
    /// Geometry of this window
    pub fn geometry(&self) -> WindowGeometry {
        WindowGeometry::from(self)
    }
}

/// A monitor, as returned by `j/monitors`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    #[serde(default)]
    pub id: i64,

    /// Connector name (e.g. "DP-1")
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub focused: bool,

    /// Fractional scale factor
    pub scale: f64,

    #[serde(default)]
    pub width: i32,

    #[serde(default)]
    pub height: i32,

    #[serde(default)]
    pub x: i32,

    #[serde(default)]
    pub y: i32,
}

/// Name and scale of the output that had focus when it was captured
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusedOutput {
    pub name: String,
    pub scale: f64,
}

impl FocusedOutput {
    /// Pick the focused monitor out of a `j/monitors` reply
    ///
    /// The first monitor with `focused: true` wins.
    pub fn from_monitors(monitors: &[Monitor]) -> Option<Self> {
        monitors.iter().find(|monitor| monitor.focused).map(|monitor| Self {
            name: monitor.name.clone(),
            scale: monitor.scale,
        })
    }
}

/// Size and position of a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct WindowGeometry {
    pub width: i32,
    pub height: i32,
    pub x: i32,
    pub y: i32,
}

impl From<&ClientWindow> for WindowGeometry {
    fn from(window: &ClientWindow) -> Self {
        Self {
            width: window.size[0],
            height: window.size[1],
            x: window.at[0],
            y: window.at[1],
        }
    }
}

impl fmt::Display for WindowGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.width, self.height, self.x, self.y)
    }
}
