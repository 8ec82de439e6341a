//! Wire command formatting for the Hyprland control socket
//!
//! Hyprland accepts a single plaintext line per connection. Data queries are
//! prefixed with `j/` so the reply is JSON; keyword and dispatch commands
//! start with `/` and are answered with a short acknowledgement.
//!
//! Every string this crate writes to the socket is produced by the
//! [`Display`](std::fmt::Display) implementations in this module.

use std::fmt;

/// A JSON data query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    /// The currently focused window (`j/activewindow`)
    ActiveWindow,
    /// All monitors (`j/monitors`)
    Monitors,
    /// All mapped windows (`j/clients`)
    Clients,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ActiveWindow => "activewindow",
            Self::Monitors => "monitors",
            Self::Clients => "clients",
        };
        write!(f, "j/{}", name)
    }
}

/// A `windowrulev2` rule applied to the canvas window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowRule {
    /// Never accept keyboard focus
    NoFocus,
    /// Always float
    Float,
    /// No border decoration
    NoBorder,
    /// Corner rounding radius in pixels
    Rounding(u32),
}

impl WindowRule {
    /// Rules applied to a freshly created canvas, in the order they are sent
    pub const INITIAL: [WindowRule; 4] = [
        WindowRule::NoFocus,
        WindowRule::Float,
        WindowRule::NoBorder,
        WindowRule::Rounding(0),
    ];
}

impl fmt::Display for WindowRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFocus => f.write_str("nofocus"),
            Self::Float => f.write_str("float"),
            Self::NoBorder => f.write_str("noborder"),
            Self::Rounding(radius) => write!(f, "rounding {}", radius),
        }
    }
}

/// A one-shot dispatcher action targeting a window by title
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dispatch {
    /// Move a window to a workspace without following it
    MoveToWorkspaceSilent { workspace: i32, title: String },
    /// Place a window at an exact pixel position
    MoveWindowPixelExact { x: i32, y: i32, title: String },
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveToWorkspaceSilent { workspace, title } => {
                write!(f, "movetoworkspacesilent {},title:{}", workspace, title)
            }
            Self::MoveWindowPixelExact { x, y, title } => {
                write!(f, "movewindowpixel exact {} {},title:{}", x, y, title)
            }
        }
    }
}

/// A fire-and-forget command whose reply is not parsed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// `/keyword windowrulev2 <rule>,title:<title>`
    WindowRule { rule: WindowRule, title: String },
    /// `/dispatch <action>`
    Dispatch(Dispatch),
}

impl Command {
    /// Build a window rule keyed by a title matcher
    pub fn window_rule(rule: WindowRule, title: impl Into<String>) -> Self {
        Self::WindowRule {
            rule,
            title: title.into(),
        }
    }

    /// Build a silent workspace move for the window matching `title`
    pub fn move_to_workspace_silent(workspace: i32, title: impl Into<String>) -> Self {
        Self::Dispatch(Dispatch::MoveToWorkspaceSilent {
            workspace,
            title: title.into(),
        })
    }

    /// Build an exact pixel move for the window matching `title`
    pub fn move_window_pixel_exact(x: i32, y: i32, title: impl Into<String>) -> Self {
        Self::Dispatch(Dispatch::MoveWindowPixelExact {
            x,
            y,
            title: title.into(),
        })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindowRule { rule, title } => {
                write!(f, "/keyword windowrulev2 {},title:{}", rule, title)
            }
            Self::Dispatch(dispatch) => write!(f, "/dispatch {}", dispatch),
        }
    }
}
