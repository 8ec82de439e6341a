//! Configuration data model

/// Config file location used when none is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/hypr-canvas/config.kdl";

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub global: GlobalConfig,
    pub canvas: CanvasConfig,
    pub hyprland: HyprlandConfig,
}

/// Global settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalConfig {
    /// `None` leaves the choice to `RUST_LOG` or the binary's default
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

/// The canvas window being placed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanvasConfig {
    /// Window title the rules and dispatches match on
    pub app_id: Option<String>,
    /// Workspace used by `workspace` when none is given
    pub workspace: Option<i32>,
}

/// Compositor connection settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HyprlandConfig {
    /// Overrides `$HYPRLAND_INSTANCE_SIGNATURE`
    pub instance_signature: Option<String>,
}
