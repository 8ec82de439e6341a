//! Configuration parsing for hypr-canvas
//!
//! This crate handles parsing the KDL configuration file that supplies the
//! canvas window title, default workspace, log level and an optional
//! Hyprland instance signature override.

mod error;
mod model;
mod parser;

pub use error::ConfigError;
pub use model::*;
pub use parser::{load_config, parse_config, parse_config_str, validate_app_id};
