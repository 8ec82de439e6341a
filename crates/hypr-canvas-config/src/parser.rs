//! KDL configuration parser

use std::path::Path;

use crate::error::ConfigError;
use crate::model::*;

/// Parse a configuration file from the given path
pub fn parse_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config_str(&content)
}

/// Parse the configuration file if it exists, otherwise return defaults
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        tracing::debug!("No configuration at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    parse_config(path)
}

/// Parse configuration from a string
pub fn parse_config_str(content: &str) -> Result<Config, ConfigError> {
    let doc: kdl::KdlDocument = content.parse().map_err(|e: kdl::KdlError| {
        // kdl depends on an older miette, so rebuild the span for ours
        let offset = e.span.offset();
        let len = e.span.len();
        let span = miette::SourceSpan::from((offset, len));
        ConfigError::ParseError {
            src: content.to_string(),
            span,
            source: e,
        }
    })?;

    let mut config = Config::default();

    for node in doc.nodes() {
        match node.name().value() {
            "global" => {
                config.global = parse_global(node)?;
            }
            "canvas" => {
                config.canvas = parse_canvas(node)?;
            }
            "hyprland" => {
                config.hyprland = parse_hyprland(node)?;
            }
            name => {
                tracing::warn!("Unknown top-level node: {}", name);
            }
        }
    }

    Ok(config)
}

/// First argument of a node as a string
fn string_arg<'a>(node: &'a kdl::KdlNode, field: &str) -> Result<&'a str, ConfigError> {
    node.entries()
        .first()
        .and_then(|entry| entry.value().as_string())
        .ok_or_else(|| ConfigError::MissingField {
            field: format!("{} (expected a string, e.g. `{} \"...\"`)", field, field),
        })
}

fn parse_global(node: &kdl::KdlNode) -> Result<GlobalConfig, ConfigError> {
    let mut global = GlobalConfig::default();

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "log-level" => {
                    let level = string_arg(child, "log-level")?
                        .parse::<LogLevel>()
                        .map_err(|message| ConfigError::Invalid {
                            node: "log-level".to_string(),
                            message,
                        })?;
                    global.log_level = Some(level);
                }
                name => {
                    tracing::warn!("Unknown global config option: {}", name);
                }
            }
        }
    }

    Ok(global)
}

fn parse_canvas(node: &kdl::KdlNode) -> Result<CanvasConfig, ConfigError> {
    let mut canvas = CanvasConfig::default();

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "app-id" => {
                    let app_id = string_arg(child, "app-id")?;
                    validate_app_id(app_id)?;
                    canvas.app_id = Some(app_id.to_string());
                }
                "workspace" => {
                    let id = child
                        .entries()
                        .first()
                        .and_then(|entry| entry.value().as_i64())
                        .ok_or_else(|| ConfigError::MissingField {
                            field: "workspace (expected an integer, e.g. `workspace 3`)"
                                .to_string(),
                        })?;
                    let id = i32::try_from(id).map_err(|_| ConfigError::Invalid {
                        node: "workspace".to_string(),
                        message: format!("Workspace id {} is out of range", id),
                    })?;
                    canvas.workspace = Some(id);
                }
                name => {
                    tracing::warn!("Unknown canvas config option: {}", name);
                }
            }
        }
    }

    Ok(canvas)
}

fn parse_hyprland(node: &kdl::KdlNode) -> Result<HyprlandConfig, ConfigError> {
    let mut hyprland = HyprlandConfig::default();

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "instance-signature" => {
                    let signature = string_arg(child, "instance-signature")?;
                    if signature.is_empty() {
                        return Err(ConfigError::Invalid {
                            node: "instance-signature".to_string(),
                            message: "must not be empty".to_string(),
                        });
                    }
                    hyprland.instance_signature = Some(signature.to_string());
                }
                name => {
                    tracing::warn!("Unknown hyprland config option: {}", name);
                }
            }
        }
    }

    Ok(hyprland)
}

/// Check a canvas window title before it is spliced into `...,title:<app-id>`
///
/// Hyprland splits command arguments on commas, so a title containing one
/// would turn into extra arguments.
pub fn validate_app_id(app_id: &str) -> Result<(), ConfigError> {
    if app_id.is_empty() {
        return Err(ConfigError::Invalid {
            node: "app-id".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if app_id.contains(',') || app_id.contains('\n') {
        return Err(ConfigError::Invalid {
            node: "app-id".to_string(),
            message: format!(
                "'{}' contains a comma or newline, which Hyprland would split \
                 into separate command arguments",
                app_id
            ),
        });
    }
    Ok(())
}
