//! hypr-canvas CLI
//!
//! Inspect Hyprland state and place a canvas window from the command line.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use hypr_canvas_config::{Config, DEFAULT_CONFIG_PATH};
use hypr_canvas_ipc::HyprlandClient;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

/// Log filter used when neither `RUST_LOG` nor the config sets one
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser, Debug)]
#[command(name = "hypr-canvas")]
#[command(about = "Place terminal image canvases on Hyprland")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Title of the canvas window (overrides `canvas.app-id`)
    #[arg(short, long, global = true)]
    app_id: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the focused output name and scale
    Output,

    /// Show the window the canvas belongs to
    ActiveWindow,

    /// Print the active window's `width height x y`
    Geometry,

    /// Make the canvas window float without focus, border or rounding
    Setup,

    /// Move the canvas window to a workspace without switching to it
    #[command(allow_negative_numbers = true)]
    Workspace {
        /// Workspace id (defaults to `canvas.workspace`)
        id: Option<i32>,
    },

    /// Place the canvas window on the active window's workspace
    #[command(allow_negative_numbers = true)]
    Move { x: i32, y: i32 },

    /// Validate the configuration file
    Validate,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Expand tilde in config path
    let config_path: PathBuf = shellexpand::tilde(&cli.config).into_owned().into();

    // Validation reports parse errors itself
    let config = match cli.command {
        Commands::Validate => Config::default(),
        _ => hypr_canvas_config::load_config(&config_path)?,
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter(&config))),
        )
        .init();

    match cli.command {
        Commands::Validate => cmd_validate(&config_path),
        Commands::Output => cmd_output(&connect(&config)?, cli.json),
        Commands::ActiveWindow => cmd_active_window(&mut connect(&config)?, cli.json),
        Commands::Geometry => cmd_geometry(&mut connect(&config)?, cli.json),
        Commands::Setup => {
            let app_id = resolve_app_id(cli.app_id, &config)?;
            cmd_setup(&connect(&config)?, &app_id)
        }
        Commands::Workspace { id } => {
            let app_id = resolve_app_id(cli.app_id, &config)?;
            let workspace = id.or(config.canvas.workspace).ok_or_else(|| {
                miette::miette!("No workspace given; pass one or set `canvas {{ workspace N }}`")
            })?;
            cmd_workspace(&connect(&config)?, &app_id, workspace)
        }
        Commands::Move { x, y } => {
            let app_id = resolve_app_id(cli.app_id, &config)?;
            cmd_move(&mut connect(&config)?, &app_id, x, y)
        }
    }
}

fn default_log_filter(config: &Config) -> &'static str {
    config
        .global
        .log_level
        .map(|level| level.as_filter())
        .unwrap_or(DEFAULT_LOG_FILTER)
}

fn resolve_app_id(flag: Option<String>, config: &Config) -> miette::Result<String> {
    let app_id = flag.or_else(|| config.canvas.app_id.clone()).ok_or_else(|| {
        miette::miette!("No canvas window title; pass --app-id or set `canvas {{ app-id \"...\" }}`")
    })?;
    hypr_canvas_config::validate_app_id(&app_id)?;
    Ok(app_id)
}

fn connect(config: &Config) -> miette::Result<HyprlandClient> {
    let client = match &config.hyprland.instance_signature {
        Some(signature) => HyprlandClient::new(signature),
        None => HyprlandClient::from_env(),
    };
    client.into_diagnostic()
}

fn cmd_validate(config_path: &Path) -> miette::Result<()> {
    println!("Validating configuration: {}", config_path.display());

    match hypr_canvas_config::parse_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!(
                "  App id: {}",
                config.canvas.app_id.as_deref().unwrap_or("<unset>")
            );
            match config.canvas.workspace {
                Some(id) => println!("  Workspace: {}", id),
                None => println!("  Workspace: <unset>"),
            }
            if let Some(level) = config.global.log_level {
                println!("  Log level: {}", level.as_filter());
            }
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn cmd_output(client: &HyprlandClient, json: bool) -> miette::Result<()> {
    let output = client.focused_output();
    if json {
        println!("{}", serde_json::to_string(output).into_diagnostic()?);
    } else {
        println!("{} {}", output.name, output.scale);
    }
    Ok(())
}

fn cmd_active_window(client: &mut HyprlandClient, json: bool) -> miette::Result<()> {
    let window = client.active_window().into_diagnostic()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&window).into_diagnostic()?);
    } else {
        println!("{}", window.address);
        println!("  Class: {}", window.class);
        println!("  Title: {}", window.title);
        println!("  Workspace: {}", window.workspace.id);
        println!("  Geometry: {}", window.geometry());
    }
    Ok(())
}

fn cmd_geometry(client: &mut HyprlandClient, json: bool) -> miette::Result<()> {
    let geometry = client.window_geometry().into_diagnostic()?;
    if json {
        println!("{}", serde_json::to_string(&geometry).into_diagnostic()?);
    } else {
        println!("{}", geometry);
    }
    Ok(())
}

fn cmd_setup(client: &HyprlandClient, app_id: &str) -> miette::Result<()> {
    client.apply_initial_window_rules(app_id).into_diagnostic()?;
    tracing::info!("Applied initial window rules to title:{}", app_id);
    Ok(())
}

fn cmd_workspace(client: &HyprlandClient, app_id: &str, workspace: i32) -> miette::Result<()> {
    client.change_workspace(app_id, workspace).into_diagnostic()?;
    tracing::info!("Moved title:{} to workspace {}", app_id, workspace);
    Ok(())
}

fn cmd_move(client: &mut HyprlandClient, app_id: &str, x: i32, y: i32) -> miette::Result<()> {
    client.move_window(app_id, x, y).into_diagnostic()?;
    tracing::info!("Moved title:{} to {} {}", app_id, x, y);
    Ok(())
}
