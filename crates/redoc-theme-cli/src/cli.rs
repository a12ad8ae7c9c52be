//! Command-line definition and dispatch.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use redoc_theme::{
    compose, detect_color_mode, render_props, ApiDocProps, ColorMode, GlobalData,
    PluginManifest, ThemeConfig, DARK_TOKENS, LIGHT_TOKENS,
};
use serde::Serialize;

use crate::output::OutputFormat;

/// Resolve Redoc themes the way a Docusaurus site build would.
#[derive(Debug, Parser)]
#[command(name = "redoc-theme")]
#[command(version)]
#[command(about = "Resolve Redoc theme and options for a Docusaurus site")]
pub struct Cli {
    /// Plugin config file (YAML, or JSON with a .json extension)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Primary color, overriding the config file
    #[arg(long, global = true, value_name = "COLOR")]
    pub primary_color: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the build-time global data (both themes and site options)
    Bundle,

    /// Print the options Redoc receives for one render
    Compose(ComposeArgs),

    /// Print a built-in token table
    Tokens(TokensArgs),

    /// Print plugin registration metadata
    Manifest(ManifestArgs),
}

#[derive(Debug, Args)]
pub struct ComposeArgs {
    /// Color mode to render in
    #[arg(short, long, value_enum, default_value_t = ModeArg::Light)]
    pub mode: ModeArg,

    /// Page props file with `spec` or `specUrl` and optional `options`
    #[arg(short, long, value_name = "FILE")]
    pub page: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct TokensArgs {
    /// Which table to print
    #[arg(short, long, value_enum, default_value_t = ModeArg::Light)]
    pub mode: ModeArg,
}

#[derive(Debug, Args)]
pub struct ManifestArgs {
    /// Show the bundler patch for a server build instead of a client build
    #[arg(long)]
    pub server: bool,
}

/// Color mode as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Light,
    Dark,
    /// Follow the OS preference
    Auto,
}

impl ModeArg {
    pub fn resolve(self) -> ColorMode {
        match self {
            ModeArg::Light => ColorMode::Light,
            ModeArg::Dark => ColorMode::Dark,
            ModeArg::Auto => detect_color_mode(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestOutput {
    #[serde(flatten)]
    manifest: PluginManifest,
    bundler_patch: Option<redoc_theme::BundlerPatch>,
}

/// Runs a parsed command line and returns what should be printed.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let output = match &cli.command {
        Command::Bundle => {
            let data = load_global_data(cli)?;
            cli.format.serialize(&data)?
        }
        Command::Compose(args) => {
            let data = load_global_data(cli)?;
            let mode = args.mode.resolve();
            tracing::debug!(%mode, page = ?args.page, "composing");
            match &args.page {
                Some(path) => {
                    let page = ApiDocProps::from_file(path)
                        .with_context(|| format!("Could not load page props {}", path.display()))?;
                    let props = render_props(&data, &page, mode)
                        .with_context(|| format!("Invalid page props in {}", path.display()))?;
                    cli.format.serialize(&props)?
                }
                None => {
                    let options = compose(&data, mode, None).into_redoc_options();
                    cli.format.serialize(&options)?
                }
            }
        }
        Command::Tokens(args) => match args.mode.resolve() {
            ColorMode::Light => cli.format.serialize(&*LIGHT_TOKENS)?,
            ColorMode::Dark => cli.format.serialize(&*DARK_TOKENS)?,
        },
        Command::Manifest(args) => {
            let manifest = PluginManifest::default();
            let bundler_patch = manifest.bundler_patch(args.server);
            cli.format.serialize(&ManifestOutput {
                manifest,
                bundler_patch,
            })?
        }
    };
    Ok(output)
}

fn load_global_data(cli: &Cli) -> anyhow::Result<GlobalData> {
    let mut config = match &cli.config {
        Some(path) => ThemeConfig::from_file(path)
            .with_context(|| format!("Could not load config {}", path.display()))?,
        None => ThemeConfig::default(),
    };
    if let Some(color) = &cli.primary_color {
        config.primary_color = Some(color.clone());
    }
    Ok(GlobalData::from_config(&config))
}
