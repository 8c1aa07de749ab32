use std::io::Write;

use clap::{Parser, Subcommand};

use crate::env::{Env, Layered, MapEnv, ProcessEnv};
use crate::error::AppError;
use crate::mode::RuntimeMode;
use crate::registry::{ConfigRegistry, Section};

#[derive(Parser, Debug)]
#[command(
    name = "cms-config",
    about = "Resolve CMS upload and server configuration from the environment",
    version,
    author
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override an environment variable (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", global = true)]
    pub overrides: Vec<String>,

    /// Runtime mode to resolve for, instead of NODE_ENV
    #[arg(long, global = true)]
    pub mode: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved configuration as JSON
    Show {
        /// Section to print: all, plugins or server
        #[arg(default_value = "all")]
        section: Section,
        /// Single-line output
        #[arg(long)]
        compact: bool,
    },

    /// Report values the host is likely to reject
    Check {
        /// Exit with an error if anything is reported
        #[arg(long)]
        strict: bool,
    },

    /// Print the resolved runtime mode
    Mode,
}

pub fn run_cli(cli: Cli) -> Result<(), AppError> {
    let stdout = std::io::stdout();
    run(cli, &ProcessEnv, &mut stdout.lock())
}

/// Execute `cli` against `base`, with `--set` overrides layered on top
pub fn run(cli: Cli, base: &impl Env, out: &mut impl Write) -> Result<(), AppError> {
    let overrides = parse_overrides(&cli.overrides)?;
    tracing::debug!("{} environment override(s)", overrides.len());
    let env = Layered::new(&overrides, base);
    let registry = load_registry(cli.mode.as_deref(), &env)?;
    let mode = registry.mode;

    match cli.command {
        Commands::Show { section, compact } => {
            let value = registry.section(section)?;
            if compact {
                serde_json::to_writer(&mut *out, &value)?;
            } else {
                serde_json::to_writer_pretty(&mut *out, &value)?;
            }
            writeln!(out)?;
        }

        Commands::Check { strict } => {
            let found = registry.diagnostics();
            if found.is_empty() {
                writeln!(out, "✓ No issues ({} mode)", mode)?;
                return Ok(());
            }
            for diagnostic in &found {
                writeln!(out, "! {}", diagnostic)?;
            }
            if strict {
                return Err(AppError::StrictCheckFailed(found.len()));
            }
        }

        Commands::Mode => writeln!(out, "{}", mode)?,
    }

    Ok(())
}

/// `--mode` must name a known mode; without it `NODE_ENV` decides
fn load_registry(flag: Option<&str>, env: &impl Env) -> Result<ConfigRegistry, AppError> {
    match flag {
        Some(name) => {
            let mode = RuntimeMode::from_name(name)
                .ok_or_else(|| AppError::UnknownMode(name.to_string()))?;
            Ok(ConfigRegistry::load_with_mode(env, mode))
        }
        None => Ok(ConfigRegistry::load(env)),
    }
}

fn parse_overrides(raw: &[String]) -> Result<MapEnv, AppError> {
    raw.iter().try_fold(MapEnv::new(), |env, item| match item.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok(env.with(key, value)),
        _ => Err(AppError::InvalidOverride(item.clone())),
    })
}
