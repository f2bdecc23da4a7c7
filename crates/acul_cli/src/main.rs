//! acul - apply login screen branding and print the resulting CSS variables

mod config;

use acul_theme::{ApplyOutcome, ScreenContext, ThemeEngine, VariableMap};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{AculConfig, OutputFormat, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "acul")]
#[command(author, version, about = "Custom login screen theming tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to acul.toml (defaults to ./acul.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a screen context's branding and print the written variables
    Apply {
        /// Screen context file (.json or .toml)
        context: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Selector for CSS output
        #[arg(short, long)]
        selector: Option<String>,
    },

    /// Apply OLD, then NEW, and print only the variables that changed
    Diff {
        old: PathBuf,
        new: PathBuf,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show screen metadata for a context
    Inspect {
        /// Screen context file; a mock context is used when omitted
        context: Option<PathBuf>,

        /// Screen name for the mock context
        #[arg(long)]
        screen: Option<String>,
    },

    /// Write a default acul.toml
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let config = AculConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Apply {
            context,
            format,
            selector,
        } => {
            let ctx = load_context(&context)?;
            let mut engine = ThemeEngine::with_options(config.engine);
            let mut style = VariableMap::new();
            let outcome = engine.apply(&ctx, &mut style);
            report(&outcome, &context);

            let selector = selector.unwrap_or(config.output.selector);
            print_variables(&style, format.unwrap_or(config.output.format), &selector)?;
        }
        Commands::Diff { old, new, format } => {
            let old_ctx = load_context(&old)?;
            let new_ctx = load_context(&new)?;
            let mut engine = ThemeEngine::with_options(config.engine);

            let mut style = VariableMap::new();
            engine.apply(&old_ctx, &mut style);

            let mut changed = VariableMap::new();
            let outcome = engine.update(&new_ctx, &mut changed);
            report(&outcome, &new);

            print_variables(
                &changed,
                format.unwrap_or(config.output.format),
                &config.output.selector,
            )?;
        }
        Commands::Inspect { context, screen } => {
            let ctx = match context {
                Some(path) => load_context(&path)?,
                None => ScreenContext::mock(screen.as_deref()),
            };
            let computed = ThemeEngine::with_options(config.engine)
                .compute(&ctx)
                .map_or(0, |vars| vars.len());

            println!("screen:       {}", ctx.screen_name().unwrap_or("<unknown>"));
            println!("page title:   {}", ctx.page_title());
            println!("passkey only: {}", ctx.passkey_only());
            println!("variables:    {}", computed);
        }
        Commands::Init { path } => {
            init_config(&path)?;
        }
    }

    Ok(())
}

fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_new("acul_theme=debug,acul_cli=debug")?
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    Ok(())
}

fn load_context(path: &Path) -> Result<ScreenContext> {
    ScreenContext::load(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn report(outcome: &ApplyOutcome, path: &Path) {
    match outcome {
        ApplyOutcome::NoBranding => {
            tracing::warn!("{} has no branding, nothing applied", path.display())
        }
        ApplyOutcome::Unchanged => tracing::info!("no variables changed"),
        ApplyOutcome::Applied(vars) => tracing::info!("{} variables written", vars.len()),
    }
}

fn print_variables(vars: &VariableMap, format: OutputFormat, selector: &str) -> Result<()> {
    match format {
        OutputFormat::Css => print!("{}", vars.to_css(selector)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(vars)?),
    }
    Ok(())
}

fn init_config(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    let target = dir.join(CONFIG_FILE);
    if target.exists() {
        anyhow::bail!("{} already exists", target.display());
    }

    fs::write(&target, AculConfig::default().to_toml()?)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    println!("Created {}", target.display());
    Ok(())
}
