//! Quire CLI - checks docs site configuration and composes landing-page sections.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "quire")]
#[command(about = "Docs site configuration checker and landing-page composer")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the site declarations (.yaml, .toml or .json)
    #[arg(short, long, default_value = "quire.yaml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a site configuration in the current directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Assemble and validate the site configuration
    Check {
        /// Site root that docs, blog and sidebars paths are relative to
        #[arg(short, long, default_value = ".")]
        site: PathBuf,

        /// Print the assembled configuration as JSON
        #[arg(long)]
        dump: bool,
    },

    /// Render the landing-page features section
    Features {
        /// Features file, relative to the site directory
        #[arg(default_value = "features.yaml")]
        file: PathBuf,

        /// Directory icon references are resolved against, relative to the site directory
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,

        /// Site root used to assemble the configuration
        #[arg(short, long, default_value = ".")]
        site: PathBuf,

        /// Locale whose base URL prefixes image sources (defaults to the default locale)
        #[arg(short, long)]
        locale: Option<String>,

        /// Write HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Check { site, dump } => {
            commands::check::run(&cli.config, &site, dump)?;
        }
        Commands::Features {
            file,
            static_dir,
            site,
            locale,
            output,
        } => {
            commands::features::run(commands::features::FeaturesArgs {
                config: &cli.config,
                site: &site,
                file: &file,
                static_dir: &static_dir,
                locale: locale.as_deref(),
                output: output.as_deref(),
            })?;
        }
    }

    Ok(())
}
