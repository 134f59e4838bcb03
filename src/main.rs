use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use manifix::commands::{fix_dependencies, version_update};
use manifix::config::{FixDependenciesConfig, VersionUpdateConfig};

#[derive(Parser)]
#[command(name = "manifix")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Bump package.json versions and normalize dependency ranges", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Increment the package version or copy it from a dependency
    VersionUpdate(VersionUpdateConfig),
    /// Pin scoped dependency ranges and sync peer dependencies
    FixDependencies(FixDependenciesConfig),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "manifix=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::VersionUpdate(config) => {
            let directory = config.working_directory.clone();
            let version = version_update::run(config).with_context(|| {
                format!("Failed to update version in {}", directory.display())
            })?;
            println!("{}", version);
        }
        Commands::FixDependencies(config) => {
            let directory = config.working_directory.clone();
            fix_dependencies::run(config).with_context(|| {
                format!("Failed to fix dependencies in {}", directory.display())
            })?;
        }
    }

    Ok(())
}
