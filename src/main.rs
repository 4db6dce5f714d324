// src/main.rs

use std::process;

use anyhow::Context;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use strip_fixtures::{
    adapters::{filesystem::RealFileSystem, reporter::ConsoleReporter},
    cli::Cli,
    config::Config,
    services::sweep::{SweepOptions, Sweeper},
};

fn main() {
    let cli = Cli::parse_args();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::INFO } else { Level::WARN })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let fs = RealFileSystem;

    let base_config = match &cli.config {
        Some(path) => Some(
            Config::load(&fs, path)
                .with_context(|| format!("loading {}", path.display()))?,
        ),
        None => None,
    };
    let config = cli.validate_and_build_config(base_config)?;
    debug!(?config, "resolved configuration");

    let reporter = ConsoleReporter::new(!cli.no_color, config.dry_run);
    let sweeper = Sweeper::new(fs, reporter, SweepOptions::from(&config));

    sweeper.run(&config.project_root)?;

    Ok(())
}
