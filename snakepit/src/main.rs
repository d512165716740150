use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use snakepit::commands::{contact::ContactCommand, snakes::SnakesCommand};
use snakepit_config::DEFAULT_CONFIG_PATH;
use snakepit_utils::snakepit_version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(ExitCode::SUCCESS);
    }

    init_tracing();

    let config = snakepit_config::load(&config_paths()).context("Failed to load config")?;

    match cli.command {
        Command::Contact(command) => command.invoke(&config),
        Command::Snakes(command) => command.invoke(&config),
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
            Ok(ExitCode::SUCCESS)
        }
        Command::Completion { .. } => unreachable!(),
    }
}

#[derive(Debug, Parser)]
#[command(version = snakepit_version())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Submit the contact form
    #[command(aliases(["c"]))]
    Contact(ContactCommand),
    /// Manage the list of snakes interactively
    #[command(aliases(["s"]))]
    Snakes(SnakesCommand),
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

/// The default config file followed by the colon separated list of files in
/// `SNAKEPIT_CONFIG`.
fn config_paths() -> Vec<PathBuf> {
    let extra = std::env::var_os("SNAKEPIT_CONFIG").unwrap_or_default();
    std::iter::once(PathBuf::from(DEFAULT_CONFIG_PATH))
        .chain(std::env::split_paths(&extra).filter(|path| !path.as_os_str().is_empty()))
        .collect()
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
