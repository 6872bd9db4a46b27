use agency::{
    commands::{check_config::check_config, email::EmailCommand, serve::serve},
    telemetry,
};
use agency_utils::agency_version;
use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    telemetry::init_tracing();

    let config = agency_config::load().context("Failed to load config")?;
    let _sentry_guard = config.sentry.as_ref().map(telemetry::init_sentry);

    match cli.command {
        Command::Serve => serve(config).await,
        Command::Email { command } => command.invoke(config).await,
        Command::CheckConfig { verbose } => check_config(&config, verbose),
        Command::Completion { .. } => unreachable!(),
    }
}

#[derive(Debug, Parser)]
#[command(version = agency_version())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the HTTP server handling the contact and referral forms
    #[command(aliases(["run", "start", "r", "s"]))]
    Serve,
    /// Test email deliverability
    #[command(aliases(["e"]))]
    Email {
        #[command(subcommand)]
        command: EmailCommand,
    },
    /// Build all services from the configuration without serving
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
