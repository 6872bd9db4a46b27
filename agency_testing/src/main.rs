use std::net::IpAddr;

use agency_testing::{bot_detection, email_api, leads};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::BotDetection { host, port, secret } => {
            bot_detection::start_server(host, port, secret).await?
        }
        Command::EmailApi {
            host,
            port,
            api_key,
        } => email_api::start_server(host, port, api_key).await?,
        Command::Leads { host, port, token } => leads::start_server(host, port, token).await?,
        Command::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                env!("CARGO_BIN_NAME"),
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the bot detection testing server
    BotDetection {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8002")]
        port: u16,
        #[arg(long, default_value = "dev-bot-secret")]
        secret: String,
    },
    /// Start the email api testing server, including audiences
    EmailApi {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8003")]
        port: u16,
        #[arg(long, default_value = "dev-email-key")]
        api_key: String,
    },
    /// Start the leads testing server
    Leads {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8004")]
        port: u16,
        #[arg(long, default_value = "dev-leads-token")]
        token: String,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}
