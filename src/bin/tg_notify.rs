use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use release_relay::cli;
use release_relay::cli::orchestration::{self, NotifyCommand};
use release_relay::config::{self, Credentials};
use release_relay::notify::TelegramClient;
use release_relay::{logging, ui, RelayError};

const USAGE: &str = "Usage:
  tg-notify msg                # reads message from stdin
  tg-notify doc <file>         # reads caption from stdin, uploads file";

#[derive(clap::Parser)]
#[command(
    name = "tg-notify",
    version,
    about = "Send stdin to a Telegram chat as a message or a file caption"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send stdin as a message
    Msg,
    /// Upload a file with stdin as its caption
    Doc {
        #[arg(help = "File to upload")]
        file: PathBuf,
    },
}

impl From<Command> for NotifyCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Msg => NotifyCommand::Message,
            Command::Doc { file } => NotifyCommand::Document(file),
        }
    }
}

fn main() {
    let args: Args = cli::parse_args();
    logging::init();

    if let Err(e) = run(args) {
        ui::display_error(&e.to_string());
        if matches!(e.downcast_ref::<RelayError>(), Some(RelayError::Usage(_))) {
            ui::display_usage(USAGE);
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let credentials = Credentials::from_env()?;
    let config = config::load_config(args.config.as_deref())?;

    let text = orchestration::read_body(io::stdin().lock())?;
    let client = TelegramClient::new(credentials, config.telegram)?;

    orchestration::dispatch_notification(&client, &args.command.into(), &text)?;
    Ok(())
}
