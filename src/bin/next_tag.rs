use std::io::{self, Write};

use anyhow::Result;

use release_relay::cli::{self, orchestration};
use release_relay::release::GhCli;
use release_relay::{config, logging, ui, RelayError};

const USAGE: &str = "Usage: next-tag <owner/repo>";

#[derive(clap::Parser)]
#[command(
    name = "next-tag",
    version,
    about = "Print the next release tag for a GitHub repository"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(help = "Repository to query, as owner/repo")]
    repo: String,
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
    let config = config::load_config(args.config.as_deref())?;
    let source = GhCli::with_program(config.release.gh_program, config.release.limit);

    let tag = orchestration::run_next_tag(&source, &args.repo)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(tag.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
