//! Command-line plumbing shared by the `next-tag` and `tg-notify` binaries

pub mod orchestration;

use clap::error::ErrorKind;
use clap::Parser;

/// Parse command-line arguments, exiting with status 1 on a usage error.
///
/// `--help` and `--version` still print to stdout and exit 0.
pub fn parse_args<P: Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    }
}
