use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use ordkey::commands::{Command, Commander, ConcreteCommander};
use ordkey::config::Settings;
use ordkey::{Alphabet, MidpointGenerator, OrdkeyError};

/// Generate lexicographic order keys for list items.
#[derive(Debug, Parser)]
#[command(name = "ordkey", version)]
struct Cli {
    /// YAML settings file (defaults to $ORDKEY_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Digit alphabet: base95, base10 or <start>..<end> character codes
    #[arg(long, global = true)]
    alphabet: Option<Alphabet>,

    #[command(subcommand)]
    command: Command,
}

fn run(cli: &Cli) -> Result<Vec<String>, OrdkeyError> {
    let settings = Settings::load(cli.config.as_deref())?;
    let alphabet = settings.resolve_alphabet(cli.alphabet)?;
    debug!("Using alphabet {}", alphabet);

    let commander = ConcreteCommander::new(MidpointGenerator::new(alphabet));
    commander.execute(&cli.command)
}

fn main() -> ExitCode {
    env_logger::init();
    info!("Starting up");

    let cli = Cli::parse();
    match run(&cli) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("Command failed: {:?}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
