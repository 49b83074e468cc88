use clap::{Args, Parser, Subcommand};

use super::logger::fatal;
use crate::network::subnet::DEFAULT_MAX_BLOCKS;

/// Command-line arguments for the program
#[derive(Parser, Debug)]
#[command(
    name = "in-addr",
    version = env!("CARGO_PKG_VERSION"),
    about = "print ip address subnet in-addr lines to stdout",
)]
pub struct CommandArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// generate in-addr for a given subnet
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// the subnet in cidr notation like 192.168.0.0/16 or 2001:db8:abcd:1234::1/64
    #[arg(allow_hyphen_values = true)]
    pub subnet: String,

    /// Refuse prefixes that expand into more zones than this
    #[arg(long, default_value_t = DEFAULT_MAX_BLOCKS)]
    pub max_blocks: u128,

    /// Path of output file to write JSON results to. Extension is optional.
    #[arg(long)]
    pub json: Option<String>,

    /// Don't print zones to stdout, only write the JSON file
    #[arg(short = 'Q', long)]
    pub quiet: bool,

    /// Print extra information to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.quiet && self.json.is_none() {
            return Err("The argument '--quiet' requires '--json <OUTPUT_FILE>'".to_string());
        }

        if self.max_blocks == 0 {
            return Err("The argument '--max-blocks' must be at least 1".to_string());
        }

        Ok(())
    }
}

/// Retrieves and validates the parsed command-line arguments
pub fn get_parsed_args() -> CommandArgs {
    let args = CommandArgs::parse();
    if let Some(line) = validation_failure(&args) {
        eprintln!("{line}");
        std::process::exit(1);
    }
    args
}

/// The `[FATAL]` line for arguments that parse but don't make sense together.
fn validation_failure(args: &CommandArgs) -> Option<String> {
    let Command::Generate(generate) = &args.command;
    generate.validate().err().map(|e| fatal(&[e]))
}
