mod dns;
mod io;
mod modes;
mod network;

use std::process::ExitCode;

use io::cli::{self, Command};
use io::logger::fatal;
use modes::generate;
use network::error::PrefixError;

fn main() -> ExitCode {
    let args = cli::get_parsed_args();

    let result = match &args.command {
        Command::Generate(generate_args) => generate::run(generate_args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", fatal_line(&err));
            ExitCode::FAILURE
        }
    }
}

fn fatal_line(err: &anyhow::Error) -> String {
    match err.downcast_ref::<PrefixError>() {
        Some(prefix_error) => fatal(&prefix_error.fatal_parts()),
        None => fatal(&[format!("{err:#}")]),
    }
}
