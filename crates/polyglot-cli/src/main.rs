use clap::Parser;
use polyglot_core::PolyglotError;

use crate::cli::CliArgs;

mod cli;
mod commands;

pub type CliResult<T> = Result<T, PolyglotError>;

fn main() -> CliResult<()> {
    env_logger::init();

    // no arguments at all means the user wants to be asked
    if std::env::args_os().len() == 1 {
        return commands::interactive::run();
    }

    CliArgs::parse().run()
}
