use clap::Parser;

mod cli;
mod commands;
mod domain;
mod error;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use services::config::{resolve_config, Overrides};
pub use services::evaluator::Evaluator;
pub use services::output::{print_error, print_one};
pub use services::render::{labels, Labels};

fn run(cli: &Cli) -> anyhow::Result<()> {
    if handle_config_commands(cli)? {
        return Ok(());
    }
    handle_runtime_commands(cli)
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        print_error(cli.json, &e);
        std::process::exit(1);
    }
}
