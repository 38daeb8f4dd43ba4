use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod args;

use args::{Cli, Commands};
use server::commands::{call, functions, serve};
use server::logging;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    match cli.command {
        None => serve::serve_command(&cli.serve.into()).map(|()| ExitCode::SUCCESS),
        Some(Commands::Serve(args)) => serve::serve_command(&args.into()).map(|()| ExitCode::SUCCESS),
        Some(Commands::Functions) => functions::list_functions().map(|()| ExitCode::SUCCESS),
        Some(Commands::Call {
            name,
            params,
            limits,
        }) => {
            let ok = call::call_command(&name, &params, &limits.into())?;
            Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}
