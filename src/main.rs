//! # Hexitor Main Entry Point
//!
//! Parses arguments, loads the file and hands the terminal to the editor.

use std::process::ExitCode;

use hexitor::cmd_args::{ArgsOutcome, CommandLineArgs};
use hexitor::repl::io::{TerminalEventStream, TerminalRenderStream};
use hexitor::{config, AppController, HexError};

fn main() -> ExitCode {
    let args = match CommandLineArgs::try_parse_from(std::env::args_os()) {
        Ok(args) => args,
        Err(ArgsOutcome::Informational(text)) => {
            print!("{text}");
            return ExitCode::SUCCESS;
        }
        Err(ArgsOutcome::Invalid(err)) => {
            println!("{err}");
            return exit_code(&err);
        }
    };

    if let Err(e) = config::init_tracing(args.verbose()) {
        eprintln!("Warning: {e:#}");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Exiting with error: {:#}", e);
            match e.downcast_ref::<HexError>() {
                Some(err) => {
                    println!("{err}");
                    exit_code(err)
                }
                None => {
                    eprintln!("Error: {e:#}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn run(args: &CommandLineArgs) -> anyhow::Result<()> {
    // Load before touching the terminal so load errors print normally
    let mut app = AppController::with_io_streams(
        args,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;
    app.run()
}

fn exit_code(err: &HexError) -> ExitCode {
    ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
}
