use clap::Parser;
use rolldice_lib::dice::Dice;
use std::process::ExitCode;
use tracing::Level;

mod cli;
mod helper;
mod repl;

fn main() -> ExitCode {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    if args.dice.is_empty() {
        repl::run(args.separate)
    } else {
        run_arguments(&args)
    }
}

/// Roll every dice string given on the command line, in argument order.
/// All arguments are parsed before any is rolled; a malformed argument is
/// reported and fails the run but never stops the remaining ones.
fn run_arguments(args: &cli::Args) -> ExitCode {
    let mut parsed = Vec::with_capacity(args.dice.len());
    let mut exit = ExitCode::SUCCESS;
    for input in &args.dice {
        match Dice::parse(input) {
            Ok(dice) => parsed.push(dice),
            Err(error) => {
                tracing::debug!("{input}: {error}");
                eprintln!("{input}: malformed dice string");
                exit = ExitCode::FAILURE;
            }
        }
    }
    for dice in &parsed {
        print!("{}", dice.roll().render(args.separate));
    }
    exit
}
