//! Gradelens: Grade Sheet Reporting CLI
//!
//! Runs one report view per invocation, or an interactive menu over all
//! views when no view is given.

use anyhow::Result;
use clap::Parser;

use gradelens::cli::{self, run_interactive, Cli, Commands, Session};
use gradelens::utils::{logging, print_banner};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // The generator works from its own roster file and never loads a grade sheet
    if let Some(Commands::Generate {
        roster,
        output,
        seed,
    }) = &cli.command
    {
        return cli::generate::run_generate(roster, output, *seed);
    }

    print_banner(env!("CARGO_PKG_VERSION"));

    let mut session = Session::new(cli.session_settings());
    if let Some(input) = &cli.input {
        session.load(input)?;
    }

    match cli.command.and_then(Commands::into_view) {
        Some(view) => {
            session.run(view)?;
        }
        None => run_interactive(&mut session)?,
    }

    Ok(())
}
