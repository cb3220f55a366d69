use clap::Parser;
use miette::Result;

use brix::cli::{Cli, Commands};
use brix::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => brix::cli::build::run(args, &printer)?,
        Commands::Palettes(args) => brix::cli::palettes::run(args, &printer)?,
        Commands::Init(args) => brix::cli::init::run(args, &printer)?,
        Commands::Completions(args) => brix::cli::completions::run(args)?,
    }

    Ok(())
}
