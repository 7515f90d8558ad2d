use clap::Parser;
use framecheck::cli::{Cli, Commands};
use framecheck::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Validate(args) => framecheck::cli::validate::run(args, &printer)?,
        Commands::Manifest(args) => framecheck::cli::manifest::run(args, &printer)?,
        Commands::Brief(args) => framecheck::cli::brief::run(args, &printer)?,
        Commands::Completions(args) => framecheck::cli::completions::run(args)?,
    }

    Ok(())
}
