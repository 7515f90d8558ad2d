//! Brief inspection command.
//!
//! Loads a character brief and prints the parsed mapping as JSON, which is
//! handy for checking what the generation pipeline will actually see.

use std::path::PathBuf;

use clap::Args;

use crate::brief::load_brief;
use crate::error::{FrameError, Result};
use crate::output::{display_path, plural, Printer};

/// Inspect a character brief file
#[derive(Args, Debug)]
pub struct BriefArgs {
    /// Brief file to load
    #[arg(required = true)]
    pub file: PathBuf,
}

pub fn run(args: BriefArgs, printer: &Printer) -> Result<()> {
    let brief = load_brief(&args.file)?;

    printer.status(
        "Loaded",
        &format!(
            "{} from {}",
            plural(brief.len(), "key", "keys"),
            display_path(&args.file)
        ),
    );

    let json = serde_json::to_string_pretty(&brief).map_err(|e| FrameError::Parse {
        message: format!("Failed to serialize brief: {e}"),
        help: None,
    })?;
    println!("{json}");

    Ok(())
}
