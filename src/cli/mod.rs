pub mod brief;
pub mod completions;
pub mod manifest;
pub mod validate;

use clap::{Parser, Subcommand};

/// framecheck - Character sprite export validator and manifest generator
#[derive(Parser, Debug)]
#[command(name = "framecheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate an exports directory against naming and size conventions
    Validate(validate::ValidateArgs),

    /// Generate a JSON manifest for an exports directory
    Manifest(manifest::ManifestArgs),

    /// Inspect a character brief file
    Brief(brief::BriefArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
