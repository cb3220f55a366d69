pub mod build;
pub mod completions;
pub mod init;
pub mod palettes;

use clap::{Parser, Subcommand};

/// brix - Brick mosaic renderer
#[derive(Parser, Debug)]
#[command(name = "brix")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render photos into brick mosaics
    Build(build::BuildArgs),

    /// List brick palettes and colours
    Palettes(palettes::PalettesArgs),

    /// Initialize a brix project (generates brix.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
