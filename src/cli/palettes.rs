//! Palette listing command.
//!
//! Prints the brick colour tables: a summary of every palette, the colours
//! of one palette, or a JSON dump of the merged palette and name table.

use std::collections::BTreeMap;

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::Catalog;

/// List brick palettes and colours
#[derive(Args, Debug)]
pub struct PalettesArgs {
    /// Palette to list (all palettes when omitted)
    pub name: Option<String>,

    /// Emit the merged palette and name table as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PalettesArgs, printer: &Printer) -> Result<()> {
    let catalog = Catalog::new()?;

    if args.json {
        let colours: BTreeMap<&str, String> = catalog
            .merged()
            .iter()
            .map(|(code, colour)| (code.as_str(), colour.to_string()))
            .collect();
        let names: BTreeMap<&str, &str> = catalog
            .merged()
            .iter()
            .map(|(code, _)| {
                (code.as_str(), catalog.display_name(code).unwrap_or("(unnamed)"))
            })
            .collect();

        let dump = serde_json::json!({ "palettes": colours, "names": names });
        println!("{}", dump);
        return Ok(());
    }

    match &args.name {
        Some(name) => {
            let palette = catalog.palette(name)?;
            printer.status(
                "Palette",
                &format!("{} ({})", palette.name, plural(palette.len(), "colour", "colours")),
            );
            for (code, colour) in palette.iter() {
                let name = catalog.display_name(code).unwrap_or("(unnamed)");
                println!("{}  {}  {}", code, colour, name);
            }
        }
        None => {
            for palette in catalog.palettes() {
                printer.status(
                    "Palette",
                    &format!("{} ({})", palette.name, plural(palette.len(), "colour", "colours")),
                );
            }
            let merged = catalog.merged();
            printer.info(
                "Merged",
                &format!("all ({})", plural(merged.len(), "colour", "colours")),
            );
        }
    }

    Ok(())
}
