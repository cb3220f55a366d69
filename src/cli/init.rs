//! Init command implementation.
//!
//! Generates a starter `brix.yaml` manifest.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{BrixError, Result};
use crate::manifest::{DEFAULT_LENGTH, MANIFEST_FILENAME};
use crate::output::{display_path, Printer};

/// Initialize a brix project by generating a brix.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing brix.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(BrixError::Config {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    // Build YAML manually for clean formatting and comments
    let mut yaml = String::new();
    yaml.push_str("# brix project manifest\n");
    yaml.push_str("\n");
    yaml.push_str("# Palette to quantize against: solid, transparent, effects, mono, all\n");
    yaml.push_str("palette: all\n");
    yaml.push_str("\n");
    yaml.push_str("# Bricks along the longer image side\n");
    yaml.push_str(&format!("length: {}\n", DEFAULT_LENGTH));
    yaml.push_str("\n");
    yaml.push_str("# Output directory for composed mosaics\n");
    yaml.push_str("output: dist\n");
    yaml.push_str("\n");
    yaml.push_str("# Uncomment to replace the built-in brick tile\n");
    yaml.push_str("# texture: tiles/stud.png\n");

    fs::write(&manifest_path, yaml).map_err(|e| BrixError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.success("Created", &display_path(&manifest_path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;

    #[test]
    fn test_init_writes_parseable_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let printer = Printer::new();

        run(
            InitArgs {
                path: dir.path().to_path_buf(),
                force: false,
            },
            &printer,
        )
        .unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest.palette, "all");
        assert_eq!(manifest.length, DEFAULT_LENGTH);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let printer = Printer::new();
        std::fs::write(dir.path().join(MANIFEST_FILENAME), "palette: mono\n").unwrap();

        let err = run(
            InitArgs {
                path: dir.path().to_path_buf(),
                force: false,
            },
            &printer,
        )
        .unwrap_err();
        assert!(matches!(err, BrixError::Config { .. }));
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let printer = Printer::new();
        std::fs::write(dir.path().join(MANIFEST_FILENAME), "palette: mono\n").unwrap();

        run(
            InitArgs {
                path: dir.path().to_path_buf(),
                force: true,
            },
            &printer,
        )
        .unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest.palette, "all");
    }
}
