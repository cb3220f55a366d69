//! Build command implementation.
//!
//! Runs the mosaic pipeline over input photos and writes a PNG plus a
//! usage-stats JSON per input. Status lines go to stderr; stdout carries
//! one JSON result line per image for machine consumption.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use clap::Args;
use notify::{RecursiveMode, Watcher};
use walkdir::WalkDir;

use crate::error::{BrixError, Result};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::render::{render_mosaic, Mosaic, Texture};
use crate::types::Catalog;

/// File extensions treated as raster inputs when expanding directories.
const RASTER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Render photos into brick mosaics
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Input images or directories to process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Palette to quantize against (see `brix palettes`)
    #[arg(long, short)]
    pub palette: Option<String>,

    /// Bricks along the longer image side
    #[arg(long, short)]
    pub length: Option<u32>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Brick texture image overriding the built-in tile
    #[arg(long)]
    pub texture: Option<PathBuf>,

    /// Rebuild whenever an input changes
    #[arg(long)]
    pub watch: bool,
}

/// Settings resolved from flags and the manifest.
struct BuildContext {
    catalog: Catalog,
    texture: Texture,
    palette: String,
    length: u32,
    output: PathBuf,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load_or_default(Path::new("."))?;

    let texture = match args.texture.as_ref().or(manifest.texture.as_ref()) {
        Some(path) => Texture::load(path)?,
        None => Texture::builtin()?,
    };

    let ctx = BuildContext {
        catalog: Catalog::new()?,
        texture,
        palette: args.palette.clone().unwrap_or(manifest.palette),
        length: args.length.unwrap_or(manifest.length),
        output: args.output.clone().unwrap_or(manifest.output),
    };

    // Fail on an unknown palette before touching any image
    ctx.catalog.palette(&ctx.palette)?;

    if !ctx.output.exists() {
        fs::create_dir_all(&ctx.output).map_err(|e| BrixError::Io {
            path: ctx.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    build_all(&args.files, &ctx, printer)?;

    if args.watch {
        watch_and_rebuild(&args.files, &ctx, printer)?;
    }

    Ok(())
}

/// Expand arguments and compose every discovered image.
fn build_all(files: &[PathBuf], ctx: &BuildContext, printer: &Printer) -> Result<()> {
    let inputs = collect_inputs(files, printer);
    if inputs.is_empty() {
        return Err(BrixError::InvalidInput {
            message: "no raster images found in the given paths".to_string(),
            help: Some(format!("Recognized extensions: {}", RASTER_EXTENSIONS.join(", "))),
        });
    }

    for input in &inputs {
        build_one(input, ctx, printer)?;
    }

    printer.success(
        "Finished",
        &format!(
            "{} to {}",
            plural(inputs.len(), "mosaic", "mosaics"),
            display_path(&ctx.output)
        ),
    );
    Ok(())
}

/// Compose one image and write its PNG and stats artifacts.
fn build_one(path: &Path, ctx: &BuildContext, printer: &Printer) -> Result<()> {
    let display = display_path(path);
    let bytes = fs::read(path).map_err(|e| BrixError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read image: {}", e),
    })?;

    let mosaic = render_mosaic(&bytes, ctx.length, &ctx.palette, &ctx.texture, &ctx.catalog)?;
    let (grid_w, grid_h) = (
        mosaic.image.width() / ctx.texture.width(),
        mosaic.image.height() / ctx.texture.height(),
    );
    printer.status(
        "Composing",
        &format!("{} ({}x{} bricks, {})", display, grid_w, grid_h,
            plural(mosaic.stats.len(), "colour", "colours")),
    );

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("mosaic");
    let png_path = ctx.output.join(format!("{}-mosaic.png", stem));
    let stats_path = ctx.output.join(format!("{}-mosaic.json", stem));

    crate::render::write_png(&mosaic.image, &png_path)?;
    write_stats(&mosaic, &stats_path)?;

    // Machine-readable result line on stdout
    let result = serde_json::json!({
        "image": display,
        "output": display_path(&png_path),
        "bricks": mosaic.stats,
    });
    println!("{}", result);

    Ok(())
}

fn write_stats(mosaic: &Mosaic, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&mosaic.stats).map_err(|e| BrixError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to serialize stats: {}", e),
    })?;
    fs::write(path, json).map_err(|e| BrixError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write stats: {}", e),
    })
}

/// Expand files and directories into a sorted list of raster inputs.
///
/// Directories are walked recursively; files with unrecognized extensions
/// are skipped with a warning rather than failing the whole run.
fn collect_inputs(files: &[PathBuf], printer: &Printer) -> Vec<PathBuf> {
    let mut inputs = Vec::new();

    for file in files {
        if file.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(file)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.path().is_file() && is_raster(e.path()))
                .map(|e| e.path().to_path_buf())
                .collect();
            found.sort();
            inputs.extend(found);
        } else if is_raster(file) {
            inputs.push(file.clone());
        } else {
            printer.warning("Skipping", &format!("unsupported file {}", display_path(file)));
        }
    }

    inputs
}

fn is_raster(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            RASTER_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Block and rebuild whenever a watched input changes.
///
/// Build failures inside the loop are reported and the watch continues;
/// only watcher setup errors abort.
fn watch_and_rebuild(files: &[PathBuf], ctx: &BuildContext, printer: &Printer) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).map_err(|e| BrixError::Config {
        message: format!("Failed to start file watcher: {}", e),
        help: None,
    })?;

    for file in files {
        watcher
            .watch(file, RecursiveMode::Recursive)
            .map_err(|e| BrixError::Io {
                path: file.clone(),
                message: format!("Failed to watch: {}", e),
            })?;
    }

    printer.info("Watching", "for changes (ctrl-c to stop)");

    for event in &rx {
        let relevant = match event {
            Ok(event) => matches!(
                event.kind,
                notify::EventKind::Create(_)
                    | notify::EventKind::Modify(_)
                    | notify::EventKind::Remove(_)
            ),
            Err(_) => false,
        };
        if !relevant {
            continue;
        }

        // Collapse bursts of events into one rebuild
        while rx.try_recv().is_ok() {}

        if let Err(e) = build_all(files, ctx, printer) {
            printer.error("Failed", &e.to_string());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_raster() {
        assert!(is_raster(Path::new("photo.png")));
        assert!(is_raster(Path::new("photo.JPG")));
        assert!(is_raster(Path::new("dir/photo.webp")));
        assert!(!is_raster(Path::new("notes.txt")));
        assert!(!is_raster(Path::new("photo")));
    }

    #[test]
    fn test_collect_inputs_expands_directories() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("nested");
        fs::create_dir(&sub).unwrap();
        fs::write(dir.path().join("b.png"), b"x").unwrap();
        fs::write(dir.path().join("a.jpg"), b"x").unwrap();
        fs::write(sub.join("c.gif"), b"x").unwrap();
        fs::write(dir.path().join("readme.md"), b"x").unwrap();

        let printer = Printer::new();
        let inputs = collect_inputs(&[dir.path().to_path_buf()], &printer);

        let names: Vec<String> = inputs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png", "c.gif"]);
    }

    #[test]
    fn test_collect_inputs_skips_unsupported_files() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("notes.txt");
        fs::write(&txt, b"x").unwrap();

        let printer = Printer::new();
        let inputs = collect_inputs(&[txt], &printer);
        assert!(inputs.is_empty());
    }
}
