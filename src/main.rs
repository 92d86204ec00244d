use std::path::PathBuf;
use std::process::ExitCode;

use autotile_slicer::{AutotileExtractor, ExtractOptions, SliceError};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Slice an autotile image into individual images for usage in tileset definitions
#[derive(Parser, Debug)]
#[command(name = "autotile_slicer")]
#[command(about = "Slice an autotile image", long_about = None)]
struct Args {
    /// Base name of the tile
    tile: String,

    /// Tile size in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,

    /// Path to autotile image
    image: PathBuf,

    /// Output path
    out: PathBuf,

    /// Disable json file generation
    #[arg(long)]
    no_json: bool,

    /// Losslessly shrink written PNGs with oxipng
    #[arg(long)]
    optimise: bool,

    /// Report layout and written files
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> Result<(), SliceError> {
    let extractor = AutotileExtractor::new(&args.image)?;
    let options = ExtractOptions {
        tile: args.tile.clone(),
        tile_size: args.size,
        skip_json: args.no_json,
        optimise: args.optimise,
    };

    let summary = extractor.extract(&options, &args.out)?;
    info!(
        "Wrote {} images to {}",
        summary.images.len(),
        args.out.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
