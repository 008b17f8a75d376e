//! slidefit CLI - image placement geometry for slide decks

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use slidefit::{
    detect_format_from_path, FitMode, ImageMetadataCache, Session, TextMetrics, Viewport,
};

#[derive(Parser)]
#[command(name = "slidefit")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Compute slide placement geometry for images and text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image dimensions and aspect ratio
    Info {
        /// Input image files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output JSON
        #[arg(long, env = "SLIDEFIT_JSON")]
        json: bool,
    },

    /// Fit an image into a viewport
    Fit {
        /// Input image file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Fitting mode
        #[arg(short, long, value_enum, default_value = "contain")]
        mode: Mode,

        /// Viewport left edge (inches)
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        x: f64,

        /// Viewport top edge (inches)
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        y: f64,

        /// Viewport width (inches)
        #[arg(short, long, allow_negative_numbers = true)]
        w: f64,

        /// Viewport height (inches)
        #[arg(long, allow_negative_numbers = true)]
        h: f64,

        /// Output JSON
        #[arg(long, env = "SLIDEFIT_JSON")]
        json: bool,
    },

    /// Estimate the height of a text box
    Height {
        /// Font size in points
        #[arg(value_name = "FONT_SIZE")]
        font_size: f64,

        /// Number of lines
        #[arg(long, default_value = "1")]
        lines: u32,

        /// Line height as a multiple of the font size
        #[arg(long, default_value = "1.2")]
        leading: f64,

        /// Extra vertical padding (inches)
        #[arg(long, default_value = "0.15")]
        padding: f64,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Fit the whole image, leaving margin
    Contain,
    /// Fill the viewport, cropping the excess
    Crop,
}

impl From<Mode> for FitMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Contain => FitMode::Contain,
            Mode::Crop => FitMode::Crop,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Info { inputs, json }) => cmd_info(&inputs, json),
        Some(Commands::Fit {
            input,
            mode,
            x,
            y,
            w,
            h,
            json,
        }) => cmd_fit(&input, mode, Viewport::new(x, y, w, h), json),
        Some(Commands::Height {
            font_size,
            lines,
            leading,
            padding,
        }) => {
            cmd_height(font_size, lines, leading, padding);
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: slidefit <COMMAND>".yellow());
            println!("       slidefit --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_info(inputs: &[PathBuf], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let cache = ImageMetadataCache::new();

    if json {
        let mut entries = Vec::with_capacity(inputs.len());
        for input in inputs {
            let dims = cache.dimensions_of(input)?;
            let format = detect_format_from_path(input)?;
            entries.push(serde_json::json!({
                "path": input,
                "format": format.to_string(),
                "mime_type": format.mime_type(),
                "width": dims.width(),
                "height": dims.height(),
                "aspect_ratio": dims.aspect_ratio(),
            }));
        }
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for input in inputs {
        let dims = cache.dimensions_of(input)?;
        let format = detect_format_from_path(input)?;

        println!("{}", "Image Information".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        println!("{}: {}", "File".bold(), input.display());
        println!("{}: {}", "Format".bold(), format);
        println!("{}: {} x {} px", "Size".bold(), dims.width(), dims.height());
        println!("{}: {:.4}", "Aspect ratio".bold(), dims.aspect_ratio());
        println!();
    }

    Ok(())
}

fn cmd_fit(
    input: &Path,
    mode: Mode,
    viewport: Viewport,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("fitting {} into {:?}", input.display(), viewport);
    let session = Session::new();
    let placement = session.fitter().fit(input, mode.into(), viewport)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&placement)?);
        return Ok(());
    }

    let mode = FitMode::from(mode);
    println!("{} ({})", "Placement".cyan().bold(), mode);
    println!("{}", "─".repeat(40).dimmed());
    println!(
        "{}: x={:.4} y={:.4} w={:.4} h={:.4}",
        "Image".bold(),
        placement.rect.x,
        placement.rect.y,
        placement.rect.w,
        placement.rect.h
    );
    if let Some(window) = placement.crop_window() {
        println!(
            "{}: x={:.4} y={:.4} w={:.4} h={:.4}",
            "Crop".bold(),
            window.x,
            window.y,
            window.w,
            window.h
        );
    }

    Ok(())
}

fn cmd_height(font_size: f64, lines: u32, leading: f64, padding: f64) {
    let metrics = TextMetrics::new()
        .with_lines(lines)
        .with_leading(leading)
        .with_padding(padding);
    println!("{:.4}", metrics.height(font_size));
}

fn cmd_version() {
    println!("{} {}", "slidefit".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Slide placement geometry tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/slidefit".dimmed());
    println!("License: MIT");
}
