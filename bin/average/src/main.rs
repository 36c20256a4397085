//! Print the average color of an image, or of a rectangular region of it,
//! in hex, rgb and hsl notation.

mod error;

use std::fmt;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use colorpick::{HexCase, Notation, PixelBuffer, Rgb};
use error::CliError;
use image::RgbaImage;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "colorpick-average", about = "Print the average color of an image")]
struct Cli {
    /// Image file to sample.
    image: PathBuf,

    /// Only sample this region, given as X,Y,WIDTH,HEIGHT in pixels.
    #[arg(long, value_parser = parse_region)]
    region: Option<Region>,

    /// Notation to print: hex, rgb or hsl. May be repeated. Prints all three
    /// when left out.
    #[arg(short, long = "format")]
    formats: Vec<Notation>,

    /// Print hex digits in upper case.
    #[arg(long)]
    upper: bool,
}

/// A rectangle of pixels inside an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl Region {
    fn check(&self, width: u32, height: u32) -> Result<(), CliError> {
        if self.width == 0 || self.height == 0 {
            return Err(CliError::EmptyRegion { region: *self });
        }

        let fits = |start: u32, len: u32, max: u32| {
            start.checked_add(len).is_some_and(|end| end <= max)
        };
        if !fits(self.x, self.width, width) || !fits(self.y, self.height, height) {
            return Err(CliError::RegionOutOfBounds {
                region: *self,
                width,
                height,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

fn parse_region(s: &str) -> Result<Region, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("{s:?}: {e}"))?;

    match parts[..] {
        [x, y, width, height] => Ok(Region {
            x,
            y,
            width,
            height,
        }),
        _ => Err(format!("{s:?}: expected X,Y,WIDTH,HEIGHT")),
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("colorpick_average=info"));

    // A subscriber may already be installed, e.g. by a test harness.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

fn load(path: &Path) -> Result<RgbaImage, CliError> {
    let image = image::open(path)
        .map_err(|source| CliError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    tracing::info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "decoded image"
    );

    Ok(image)
}

fn average(image: &RgbaImage, region: Option<Region>) -> Result<Rgb, CliError> {
    let cropped;
    let image = match region {
        Some(region) => {
            region.check(image.width(), image.height())?;
            tracing::debug!(%region, "cropping");
            cropped =
                image::imageops::crop_imm(image, region.x, region.y, region.width, region.height)
                    .to_image();
            &cropped
        }
        None => image,
    };

    let pixels = PixelBuffer::rgba(image.as_raw())?;
    let color = pixels.average_color()?;
    tracing::debug!(pixels = pixels.len(), %color, "averaged");

    Ok(color)
}

fn render(color: Rgb, notation: Notation, case: HexCase) -> String {
    match notation {
        Notation::Hex => color.to_hex_with(case),
        other => color.to_css(other),
    }
}

fn run(cli: &Cli) -> Result<Vec<String>, CliError> {
    let image = load(&cli.image)?;
    let color = average(&image, cli.region)?;

    let case = if cli.upper {
        HexCase::Upper
    } else {
        HexCase::Lower
    };
    let formats = if cli.formats.is_empty() {
        Notation::ALL.to_vec()
    } else {
        cli.formats.clone()
    };

    Ok(formats
        .into_iter()
        .map(|notation| render(color, notation, case))
        .collect())
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(lines) => lines.iter().for_each(|line| println!("{line}")),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
