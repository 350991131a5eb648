#![forbid(unsafe_code)]

//! Applies one filter to a `P3` image file.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use ppmedit::{ppm_parse_bytes, ppm_write, Filter, PpmError};

/// Apply a filter to an ASCII PPM (P3) image.
#[derive(Parser, Debug)]
#[command(name = "ppmedit")]
#[command(version, about, long_about = None)]
struct Args {
  /// Image to read
  input: PathBuf,

  /// Where to write the filtered image
  output: PathBuf,

  /// One of: grayscale, greyscale, invert, emboss, motionblur
  filter: String,

  /// Blur length, required by motionblur
  length: Option<u32>,

  /// Log progress at debug level
  #[arg(short, long)]
  verbose: bool,
}

fn init_logger(verbose: bool) {
  let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
  env_logger::Builder::new().filter_level(level).parse_default_env().init();
}

fn main() -> Result<()> {
  let args = Args::parse();
  init_logger(args.verbose);

  let filter = match Filter::from_name(&args.filter, args.length) {
    Ok(filter) => filter,
    Err(PpmError::MissingLength) => bail!("motionblur needs a LENGTH argument"),
    Err(e) => bail!("{e}: {:?}", args.filter),
  };
  if args.length.is_some() && !matches!(filter, Filter::MotionBlur { .. }) {
    log::warn!("LENGTH is only used by motionblur, ignoring it");
  }

  let bytes = std::fs::read(&args.input)
    .with_context(|| format!("failed to read {}", args.input.display()))?;
  let image = ppm_parse_bytes(&bytes)
    .with_context(|| format!("failed to parse {}", args.input.display()))?;
  log::info!("read {}x{} image from {}", image.width(), image.height(), args.input.display());

  let filtered = filter.apply(&image);

  std::fs::write(&args.output, ppm_write(&filtered))
    .with_context(|| format!("failed to write {}", args.output.display()))?;
  log::info!("wrote {}", args.output.display());
  Ok(())
}
