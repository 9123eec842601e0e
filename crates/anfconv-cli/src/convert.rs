//! Convert command.

use crate::config::CliConfig;
use anfconv_base::Error;
use anfconv_format::{convert, Format};
use anyhow::Context;
use clap::Args;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input file, format taken from its extension
    #[arg(long = "in", value_name = "INPUT_FILE_NAME")]
    pub input: PathBuf,

    /// Output file, format taken from its extension
    #[arg(long = "out", value_name = "OUTPUT_FILE_NAME")]
    pub output: PathBuf,
}

pub fn run(args: &ConvertArgs, config: &CliConfig) -> anyhow::Result<()> {
    let from = Format::from_path(&args.input)?;
    let to = Format::from_path(&args.output)?;

    if !args.input.exists() {
        return Err(Error::NotFound(args.input.clone()).into());
    }
    tracing::info!("Converting {:?} (.{from}) -> {:?} (.{to})", args.input, args.output);

    let options = config.options();
    let file = File::open(&args.input).map_err(Error::from)?;
    let rendered = convert(BufReader::new(file), from, to, &options)?;

    // Rendered in full first: a format error never leaves a partial file.
    fs::write(&args.output, rendered)
        .map_err(Error::from)
        .with_context(|| format!("Error opening or writing file {}", args.output.display()))?;

    tracing::info!("Wrote {}", args.output.display());
    Ok(())
}
