//! Command-line front end for ppmscale
//!
//! Exit codes: 0 on success, 99 on usage errors (including a
//! non-positive scale), 1 on any I/O or format error.

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use ppmscale_io::{read_ppm_file, write_ppm_file};
use ppmscale_resample::{ResizeOptions, ScaleSpec, resize};
use std::path::PathBuf;
use std::process;

/// Exit status for usage errors, kept distinct from I/O failures
const EXIT_USAGE: i32 = 99;

#[derive(Parser, Debug)]
#[command(
    name = "ppmscale",
    about = "Resample PPM images up or down with bicubic interpolation, \
             or use a quick 2x box downsample",
    after_help = "Examples:\n  ppmscale 0.5 in.ppm out.ppm\n  ppmscale 2x in.ppm out.ppm"
)]
struct Cli {
    /// Scale factor: a positive decimal, or '2x' for the box downsample
    scale: String,

    /// Input PPM (P6) file
    input: PathBuf,

    /// Output PPM file (replaced if it already exists)
    output: PathBuf,

    /// Print a resampling trace to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE,
            };
            process::exit(code);
        }
    };

    let spec = match ScaleSpec::parse(&cli.scale) {
        Ok(spec) => spec,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(EXIT_USAGE);
        }
    };

    if let Err(err) = run(&cli, spec) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli, spec: ScaleSpec) -> anyhow::Result<()> {
    let source = read_ppm_file(&cli.input)
        .with_context(|| format!("cannot load '{}'", cli.input.display()))?;
    println!("source {}x{}", source.width(), source.height());

    let options = ResizeOptions {
        verbose: cli.verbose,
    };
    let destination = resize(&source, spec, &options)?;
    println!(
        "destination {}x{}",
        destination.width(),
        destination.height()
    );

    // Replace any previous output file
    match std::fs::remove_file(&cli.output) {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("cannot replace '{}'", cli.output.display()));
        }
    }

    write_ppm_file(&destination, &cli.output)
        .with_context(|| format!("cannot write '{}'", cli.output.display()))?;

    Ok(())
}
