use clap::Parser;
use log::{info, LevelFilter};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use dialsift_core::Extractor;

#[derive(Parser)]
#[command(name = "dialsift")]
#[command(about = "Extract dialable NANP phone numbers from raw telephone audio")]
#[command(version)]
struct Cli {
    /// Input file of raw mono signed 8-bit 8000 Hz PCM; reads stdin when omitted
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Verbose diagnostics (per-frame classifications, symbol commits)
    #[arg(short)]
    verbose: bool,

    /// Debug diagnostics (adds per-frequency Goertzel levels; implies -v)
    #[arg(short)]
    debug: bool,

    /// Send the log stream to stderr so stdout carries only results
    #[arg(short = '2')]
    log_to_stderr: bool,
}

fn init_logging(cli: &Cli) {
    let level = if cli.debug {
        LevelFilter::Trace
    } else if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let target = if cli.log_to_stderr {
        env_logger::Target::Stderr
    } else {
        env_logger::Target::Stdout
    };
    env_logger::Builder::new()
        .filter_level(level)
        .target(target)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli);

    let reader: Box<dyn Read> = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("cannot open {}: {e}", path.display()))?;
            info!("reading {}", path.display());
            Box::new(file)
        }
        None => {
            info!("reading stdin");
            Box::new(io::stdin().lock())
        }
    };

    let extraction = Extractor::new().run(reader)?;

    // Results: the stage-1 symbol stream, a blank line, then one validated
    // number per line.
    println!("{}", extraction.symbols);
    println!();
    for number in &extraction.numbers {
        println!("{number}");
    }

    Ok(())
}
