use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

use polycalc::batch::{self, BatchOptions};

/// Evaluate lines of the form `OPERATOR POLY1 POLY2`, where the operator is one
/// of `+`, `-` or `*`, and write the canonical form of every result.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input file that starts with the number of expressions, or `-` for stdin
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Output file, or `-` for stdout
    #[arg(default_value = "output.txt")]
    output: PathBuf,

    /// Stop at the first expression that cannot be evaluated
    #[arg(long, default_value_t = false)]
    fail_fast: bool,
}

fn open_input(path: &Path) -> io::Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

fn open_output(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        Ok(Box::new(io::stdout().lock()))
    } else {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_env("POLYCALC_LOG"))
        .init();

    let args = Args::parse();

    let reader = match open_input(&args.input) {
        Ok(r) => r,
        Err(e) => {
            eprintln!(
                "{} cannot open {}: {}",
                "error:".red().bold(),
                args.input.display(),
                e
            );
            return ExitCode::FAILURE;
        }
    };

    let writer = match open_output(&args.output) {
        Ok(w) => w,
        Err(e) => {
            eprintln!(
                "{} cannot create {}: {}",
                "error:".red().bold(),
                args.output.display(),
                e
            );
            return ExitCode::FAILURE;
        }
    };

    let options = BatchOptions {
        fail_fast: args.fail_fast,
    };

    match batch::run(reader, writer, &options) {
        Ok(summary) if summary.failed == 0 => ExitCode::SUCCESS,
        Ok(summary) => {
            eprintln!(
                "{} {} of {} expressions could not be evaluated",
                "warning:".yellow().bold(),
                summary.failed,
                summary.evaluated + summary.failed
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
