//! `projson` CLI — format, minify, and validate JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-print (stdin → stdout)
//! echo '{"name":"Alice","age":30}' | projson format
//!
//! # Format from file to file
//! projson format -i data.json -o pretty.json
//!
//! # Minify
//! projson minify -i pretty.json
//!
//! # Validate, with a line/column pointer on failure
//! projson validate -i data.json
//! ```
//!
//! Parse failures are reported through the core locator as
//! `Line L, Column C: message` on stderr with a non-zero exit.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use projson_core::{locate, ParseFailure, ProJsonError};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(
    name = "projson",
    version,
    about = "ProJSON — JSON formatting and validation CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pretty-print JSON with 2-space indentation
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Compact JSON to its minimal single-line form
    Minify {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Check JSON validity, reporting a line/column pointer on failure
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Format { input, output } => {
            let json = read_input(input.as_deref())?;
            let pretty = run_or_report(&json, projson_core::format);
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Minify { input, output } => {
            let json = read_input(input.as_deref())?;
            let minified = run_or_report(&json, projson_core::minify);
            write_output(output.as_deref(), &minified)?;
        }
        Commands::Validate { input } => {
            let json = read_input(input.as_deref())?;
            // Blank input is never decoded: "no content" is not an error.
            if json.trim().is_empty() {
                println!("Valid JSON");
                return Ok(());
            }
            match serde_json::from_str::<serde_json::Value>(&json) {
                Ok(_) => println!("Valid JSON"),
                Err(err) => {
                    report_failure(&json, err);
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Apply a formatting operation; a parse failure becomes a located
/// annotation on stderr and a non-zero exit instead of an anyhow trace.
fn run_or_report(json: &str, op: fn(&str) -> projson_core::Result<String>) -> String {
    match op(json) {
        Ok(out) => out,
        Err(ProJsonError::Parse(err)) => {
            report_failure(json, err);
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

/// Print the located failure, falling back to the raw decoder message when
/// no structured position could be derived.
fn report_failure(source: &str, err: serde_json::Error) {
    let failure = ParseFailure::from(err);
    match locate(source, &failure) {
        Some(located) => eprintln!("{located}"),
        None => eprintln!("{}", failure.message()),
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
