//! CLI tool for sheetgrid - resolves a Sheets JSON payload and outputs the table model
//!
//! Usage:
//!   sheetgrid_cli <input.json>                       # Output JSON to stdout
//!   sheetgrid_cli <input.json> -o out.json           # Output JSON to file
//!   sheetgrid_cli <input.json> --editable numeric    # none | all | numeric
//!   sheetgrid_cli <input.json> --column-tabbing --matrix -v

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use log::{Level, LevelFilter, Log, Metadata, Record};
use sheetgrid::{EditablePolicy, TableData, TableSettings, TableView};

const USAGE: &str = "Usage: sheetgrid_cli <input.json> [-o output.json] \
[--editable none|all|numeric] [--column-tabbing] [--matrix] [-v|-q]";

/// Plain stderr logger.
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };
        eprintln!("[{tag}] {}", record.args());
    }

    fn flush(&self) {}
}

struct Args {
    input: String,
    output: Option<String>,
    settings: TableSettings,
    level: LevelFilter,
}

fn fail(msg: &str) -> ! {
    eprintln!("{msg}");
    eprintln!("{USAGE}");
    std::process::exit(1);
}

fn parse_args() -> Args {
    let mut args = env::args().skip(1);
    let mut input = None;
    let mut output = None;
    let mut settings = TableSettings::default();
    let mut level = LevelFilter::Warn;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" => output = Some(args.next().unwrap_or_else(|| fail("-o needs a path"))),
            "--editable" => {
                let value = args.next().unwrap_or_else(|| fail("--editable needs a value"));
                settings.editable = EditablePolicy::parse(&value)
                    .unwrap_or_else(|| fail(&format!("unknown --editable value: {value}")));
            }
            "--column-tabbing" => settings.column_tabbing = true,
            "--matrix" => settings.create_matrix = true,
            "-v" => level = LevelFilter::Debug,
            "-q" => level = LevelFilter::Off,
            other if other.starts_with('-') => fail(&format!("unknown option: {other}")),
            other => input = Some(other.to_string()),
        }
    }

    Args {
        input: input.unwrap_or_else(|| fail("missing input file")),
        output,
        settings,
        level,
    }
}

fn main() {
    let args = parse_args();

    log::set_max_level(args.level);
    if log::set_boxed_logger(Box::new(StderrLogger { level: args.level })).is_err() {
        eprintln!("logger already installed");
    }

    // Read input file
    let json = match fs::read_to_string(&args.input) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {}: {}", args.input, e);
            std::process::exit(1);
        }
    };

    // Parse payload
    let data = match TableData::from_json(&json) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error parsing payload: {}", e);
            std::process::exit(1);
        }
    };

    let table = TableView::new(args.settings).resolve(&data);

    // Serialize to JSON
    let out = match serde_json::to_string_pretty(&table) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &out) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(out.as_bytes()).unwrap();
            println!();
        }
    }
}
