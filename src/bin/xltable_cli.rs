//! CLI tool for xltable - loads a row file and prints one page as JSON
//!
//! Usage:
//!   xltable_cli <rows.json|rows.csv|rows.tsv>            # Page 1 to stdout
//!   xltable_cli <rows.json> --page 3                      # 1-based page
//!   xltable_cli <rows.json> --rows-per-page 25 --group-size 10
//!   xltable_cli <rows.json> --page 3 -o page.json         # Output to file
//!
//! Set `RUST_LOG=debug` to see navigation logs on stderr.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing_subscriber::EnvFilter;
use xltable::layout::Viewport;
use xltable::source::{self, Delimiter};
use xltable::{PageView, PaginatedTable, Row, TableConfig};

const USAGE: &str = "Usage: xltable_cli <rows.json|rows.csv|rows.tsv> [--page N] \
                     [--rows-per-page N] [--group-size N] [--height PX] [-o output.json]";

struct Args {
    input: String,
    page: Option<String>,
    config: TableConfig,
    height: f32,
    output: Option<String>,
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn parse_args() -> Args {
    let mut argv = env::args().skip(1);
    let Some(input) = argv.next() else {
        fail(USAGE);
    };

    let mut args = Args {
        input,
        page: None,
        config: TableConfig::default(),
        height: 400.0,
        output: None,
    };

    while let Some(flag) = argv.next() {
        let Some(value) = argv.next() else {
            fail(&format!("Missing value for {flag}\n{USAGE}"));
        };
        match flag.as_str() {
            "--page" => args.page = Some(value),
            "--rows-per-page" => {
                args.config.rows_per_page = value
                    .parse()
                    .unwrap_or_else(|_| fail(&format!("Invalid --rows-per-page: {value}")));
            }
            "--group-size" => {
                args.config.page_group_size = value
                    .parse()
                    .unwrap_or_else(|_| fail(&format!("Invalid --group-size: {value}")));
            }
            "--height" => {
                args.height = value
                    .parse()
                    .unwrap_or_else(|_| fail(&format!("Invalid --height: {value}")));
            }
            "-o" => args.output = Some(value),
            _ => fail(&format!("Unknown option {flag}\n{USAGE}")),
        }
    }
    args
}

fn load_rows(path: &str, data: &str) -> xltable::Result<Vec<Row>> {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("csv") => Ok(source::rows_from_delimited(data, Delimiter::Comma)),
        Some("tsv") => Ok(source::rows_from_delimited(data, Delimiter::Tab)),
        // A photo feed first, then a bare array of rows.
        _ => source::rows_from_json(data).or_else(|_| source::rows_from_json_rows(data)),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = parse_args();

    // Read input file
    let data = match fs::read_to_string(&args.input) {
        Ok(d) => d,
        Err(e) => fail(&format!("Error reading {}: {}", args.input, e)),
    };

    let rows = match load_rows(&args.input, &data) {
        Ok(rows) => rows,
        Err(e) => fail(&format!("Error loading rows: {e}")),
    };

    let mut table = match PaginatedTable::new(rows, &args.config) {
        Ok(t) => t,
        Err(e) => fail(&format!("Error building table: {e}")),
    };

    if let Some(page) = &args.page {
        if let Err(e) = table.go_to_page_from_text(page) {
            fail(&e.to_string());
        }
    }

    let viewport = Viewport::new(args.height, args.config.row_height);
    let view = PageView::build(&table, &viewport);

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&view) {
        Ok(j) => j,
        Err(e) => fail(&format!("Error serializing JSON: {e}")),
    };

    // Output
    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                fail(&format!("Error writing {path}: {e}"));
            }
            eprintln!("Written: {path}");
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
