//! yield-curve-analytics CLI
//!
//! Run curve analytics over a rate history stored as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Forwards, spreads, historical moves and stress results
//! yield-curve-analytics analyze --input rates.json
//!
//! # Output as JSON, one-year lookback starting 2023
//! yield-curve-analytics analyze --input rates.json --format json --start-date 2023-01-01
//!
//! # Generate a random rate history for testing
//! yield-curve-analytics generate --days 500 --output rates.json
//! ```

use chrono::NaiveDate;
use log::info;
use std::collections::BTreeMap;
use std::fs;
use std::process;
use yield_curve_analytics::core::series::{CurveSnapshot, RateSeries};
use yield_curve_analytics::core::store::{CurveStore, StoreConfig};
use yield_curve_analytics::core::tenor::Tenor;
use yield_curve_analytics::report::AnalyticsReport;
use yield_curve_analytics::simulation::historical::DEFAULT_LOOKBACK;
use yield_curve_analytics::simulation::synthetic::{generate_random_series, SeriesConfig};

fn print_usage() {
    eprintln!(
        r#"yield-curve-analytics — forward rates, spreads and stress tests for a yield curve

USAGE:
    yield-curve-analytics <COMMAND> [OPTIONS]

COMMANDS:
    analyze     Compute forwards, spreads, historical moves and stress results
    generate    Generate a random rate history (for testing)
    help        Show this message

OPTIONS (analyze):
    --input <FILE>          Path to JSON rate history
    --format <FORMAT>       Output format: text (default) or json
    --lookback <DAYS>       Trading days of moves to analyze (default: 252)
    --start-date <DATE>     Ignore rows before YYYY-MM-DD

OPTIONS (generate):
    --days <N>              Number of trading days (default: 500)
    --seed <N>              Random seed (default: 42)
    --output <FILE>         Write to file instead of stdout

Set RUST_LOG=debug for per-computation logging.

EXAMPLES:
    yield-curve-analytics analyze --input rates.json
    yield-curve-analytics analyze --input rates.json --format json --lookback 126
    yield-curve-analytics generate --days 300 --seed 7 --output rates.json"#
    );
}

/// JSON schema for one input row.
#[derive(serde::Serialize, serde::Deserialize)]
struct ObservationInput {
    date: NaiveDate,
    yields: BTreeMap<Tenor, f64>,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct RatesFile {
    observations: Vec<ObservationInput>,
}

fn next_value<'a>(args: &'a [String], i: usize, flag: &str, what: &str) -> &'a str {
    args.get(i).map(String::as_str).unwrap_or_else(|| {
        eprintln!("{} requires {}", flag, what);
        process::exit(1);
    })
}

fn load_series(path: &str) -> RateSeries {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    let file: RatesFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "observations": [
    {{ "date": "2024-03-01", "yields": {{ "3M": 5.45, "2Y": 4.53, "5Y": 4.18, "10Y": 4.19, "30Y": 4.33 }} }}
  ]
}}"#
        );
        process::exit(1);
    });

    let snapshots = file
        .observations
        .into_iter()
        .map(|ob| CurveSnapshot {
            date: ob.date,
            yields: ob.yields,
        })
        .collect();

    RateSeries::from_snapshots(snapshots).unwrap_or_else(|e| {
        eprintln!("Invalid rate history: {}", e);
        process::exit(1);
    })
}

fn cmd_analyze(args: &[String]) {
    let mut input_path = None;
    let mut format = "text".to_string();
    let mut lookback = DEFAULT_LOOKBACK;
    let mut start_date = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(next_value(args, i, "--input", "a file path").to_string());
            }
            "--format" => {
                i += 1;
                format = next_value(args, i, "--format", "'text' or 'json'").to_string();
            }
            "--lookback" => {
                i += 1;
                lookback = next_value(args, i, "--lookback", "a number")
                    .parse()
                    .unwrap_or_else(|_| {
                        eprintln!("--lookback requires a number");
                        process::exit(1);
                    });
            }
            "--start-date" => {
                i += 1;
                let raw = next_value(args, i, "--start-date", "a YYYY-MM-DD date");
                start_date = Some(raw.parse::<NaiveDate>().unwrap_or_else(|e| {
                    eprintln!("Invalid start date '{}': {}", raw, e);
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let mut store = CurveStore::new(StoreConfig { start_date });
    store.load(load_series(&path));
    info!("loaded {} rows from {}", store.len(), path);

    let report = AnalyticsReport::build(&store, lookback).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    if format == "json" {
        let json = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
            eprintln!("Error serializing report: {}", e);
            process::exit(1);
        });
        println!("{}", json);
    } else {
        println!("{}", report);
    }
}

fn cmd_generate(args: &[String]) {
    let mut config = SeriesConfig::default();
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--days" => {
                i += 1;
                config.days = next_value(args, i, "--days", "a number")
                    .parse()
                    .unwrap_or_else(|_| {
                        eprintln!("--days requires a number");
                        process::exit(1);
                    });
            }
            "--seed" => {
                i += 1;
                config.seed = next_value(args, i, "--seed", "a number")
                    .parse()
                    .unwrap_or_else(|_| {
                        eprintln!("--seed requires a number");
                        process::exit(1);
                    });
            }
            "--output" => {
                i += 1;
                output_path = Some(next_value(args, i, "--output", "a file path").to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let series = generate_random_series(&config).unwrap_or_else(|e| {
        eprintln!("Error generating series: {}", e);
        process::exit(1);
    });

    let output = RatesFile {
        observations: (0..series.len())
            .filter_map(|row| series.snapshot(row))
            .map(|snapshot| ObservationInput {
                date: snapshot.date,
                yields: snapshot.yields,
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        eprintln!("Error serializing series: {}", e);
        process::exit(1);
    });

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!("Generated {} trading days → {}", series.len(), path);
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "analyze" => cmd_analyze(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
