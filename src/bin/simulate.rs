//! Skyward headless simulator CLI.
//!
//! Plays seeded sessions with an autopilot and prints difficulty statistics.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # 100 runs, seed 42
//!   cargo run --bin simulate -- --runs 500       # Bigger batch
//!   cargo run --bin simulate -- --seed 7 --json  # Also write a JSON report

use skyward::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let (config, write_json) = parse_args(&args);

    if config.shows_header() {
        print_header(&config);
    }

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if write_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write {}: {}", filename, e);
                std::process::exit(1);
            }
        }
    }
}

fn print_header(config: &SimConfig) {
    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              SKYWARD DIFFICULTY SIMULATOR                     ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Ticks:      {}", config.max_ticks_per_run);
    println!(
        "  Screen:         {}x{}",
        config.session.screen_width, config.session.screen_height
    );
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();
}

fn parse_number<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).and_then(|v| v.parse().ok()) {
        Some(value) => value,
        None => {
            eprintln!("{} requires a number", flag);
            print_usage();
            std::process::exit(1);
        }
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" | "-n" => {
                i += 1;
                config.num_runs = parse_number(args, i, "--runs");
            }
            "--seed" => {
                i += 1;
                config.seed = Some(parse_number(args, i, "--seed"));
            }
            "--random" => config.seed = None,
            "--max-ticks" => {
                i += 1;
                config.max_ticks_per_run = parse_number(args, i, "--max-ticks");
            }
            "--verbose" | "-v" => config.verbosity = 2,
            "--quiet" | "-q" => config.verbosity = 0,
            "--json" => write_json = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    (config, write_json)
}

fn print_usage() {
    eprintln!(
        "Skyward Headless Simulator\n\
         \n\
         Usage: simulate [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N, -n N  Sessions to play (default: 100)\n\
         \x20 --seed N        Base RNG seed, run i uses N+i wrapping (default: 42)\n\
         \x20 --random        Seed every run from entropy\n\
         \x20 --max-ticks N   Tick cap per run (default: 36000)\n\
         \x20 --verbose, -v   One line per run\n\
         \x20 --quiet, -q     Report only, no banner\n\
         \x20 --json          Also write sim_report_<timestamp>.json\n\
         \x20 --help, -h      Show this help"
    );
}
