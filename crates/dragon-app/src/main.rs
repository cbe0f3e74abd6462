//! dragon-headless: runs a Dragon Defence game with the autopilot at the
//! controls and prints a summary.
//!
//! Usage:
//!   dragon-headless [--frames N] [--realtime] [--json]
//!
//! Set RUST_LOG=info (or debug) to follow the game as it plays.

use std::process;

use dragon_app::game_loop::spawn_game_loop;
use dragon_app::state::{LoopConfig, RunSummary};
use dragon_sim::engine::SimConfig;

/// Ten simulated minutes at 60Hz.
const DEFAULT_MAX_FRAMES: u64 = 36_000;

#[derive(Debug, PartialEq)]
struct CliOptions {
    max_frames: u64,
    realtime: bool,
    json: bool,
    help: bool,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args[1..]) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {message}");
            print_usage();
            process::exit(2);
        }
    };
    if options.help {
        print_usage();
        return;
    }

    let config = LoopConfig {
        realtime: options.realtime,
        max_frames: Some(options.max_frames),
        autopilot: true,
    };
    let (handles, thread) = match spawn_game_loop(config, SimConfig::default()) {
        Ok(spawned) => spawned,
        Err(e) => {
            eprintln!("Error: failed to start game loop: {e}");
            process::exit(1);
        }
    };

    let frames = match thread.join() {
        Ok(frames) => frames,
        Err(_) => {
            eprintln!("Error: game loop panicked");
            process::exit(1);
        }
    };

    let snapshot = handles
        .latest_snapshot
        .lock()
        .ok()
        .and_then(|lock| lock.clone());
    let Some(snapshot) = snapshot else {
        eprintln!("Error: game loop produced no snapshot");
        process::exit(1);
    };

    let summary = RunSummary::from_snapshot(&snapshot, frames);
    if options.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to encode summary: {e}");
                process::exit(1);
            }
        }
    } else {
        print_summary(&summary);
    }
}

fn print_usage() {
    eprintln!(
        "dragon-headless: Dragon Defence simulation driver\n\
         \n\
         Options:\n\
         \n\
           --frames <N>   Stop after N ticks (default: {DEFAULT_MAX_FRAMES})\n\
           --realtime     Pace ticks to wall-clock time (60Hz)\n\
           --json         Print the summary as JSON\n\
           --help         Show this message\n"
    );
}

fn print_summary(summary: &RunSummary) {
    println!("Frames:    {}", summary.frames);
    println!("Wave:      {}", summary.wave);
    println!("Lives:     {}", summary.lives);
    println!("Credits:   {}", summary.credits);
    println!("Towers:    {}", summary.towers);
    println!("Waypoints: {}", summary.waypoints);
    match summary.lost_on_wave {
        Some(wave) => println!("Result:    lost on wave {wave}"),
        None => println!("Result:    still standing"),
    }
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions {
        max_frames: DEFAULT_MAX_FRAMES,
        realtime: false,
        json: false,
        help: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--frames" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--frames requires a value".to_string())?;
                options.max_frames = value
                    .parse()
                    .map_err(|_| format!("invalid frame count: {value}"))?;
                i += 1;
            }
            "--realtime" => options.realtime = true,
            "--json" => options.json = true,
            "help" | "--help" | "-h" => options.help = true,
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let options = parse_args(&[]).unwrap();
        assert_eq!(options.max_frames, DEFAULT_MAX_FRAMES);
        assert!(!options.realtime && !options.json && !options.help);
    }

    #[test]
    fn test_all_flags() {
        let options = parse_args(&args(&["--frames", "120", "--realtime", "--json"])).unwrap();
        assert_eq!(
            options,
            CliOptions {
                max_frames: 120,
                realtime: true,
                json: true,
                help: false,
            }
        );
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse_args(&args(&["--frames"])).is_err());
        assert!(parse_args(&args(&["--frames", "lots"])).is_err());
        assert!(parse_args(&args(&["--fast"])).is_err());
    }
}
