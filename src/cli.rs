use std::fmt::Write as _;

use crate::combat::{derive_stats, run_battle};
use crate::data::movie::{DEFAULT_MOVIE_RATING, DEFAULT_MOVIE_RUNTIME};
use crate::data::{default_movie, default_opponent, load_movie};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Battle,
    Stats,
}

/// No subcommand means `battle`. Flags in the first position do too.
pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        None | Some("battle") => Some(Command::Battle),
        Some(flag) if flag.starts_with("--") => Some(Command::Battle),
        Some("stats") => Some(Command::Stats),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Battle) => handle_battle(args),
        Some(Command::Stats) => handle_stats(args),
        None => {
            eprintln!(
                "usage: movie-battle [battle [--movie <path>] [--json] | stats <runtime> <rating>]"
            );
            2
        }
    }
}

fn handle_battle(args: &[String]) -> i32 {
    let as_json = args.iter().any(|arg| arg == "--json");
    let movie_path = args
        .iter()
        .position(|arg| arg == "--movie")
        .map(|idx| args.get(idx + 1).filter(|path| !path.starts_with("--")));

    let movie = match movie_path {
        None => default_movie(),
        Some(None) => {
            eprintln!("usage: movie-battle battle --movie <path>");
            return 2;
        }
        Some(Some(path)) => match load_movie(path) {
            Ok(movie) => movie,
            Err(err) => {
                eprintln!("movie load failed: {err}");
                return 1;
            }
        },
    };

    let report = run_battle(&movie, default_opponent());

    if as_json {
        match serde_json::to_string_pretty(&report) {
            Ok(payload) => println!("{payload}"),
            Err(err) => {
                eprintln!("failed to serialize battle report: {err}");
                return 1;
            }
        }
    } else {
        println!("{}", report.to_text());
    }

    0
}

fn handle_stats(args: &[String]) -> i32 {
    let runtime = parse_i32_arg(args.get(2), "runtime", DEFAULT_MOVIE_RUNTIME);
    let rating = parse_f64_arg(args.get(3), "rating", DEFAULT_MOVIE_RATING);

    let stats = derive_stats(runtime, rating);
    match serde_json::to_string_pretty(&stats) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize stats: {err}");
            1
        }
    }
}

fn parse_i32_arg(raw: Option<&String>, name: &str, default: i32) -> i32 {
    raw.and_then(|value| value.parse::<i32>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

fn parse_f64_arg(raw: Option<&String>, name: &str, default: f64) -> f64 {
    raw.and_then(|value| value.parse::<f64>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                let mut msg = String::new();
                let _ = write!(
                    &mut msg,
                    "invalid {name} '{value}', defaulting to {default}"
                );
                eprintln!("{msg}");
            }
            default
        })
}
