//! Headless driver: wires the simulation to a scripted player and log-backed
//! outputs, runs it for a stretch of simulated time, and prints the score.
//!
//! Usage: `headless_client [seed] [seconds] [config.json]`

mod bot;
mod game;
mod sinks;

use game_core::Config;

use game::LocalGame;

const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let seed: u64 = args.get(1).map_or(12345, |raw| parse_or_exit(raw, "seed"));
    let seconds: f32 = args.get(2).map_or(60.0, |raw| parse_or_exit(raw, "seconds"));
    let config = match args.get(3) {
        Some(path) => load_config(path),
        None => Config::new(),
    };

    log::info!("starting with seed {} for {}s of play", seed, seconds);

    let mut game = LocalGame::new(seed, config);
    let frames = (seconds / FRAME_DT).ceil() as u64;
    for _ in 0..frames {
        game.frame(FRAME_DT);
    }

    let (left, right) = game.score();
    log::info!("simulated {} frames", frames);
    println!("final score: player {} - {} ai", left, right);
}

fn parse_or_exit<T: std::str::FromStr>(raw: &str, what: &str) -> T {
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            log::error!("{} must be a number, got {:?}", what, raw);
            std::process::exit(1);
        }
    }
}

fn load_config(path: &str) -> Config {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) => {
            log::error!("could not read {}: {}", path, err);
            std::process::exit(1);
        }
    };
    match Config::from_json_str(&json) {
        Ok(config) => {
            log::info!("loaded config from {}", path);
            config
        }
        Err(err) => {
            log::error!("rejected config {}: {}", path, err);
            std::process::exit(1);
        }
    }
}
