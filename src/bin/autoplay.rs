use std::path::PathBuf;
use std::time::Duration;

use river_crossing::core::bank::Bank;
use river_crossing::core::config::Configuration;
use river_crossing::logging;
use river_crossing::playback::Playback;
use river_crossing::search::bfs::solve;
use river_crossing::settings::Settings;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut delay_override: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("--config requires a file path");
                    std::process::exit(2);
                };
                config_path = Some(PathBuf::from(v));
                i += 2;
            }
            "--delay-ms" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("--delay-ms requires an integer argument");
                    std::process::exit(2);
                };
                delay_override = match v.parse::<u64>() {
                    Ok(ms) => Some(ms),
                    Err(e) => {
                        eprintln!("invalid --delay-ms {v}: {e}");
                        std::process::exit(2);
                    }
                };
                i += 2;
            }
            x => {
                eprintln!("Unknown option: {x}");
                eprintln!("Usage: autoplay [--delay-ms <N>] [--config <file>]");
                std::process::exit(2);
            }
        }
    }

    let settings = match config_path {
        Some(p) => Settings::load(&p).unwrap_or_else(|e| {
            eprintln!("Failed to load config {}: {e}", p.display());
            std::process::exit(2);
        }),
        None => Settings::default(),
    };
    logging::init(&settings.log_filter);

    let delay = delay_override
        .map(Duration::from_millis)
        .unwrap_or_else(|| settings.step_delay());

    let Some(path) = solve(Configuration::START) else {
        eprintln!("The puzzle has no solution.");
        std::process::exit(1);
    };

    let mut playback = Playback::new(Configuration::START, path);
    println!("Solving the puzzle...");
    render(&playback.current());

    for step in playback.by_ref() {
        std::thread::sleep(delay);
        println!("Step {}/{}: {}", step.index, step.total, step.mv.label);
        render(&step.mv.to);
    }

    println!("Done! Everyone crossed safely in {} steps.", playback.len());
}

fn render(c: &Configuration) {
    let list = |bank: Bank| {
        let names: Vec<&str> = c.on_bank(bank).map(|e| e.name()).collect();
        if names.is_empty() {
            "-".to_string()
        } else {
            names.join(" ")
        }
    };
    let boat = match c.ferryman() {
        Bank::Near => "<~ boat",
        Bank::Far => "boat ~>",
    };
    println!("  near: {:<30} {boat}   far: {}", list(Bank::Near), list(Bank::Far));
}
