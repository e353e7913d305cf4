use std::path::PathBuf;

use river_crossing::core::config::Configuration;
use river_crossing::logging;
use river_crossing::rules::laws::NoLaws;
use river_crossing::search::bfs::solve_with_stats;
use river_crossing::search::universe::analyze;
use river_crossing::settings::Settings;
use river_crossing::solution::export_solution;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut json_out: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut do_analyze = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("--json requires an output path");
                    std::process::exit(2);
                };
                json_out = Some(PathBuf::from(v));
                i += 2;
            }
            "--config" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("--config requires a file path");
                    std::process::exit(2);
                };
                config_path = Some(PathBuf::from(v));
                i += 2;
            }
            "--analyze" => {
                do_analyze = true;
                i += 1;
            }
            "-h" | "--help" => {
                println!("Usage: solve [--json <out.json>] [--analyze] [--config <file>]");
                return;
            }
            x => {
                eprintln!("Unknown option: {x}");
                eprintln!("Usage: solve [--json <out.json>] [--analyze] [--config <file>]");
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

    let start = Configuration::START;
    let (path, stats) = solve_with_stats(start, &NoLaws);

    let Some(path) = path else {
        println!("No solution from {start}.");
        std::process::exit(1);
    };

    println!("Start: {start}");
    for (n, mv) in path.iter().enumerate() {
        println!("{:>2}. {:<24} {}", n + 1, mv.label, mv.to);
    }
    println!("Minimum crossings: {}", path.len());
    println!(
        "Search: expanded {}, enqueued {}, max frontier {}",
        stats.expanded, stats.enqueued, stats.max_frontier
    );

    if do_analyze {
        let report = analyze(&NoLaws);
        println!("Configurations: {} total, {} safe", report.total, report.safe);
        println!("Reachable from start: {}", report.reachable);
        if report.dead_ends.is_empty() {
            println!("Dead ends: none");
        } else {
            for c in &report.dead_ends {
                println!("Dead end: {c}");
            }
        }
    }

    if let Some(out) = json_out {
        match export_solution(&out, start, &path) {
            Ok(manifest) => println!(
                "Exported {} crossings to {}",
                manifest.length,
                out.display()
            ),
            Err(e) => {
                eprintln!("Export failed: {e}");
                std::process::exit(1);
            }
        }
    }
}
