use std::io::{self, Write};
use std::path::PathBuf;

use river_crossing::core::bank::Bank;
use river_crossing::core::config::Configuration;
use river_crossing::logging;
use river_crossing::search::hint::Hint;
use river_crossing::session::{Mode, Outcome, Session};
use river_crossing::settings::Settings;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut mode_override: Option<Mode> = None;
    let mut config_path: Option<PathBuf> = None;

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
            x => match Mode::parse(x) {
                Some(Mode::Auto) => {
                    eprintln!("auto mode is played by the `autoplay` binary");
                    std::process::exit(2);
                }
                Some(m) => {
                    mode_override = Some(m);
                    i += 1;
                }
                None => {
                    eprintln!("Unknown option: {x}");
                    eprintln!("Usage: play [manual|assisted] [--config <file>]");
                    std::process::exit(2);
                }
            },
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

    let mode = match mode_override.unwrap_or(settings.mode) {
        Mode::Auto => Mode::Assisted,
        m => m,
    };
    let mut session = Session::new(mode);

    print_help(mode);

    loop {
        render(&session.current());
        if session.is_solved() {
            println!("Congratulations! Everyone crossed in {} moves.", session.moves_made());
            break;
        }

        let moves = session.legal_moves();
        for (n, mv) in moves.iter().enumerate() {
            println!("  {}) {}", n + 1, mv.label);
        }
        print!("move {} > ", session.moves_made() + 1);
        io::stdout().flush().ok();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let cmd = line.trim();

        match cmd {
            "" => continue,
            "help" => {
                print_help(mode);
                continue;
            }
            "quit" | "exit" | "q" => break,
            "reset" => {
                session.reset();
                continue;
            }
            "undo" => {
                if !session.undo() {
                    println!("Nothing to undo.");
                }
                continue;
            }
            "hint" => {
                match session.hint() {
                    Ok(Hint::Move(mv)) => println!("Hint: {}", mv.label),
                    Ok(Hint::AlreadySolved) => println!("Already solved."),
                    Ok(Hint::NoPath) => println!("The puzzle cannot be finished from here."),
                    Err(e) => println!("{e}"),
                }
                continue;
            }
            _ => {}
        }

        let Some(mv) = cmd
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| moves.get(n))
        else {
            println!("Unknown input '{cmd}'. Type 'help' for commands.");
            continue;
        };

        match session.apply(mv) {
            Ok(Outcome::Continue) | Ok(Outcome::Solved) => {}
            Err(e) => println!("{e}"),
        }
    }
}

fn print_help(mode: Mode) {
    println!("River crossing ({} mode)", mode.name());
    println!("Get the wolf, the goat and the cabbage across. The boat carries the ferryman");
    println!("and at most one passenger. Never leave the wolf with the goat, or the goat");
    println!("with the cabbage, without the ferryman.");
    println!();
    println!("Commands: <number> to cross, undo, reset, help, quit");
    if mode == Mode::Assisted {
        println!("          hint to ask for the next best crossing");
    }
    println!();
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
    println!("near: {:<30} {boat}   far: {}", list(Bank::Near), list(Bank::Far));
}
