//! `lifegame` — run Conway's Game of Life in the terminal.
//!
//! Run: cargo run -- --preset gosper-gun --steps 500
//!
//! Logging is controlled by `RUST_LOG`. With `--print` or `--list-presets`
//! records go to stderr. The interactive view owns the terminal, so there
//! it only logs when `--log-file` is given.

use std::fs::File;

use clap::Parser;
use life_load::PRESETS;
use life_term::{Args, Session, app};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(args: &Args) -> std::io::Result<()> {
    match &args.log_file {
        Some(path) => {
            let file = File::create(path)?;
            env_logger::Builder::from_default_env()
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        None if args.print || args.list_presets => env_logger::init(),
        None => {}
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    if args.list_presets {
        for p in PRESETS {
            println!("{:<12} {}", p.name, p.description);
        }
        return Ok(());
    }

    let grid = args.source_grid()?;
    let mut session = Session::new(grid, args.step_limit());

    if args.print {
        let end = session.run_to_end();
        print!("{end}");
        println!(
            "generation {} population {}",
            session.steps(),
            session.grid().population()
        );
        return Ok(());
    }

    app::run(&mut session, args.delay())
}
