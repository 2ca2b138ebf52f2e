//! Console Presentation
//!
//! This example drives the engine from a line-oriented console, standing in
//! for a graphical board.
//!
//! Key concepts:
//! - The presentation layer owns no game state
//! - Input is turned into intents and dispatched to the engine
//! - Each frame is rendered from a freshly built view model
//!
//! Commands:
//! - `p <cell>`: play at cell 0-8 (row-major)
//! - `j <step>`: jump to a move in history
//! - `q`: quit
//!
//! Run with: RUST_LOG=debug cargo run --example console

use rewind::engine::{GameEngine, Intent};
use rewind::view::{render, ViewModel};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

enum Command {
    Intent(Intent),
    Quit,
}

fn parse(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let verb = parts.next()?;
    if verb == "q" {
        return Some(Command::Quit);
    }
    let arg: usize = parts.next()?.parse().ok()?;
    match verb {
        "p" => Some(Command::Intent(Intent::PlayAt(arg))),
        "j" => Some(Command::Intent(Intent::JumpTo(arg))),
        _ => None,
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut engine = GameEngine::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("=== Tic-Tac-Toe ===\n");
    print!("{}", render(&ViewModel::from_engine(&engine)));

    loop {
        print!("\n> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse(&line) {
            Some(Command::Quit) => break,
            Some(Command::Intent(intent)) => {
                if let Err(e) = engine.dispatch(intent) {
                    println!("{e}");
                }
                println!();
                print!("{}", render(&ViewModel::from_engine(&engine)));
            }
            None => println!("Commands: p <cell>, j <step>, q"),
        }
    }

    Ok(())
}
