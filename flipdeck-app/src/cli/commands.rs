use crate::cli::opts::*;
use crate::tui::app::TuiApp;

use anyhow::Result;
use flipdeck_core::{store::memory::MemoryStore, DeckStore, StudySession};
use flipdeck_json::JsonStore;
use std::io::{stdin, stdout, Write};
use std::sync::Arc;

pub fn run_cli(args: Cli) -> Result<()> {
    let store = open_store(&args)?;
    match args.cmd {
        Command::Add(a) => add_cmd(store, a),
        Command::List => list_cmd(store),
        Command::Study => study_cmd(store),
        Command::Tui => {
            let mut app = TuiApp::new(store);
            app.run()
        }
    }
}

pub fn open_store(args: &Cli) -> Result<Arc<dyn DeckStore>> {
    if args.no_save {
        return Ok(Arc::new(MemoryStore::new()));
    }
    let store = match &args.file {
        Some(path) => JsonStore::open_at(path.clone())?,
        None => JsonStore::open_default()?,
    };
    Ok(Arc::new(store))
}

fn add_cmd(store: Arc<dyn DeckStore>, a: CardAdd) -> Result<()> {
    let mut session = StudySession::open(store);
    session.add_card(&a.question, &a.answer)?;
    println!("added ({} cards)", session.len());
    Ok(())
}

fn list_cmd(store: Arc<dyn DeckStore>) -> Result<()> {
    let session = StudySession::open(store);
    if session.is_empty() {
        println!("no cards yet");
        return Ok(());
    }
    for (i, card) in session.cards().iter().enumerate() {
        println!("{}\t{}\t{}", i + 1, card.question, card.answer);
    }
    Ok(())
}

fn study_cmd(store: Arc<dyn DeckStore>) -> Result<()> {
    let mut session = StudySession::open(store);
    println!("[n=next, p=previous, f=flip, g N=jump, a=add card, q=quit]");
    loop {
        print_view(&session);
        let line = read_line("study> ")?;
        if line.is_empty() {
            // stdin closed
            break;
        }
        match line.trim().to_lowercase().as_str() {
            "n" | "next" => session.next(),
            "p" | "prev" | "previous" => session.previous(),
            "f" | "flip" | "" => session.flip(),
            "a" | "add" => {
                let q = read_line("question> ")?;
                let ans = read_line("answer> ")?;
                if let Err(e) = session.add_card(&q, &ans) {
                    println!("{e}");
                }
            }
            "q" | "quit" => break,
            other => {
                // "g N" jumps to the 1-based position N, clamped.
                if let Some(n) = other
                    .strip_prefix("g ")
                    .and_then(|s| s.trim().parse::<usize>().ok())
                {
                    session.go_to(n.saturating_sub(1));
                } else {
                    println!("enter n, p, f, g N, a, or q");
                }
            }
        }
    }
    println!("\n{}", session.progress());
    Ok(())
}

fn print_view(session: &StudySession) {
    let view = session.current_view();
    println!();
    if view.showing_front {
        println!("[{}] Q: {}", view.position, view.question);
    } else {
        println!("[{}] A: {}", view.position, view.answer);
    }
    println!("{}", session.progress());
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    stdout().flush().ok();
    let mut s = String::new();
    stdin().read_line(&mut s)?;
    Ok(s)
}
