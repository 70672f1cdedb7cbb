//! Terminal front end.
//!
//! Type a tile number to flip it, `q` to quit. Logs go to stderr; set
//! `RUST_LOG=memory_match=debug` to watch the state machine.

use std::io::{self, BufRead, Write};
use std::thread;

use memory_match::{App, FlipOutcome, GameConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut app = App::new(GameConfig::default())?;
    let mut stdout = io::stdout();

    show(&mut app, &mut stdout)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();

        if input.eq_ignore_ascii_case("q") {
            break;
        }

        if app.is_playing() {
            match input.parse::<usize>() {
                Ok(number) if number >= 1 => {
                    if let Some(FlipOutcome::Ignored(reason)) = app.click(number - 1) {
                        writeln!(stdout, "(ignored: {reason:?})")?;
                    }
                }
                _ => writeln!(stdout, "enter a tile number, or q to quit")?,
            }
        } else {
            app.start()?;
        }

        celebrate(&mut app, &mut stdout)?;
        show(&mut app, &mut stdout)?;

        app.run_pending(thread::sleep, |app| show(app, &mut stdout))?;
    }

    Ok(())
}

fn show(app: &mut App, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(out)?;
    write!(out, "{}", app.render()?)?;
    if app.is_playing() {
        write!(out, "flip> ")?;
    } else {
        write!(out, "press enter to play> ")?;
    }
    out.flush()?;
    Ok(())
}

fn celebrate(app: &mut App, out: &mut impl Write) -> io::Result<()> {
    for celebration in app.take_celebrations() {
        writeln!(out, "*** {} pair! ***", celebration.symbol)?;
    }
    Ok(())
}
