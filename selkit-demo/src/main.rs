mod error;
mod form;
mod settings;
mod terminal;

use std::fs::File;
use std::path::Path;

use crossterm::event::EventStream;
use futures::StreamExt;
use seldom::Event;
use simplelog::{Config, LevelFilter, WriteLogger};

use error::DemoError;
use form::{Flow, MovieForm};
use settings::Settings;
use terminal::TerminalGuard;

async fn run(form: &mut MovieForm) -> Result<(), DemoError> {
    let mut guard = TerminalGuard::new()?;
    let mut events = EventStream::new();

    loop {
        if form.needs_redraw() {
            let (width, height) = crossterm::terminal::size()?;
            let frame = form.render(width, height);
            guard.draw(&frame)?;
            form.clear_dirty();
        }

        let Some(next) = events.next().await else {
            break;
        };
        let Some(event) = Event::from_crossterm(&next?) else {
            continue;
        };
        if form.handle(event) == Flow::Quit {
            break;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), DemoError> {
    let log_file = File::create("selkit-demo.log")?;
    if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path))?,
        None => Settings::default(),
    };

    let mut form = MovieForm::new(settings);
    run(&mut form).await?;

    println!("Content rating: {}", form.rating().unwrap_or_else(|| "(none)".into()));
    println!("Genres: {}", form.genres().join(", "));
    if !form.is_ready() {
        println!("Form incomplete: a rating and at least one genre are required");
    }
    Ok(())
}
