pub mod app;
pub mod description;
pub mod ui;

use std::io;

use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

pub use app::App;

pub fn run(mut app: App) -> io::Result<()> {
    let mut terminal = ratatui::init();
    info!("dashboard started");

    let result = loop {
        if let Err(err) = terminal.draw(|frame| ui::draw(frame, &mut app)) {
            break Err(err);
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Ok(_) => {}
            Err(err) => break Err(err),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    ratatui::restore();
    info!("dashboard closed");
    result
}
