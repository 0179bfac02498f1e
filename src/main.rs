mod app;
mod bridge;
mod model;
mod ui;

use std::{io, time::Duration};

use crossterm::event::{self, Event, KeyEventKind};

use crate::{app::App, bridge::LoopbackBridge};

fn main() -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = run(&mut terminal);
    ratatui::restore();
    result
}

fn run(terminal: &mut ratatui::DefaultTerminal) -> io::Result<()> {
    let mut app = App::new(Box::new(LoopbackBridge::new()), None)?;

    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
