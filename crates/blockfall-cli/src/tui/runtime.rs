use std::{io, time::Duration};

use super::{App, event::TuiEvent, event_loop::EventLoop};

/// Drives an [`App`] on a ratatui terminal.
#[derive(Debug)]
pub struct Runtime {
    events: EventLoop,
}

impl Runtime {
    /// Creates a runtime ticking at the given rate (Hz).
    #[must_use]
    pub fn with_tick_rate(rate: f64) -> Self {
        Self {
            events: EventLoop::new(Duration::from_secs_f64(1.0 / rate)),
        }
    }

    /// Runs the application until `app.should_exit()` returns true.
    ///
    /// - `TuiEvent::Tick`: calls `app.update()`
    /// - `TuiEvent::Render`: calls `app.draw()`
    /// - `TuiEvent::Crossterm`: calls `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => app.update(),
                    TuiEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    TuiEvent::Crossterm(event) => app.handle_event(&event),
                }
            }
            Ok(())
        })
    }
}
