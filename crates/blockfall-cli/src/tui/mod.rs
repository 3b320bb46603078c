//! Minimal TUI runtime: a fixed-rate tick loop with dirty-flag rendering
//! over crossterm events and a ratatui terminal.

pub use self::{app::App, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;
