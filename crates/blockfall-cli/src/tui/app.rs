use crossterm::event::Event;
use ratatui::Frame;

/// Trait for applications driven by [`Runtime::run`](crate::tui::Runtime::run).
pub trait App {
    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles a terminal event (key input, mouse, resize, etc.).
    fn handle_event(&mut self, event: &Event);

    /// Updates application logic; called once per tick.
    fn update(&mut self);

    /// Draws the screen; called whenever state may have changed.
    fn draw(&self, frame: &mut Frame);
}
