use blockfall_engine::{Game, Input};
use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Color, Style},
    text::Text,
    widgets::Block as BlockWidget,
};

use crate::{tui::App, ui::widgets::BoardDisplay};

/// The interactive play screen: one game, driven by the TUI runtime.
#[derive(Debug)]
pub(crate) struct PlayApp {
    game: Game,
    is_exiting: bool,
}

impl PlayApp {
    /// Ticks per second of the fixed-rate loop.
    pub(crate) const TICK_RATE: f64 = 60.0;

    pub(crate) fn new(game: Game) -> Self {
        Self {
            game,
            is_exiting: false,
        }
    }
}

impl App for PlayApp {
    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, event: &Event) {
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Left => self.game.apply(Input::MoveLeft),
                KeyCode::Right => self.game.apply(Input::MoveRight),
                KeyCode::Down => self.game.apply(Input::MoveDown),
                KeyCode::Up => self.game.apply(Input::Rotate),
                KeyCode::Char('q') => self.is_exiting = true,
                _ => {}
            }
        }
    }

    fn update(&mut self) {
        self.game.tick();
    }

    fn draw(&self, frame: &mut Frame) {
        let display = BoardDisplay::new(self.game.board())
            .falling_piece(self.game.piece())
            .game_over(self.game.phase().is_game_over())
            .block(BlockWidget::bordered().title("blockfall"));

        let help_text = if self.game.phase().is_game_over() {
            "Controls: Q (Quit)"
        } else {
            "Controls: ← → (Move) | ↓ (Drop) | ↑ (Rotate) | Q (Quit)"
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [board_area, help_area] =
            Layout::vertical([Constraint::Length(display.height()), Constraint::Length(1)])
                .areas::<2>(frame.area());
        let [board_area] = Layout::horizontal([Constraint::Length(display.width())])
            .flex(Flex::Center)
            .areas::<1>(board_area);
        frame.render_widget(&display, board_area);
        frame.render_widget(help_text, help_area);
    }
}
