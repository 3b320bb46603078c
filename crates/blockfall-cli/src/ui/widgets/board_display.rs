use blockfall_engine::{Board, Piece};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::{CellDisplay, style};

/// Renders the board grid with the falling piece overlaid, plus a centered
/// `GAME OVER` line once the game is terminal. Reads engine state only.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    falling_piece: Option<&'a Piece>,
    game_over: bool,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            falling_piece: None,
            game_over: false,
            block: None,
        }
    }

    #[must_use]
    pub fn falling_piece(self, piece: &'a Piece) -> Self {
        Self {
            falling_piece: Some(piece),
            ..self
        }
    }

    #[must_use]
    pub fn game_over(self, game_over: bool) -> Self {
        Self { game_over, ..self }
    }

    #[must_use]
    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn width(&self) -> u16 {
        self.board.width() as u16 * CellDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn height(&self) -> u16 {
        self.board.height() as u16 * CellDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    #[expect(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        // Locking the piece into a scratch copy reuses the engine's own
        // clipping of out-of-bounds cells (an unguarded rotation can hang
        // cells past the walls).
        let mut board = self.board.clone();
        if let Some(piece) = self.falling_piece {
            board.lock(piece);
        }

        for (y, row) in board.rows().enumerate() {
            let py = area.y + y as u16 * CellDisplay::height();
            if py >= area.bottom() {
                break;
            }
            for (x, &cell) in row.iter().enumerate() {
                let px = area.x + x as u16 * CellDisplay::width();
                if px + 1 >= area.right() {
                    break;
                }
                let display = CellDisplay::from_cell(cell);
                if let Some(left) = buf.cell_mut((px, py)) {
                    display.draw(left);
                }
                if let Some(right) = buf.cell_mut((px + 1, py)) {
                    display.draw_filler(right);
                }
            }
        }

        if self.game_over {
            let overlay = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
            let overlay = overlay.intersection(area);
            Line::from("GAME OVER")
                .style(style::GAME_OVER)
                .centered()
                .render(overlay, buf);
        }
    }
}
