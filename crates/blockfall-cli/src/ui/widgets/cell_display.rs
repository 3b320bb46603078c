use blockfall_engine::{Cell, PieceKind};
use ratatui::{buffer, style::Style};

use super::style;

/// Display style for a single board cell, drawn as a two-column block with
/// an outlined left edge so adjacent blocks of the same color stay distinct.
#[derive(Debug)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    /// Terminal columns per board cell.
    #[must_use]
    pub fn width() -> u16 {
        2
    }

    /// Terminal rows per board cell.
    #[must_use]
    pub fn height() -> u16 {
        1
    }

    #[must_use]
    pub fn from_cell(cell: Cell) -> Self {
        match cell {
            Cell::Empty => Self {
                style: style::EMPTY,
                symbol: " ",
            },
            Cell::Piece(kind) => Self {
                style: match kind {
                    PieceKind::I => style::I_BLOCK,
                    PieceKind::J => style::J_BLOCK,
                    PieceKind::L => style::L_BLOCK,
                    PieceKind::O => style::O_BLOCK,
                    PieceKind::S => style::S_BLOCK,
                    PieceKind::T => style::T_BLOCK,
                    PieceKind::Z => style::Z_BLOCK,
                },
                symbol: "▎",
            },
        }
    }

    /// Draws the left column of the cell (carries the edge glyph).
    pub fn draw(&self, cell: &mut buffer::Cell) {
        cell.set_style(self.style);
        cell.set_symbol(self.symbol);
    }

    /// Draws the right, filler column of the cell.
    pub fn draw_filler(&self, cell: &mut buffer::Cell) {
        cell.set_style(self.style);
        cell.set_symbol(" ");
    }
}
