use super::piece::{Piece, PieceKind};

/// Default board width in columns.
pub const DEFAULT_WIDTH: usize = 10;
/// Default board height in rows.
pub const DEFAULT_HEIGHT: usize = 20;

/// A single board cell: empty, or a locked block of a specific kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Empty cell (no block).
    #[default]
    Empty,
    /// Locked block of a specific kind.
    Piece(PieceKind),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The persistent grid of locked cells.
///
/// Dimensions are fixed at construction. Cells are stored row-major with
/// `(0, 0)` at the top-left; x grows rightward, y grows downward. Coordinates
/// outside the grid report as occupied, which makes the edges act as implicit
/// walls and floor for collision queries.
///
/// # Example
///
/// ```
/// use blockfall_engine::Board;
///
/// let board = Board::default();
/// assert!(!board.is_occupied(0, 0));
/// assert!(board.is_occupied(-1, 0));
/// assert!(board.is_occupied(0, 20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Board {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Bounds-checked occupancy lookup.
    ///
    /// Any coordinate outside `[0, width) × [0, height)` reports occupied.
    #[must_use]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return true;
        };
        if x >= self.width || y >= self.height {
            return true;
        }
        !self.cells[y * self.width + x].is_empty()
    }

    /// Writes a single cell. Coordinates must be in bounds.
    pub fn fill(&mut self, x: usize, y: usize, cell: Cell) {
        assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x] = cell;
    }

    /// Commits the piece's occupied cells into the board.
    ///
    /// The caller has already established that this is the piece's resting
    /// position; nothing is re-validated here. Cells outside the grid (an
    /// unguarded rotation can produce them) are dropped rather than written.
    pub fn lock(&mut self, piece: &Piece) {
        let cell = Cell::Piece(piece.kind());
        for (x, y) in piece.cells() {
            if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y))
                && x < self.width
                && y < self.height
            {
                self.cells[y * self.width + x] = cell;
            }
        }
    }

    /// Clears every complete row and returns how many were cleared.
    ///
    /// Scans bottom to top. Removing a row shifts everything above it down
    /// one and zeroes row 0; the same index is then examined again, since a
    /// new row has just shifted into it. That re-examination is what makes
    /// adjacent complete rows clear correctly in one pass.
    pub fn clear_completed_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.height;
        while y > 0 {
            y -= 1;
            if self.row_is_complete(y) {
                self.remove_row(y);
                cleared += 1;
                y += 1;
            }
        }
        cleared
    }

    fn row_is_complete(&self, y: usize) -> bool {
        self.cells[y * self.width..][..self.width]
            .iter()
            .all(|cell| !cell.is_empty())
    }

    fn remove_row(&mut self, y: usize) {
        self.cells.copy_within(0..y * self.width, self.width);
        self.cells[..self.width].fill(Cell::Empty);
    }
}
