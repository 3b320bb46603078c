use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::board::Board;

/// The seven canonical piece kinds.
///
/// Each kind carries a fixed color id (1..=7) used by frontends to pick a
/// display color; 0 is reserved for empty board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece (color id 1).
    I = 0,
    /// J-piece (color id 2).
    J = 1,
    /// L-piece (color id 3).
    L = 2,
    /// O-piece (color id 4).
    O = 3,
    /// S-piece (color id 5).
    S = 4,
    /// T-piece (color id 6).
    T = 5,
    /// Z-piece (color id 7).
    Z = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(0..=6) {
            0 => PieceKind::I,
            1 => PieceKind::J,
            2 => PieceKind::L,
            3 => PieceKind::O,
            4 => PieceKind::S,
            5 => PieceKind::T,
            _ => PieceKind::Z,
        }
    }
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    /// Returns the color id of this kind (1..=7).
    #[must_use]
    pub const fn color_id(self) -> u8 {
        self as u8 + 1
    }

    fn footprint(self, rotation: Rotation) -> &'static Footprint {
        &FOOTPRINTS[self as usize][rotation.as_usize()]
    }
}

/// Rotation state of a piece, one of four variants advancing clockwise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rotation(u8);

impl Rotation {
    #[must_use]
    pub const fn advanced(self) -> Self {
        Rotation((self.0 + 1) % 4)
    }

    const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// The single active falling piece.
///
/// A piece is a kind, a rotation state, and the integer position of its 4×4
/// bounding box in board coordinates (x grows rightward, y grows downward).
/// Movement is split into a guarded query ([`Piece::can_move`]) and an
/// unconditional mutation ([`Piece::move_by`]); callers check first, then act.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Board, Piece, PieceKind};
///
/// let board = Board::default();
/// let mut piece = Piece::spawn(PieceKind::T, &board);
/// if piece.can_move(&board, -1, 0) {
///     piece.move_by(-1, 0);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    rotation: Rotation,
    x: i32,
    y: i32,
}

impl Piece {
    /// Creates a piece of the given kind at the spawn position: bounding box
    /// horizontally centered, top row at `y = 0`.
    #[expect(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    #[must_use]
    pub fn spawn(kind: PieceKind, board: &Board) -> Self {
        Self {
            kind,
            rotation: Rotation::default(),
            x: (board.width() as i32 - 4) / 2,
            y: 0,
        }
    }

    #[must_use]
    pub fn kind(self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn rotation(self) -> Rotation {
        self.rotation
    }

    /// Top-left corner of the 4×4 bounding box in board coordinates.
    #[must_use]
    pub fn position(self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// The 4×4 occupancy matrix of the current rotation variant.
    #[must_use]
    pub fn footprint(self) -> &'static Footprint {
        self.kind.footprint(self.rotation)
    }

    /// Returns an iterator over the occupied cells in board coordinates.
    #[expect(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        self.footprint()
            .iter()
            .enumerate()
            .flat_map(move |(dy, row)| {
                row.iter().enumerate().filter_map(move |(dx, &occupied)| {
                    occupied.then_some((self.x + dx as i32, self.y + dy as i32))
                })
            })
    }

    /// Returns true iff translating by `(dx, dy)` keeps every occupied cell
    /// inside the board and over empty cells.
    #[must_use]
    pub fn can_move(self, board: &Board, dx: i32, dy: i32) -> bool {
        self.cells().all(|(x, y)| !board.is_occupied(x + dx, y + dy))
    }

    /// Translates the piece by `(dx, dy)` without validation.
    ///
    /// Callers are expected to have checked [`Piece::can_move`] first.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Advances to the next rotation variant, unconditionally.
    ///
    /// There is no collision or bounds guard and no wall kick: rotating next
    /// to a wall or a locked stack can leave occupied cells outside the grid
    /// or atop locked blocks. Such a piece simply fails every subsequent
    /// `can_move` query and locks where collision rules allow.
    pub fn rotate(&mut self) {
        self.rotation = self.rotation.advanced();
    }
}

/// A 4×4 occupancy matrix, one rotation variant of a piece shape.
pub type Footprint = [[bool; 4]; 4];

/// Generates all 4 rotation variants of a footprint by rotating 90° clockwise.
///
/// `size` is the effective extent of the shape within the 4×4 box (4 for I,
/// 2 for O, 3 for the rest).
const fn footprint_rotations(size: usize, footprint: &Footprint) -> [Footprint; 4] {
    let mut rotates = [*footprint; 4];
    let mut i = 1;
    while i < 4 {
        let mut rotated = [[false; 4]; 4];
        let mut y = 0;
        while y < size {
            let mut x = 0;
            while x < size {
                rotated[y][x] = rotates[i - 1][size - 1 - x][y];
                x += 1;
            }
            y += 1;
        }
        rotates[i] = rotated;
        i += 1;
    }
    rotates
}

static FOOTPRINTS: [[Footprint; 4]; PieceKind::LEN] = {
    const C: bool = true;
    const E: bool = false;
    const EEEE: [bool; 4] = [E; 4];
    [
        // I-piece
        footprint_rotations(4, &[EEEE, [C, C, C, C], EEEE, EEEE]),
        // J-piece
        footprint_rotations(3, &[[C, E, E, E], [C, C, C, E], EEEE, EEEE]),
        // L-piece
        footprint_rotations(3, &[[E, E, C, E], [C, C, C, E], EEEE, EEEE]),
        // O-piece
        footprint_rotations(2, &[[C, C, E, E], [C, C, E, E], EEEE, EEEE]),
        // S-piece
        footprint_rotations(3, &[[E, C, C, E], [C, C, E, E], EEEE, EEEE]),
        // T-piece
        footprint_rotations(3, &[[E, C, E, E], [C, C, C, E], EEEE, EEEE]),
        // Z-piece
        footprint_rotations(3, &[[C, C, E, E], [E, C, C, E], EEEE, EEEE]),
    ]
};

#[cfg(test)]
mod tests {
    use crate::core::board::Cell;

    use super::*;

    const ALL_KINDS: [PieceKind; PieceKind::LEN] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    #[test]
    fn test_color_ids_are_one_through_seven() {
        let ids: Vec<_> = ALL_KINDS.iter().map(|k| k.color_id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_every_footprint_has_four_cells() {
        for kind in ALL_KINDS {
            for rotation in 0..4 {
                let count = FOOTPRINTS[kind as usize][rotation]
                    .iter()
                    .flatten()
                    .filter(|&&c| c)
                    .count();
                assert_eq!(count, 4, "{kind:?} rotation {rotation}");
            }
        }
    }

    #[test]
    fn test_spawn_is_horizontally_centered() {
        let board = Board::default();
        let piece = Piece::spawn(PieceKind::T, &board);
        assert_eq!(piece.position(), (3, 0));
    }

    #[test]
    fn test_rotation_cycles_back_after_four_steps() {
        let board = Board::default();
        for kind in ALL_KINDS {
            let mut piece = Piece::spawn(kind, &board);
            let initial = piece.footprint();
            for _ in 0..4 {
                piece.rotate();
            }
            assert_eq!(piece.footprint(), initial, "{kind:?}");
        }
    }

    #[test]
    fn test_can_move_blocked_by_left_wall() {
        let board = Board::default();
        let mut piece = Piece::spawn(PieceKind::J, &board);
        while piece.can_move(&board, -1, 0) {
            piece.move_by(-1, 0);
        }
        // J occupies column 0 of its box, so it rests at x = 0.
        assert_eq!(piece.position().0, 0);
        assert!(!piece.can_move(&board, -1, 0));
        assert!(piece.can_move(&board, 1, 0));
    }

    #[test]
    fn test_can_move_blocked_by_locked_cell() {
        let mut board = Board::default();
        let piece = Piece::spawn(PieceKind::O, &board);
        // O occupies columns 3..=4 of rows 0..=1; lock a cell left of it.
        board.fill(2, 0, Cell::Piece(PieceKind::I));
        assert!(!piece.can_move(&board, -1, 0));
        assert!(piece.can_move(&board, 1, 0));
    }

    #[test]
    fn test_rotation_at_right_wall_may_leave_bounds() {
        // No wall kick: an I-piece flush against the right wall, rotated
        // twice, ends up as a horizontal bar whose cells extend past the
        // wall. The piece is legal to hold in this state; it just fails
        // every movement query.
        let board = Board::default();
        let mut piece = Piece::spawn(PieceKind::I, &board);
        piece.rotate();
        while piece.can_move(&board, 1, 0) {
            piece.move_by(1, 0);
        }
        piece.rotate();
        let out_of_bounds = piece
            .cells()
            .filter(|&(x, _)| x >= i32::try_from(board.width()).unwrap())
            .count();
        assert!(out_of_bounds > 0);
        assert!(!piece.can_move(&board, 0, 1));
    }

    #[test]
    fn test_down_blocked_at_floor() {
        let board = Board::default();
        let mut piece = Piece::spawn(PieceKind::I, &board);
        while piece.can_move(&board, 0, 1) {
            piece.move_by(0, 1);
        }
        // The I bar sits in row 1 of its box, so the box top rests one row
        // above the bottom edge.
        assert_eq!(piece.position().1, 18);
    }
}
