use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::core::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH, Piece};

/// Default number of ticks between automatic one-row descents.
///
/// At the conventional 60 ticks per second this is one descent every half
/// second.
pub const GRAVITY_INTERVAL: u32 = 30;

/// Whether the game is still running or has reached its terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GamePhase {
    Running,
    GameOver,
}

/// The four discrete player commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
}

/// Geometry and timing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board width in columns.
    pub width: usize,
    /// Board height in rows.
    pub height: usize,
    /// Ticks between automatic descents.
    pub gravity_interval: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            gravity_interval: GRAVITY_INTERVAL,
        }
    }
}

/// The complete game state: board, active piece, piece RNG, and gravity
/// counter, driven by a fixed-rate [`Game::tick`] and immediate
/// [`Game::apply`] calls.
///
/// Both mutation sources go through `&mut Game`, so a frontend that owns the
/// game on a single event loop gets race-free state for free; rendering reads
/// [`Game::board`] and [`Game::piece`] between mutations.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Game, GameConfig, Input};
///
/// let mut game = Game::with_seed(GameConfig::default(), 42);
/// game.apply(Input::Rotate);
/// for _ in 0..60 {
///     game.tick();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    piece: Piece,
    rng: Pcg32,
    tick_counter: u32,
    gravity_interval: u32,
    cleared_rows: usize,
    phase: GamePhase,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    /// Creates a game with a randomly seeded piece sequence.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, Pcg32::from_rng(&mut rand::rng()))
    }

    /// Creates a game with a deterministic piece sequence.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: Pcg32) -> Self {
        assert!(config.gravity_interval > 0);
        let board = Board::new(config.width, config.height);
        let piece = Piece::spawn(rng.random(), &board);
        let mut game = Self {
            board,
            piece,
            rng,
            tick_counter: 0,
            gravity_interval: config.gravity_interval,
            cleared_rows: 0,
            phase: GamePhase::Running,
        };
        if !game.piece.can_move(&game.board, 0, 1) {
            game.phase = GamePhase::GameOver;
        }
        game
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Total rows cleared so far.
    #[must_use]
    pub fn cleared_rows(&self) -> usize {
        self.cleared_rows
    }

    /// Replaces the active piece without validation.
    ///
    /// Intended for tests and scripted setups that need a known piece.
    pub fn set_piece(&mut self, piece: Piece) {
        self.piece = piece;
    }

    /// Advances one fixed-rate tick.
    ///
    /// Every `gravity_interval` ticks the piece descends one row, or — when
    /// descent is blocked — locks into the board, complete rows clear, and a
    /// new piece spawns. A spawned piece that cannot descend ends the game.
    /// Once terminal, ticks are no-ops.
    pub fn tick(&mut self) {
        if self.phase.is_game_over() {
            return;
        }
        self.tick_counter += 1;
        if self.tick_counter < self.gravity_interval {
            return;
        }
        self.tick_counter = 0;
        if self.piece.can_move(&self.board, 0, 1) {
            self.piece.move_by(0, 1);
        } else {
            self.lock_and_respawn();
        }
    }

    /// Applies a player command immediately.
    ///
    /// Moves are guarded by `can_move`; a manual descent also resets the
    /// gravity counter so it does not double with the next automatic tick.
    /// Rotation is unconditional (see [`Piece::rotate`]). Input has no effect
    /// once the game is over.
    pub fn apply(&mut self, input: Input) {
        if self.phase.is_game_over() {
            return;
        }
        match input {
            Input::MoveLeft => {
                if self.piece.can_move(&self.board, -1, 0) {
                    self.piece.move_by(-1, 0);
                }
            }
            Input::MoveRight => {
                if self.piece.can_move(&self.board, 1, 0) {
                    self.piece.move_by(1, 0);
                }
            }
            Input::MoveDown => {
                if self.piece.can_move(&self.board, 0, 1) {
                    self.piece.move_by(0, 1);
                    self.tick_counter = 0;
                }
            }
            Input::Rotate => self.piece.rotate(),
        }
    }

    fn lock_and_respawn(&mut self) {
        self.board.lock(&self.piece);
        self.cleared_rows += self.board.clear_completed_rows();
        self.piece = Piece::spawn(self.rng.random(), &self.board);
        if !self.piece.can_move(&self.board, 0, 1) {
            self.phase = GamePhase::GameOver;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{Cell, PieceKind};

    use super::*;

    fn game() -> Game {
        Game::with_seed(GameConfig::default(), 7)
    }

    fn tick_interval(game: &mut Game) {
        for _ in 0..GRAVITY_INTERVAL {
            game.tick();
        }
    }

    #[test]
    fn test_gravity_descends_once_per_interval() {
        let mut game = game();
        let y0 = game.piece().position().1;
        for _ in 0..GRAVITY_INTERVAL - 1 {
            game.tick();
        }
        assert_eq!(game.piece().position().1, y0);
        game.tick();
        assert_eq!(game.piece().position().1, y0 + 1);
    }

    #[test]
    fn test_manual_descent_resets_gravity_counter() {
        let mut game = game();
        for _ in 0..GRAVITY_INTERVAL - 1 {
            game.tick();
        }
        game.apply(Input::MoveDown);
        let y = game.piece().position().1;
        // The pending gravity tick must not produce a second descent.
        game.tick();
        assert_eq!(game.piece().position().1, y);
        tick_interval(&mut game);
        assert_eq!(game.piece().position().1, y + 1);
    }

    #[test]
    fn test_guarded_moves_respect_walls() {
        let mut game = game();
        game.set_piece(Piece::spawn(PieceKind::O, game.board()));
        for _ in 0..20 {
            game.apply(Input::MoveLeft);
        }
        assert_eq!(game.piece().position().0, 0);
        for _ in 0..20 {
            game.apply(Input::MoveRight);
        }
        // O occupies columns 0..=1 of its box.
        assert_eq!(game.piece().position().0, 8);
    }

    #[test]
    fn test_blocked_descent_locks_clears_and_respawns() {
        let mut game = game();
        // Leave one gap in the bottom row, then drop an I bar onto row 18.
        for x in 0..9 {
            game.board.fill(x, 19, Cell::Piece(PieceKind::L));
        }
        let mut piece = Piece::spawn(PieceKind::I, game.board());
        while piece.can_move(game.board(), 0, 1) {
            piece.move_by(0, 1);
        }
        game.set_piece(piece);
        tick_interval(&mut game);

        // The bar locked in row 19's neighbor row; nothing cleared yet.
        assert_eq!(game.cleared_rows(), 0);
        assert!(game.board().is_occupied(3, 18));
        // A fresh piece spawned at the top.
        assert_eq!(game.piece().position().1, 0);
        assert!(game.phase().is_running());
    }

    #[test]
    fn test_completed_row_clears_on_lock() {
        let mut game = game();
        // Bottom row full except the four columns an I bar will fill.
        for x in (0..3).chain(7..10) {
            game.board.fill(x, 19, Cell::Piece(PieceKind::S));
        }
        let mut piece = Piece::spawn(PieceKind::I, game.board());
        while piece.can_move(game.board(), 0, 1) {
            piece.move_by(0, 1);
        }
        game.set_piece(piece);
        tick_interval(&mut game);

        assert_eq!(game.cleared_rows(), 1);
        let occupied: usize = game
            .board()
            .rows()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count();
        assert_eq!(occupied, 0);
    }

    #[test]
    fn test_blocked_spawn_is_terminal_and_idempotent() {
        let mut game = game();
        // A locked stack reaching the spawn rows blocks the fresh piece's
        // first descent. One column stays open so the stack itself never
        // forms a complete row.
        for y in 1..3 {
            for x in 0..game.board().width() - 1 {
                game.board.fill(x, y, Cell::Piece(PieceKind::Z));
            }
        }
        let mut piece = *game.piece();
        while piece.can_move(game.board(), 0, 1) {
            piece.move_by(0, 1);
        }
        game.set_piece(piece);
        tick_interval(&mut game);
        assert!(game.phase().is_game_over());

        // Terminal state: further ticks and inputs mutate nothing.
        let board = game.board().clone();
        let piece = *game.piece();
        for _ in 0..3 * GRAVITY_INTERVAL {
            game.tick();
        }
        game.apply(Input::MoveLeft);
        game.apply(Input::MoveRight);
        game.apply(Input::MoveDown);
        game.apply(Input::Rotate);
        assert!(game.phase().is_game_over());
        assert_eq!(*game.board(), board);
        assert_eq!(*game.piece(), piece);
    }

    #[test]
    fn test_end_to_end_i_piece_rests_on_floor() {
        let mut game = game();
        game.set_piece(Piece::spawn(PieceKind::I, game.board()));
        while game.piece().can_move(game.board(), 0, 1) {
            game.apply(Input::MoveDown);
        }
        tick_interval(&mut game);

        for x in 3..7 {
            assert_eq!(
                game.board().rows().nth(19).unwrap()[x],
                Cell::Piece(PieceKind::I),
                "column {x}"
            );
        }
        assert_eq!(game.board().rows().nth(19).unwrap()[2], Cell::Empty);
        assert_eq!(game.cleared_rows(), 0);
        assert!(game.phase().is_running());
    }
}
