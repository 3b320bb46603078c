//! Game-state engine for a falling-block puzzle game.
//!
//! The engine is pure state: no timers, no terminal, no I/O. A frontend owns
//! a [`Game`], calls [`Game::tick`] at a fixed rate, and forwards player
//! commands through [`Game::apply`]. Rendering reads [`Game::board`] and
//! [`Game::piece`] read-only.
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{Game, GameConfig, Input};
//!
//! let mut game = Game::new(GameConfig::default());
//! game.apply(Input::MoveLeft);
//! game.tick();
//! assert!(game.phase().is_running());
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
