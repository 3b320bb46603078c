//! Game orchestration: gravity timing, input application, and the
//! lock/clear/spawn transitions around the core data structures.

pub use self::game::*;

mod game;
