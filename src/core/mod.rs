//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or terminal I/O.

pub mod board;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use game_state::{ActivePiece, GameState};
pub use rng::{PieceSource, SimpleRng};
pub use shapes::{spawn_shape, ShapeGrid, KICK_OFFSETS};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
