//! Core module - pure game logic with no external dependencies
//!
//! Everything in here is value types and copy-on-write transitions.
//! It has zero dependencies on UI, terminal, or I/O.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use board::{check_collision, clear_full_lines, slide_offset, Board};
pub use game_state::GameState;
pub use pieces::{get_shape, shape_color, Piece};
pub use rng::ShapeRng;
pub use scoring::{line_clear_bonus, score_turn, MoveStats, ScoreUpdate};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
