//! Read-only view of the game handed to the renderer each frame.

use crate::core::board::Board;
use crate::core::pieces::Piece;
use crate::types::{Offset, ShapeKind, Tile, QUEUE_LEN};

/// The falling piece together with its committed position.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSnapshot {
    pub piece: Piece,
    pub offset: Offset,
}

impl ActiveSnapshot {
    /// Tiles of the active piece in world coordinates.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.piece.world_tiles(self.offset)
    }
}

/// Everything a frame needs; the renderer never touches `GameState`.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: Board,
    pub settled: Vec<Tile>,
    pub active: Option<ActiveSnapshot>,
    pub ghost_offset: Option<Offset>,
    pub queue: [ShapeKind; QUEUE_LEN],
    pub saved: Option<ShapeKind>,
    pub can_hold: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl GameSnapshot {
    /// Tiles of the active piece projected to its resting position.
    pub fn ghost_tiles(&self) -> Option<impl Iterator<Item = Tile> + '_> {
        match (&self.active, self.ghost_offset) {
            (Some(active), Some(ghost)) => Some(active.piece.world_tiles(ghost)),
            _ => None,
        }
    }
}
