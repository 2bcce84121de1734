//! Board module - collision bounds and line compaction
//!
//! The board itself is only a pair of bounds; settled tiles live in a flat
//! list on the game state. The y axis points up: row 0 sits below the
//! visible well (so the floor check is y <= 0), the bottom visible row is
//! y = 1, and the well is open-ended upward with no top bound.

use std::collections::HashMap;

use arrayvec::ArrayVec;

use crate::core::pieces::Piece;
use crate::types::{Offset, Tile, BOARD_HEIGHT, BOARD_WIDTH};

/// Collision bounds for the well
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: u32,
    pub height: u32,
}

impl Board {
    pub const fn new(width: u32, height: u32) -> Self {
        Board { width, height }
    }
}

impl Default for Board {
    /// The standard 10 x 24 well
    fn default() -> Self {
        Board::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

/// True if any tile of `piece`, translated by `offset`, leaves the well or
/// overlaps a settled tile. Pure; world coordinates are exact multiples of
/// 0.5, so the overlap comparison uses plain equality.
pub fn check_collision(piece: &Piece, offset: Offset, board: Board, settled: &[Tile]) -> bool {
    piece.world_tiles(offset).any(|tile| {
        let in_board = tile.y > 0.0 && tile.x >= 0.0 && tile.x < board.width as f32;
        if !in_board {
            return true;
        }
        settled
            .iter()
            .any(|other| other.x == tile.x && other.y == tile.y)
    })
}

/// Step `from` by `dir` while the next step stays collision-free; returns
/// the last free offset. `dir` must point toward a bound (in practice
/// straight down). Shared by hard drop and the ghost piece.
pub fn slide_offset(
    piece: &Piece,
    from: Offset,
    dir: Offset,
    board: Board,
    settled: &[Tile],
) -> Offset {
    let mut offset = from;
    loop {
        let next = offset + dir;
        if check_collision(piece, next, board, settled) {
            return offset;
        }
        offset = next;
    }
}

/// Remove every full row (settled count equals the board width) and drop
/// each surviving tile by the number of full rows strictly below it.
/// Returns the compacted tiles and the cleared-row count. A single lock
/// adds four tiles, so at most four rows can fill in one turn.
pub fn clear_full_lines(board: Board, tiles: &[Tile]) -> (Vec<Tile>, u32) {
    let mut row_counts: HashMap<i32, u32> = HashMap::new();
    for tile in tiles {
        *row_counts.entry(tile.row()).or_insert(0) += 1;
    }

    let mut full_rows: ArrayVec<i32, 4> = ArrayVec::new();
    for (&row, &count) in &row_counts {
        if count == board.width {
            full_rows.push(row);
        }
    }

    if full_rows.is_empty() {
        return (tiles.to_vec(), 0);
    }

    let survivors = tiles
        .iter()
        .filter(|tile| !full_rows.contains(&tile.row()))
        .map(|tile| {
            let below = full_rows.iter().filter(|&&row| row < tile.row()).count();
            Tile::new(tile.x, tile.y - below as f32, tile.color)
        })
        .collect();

    (survivors, full_rows.len() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pieces::get_shape;
    use crate::types::{Rgb, ShapeKind};

    fn tile(x: f32, y: f32) -> Tile {
        Tile::new(x, y, Rgb::new(200, 200, 200))
    }

    fn full_row(board: Board, y: f32) -> Vec<Tile> {
        (0..board.width).map(|x| tile(x as f32, y)).collect()
    }

    #[test]
    fn test_floor_collides_at_and_below_row_zero() {
        let board = Board::default();
        let piece = get_shape(ShapeKind::T);

        // T tiles span local y 0..=1; an offset of y = 0 puts the bar on row 0.
        assert!(check_collision(&piece, Offset::new(5.0, 0.0), board, &[]));
        assert!(check_collision(&piece, Offset::new(5.0, -3.0), board, &[]));
        assert!(!check_collision(&piece, Offset::new(5.0, 1.0), board, &[]));
    }

    #[test]
    fn test_side_walls_collide() {
        let board = Board::default();
        let piece = get_shape(ShapeKind::T);

        // Leftmost T tile sits at local x = -1.
        assert!(check_collision(&piece, Offset::new(0.0, 5.0), board, &[]));
        assert!(!check_collision(&piece, Offset::new(1.0, 5.0), board, &[]));

        // Rightmost T tile sits at local x = 1; x = width - 1 is the last column.
        assert!(check_collision(&piece, Offset::new(9.0, 5.0), board, &[]));
        assert!(!check_collision(&piece, Offset::new(8.0, 5.0), board, &[]));
    }

    #[test]
    fn test_no_top_bound() {
        let board = Board::default();
        let piece = get_shape(ShapeKind::O);

        // Far above the well height is still collision-free.
        assert!(!check_collision(
            &piece,
            Offset::new(5.5, 100.5),
            board,
            &[]
        ));
    }

    #[test]
    fn test_settled_overlap_collides() {
        let board = Board::default();
        let piece = get_shape(ShapeKind::O);
        let settled = vec![tile(5.0, 5.0)];

        // O at (5.5, 5.5) occupies (5,5) (6,5) (5,6) (6,6).
        assert!(check_collision(
            &piece,
            Offset::new(5.5, 5.5),
            board,
            &settled
        ));
        assert!(!check_collision(
            &piece,
            Offset::new(5.5, 7.5),
            board,
            &settled
        ));
    }

    #[test]
    fn test_slide_offset_reaches_floor() {
        let board = Board::default();
        let piece = get_shape(ShapeKind::O);
        let from = piece.spawn_offset(board);

        let rest = slide_offset(&piece, from, Offset::DOWN, board, &[]);

        // O tiles span local y -0.5..=0.5; resting on the floor means the
        // low pair sits at y = 1, i.e. offset y = 1.5.
        assert_eq!(rest.x, from.x);
        assert_eq!(rest.y, 1.5);
    }

    #[test]
    fn test_slide_offset_stops_on_settled_stack() {
        let board = Board::default();
        let piece = get_shape(ShapeKind::O);
        let mut settled = full_row(board, 1.0);
        settled.extend(full_row(board, 2.0));

        let rest = slide_offset(
            &piece,
            piece.spawn_offset(board),
            Offset::DOWN,
            board,
            &settled,
        );

        assert_eq!(rest.y, 3.5);
    }

    #[test]
    fn test_clear_full_lines_no_full_rows() {
        let board = Board::default();
        let tiles = vec![tile(0.0, 1.0), tile(3.0, 2.0), tile(9.0, 4.0)];

        let (survivors, cleared) = clear_full_lines(board, &tiles);

        assert_eq!(cleared, 0);
        assert_eq!(survivors, tiles);
    }

    #[test]
    fn test_clear_full_lines_drops_rows_above() {
        let board = Board::default();
        let mut tiles = full_row(board, 1.0);
        tiles.push(tile(4.0, 2.0));
        tiles.push(tile(4.0, 3.0));

        let (survivors, cleared) = clear_full_lines(board, &tiles);

        assert_eq!(cleared, 1);
        assert_eq!(survivors.len(), 2);
        assert!(survivors.contains(&tile(4.0, 1.0)));
        assert!(survivors.contains(&tile(4.0, 2.0)));
    }

    #[test]
    fn test_clear_full_lines_leaves_rows_below_untouched() {
        let board = Board::default();
        let mut tiles = vec![tile(0.0, 1.0)];
        tiles.extend(full_row(board, 2.0));
        tiles.push(tile(7.0, 3.0));

        let (survivors, cleared) = clear_full_lines(board, &tiles);

        assert_eq!(cleared, 1);
        assert!(survivors.contains(&tile(0.0, 1.0)));
        assert!(survivors.contains(&tile(7.0, 2.0)));
        assert_eq!(survivors.len(), 2);
    }

    #[test]
    fn test_clear_two_separated_rows() {
        let board = Board::default();
        let mut tiles = full_row(board, 1.0);
        tiles.push(tile(2.0, 2.0));
        tiles.extend(full_row(board, 3.0));
        tiles.push(tile(5.0, 4.0));

        let (survivors, cleared) = clear_full_lines(board, &tiles);

        assert_eq!(cleared, 2);
        // The tile between the cleared rows drops by one, the tile above by two.
        assert!(survivors.contains(&tile(2.0, 1.0)));
        assert!(survivors.contains(&tile(5.0, 2.0)));
        assert_eq!(survivors.len(), 2);
    }
}
