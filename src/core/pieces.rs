//! Pieces module - tetromino shapes, rotation, and spawn geometry
//!
//! Each shape is derived from a fixed binary matrix: on-cells become tiles
//! centered on the matrix midpoint, and the snap offset records the rounding
//! correction that aligns the first tile to the grid. The y axis points up,
//! so matrix row 0 produces the lowest tile row.

use std::fmt;

use crate::core::board::Board;
use crate::types::{Offset, Rgb, RotationDir, ShapeKind, Tile};

const I_MATRIX: [[u8; 4]; 4] = [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]];
const O_MATRIX: [[u8; 2]; 2] = [[1, 1], [1, 1]];
const T_MATRIX: [[u8; 3]; 3] = [[0, 0, 0], [1, 1, 1], [0, 1, 0]];
const J_MATRIX: [[u8; 3]; 3] = [[0, 0, 0], [1, 1, 1], [0, 0, 1]];
const L_MATRIX: [[u8; 3]; 3] = [[0, 0, 0], [1, 1, 1], [1, 0, 0]];
const S_MATRIX: [[u8; 3]; 3] = [[0, 1, 1], [1, 1, 0], [0, 0, 0]];
const Z_MATRIX: [[u8; 3]; 3] = [[1, 1, 0], [0, 1, 1], [0, 0, 0]];

const I_COLOR: Rgb = Rgb::new(6, 182, 239);
const O_COLOR: Rgb = Rgb::new(246, 230, 13);
const T_COLOR: Rgb = Rgb::new(129, 91, 164);
const J_COLOR: Rgb = Rgb::new(72, 182, 133);
const L_COLOR: Rgb = Rgb::new(249, 155, 21);
const S_COLOR: Rgb = Rgb::new(158, 201, 49);
const Z_COLOR: Rgb = Rgb::new(239, 97, 85);

/// A tetromino: four tiles in piece-local coordinates plus the bookkeeping
/// needed to spawn and rotate it
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub kind: ShapeKind,
    pub tiles: Vec<Tile>,
    pub width: u32,
    pub height: u32,
    pub snap_offset: Offset,
}

/// Build a fresh copy of the catalog shape for a kind
pub fn get_shape(kind: ShapeKind) -> Piece {
    match kind {
        ShapeKind::I => from_matrix(kind, I_MATRIX, I_COLOR),
        ShapeKind::O => from_matrix(kind, O_MATRIX, O_COLOR),
        ShapeKind::T => from_matrix(kind, T_MATRIX, T_COLOR),
        ShapeKind::J => from_matrix(kind, J_MATRIX, J_COLOR),
        ShapeKind::L => from_matrix(kind, L_MATRIX, L_COLOR),
        ShapeKind::S => from_matrix(kind, S_MATRIX, S_COLOR),
        ShapeKind::Z => from_matrix(kind, Z_MATRIX, Z_COLOR),
    }
}

/// Display color of a shape, for previews that never build the piece.
pub fn shape_color(kind: ShapeKind) -> Rgb {
    match kind {
        ShapeKind::I => I_COLOR,
        ShapeKind::O => O_COLOR,
        ShapeKind::T => T_COLOR,
        ShapeKind::J => J_COLOR,
        ShapeKind::L => L_COLOR,
        ShapeKind::S => S_COLOR,
        ShapeKind::Z => Z_COLOR,
    }
}

fn from_matrix<const W: usize, const H: usize>(
    kind: ShapeKind,
    matrix: [[u8; W]; H],
    color: Rgb,
) -> Piece {
    let center_x = W as f32 / 2.0;
    let center_y = H as f32 / 2.0;

    let mut tiles = Vec::with_capacity(4);
    for (row, cells) in matrix.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == 1 {
                tiles.push(Tile::new(
                    col as f32 + 0.5 - center_x,
                    row as f32 + 0.5 - center_y,
                    color,
                ));
            }
        }
    }

    // Rounding correction that puts the first tile on an integer grid cell.
    // Rounds half away from zero, so I and O carry (-0.5, -0.5).
    let first = tiles[0];
    let snap_offset = Offset::new(first.x.round() - first.x, first.y.round() - first.y);

    Piece {
        kind,
        tiles,
        width: W as u32,
        height: H as u32,
        snap_offset,
    }
}

impl Piece {
    /// Quarter turn around the piece origin. Snap offset and dimensions are
    /// carried over unchanged; all catalog matrices are square, so the
    /// dimensions stay valid.
    pub fn rotated(&self, dir: RotationDir) -> Piece {
        let transform = |tile: &Tile| match dir {
            RotationDir::Clockwise => Tile::new(-tile.y, tile.x, tile.color),
            RotationDir::CounterClockwise => Tile::new(tile.y, -tile.x, tile.color),
        };

        Piece {
            kind: self.kind,
            tiles: self.tiles.iter().map(transform).collect(),
            width: self.width,
            height: self.height,
            snap_offset: self.snap_offset,
        }
    }

    /// Tiles translated into world space
    pub fn world_tiles(&self, offset: Offset) -> impl Iterator<Item = Tile> + '_ {
        self.tiles
            .iter()
            .map(move |tile| Tile::new(tile.x + offset.x, tile.y + offset.y, tile.color))
    }

    /// Spawn anchor: centered horizontally, snapped to the top of the well
    pub fn spawn_offset(&self, board: Board) -> Offset {
        Offset::new(
            board.width as f32 / 2.0 - self.snap_offset.x,
            board.height as f32 - self.snap_offset.y,
        )
    }
}

impl fmt::Display for Piece {
    /// Occupancy matrix, one line per row in matrix order (row 0 is the
    /// lowest tile row)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let center_x = self.width as f32 / 2.0;
        let center_y = self.height as f32 / 2.0;

        let mut grid = vec![vec!['·'; self.width as usize]; self.height as usize];
        for tile in &self.tiles {
            let row = (tile.y - 0.5 + center_y).floor() as usize;
            let col = (tile.x - 0.5 + center_x).floor() as usize;
            grid[row][col] = '█';
        }

        for (i, row) in grid.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
