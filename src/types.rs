//! Core types shared across the application
//! This module contains pure data types with no external dependencies

use std::ops::Add;
use std::time::Duration;

/// Board dimensions (bottom visible row is y = 1, the well is open upward)
pub const BOARD_WIDTH: u32 = 10;
pub const BOARD_HEIGHT: u32 = 24;

/// Upcoming-piece queue length (replenished one-for-one on every dequeue)
pub const QUEUE_LEN: usize = 3;

/// Frame budget for the terminal loop (milliseconds)
pub const FRAME_MS: u64 = 16;

/// Gravity interval: the fall timer must exceed this before a piece descends
pub const FALL_INTERVAL: Duration = Duration::from_secs(1);

/// Line-clear bonus by number of rows, multiplied by that number again when
/// scoring (so four rows award 800 * 4)
pub const LINE_CLEAR_BONUS: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per cell of drop distance
pub const SOFT_DROP_POINTS: u32 = 1;
pub const HARD_DROP_POINTS: u32 = 2;

/// Level advances once total lines cleared exceeds level * LINES_PER_LEVEL
pub const LINES_PER_LEVEL: u32 = 5;

/// World-space vector. Coordinates are f32 but always exact multiples of
/// 0.5 (piece-local) or whole numbers (settled), so equality is exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    /// One-cell descent, the gravity and drop direction (y axis points up)
    pub const DOWN: Offset = Offset { x: 0.0, y: -1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Offset { x, y }
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// A single colored cell, either piece-local or settled in the well
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub x: f32,
    pub y: f32,
    pub color: Rgb,
}

impl Tile {
    pub const fn new(x: f32, y: f32, color: Rgb) -> Self {
        Tile { x, y, color }
    }

    /// Row index of a settled tile (settled coordinates are whole numbers)
    pub fn row(&self) -> i32 {
        self.y as i32
    }
}

/// Tetromino shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Single-letter label for panels and tests
    pub fn letter(&self) -> char {
        match self {
            ShapeKind::I => 'I',
            ShapeKind::O => 'O',
            ShapeKind::T => 'T',
            ShapeKind::J => 'J',
            ShapeKind::L => 'L',
            ShapeKind::S => 'S',
            ShapeKind::Z => 'Z',
        }
    }
}

/// Quarter-turn direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDir {
    Clockwise,
    CounterClockwise,
}

/// Player commands, mapped from raw key events at the input boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    Hold,
}
