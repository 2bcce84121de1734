//! Game state module - the single source of truth and its transitions
//!
//! Ties together board, pieces, RNG, and scoring. Every transition is a
//! pure `&self -> Self` function: the successor is built by cloning and
//! mutating privately, so callers can keep old states around for replay.
//! The binary owns one current state and replaces it wholesale each frame.

use std::collections::VecDeque;
use std::time::Duration;

use crate::core::board::{check_collision, clear_full_lines, slide_offset, Board};
use crate::core::pieces::{get_shape, Piece};
use crate::core::rng::ShapeRng;
use crate::core::scoring::{score_turn, MoveStats};
use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, Offset, RotationDir, Tile, FALL_INTERVAL, QUEUE_LEN};

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    /// Settled tiles; positions are unique and whole-numbered
    tiles: Vec<Tile>,
    current: Option<Piece>,
    current_offset: Option<Offset>,
    /// Upcoming pieces, head first; refilled one-for-one so it never empties
    queue: [Piece; QUEUE_LEN],
    saved: Option<Piece>,
    /// Set by a hold, cleared when a piece locks
    block_swap: bool,
    score: u32,
    level: u32,
    total_lines_cleared: u32,
    /// Time accumulated toward the next gravity step
    fall_timer: Duration,
    /// Timestamp of the previous tick, for delta computation
    prev_time: Duration,
    move_stats: MoveStats,
    input_queue: VecDeque<Command>,
    rng: ShapeRng,
}

impl GameState {
    /// Create a fresh state with the given RNG seed. No piece is active
    /// until `start` runs.
    pub fn new(seed: u32) -> Self {
        let mut rng = ShapeRng::new(seed);
        let queue = [
            get_shape(rng.next_shape()),
            get_shape(rng.next_shape()),
            get_shape(rng.next_shape()),
        ];

        Self {
            board: Board::default(),
            tiles: Vec::new(),
            current: None,
            current_offset: None,
            queue,
            saved: None,
            block_swap: false,
            score: 0,
            level: 1,
            total_lines_cleared: 0,
            fall_timer: Duration::ZERO,
            prev_time: Duration::ZERO,
            move_stats: MoveStats::default(),
            input_queue: VecDeque::new(),
            rng,
        }
    }

    /// Spawn the first piece by running one turn resolution on the fresh
    /// state (nothing decomposes and nothing scores)
    pub fn start(&self) -> Self {
        self.resolve_turn()
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn current_offset(&self) -> Option<Offset> {
        self.current_offset
    }

    pub fn queue(&self) -> &[Piece; QUEUE_LEN] {
        &self.queue
    }

    pub fn saved(&self) -> Option<&Piece> {
        self.saved.as_ref()
    }

    pub fn block_swap(&self) -> bool {
        self.block_swap
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn total_lines_cleared(&self) -> u32 {
        self.total_lines_cleared
    }

    pub fn fall_timer(&self) -> Duration {
        self.fall_timer
    }

    /// Buffer a command; the queue is drained in FIFO order at the start
    /// of the next tick
    pub fn queue_command(&self, command: Command) -> Self {
        let mut next = self.clone();
        next.input_queue.push_back(command);
        next
    }

    /// Apply one command immediately, returning the successor state.
    /// Commands that need an active piece are no-ops when none exists.
    pub fn apply(&self, command: Command) -> Self {
        match command {
            Command::MoveLeft => self.moved(Offset::new(-1.0, 0.0)),
            Command::MoveRight => self.moved(Offset::new(1.0, 0.0)),
            Command::SoftDrop => self.moved(Offset::DOWN),
            Command::Rotate => self.rotated_ccw(),
            Command::HardDrop => self.hard_dropped(),
            Command::Hold => self.held(),
        }
    }

    /// Advance one frame. `now` is monotonic time since the loop started;
    /// the delta is computed here. Pending input applies before gravity, so
    /// everything queued in a frame lands atomically ahead of the descent.
    pub fn tick(&self, now: Duration) -> Self {
        let mut next = self.clone();

        let delta = now.saturating_sub(next.prev_time);
        next.prev_time = now;
        next.fall_timer += delta;

        while let Some(command) = next.input_queue.pop_front() {
            next = next.apply(command);
        }

        if next.fall_timer > FALL_INTERVAL {
            next.fall_timer = Duration::ZERO;

            if let (Some(piece), Some(offset)) = (&next.current, next.current_offset) {
                let candidate = offset + Offset::DOWN;
                let blocked = check_collision(piece, candidate, next.board, &next.tiles);
                if blocked {
                    next = next.resolve_turn();
                } else {
                    next.current_offset = Some(candidate);
                }
            }
        }

        next
    }

    /// Where the active piece would rest if hard-dropped now
    pub fn ghost_offset(&self) -> Option<Offset> {
        let piece = self.current.as_ref()?;
        let offset = self.current_offset?;
        Some(slide_offset(
            piece,
            offset,
            Offset::DOWN,
            self.board,
            &self.tiles,
        ))
    }

    /// Read-only copy for the renderer
    pub fn snapshot(&self) -> GameSnapshot {
        let active = match (&self.current, self.current_offset) {
            (Some(piece), Some(offset)) => Some(ActiveSnapshot {
                piece: piece.clone(),
                offset,
            }),
            _ => None,
        };

        GameSnapshot {
            board: self.board,
            settled: self.tiles.clone(),
            active,
            ghost_offset: self.ghost_offset(),
            queue: std::array::from_fn(|i| self.queue[i].kind),
            saved: self.saved.as_ref().map(|piece| piece.kind),
            can_hold: !self.block_swap,
            score: self.score,
            level: self.level,
            lines: self.total_lines_cleared,
        }
    }

    /// Translate the active piece if the target is collision-free; a
    /// successful move re-arms gravity by zeroing the fall timer
    fn moved(&self, delta: Offset) -> Self {
        let (Some(piece), Some(offset)) = (&self.current, self.current_offset) else {
            return self.clone();
        };

        let candidate = offset + delta;
        if check_collision(piece, candidate, self.board, &self.tiles) {
            return self.clone();
        }

        let mut next = self.clone();
        next.current_offset = Some(candidate);
        next.fall_timer = Duration::ZERO;
        next
    }

    /// Rotate the active piece counter-clockwise in place. No wall kicks:
    /// the rotated piece must fit at the same offset.
    fn rotated_ccw(&self) -> Self {
        let (Some(piece), Some(offset)) = (&self.current, self.current_offset) else {
            return self.clone();
        };

        let turned = piece.rotated(RotationDir::CounterClockwise);
        if check_collision(&turned, offset, self.board, &self.tiles) {
            return self.clone();
        }

        let mut next = self.clone();
        next.current = Some(turned);
        next.fall_timer = Duration::ZERO;
        next
    }

    /// Slide the active piece to its resting offset, record the distance,
    /// and resolve the turn immediately
    fn hard_dropped(&self) -> Self {
        let (Some(piece), Some(offset)) = (&self.current, self.current_offset) else {
            return self.clone();
        };

        let rest = slide_offset(piece, offset, Offset::DOWN, self.board, &self.tiles);
        let distance = (offset.y - rest.y).abs() as u32;

        let mut next = self.clone();
        next.current_offset = Some(rest);
        next.move_stats.hard_drop_distance = distance;
        next.resolve_turn()
    }

    /// Set the active piece aside. The first hold pulls from the queue;
    /// later holds swap with the saved piece. Blocked until the next lock.
    fn held(&self) -> Self {
        if self.block_swap {
            return self.clone();
        }
        let Some(current) = &self.current else {
            return self.clone();
        };

        let mut next = self.clone();
        match next.saved.take() {
            Some(saved) => {
                next.current_offset = Some(saved.spawn_offset(next.board));
                next.saved = Some(current.clone());
                next.current = Some(saved);
            }
            None => {
                next.saved = Some(current.clone());
                next.advance_current();
            }
        }
        next.block_swap = true;
        next
    }

    /// Lock the active piece and run the turn pipeline: decompose, clear
    /// lines, advance the queue, score, reset per-turn flags
    fn resolve_turn(&self) -> Self {
        let mut next = self.clone();
        next.decompose();
        next.clear_lines();
        next.advance_current();
        next.apply_score();
        next.block_swap = false;
        next.move_stats = MoveStats::default();
        next
    }

    /// Convert the active piece's tiles into settled tiles
    fn decompose(&mut self) {
        let (Some(piece), Some(offset)) = (&self.current, self.current_offset) else {
            return;
        };
        let settled: Vec<Tile> = piece.world_tiles(offset).collect();
        self.tiles.extend(settled);
    }

    /// Remove full rows and record the count for scoring
    fn clear_lines(&mut self) {
        let (tiles, cleared) = clear_full_lines(self.board, &self.tiles);
        self.tiles = tiles;
        self.move_stats.lines_cleared = cleared;
    }

    /// Dequeue the head as the new active piece, refill the tail with a
    /// fresh random shape, spawn at the top of the well
    fn advance_current(&mut self) {
        let head = self.queue[0].clone();
        self.queue.rotate_left(1);
        self.queue[QUEUE_LEN - 1] = get_shape(self.rng.next_shape());

        self.current_offset = Some(head.spawn_offset(self.board));
        self.current = Some(head);
    }

    /// Fold the accumulated move stats into score, level, and line total
    fn apply_score(&mut self) {
        let update = score_turn(
            self.score,
            self.level,
            self.total_lines_cleared,
            &self.move_stats,
        );
        self.score = update.score;
        self.level = update.level;
        self.total_lines_cleared = update.total_lines_cleared;
    }

    #[cfg(test)]
    fn with_tiles(mut self, tiles: Vec<Tile>) -> Self {
        self.tiles = tiles;
        self
    }

    #[cfg(test)]
    fn with_current(mut self, piece: Piece, offset: Offset) -> Self {
        self.current = Some(piece);
        self.current_offset = Some(offset);
        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
