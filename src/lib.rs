//! Terminal falling-block puzzle with a pure copy-on-write game core.
//!
//! `core` is the engine: value-type state where every transition consumes
//! nothing and returns a fresh `GameState`. `input` maps key events to
//! commands, `term` draws frame snapshots, and the binary wires the three
//! together in a fixed-cadence loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;

pub use crate::core::{GameSnapshot, GameState};
pub use crate::types::Command;
