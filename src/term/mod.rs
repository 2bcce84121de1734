//! Terminal rendering module.
//!
//! Renders into a simple framebuffer that is flushed whole to the terminal
//! each frame. The view layer is pure; only `renderer` touches stdout.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
