//! Terminal game renderer.
//!
//! A small rendering layer for terminal play. Frames are drawn into a plain
//! framebuffer by [`GameView`] and flushed by [`TerminalRenderer`], which only
//! rewrites the runs of cells that changed since the previous frame.
//!
//! Board cells are drawn two columns wide so pieces look roughly square in a
//! typical terminal font.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fallblock_core as core;
pub use fallblock_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
