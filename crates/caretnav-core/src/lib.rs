//! Caret and selection navigation over line-oriented text buffers.
//!
//! [`Navigator`] computes the cursor that results from a navigation command
//! (character, line, page, line-boundary and buffer-boundary moves) given a
//! read-only [`BufferView`], a [`NavigationConfig`], and the current
//! [`CursorState`]. It never mutates the buffer or the input state.
pub mod buffer;
pub mod columns;
pub mod command;
pub mod cursor;
pub mod graphemes;
pub mod movement;

pub use buffer::{BufferView, TextBuffer};
pub use caretnav_config::NavigationConfig;
pub use command::{CursorCommand, Invocation};
pub use cursor::{Anchor, CursorState, Head, Position, Selection};
pub use movement::{Navigator, VerticalMove};
