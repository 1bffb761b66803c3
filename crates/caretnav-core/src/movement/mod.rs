//! Navigation operations over a read-only buffer view.
//!
//! Every operation takes the current [`CursorState`] and returns a new one;
//! neither the buffer nor the input state is modified. Operations that accept
//! `in_selection_mode` move only the head when it is true and collapse the
//! anchor onto the new head when it is false.
//!
//! Passing a state whose endpoints lie outside the buffer is a caller error
//! and panics.

mod horizontal;
mod line;
mod vertical;

pub use vertical::VerticalMove;

use caretnav_config::NavigationConfig;

use crate::buffer::BufferView;
use crate::cursor::{assert_position, CursorState, Position, Selection};

/// Computes cursor movements against one buffer snapshot and configuration.
#[derive(Debug)]
pub struct Navigator<'a, B: BufferView + ?Sized> {
    config: &'a NavigationConfig,
    buffer: &'a B,
}

impl<'a, B: BufferView + ?Sized> Navigator<'a, B> {
    /// Creates a navigator.
    ///
    /// # Panics
    ///
    /// Panics if `config.tab_size` is zero.
    pub fn new(config: &'a NavigationConfig, buffer: &'a B) -> Self {
        assert!(config.tab_size >= 1, "tab size must be at least 1, got {}", config.tab_size);
        Self { config, buffer }
    }

    pub fn buffer(&self) -> &'a B {
        self.buffer
    }

    /// Resolves the head of `state`, asserting both endpoints are in bounds.
    fn head_position(&self, state: &CursorState) -> Position {
        assert_position(self.buffer, state.selection_start().position);
        let position = state.position(self.buffer);
        assert_position(self.buffer, position);
        position
    }

    /// Returns the point a non-extending move starts from: the selection
    /// boundary picked by `boundary` when a selection exists, else the head.
    fn departure(
        &self,
        state: &CursorState,
        in_selection_mode: bool,
        boundary: fn(&Selection) -> Position,
    ) -> Position {
        let head = self.head_position(state);
        let selection = state.selection(self.buffer);
        if !in_selection_mode && !selection.is_empty() {
            boundary(&selection)
        } else {
            head
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::TextBuffer;
    use crate::cursor::{Anchor, Head};

    #[test]
    #[should_panic(expected = "tab size must be at least 1")]
    fn test_zero_tab_size_panics() {
        let config = NavigationConfig::with_tab_size(0);
        let buf = TextBuffer::from("abc");
        Navigator::new(&config, &buf);
    }

    #[test]
    #[should_panic(expected = "violates buffer bounds")]
    fn test_out_of_bounds_head_panics() {
        let config = NavigationConfig::default();
        let buf = TextBuffer::from("abc");
        let nav = Navigator::new(&config, &buf);
        nav.move_right(&CursorState::caret(Position::new(1, 9)), false, 1);
    }

    #[test]
    #[should_panic(expected = "violates buffer bounds")]
    fn test_out_of_bounds_anchor_panics() {
        let config = NavigationConfig::default();
        let buf = TextBuffer::from("abc");
        let nav = Navigator::new(&config, &buf);
        let state = CursorState::from_parts(
            Anchor::new(Position::new(3, 1), 0),
            Head::Fixed {
                position: Position::new(1, 1),
                leftover: 0,
            },
        );
        nav.move_left(&state, true, 1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_pinned_head_on_missing_line_panics() {
        let config = NavigationConfig::default();
        let buf = TextBuffer::from("abc");
        let nav = Navigator::new(&config, &buf);
        let state = CursorState::from_parts(Anchor::default(), Head::LineEnd { line: 2 });
        nav.move_down(&state, false, 1);
    }

    #[test]
    fn test_departure_prefers_selection_boundary() {
        let config = NavigationConfig::default();
        let buf = TextBuffer::from("hello world");
        let nav = Navigator::new(&config, &buf);
        let state = CursorState::with_selection(Position::new(1, 8), Position::new(1, 3));
        assert_eq!(nav.departure(&state, false, |s| s.end()), Position::new(1, 8));
        assert_eq!(nav.departure(&state, true, |s| s.end()), Position::new(1, 3));
    }
}
