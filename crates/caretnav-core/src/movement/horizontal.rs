//! Single-character movement left and right.

use super::Navigator;
use crate::buffer::BufferView;
use crate::cursor::{CursorState, Position};
use crate::graphemes::{next_grapheme_boundary, prev_grapheme_boundary};

impl<B: BufferView + ?Sized> Navigator<'_, B> {
    /// Returns the position one grapheme cluster before `position`.
    ///
    /// At the start of a line this wraps to the end of the previous line; at
    /// the start of the buffer the position is returned unchanged.
    pub fn left_position(&self, position: Position) -> Position {
        let Position { line, column } = position;
        if column > self.buffer.line_min_column(line) {
            let content = self.buffer.line_content(line);
            Position::new(line, prev_grapheme_boundary(&content, column - 1) + 1)
        } else if line > 1 {
            Position::new(line - 1, self.buffer.line_max_column(line - 1))
        } else {
            position
        }
    }

    /// Returns the position one grapheme cluster after `position`.
    ///
    /// At the end of a line this wraps to the start of the next line; at the
    /// end of the buffer the position is returned unchanged.
    pub fn right_position(&self, position: Position) -> Position {
        let Position { line, column } = position;
        if column < self.buffer.line_max_column(line) {
            let content = self.buffer.line_content(line);
            Position::new(line, next_grapheme_boundary(&content, column - 1) + 1)
        } else if line < self.buffer.line_count() {
            Position::new(line + 1, self.buffer.line_min_column(line + 1))
        } else {
            position
        }
    }

    /// Moves left by `columns` grapheme clusters.
    ///
    /// A plain move with an active selection collapses to the selection start
    /// instead of stepping.
    pub fn move_left(
        &self,
        state: &CursorState,
        in_selection_mode: bool,
        columns: usize,
    ) -> CursorState {
        let head = self.head_position(state);
        let selection = state.selection(self.buffer);
        let position = if !in_selection_mode && !selection.is_empty() {
            selection.start()
        } else {
            (0..columns).fold(head, |pos, _| self.left_position(pos))
        };
        state.moved_to(in_selection_mode, position, 0)
    }

    /// Moves right by `columns` grapheme clusters.
    ///
    /// A plain move with an active selection collapses to the selection end
    /// instead of stepping.
    pub fn move_right(
        &self,
        state: &CursorState,
        in_selection_mode: bool,
        columns: usize,
    ) -> CursorState {
        let head = self.head_position(state);
        let selection = state.selection(self.buffer);
        let position = if !in_selection_mode && !selection.is_empty() {
            selection.end()
        } else {
            (0..columns).fold(head, |pos, _| self.right_position(pos))
        };
        state.moved_to(in_selection_mode, position, 0)
    }
}
