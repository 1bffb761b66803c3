//! Movement relative to the current line and to the whole buffer.

use super::Navigator;
use crate::buffer::BufferView;
use crate::cursor::{Anchor, CursorState, Head, Position};

impl<B: BufferView + ?Sized> Navigator<'_, B> {
    /// Smart home: moves to the first non-blank column of the head's line, or
    /// to the line's min column if the head is already there.
    ///
    /// Blank lines treat the min column as their first non-blank column.
    pub fn move_to_line_start(&self, state: &CursorState, in_selection_mode: bool) -> CursorState {
        let head = self.head_position(state);
        let line = head.line;
        let min_column = self.buffer.line_min_column(line);
        let first_non_blank = self
            .buffer
            .line_first_non_whitespace_column(line)
            .unwrap_or(min_column);
        let column = if head.column == first_non_blank {
            min_column
        } else {
            first_non_blank
        };
        state.moved_to(in_selection_mode, Position::new(line, column), 0)
    }

    /// Moves to the end of the head's line and pins the head there, so later
    /// vertical moves land on each line's end.
    pub fn move_to_line_end(&self, state: &CursorState, in_selection_mode: bool) -> CursorState {
        let line = self.head_position(state).line;
        let position = Position::new(line, self.buffer.line_max_column(line));
        state.moved(in_selection_mode, position, Head::LineEnd { line })
    }

    /// Moves to the first column of the first line.
    pub fn move_to_buffer_start(
        &self,
        state: &CursorState,
        in_selection_mode: bool,
    ) -> CursorState {
        self.head_position(state);
        state.moved_to(in_selection_mode, self.buffer_start(), 0)
    }

    /// Moves to the max column of the last line.
    pub fn move_to_buffer_end(&self, state: &CursorState, in_selection_mode: bool) -> CursorState {
        self.head_position(state);
        state.moved_to(in_selection_mode, self.buffer_end(), 0)
    }

    /// Moves to `target`, clamped to the buffer: the line into
    /// `1..=line_count`, then the column into that line's bounds.
    pub fn move_to(
        &self,
        state: &CursorState,
        in_selection_mode: bool,
        target: Position,
    ) -> CursorState {
        self.head_position(state);
        state.moved_to(in_selection_mode, self.clamp(target), 0)
    }

    /// Selects the whole buffer, with the head at its end.
    pub fn select_all(&self, state: &CursorState) -> CursorState {
        self.head_position(state);
        let end = self.buffer_end();
        CursorState::from_parts(
            Anchor::new(self.buffer_start(), 0),
            Head::Fixed {
                position: end,
                leftover: 0,
            },
        )
    }

    /// Clamps a possibly out-of-range position into the buffer.
    pub fn clamp(&self, position: Position) -> Position {
        let line = position.line.clamp(1, self.buffer.line_count());
        let column = position.column.clamp(
            self.buffer.line_min_column(line),
            self.buffer.line_max_column(line),
        );
        Position::new(line, column)
    }

    fn buffer_start(&self) -> Position {
        Position::new(1, self.buffer.line_min_column(1))
    }

    fn buffer_end(&self) -> Position {
        let last = self.buffer.line_count();
        Position::new(last, self.buffer.line_max_column(last))
    }
}
