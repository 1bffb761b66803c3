//! Vertical movement with a sticky visible column.
//!
//! The desired visible column is the head's current visible column plus its
//! leftover. Each step lands on the column that reaches it without going
//! past it, and records the unreachable remainder as the new leftover so a
//! later move onto a longer line can restore the original column.

use tracing::trace;

use super::Navigator;
use crate::buffer::BufferView;
use crate::columns::{column_from_visible_column, visible_column_from_column};
use crate::cursor::{Anchor, CursorState, Head, Position, Selection};

/// Outcome of a single vertical step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalMove {
    pub position: Position,
    /// Desired visible columns the landing column could not reach.
    pub leftover: usize,
    /// True when the requested line was past the first or last line.
    pub clamped: bool,
}

impl<B: BufferView + ?Sized> Navigator<'_, B> {
    /// Moves `count` lines up from `position`.
    ///
    /// Past the first line, the step lands on line 1: at its min column when
    /// `allow_move_on_first_line` is set, otherwise at the current column
    /// bounded by that line's length.
    pub fn up(
        &self,
        position: Position,
        leftover: usize,
        count: usize,
        allow_move_on_first_line: bool,
    ) -> VerticalMove {
        let desired = self.desired_visible_column(position, leftover);

        if count >= position.line {
            let column = if allow_move_on_first_line {
                self.buffer.line_min_column(1)
            } else {
                position.column.min(self.buffer.line_max_column(1))
            };
            return self.settle(desired, Position::new(1, column), true);
        }

        let target = self.position_at_visible_column(position.line - count, desired);
        self.settle(desired, target, false)
    }

    /// Moves `count` lines down from `position`.
    ///
    /// Past the last line, the step lands on the last line: at its max column
    /// when `allow_move_on_last_line` is set, otherwise at the current column
    /// bounded by that line's length.
    pub fn down(
        &self,
        position: Position,
        leftover: usize,
        count: usize,
        allow_move_on_last_line: bool,
    ) -> VerticalMove {
        let desired = self.desired_visible_column(position, leftover);
        let line_count = self.buffer.line_count();

        let target_line = position.line.saturating_add(count);
        if target_line > line_count {
            let max_column = self.buffer.line_max_column(line_count);
            let column = if allow_move_on_last_line {
                max_column
            } else {
                position.column.min(max_column)
            };
            let position = Position::new(line_count, column);
            return self.settle(desired, position, true);
        }

        let target = self.position_at_visible_column(target_line, desired);
        self.settle(desired, target, false)
    }

    /// Moves the cursor up `lines` lines.
    ///
    /// A plain move with an active selection departs from the selection start.
    /// A head pinned to the end of its line stays pinned unless the move runs
    /// past the first line.
    pub fn move_up(
        &self,
        state: &CursorState,
        in_selection_mode: bool,
        lines: usize,
    ) -> CursorState {
        let from = self.departure(state, in_selection_mode, Selection::start);
        let step = self.up(from, state.leftover(), lines, true);
        self.land(state, in_selection_mode, step)
    }

    /// Moves the cursor down `lines` lines.
    ///
    /// A plain move with an active selection departs from the selection end.
    /// A head pinned to the end of its line stays pinned unless the move runs
    /// past the last line.
    pub fn move_down(
        &self,
        state: &CursorState,
        in_selection_mode: bool,
        lines: usize,
    ) -> CursorState {
        let from = self.departure(state, in_selection_mode, Selection::end);
        let step = self.down(from, state.leftover(), lines, true);
        self.land(state, in_selection_mode, step)
    }

    /// Moves the cursor up by the configured page size.
    pub fn move_page_up(&self, state: &CursorState, in_selection_mode: bool) -> CursorState {
        self.move_up(state, in_selection_mode, self.config.page_lines)
    }

    /// Moves the cursor down by the configured page size.
    pub fn move_page_down(&self, state: &CursorState, in_selection_mode: bool) -> CursorState {
        self.move_down(state, in_selection_mode, self.config.page_lines)
    }

    /// Moves both the anchor and the head one line up, each keeping its own
    /// leftover. On the first line, columns are kept (bounded by line length).
    pub fn translate_up(&self, state: &CursorState) -> CursorState {
        let head = self.head_position(state);
        let anchor = state.selection_start();
        let anchor = self.up(anchor.position, anchor.leftover, 1, false);
        let head = self.up(head, state.leftover(), 1, false);
        translated(anchor, head)
    }

    /// Moves both the anchor and the head one line down, each keeping its own
    /// leftover. On the last line, columns are kept (bounded by line length).
    pub fn translate_down(&self, state: &CursorState) -> CursorState {
        let head = self.head_position(state);
        let anchor = state.selection_start();
        let anchor = self.down(anchor.position, anchor.leftover, 1, false);
        let head = self.down(head, state.leftover(), 1, false);
        translated(anchor, head)
    }

    fn desired_visible_column(&self, position: Position, leftover: usize) -> usize {
        let content = self.buffer.line_content(position.line);
        visible_column_from_column(&content, position.column, self.config.tab_size)
            .saturating_add(leftover)
    }

    fn position_at_visible_column(&self, line: usize, visible_column: usize) -> Position {
        let content = self.buffer.line_content(line);
        let column = column_from_visible_column(&content, visible_column, self.config.tab_size);
        let column = column.clamp(
            self.buffer.line_min_column(line),
            self.buffer.line_max_column(line),
        );
        Position::new(line, column)
    }

    /// Computes the leftover for a landing position.
    fn settle(&self, desired: usize, position: Position, clamped: bool) -> VerticalMove {
        let content = self.buffer.line_content(position.line);
        let reached = visible_column_from_column(&content, position.column, self.config.tab_size);
        let leftover = desired.saturating_sub(reached);
        if clamped {
            trace!(%position, "vertical move clamped to buffer edge");
        }
        VerticalMove {
            position,
            leftover,
            clamped,
        }
    }

    /// Applies a caret-style step to `state`, keeping an end-of-line pin when
    /// the step reached its target line.
    fn land(
        &self,
        state: &CursorState,
        in_selection_mode: bool,
        step: VerticalMove,
    ) -> CursorState {
        if state.is_end_sticky() && !step.clamped {
            let line = step.position.line;
            let position = Position::new(line, self.buffer.line_max_column(line));
            return state.moved(in_selection_mode, position, Head::LineEnd { line });
        }
        state.moved_to(in_selection_mode, step.position, step.leftover)
    }
}

fn translated(anchor: VerticalMove, head: VerticalMove) -> CursorState {
    CursorState::from_parts(
        Anchor::new(anchor.position, anchor.leftover),
        Head::Fixed {
            position: head.position,
            leftover: head.leftover,
        },
    )
}
