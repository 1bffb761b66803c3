/// Cursor and selection model for navigation.
use std::fmt;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::buffer::BufferView;

/// Represents a position in the text as line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column (char offset within the line, plus one).
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.line
            .cmp(&other.line)
            .then(self.column.cmp(&other.column))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A selection range within the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// The fixed end of the selection.
    pub anchor: Position,
    /// The floating end of the selection, where the caret is drawn.
    pub head: Position,
}

impl Selection {
    /// Returns the start (min) position of the selection.
    pub fn start(&self) -> Position {
        std::cmp::min(self.anchor, self.head)
    }

    /// Returns the end (max) position of the selection.
    pub fn end(&self) -> Position {
        std::cmp::max(self.anchor, self.head)
    }

    /// Returns true if this selection is empty (anchor == head).
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }
}

/// The selection anchor together with the visible columns it could not reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Anchor {
    pub position: Position,
    /// Desired visible columns beyond what `position` materializes.
    pub leftover: usize,
}

impl Anchor {
    pub fn new(position: Position, leftover: usize) -> Self {
        Self { position, leftover }
    }
}

/// The floating end of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Head {
    /// A literal position, with the visible columns it could not reach.
    Fixed { position: Position, leftover: usize },
    /// Pinned to the end of `line`, whatever that line's length is.
    LineEnd { line: usize },
}

impl Head {
    /// Returns the line the head is on.
    pub fn line(&self) -> usize {
        match *self {
            Self::Fixed { position, .. } => position.line,
            Self::LineEnd { line } => line,
        }
    }

    /// Resolves the head to a concrete position against `buffer`.
    pub fn resolve<B: BufferView + ?Sized>(&self, buffer: &B) -> Position {
        match *self {
            Self::Fixed { position, .. } => position,
            Self::LineEnd { line } => Position::new(line, buffer.line_max_column(line)),
        }
    }

    /// Returns the unreachable visible columns carried by the head.
    pub fn leftover(&self) -> usize {
        match *self {
            Self::Fixed { leftover, .. } => leftover,
            Self::LineEnd { .. } => 0,
        }
    }
}

/// The cursor state consumed and produced by every navigation operation.
///
/// A state is an immutable value: operations return a new one rather than
/// modifying it in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorState {
    selection_start: Anchor,
    head: Head,
}

impl Default for CursorState {
    fn default() -> Self {
        Self::caret(Position::default())
    }
}

impl CursorState {
    /// Creates a bare caret (no selection) at `position`.
    pub fn caret(position: Position) -> Self {
        Self {
            selection_start: Anchor::new(position, 0),
            head: Head::Fixed {
                position,
                leftover: 0,
            },
        }
    }

    /// Creates a state selecting from `anchor` to `position`.
    pub fn with_selection(anchor: Position, position: Position) -> Self {
        Self {
            selection_start: Anchor::new(anchor, 0),
            head: Head::Fixed {
                position,
                leftover: 0,
            },
        }
    }

    /// Creates a state from its raw parts.
    pub fn from_parts(selection_start: Anchor, head: Head) -> Self {
        Self {
            selection_start,
            head,
        }
    }

    /// Returns the selection anchor.
    pub fn selection_start(&self) -> Anchor {
        self.selection_start
    }

    /// Returns the floating end.
    pub fn head(&self) -> Head {
        self.head
    }

    /// Returns true if the head tracks the end of its line.
    pub fn is_end_sticky(&self) -> bool {
        matches!(self.head, Head::LineEnd { .. })
    }

    /// Returns the head's unreachable visible columns.
    pub fn leftover(&self) -> usize {
        self.head.leftover()
    }

    /// Returns the head's concrete position.
    pub fn position<B: BufferView + ?Sized>(&self, buffer: &B) -> Position {
        self.head.resolve(buffer)
    }

    /// Returns the selection from the anchor to the head.
    pub fn selection<B: BufferView + ?Sized>(&self, buffer: &B) -> Selection {
        Selection {
            anchor: self.selection_start.position,
            head: self.position(buffer),
        }
    }

    /// Returns true if anchor and head differ.
    pub fn has_selection<B: BufferView + ?Sized>(&self, buffer: &B) -> bool {
        !self.selection(buffer).is_empty()
    }

    /// Checks that both ends of the cursor lie inside `buffer`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first endpoint that is out of bounds.
    pub fn validate<B: BufferView + ?Sized>(&self, buffer: &B) -> Result<()> {
        check_position(buffer, self.selection_start.position)
            .map_err(|e| e.context("invalid selection anchor"))?;
        let head = match self.head {
            Head::Fixed { position, .. } => check_position(buffer, position),
            Head::LineEnd { line } => check_line(buffer, line),
        };
        head.map_err(|e| e.context("invalid cursor head"))
    }

    /// Moves the head to `position`. In selection mode the anchor stays put;
    /// otherwise the anchor collapses onto the new head.
    ///
    /// `position` must be what `head` resolves to.
    pub(crate) fn moved(&self, in_selection_mode: bool, position: Position, head: Head) -> Self {
        let selection_start = if in_selection_mode {
            self.selection_start
        } else {
            Anchor::new(position, head.leftover())
        };
        Self {
            selection_start,
            head,
        }
    }

    /// Moves the head to a fixed position.
    pub(crate) fn moved_to(
        &self,
        in_selection_mode: bool,
        position: Position,
        leftover: usize,
    ) -> Self {
        self.moved(in_selection_mode, position, Head::Fixed { position, leftover })
    }
}

fn check_line<B: BufferView + ?Sized>(buffer: &B, line: usize) -> Result<()> {
    let line_count = buffer.line_count();
    if line == 0 || line > line_count {
        anyhow::bail!("line {} out of bounds (buffer has {} lines)", line, line_count);
    }
    Ok(())
}

fn check_position<B: BufferView + ?Sized>(buffer: &B, position: Position) -> Result<()> {
    check_line(buffer, position.line)?;
    let min = buffer.line_min_column(position.line);
    let max = buffer.line_max_column(position.line);
    if position.column < min || position.column > max {
        anyhow::bail!(
            "column {} out of bounds on line {} (valid columns {}..={})",
            position.column,
            position.line,
            min,
            max
        );
    }
    Ok(())
}

/// Panics unless `position` lies inside `buffer`.
pub(crate) fn assert_position<B: BufferView + ?Sized>(buffer: &B, position: Position) {
    if let Err(e) = check_position(buffer, position) {
        panic!("cursor position {position} violates buffer bounds: {e}");
    }
}
