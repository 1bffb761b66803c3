/// Read-only buffer access for navigation, plus a `ropey::Rope` backed implementation.
use std::borrow::Cow;

use anyhow::Result;
use ropey::Rope;

/// The narrow, read-only view of a text buffer that cursor navigation needs.
///
/// Line numbers and columns are 1-based. Line content never includes the
/// trailing line ending. Callers must pass line numbers in `1..=line_count()`.
pub trait BufferView {
    /// Returns the number of lines. Always at least 1.
    fn line_count(&self) -> usize;

    /// Returns the text of a line, excluding its line ending.
    fn line_content(&self, line_number: usize) -> Cow<'_, str>;

    /// Returns the smallest valid column of a line.
    fn line_min_column(&self, _line_number: usize) -> usize {
        1
    }

    /// Returns one past the last character column of a line.
    fn line_max_column(&self, line_number: usize) -> usize {
        self.line_content(line_number).chars().count() + 1
    }

    /// Returns the column of the first character that is neither a space nor
    /// a tab, or `None` if the line is blank.
    fn line_first_non_whitespace_column(&self, line_number: usize) -> Option<usize> {
        first_non_whitespace_column(&self.line_content(line_number))
    }
}

/// Finds the 1-based column of the first non-indent character in `line`.
pub fn first_non_whitespace_column(line: &str) -> Option<usize> {
    line.chars()
        .position(|ch| ch != ' ' && ch != '\t')
        .map(|idx| idx + 1)
}

/// Returns true for the chars ropey treats as line breaks.
fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// A text buffer backed by a rope data structure.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }
}

impl TextBuffer {
    /// Returns the number of lines in the buffer.
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Returns the text of a specific line (0-indexed), including any trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the line index is out of bounds.
    pub fn line(&self, line_idx: usize) -> Result<ropey::RopeSlice<'_>> {
        if line_idx >= self.rope.len_lines() {
            anyhow::bail!(
                "line index {} out of bounds (buffer has {} lines)",
                line_idx,
                self.rope.len_lines()
            );
        }
        Ok(self.rope.line(line_idx))
    }

    /// Returns the length of a line in characters, excluding its line break.
    ///
    /// Every break ropey splits lines on is stripped: `\r\n`, `\n`, `\r`,
    /// VT, FF, NEL and the Unicode line and paragraph separators.
    ///
    /// # Errors
    ///
    /// Returns an error if the line index is out of bounds.
    pub fn line_len_chars(&self, line_idx: usize) -> Result<usize> {
        let line = self.line(line_idx)?;
        let len = line.len_chars();
        if len == 0 {
            return Ok(0);
        }
        match line.char(len - 1) {
            '\n' if len > 1 && line.char(len - 2) == '\r' => Ok(len - 2),
            ch if is_line_break(ch) => Ok(len - 1),
            _ => Ok(len),
        }
    }

    /// Converts a 1-based line number into a checked 0-based index.
    fn line_index(&self, line_number: usize) -> usize {
        assert!(
            line_number >= 1 && line_number <= self.rope.len_lines(),
            "line number {} out of bounds (buffer has {} lines)",
            line_number,
            self.rope.len_lines()
        );
        line_number - 1
    }

    fn content_len(&self, line_number: usize) -> usize {
        let idx = self.line_index(line_number);
        self.line_len_chars(idx).unwrap_or(0)
    }
}

impl BufferView for TextBuffer {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line_content(&self, line_number: usize) -> Cow<'_, str> {
        let idx = self.line_index(line_number);
        let len = self.content_len(line_number);
        self.rope.line(idx).slice(..len).into()
    }

    fn line_max_column(&self, line_number: usize) -> usize {
        self.content_len(line_number) + 1
    }
}
