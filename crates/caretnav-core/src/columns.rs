//! Conversion between raw columns and visible columns.
//!
//! A raw column is a 1-based char index into a line. A visible column is the
//! 0-based on-screen offset of that column once tabs are expanded: every
//! grapheme cluster other than a tab occupies one cell, and a tab advances to
//! the next multiple of the tab size.

use unicode_segmentation::UnicodeSegmentation;

/// Returns the visible column reached after drawing `grapheme` at `visible_column`.
#[inline]
pub fn next_visible_column(grapheme: &str, visible_column: usize, tab_size: usize) -> usize {
    if grapheme == "\t" {
        next_tab_stop(visible_column, tab_size)
    } else {
        visible_column + 1
    }
}

/// Returns the first tab stop strictly after `visible_column`.
#[inline]
pub fn next_tab_stop(visible_column: usize, tab_size: usize) -> usize {
    visible_column + tab_size - visible_column % tab_size
}

/// Returns the visible column at which `column` starts on `line`.
///
/// Columns past the end of the line are treated as the line's max column.
pub fn visible_column_from_column(line: &str, column: usize, tab_size: usize) -> usize {
    debug_assert!(tab_size >= 1, "tab size must be at least 1");
    let end = column.saturating_sub(1);
    let mut visible = 0;
    let mut chars = 0;
    for grapheme in line.graphemes(true) {
        if chars >= end {
            break;
        }
        visible = next_visible_column(grapheme, visible, tab_size);
        chars += grapheme.chars().count();
    }
    visible
}

/// Returns the raw column on `line` that best reaches `visible_column`.
///
/// The result is the last column whose visible column does not exceed the
/// target, so a target inside a tab's expansion rounds down to the column of
/// the tab itself. Targets past the end of the line yield the max column.
pub fn column_from_visible_column(line: &str, visible_column: usize, tab_size: usize) -> usize {
    debug_assert!(tab_size >= 1, "tab size must be at least 1");
    let mut visible = 0;
    let mut chars = 0;
    for grapheme in line.graphemes(true) {
        let next = next_visible_column(grapheme, visible, tab_size);
        if next > visible_column {
            break;
        }
        visible = next;
        chars += grapheme.chars().count();
    }
    chars + 1
}
