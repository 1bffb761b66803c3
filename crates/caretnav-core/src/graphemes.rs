//! Grapheme cluster boundaries within a single line, in char offsets.
//!
//! Columns count `char`s, but a user-perceived character (a base letter plus
//! combining marks, a flag, a ZWJ emoji sequence) can span several of them.
//! Horizontal movement steps between the boundaries computed here so it never
//! lands inside a cluster.

use unicode_segmentation::UnicodeSegmentation;

/// Returns the char offset of the next grapheme boundary after `char_idx`.
///
/// If `char_idx` is at or past the end of `line`, returns the line's char length.
pub fn next_grapheme_boundary(line: &str, char_idx: usize) -> usize {
    let mut end = 0;
    for grapheme in line.graphemes(true) {
        end += grapheme.chars().count();
        if end > char_idx {
            return end;
        }
    }
    end
}

/// Returns the char offset of the previous grapheme boundary before `char_idx`.
///
/// If `char_idx` is 0, returns 0.
pub fn prev_grapheme_boundary(line: &str, char_idx: usize) -> usize {
    let mut start = 0;
    let mut prev = 0;
    for grapheme in line.graphemes(true) {
        if start >= char_idx {
            return prev;
        }
        prev = start;
        start += grapheme.chars().count();
    }
    if start < char_idx {
        start
    } else {
        prev
    }
}

/// Returns whether `char_idx` sits between two grapheme clusters (or at either end).
pub fn is_grapheme_boundary(line: &str, char_idx: usize) -> bool {
    if char_idx == 0 {
        return true;
    }
    let mut end = 0;
    for grapheme in line.graphemes(true) {
        end += grapheme.chars().count();
        if end >= char_idx {
            return end == char_idx;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMBINING: &str = "ae\u{301}b"; // a, e + combining acute, b
    const FAMILY: &str = "x\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}y"; // x, family emoji, y

    #[test]
    fn test_ascii_boundaries() {
        assert_eq!(next_grapheme_boundary("abc", 0), 1);
        assert_eq!(next_grapheme_boundary("abc", 2), 3);
        assert_eq!(prev_grapheme_boundary("abc", 3), 2);
        assert_eq!(prev_grapheme_boundary("abc", 1), 0);
    }

    #[test]
    fn test_ends_are_clamped() {
        assert_eq!(next_grapheme_boundary("abc", 3), 3);
        assert_eq!(next_grapheme_boundary("abc", 10), 3);
        assert_eq!(prev_grapheme_boundary("abc", 0), 0);
        assert_eq!(prev_grapheme_boundary("abc", 10), 3);
        assert_eq!(next_grapheme_boundary("", 0), 0);
        assert_eq!(prev_grapheme_boundary("", 0), 0);
    }

    #[test]
    fn test_combining_mark_is_one_step() {
        assert_eq!(next_grapheme_boundary(COMBINING, 1), 3);
        assert_eq!(prev_grapheme_boundary(COMBINING, 3), 1);
    }

    #[test]
    fn test_zwj_sequence_is_one_step() {
        // The family emoji spans chars 1..6
        assert_eq!(next_grapheme_boundary(FAMILY, 1), 6);
        assert_eq!(prev_grapheme_boundary(FAMILY, 6), 1);
        assert_eq!(next_grapheme_boundary(FAMILY, 6), 7);
    }

    #[test]
    fn test_inside_cluster_snaps_outward() {
        assert_eq!(next_grapheme_boundary(COMBINING, 2), 3);
        assert_eq!(prev_grapheme_boundary(COMBINING, 2), 1);
    }

    #[test]
    fn test_is_grapheme_boundary() {
        assert!(is_grapheme_boundary(COMBINING, 0));
        assert!(is_grapheme_boundary(COMBINING, 1));
        assert!(!is_grapheme_boundary(COMBINING, 2));
        assert!(is_grapheme_boundary(COMBINING, 3));
        assert!(is_grapheme_boundary(COMBINING, 4));
        assert!(!is_grapheme_boundary(COMBINING, 5));
    }
}
