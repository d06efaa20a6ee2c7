//! Walking a comma-separated blob of names, such as the one produced by `stringify!(A, B, C)`.

use std::fmt;

pub(crate) const SEPARATOR: u8 = b',';

fn is_skippable(byte: u8) -> bool {
    byte == SEPARATOR || byte.is_ascii_whitespace()
}

/// The number of comma-separated names in `blob`, counting empty ones.
///
/// A blob holding nothing but whitespace names nothing.
pub fn name_count(blob: &str) -> usize {
    if blob.bytes().all(|b| b.is_ascii_whitespace()) {
        return 0;
    }
    blob.bytes().filter(|&b| b == SEPARATOR).count() + 1
}

/// A position inside a name blob.
///
/// A cursor either sits on the first byte of a name or at the end of the blob. Both the name it
/// points at and the index of the value paired with that name are derived from the position
/// alone, so two cursors compare equal exactly when their positions are equal.
#[derive(Clone, Copy)]
pub struct NameCursor<'a> {
    blob: &'a str,
    position: usize,
}

impl<'a> NameCursor<'a> {
    /// A cursor on the first name of `blob`. Leading whitespace is skipped.
    pub fn begin(blob: &'a str) -> Self {
        let position = blob
            .bytes()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or_else(|| blob.len());
        NameCursor { blob, position }
    }

    /// The one-past-the-last cursor of `blob`.
    pub fn end(blob: &'a str) -> Self {
        NameCursor {
            blob,
            position: blob.len(),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_end(&self) -> bool {
        self.position == self.blob.len()
    }

    /// The text from the cursor up to the next separator, or up to the end of the blob.
    pub fn name(&self) -> &'a str {
        let rest = &self.blob[self.position..];
        match rest.bytes().position(|b| b == SEPARATOR) {
            Some(length) => &rest[..length],
            None => rest,
        }
    }

    /// The number of separators between the start of the blob and the cursor.
    pub fn index(&self) -> usize {
        self.blob.as_bytes()[..self.position]
            .iter()
            .filter(|&&b| b == SEPARATOR)
            .count()
    }

    /// Moves to the next separator, then past any run of separators and whitespace.
    pub fn advance(&mut self) {
        let bytes = self.blob.as_bytes();
        let mut position = self.position;
        while position < bytes.len() && bytes[position] != SEPARATOR {
            position += 1;
        }
        while position < bytes.len() && is_skippable(bytes[position]) {
            position += 1;
        }
        self.position = position;
    }
}

impl PartialEq for NameCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for NameCursor<'_> {}

impl fmt::Debug for NameCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameCursor")
            .field("position", &self.position)
            .field("name", &self.name())
            .finish()
    }
}

/// Every cursor from the beginning of a blob up to, but excluding, its end.
#[derive(Clone, Debug)]
pub struct Names<'a> {
    cursor: NameCursor<'a>,
    end: NameCursor<'a>,
}

impl<'a> Names<'a> {
    pub fn new(blob: &'a str) -> Self {
        Names {
            cursor: NameCursor::begin(blob),
            end: NameCursor::end(blob),
        }
    }
}

impl<'a> Iterator for Names<'a> {
    type Item = NameCursor<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.end {
            return None;
        }
        let current = self.cursor;
        self.cursor.advance();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    fn names(blob: &str) -> Vec<(&str, usize)> {
        Names::new(blob).map(|c| (c.name(), c.index())).collect_vec()
    }

    #[test]
    fn test_stringified_list() {
        assert_eq!(names("A, B, C"), vec![("A", 0), ("B", 1), ("C", 2)]);
    }

    #[test]
    fn test_single_name() {
        assert_eq!(names("ONLY"), vec![("ONLY", 0)]);
    }

    #[test]
    fn test_empty_blob() {
        assert_eq!(names(""), vec![]);
        assert_eq!(names("   "), vec![]);
    }

    #[test]
    fn test_separator_runs_are_skipped() {
        // The index still counts every separator, so it runs ahead of the ordinal.
        assert_eq!(names("A,, B"), vec![("A", 0), ("B", 2)]);
    }

    #[test]
    fn test_trailing_space_is_kept() {
        assert_eq!(names(" x ,y"), vec![("x ", 0), ("y", 1)]);
    }

    #[test]
    fn test_any_ascii_whitespace_is_skipped() {
        // Hand-written blobs may be split across lines or indented with tabs.
        assert_eq!(
            names("\n\tfirst,\n\tsecond,\r\n third"),
            vec![("first", 0), ("second", 1), ("third", 2)]
        );
    }

    #[test]
    fn test_name_count() {
        assert_eq!(name_count(""), 0);
        assert_eq!(name_count(" \t"), 0);
        assert_eq!(name_count("A"), 1);
        assert_eq!(name_count("A, B, C"), 3);
        assert_eq!(name_count("A,,B"), 3);
        assert_eq!(name_count("A, "), 2);
        assert_eq!(name_count(","), 2);
    }

    #[test]
    fn test_equality_is_positional() {
        let blob = "A, B";
        let mut cursor = NameCursor::begin(blob);
        assert_ne!(cursor, NameCursor::end(blob));
        cursor.advance();
        assert_eq!(cursor.position(), 3);
        cursor.advance();
        assert!(cursor.is_end());
        assert_eq!(cursor, NameCursor::end(blob));
    }
}
