//! Byte cursor over the input buffer.
//!
//! The cursor owns the parse position: a byte offset plus derived
//! line/column counters used for diagnostics. All block and inline
//! productions read through a single `Cursor` threaded by mutable
//! reference; speculative parses snapshot the offset with [`Cursor::save`]
//! and roll back with [`Cursor::restore`].

use memchr::{memchr_iter, memrchr};

/// A snapshot of the cursor position for backtracking.
///
/// Only the byte offset is recorded; line and column are recomputed on
/// restore so that backtracking across a newline cannot leave the
/// counters out of sync with the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedPos {
    offset: usize,
}

/// Position-tracking cursor over an immutable input buffer.
///
/// # Example
/// ```
/// use cindermark::cursor::Cursor;
///
/// let mut cursor = Cursor::new("notes.md", b"Hello");
/// assert_eq!(cursor.peek(), Some(b'H'));
/// assert_eq!(cursor.next(), Some(b'H'));
/// assert_eq!(cursor.column(), 2);
/// ```
pub struct Cursor<'a> {
    input: &'a [u8],
    offset: usize,
    line: u32,
    column: u32,
    source_name: &'a str,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    ///
    /// `source_name` is used only for diagnostics.
    pub fn new(source_name: &'a str, input: &'a [u8]) -> Self {
        Self {
            input,
            offset: 0,
            line: 1,
            column: 1,
            source_name,
        }
    }

    /// Current byte offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Current line, 1-based.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column, 1-based and byte-oriented.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Source name given at construction.
    #[inline]
    pub fn source_name(&self) -> &'a str {
        self.source_name
    }

    /// Check if the cursor is at end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Peek the current byte without consuming.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.offset).copied()
    }

    /// Peek at the byte `n` positions ahead.
    #[inline]
    pub fn peek_ahead(&self, n: usize) -> Option<u8> {
        self.input.get(self.offset + n).copied()
    }

    /// Check if the current byte equals `b`.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Consume and return the current byte, updating line/column.
    #[inline]
    pub fn next(&mut self) -> Option<u8> {
        let b = *self.input.get(self.offset)?;
        self.offset += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(b)
    }

    /// Consume the current byte, discarding it.
    #[inline]
    pub fn bump(&mut self) {
        self.next();
    }

    /// Consume `n` bytes (stops early at end of input).
    #[inline]
    pub fn advance(&mut self, n: usize) {
        for _ in 0..n {
            if self.next().is_none() {
                break;
            }
        }
    }

    /// Consume the current byte only if it equals `b`.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        if self.at(b) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume a multi-byte literal only if every byte matches.
    ///
    /// On a partial match nothing is consumed.
    #[inline]
    pub fn eat_literal(&mut self, literal: &[u8]) -> bool {
        if self.input[self.offset..].starts_with(literal) {
            self.advance(literal.len());
            true
        } else {
            false
        }
    }

    /// The unconsumed remainder of the input.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.input[self.offset..]
    }

    /// Slice of the input between two offsets.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        &self.input[start..end]
    }

    /// Snapshot the current position for a later [`Cursor::restore`].
    #[inline]
    pub fn save(&self) -> SavedPos {
        SavedPos {
            offset: self.offset,
        }
    }

    /// Roll back to a saved position.
    ///
    /// Line and column are recomputed from the offset rather than
    /// snapshotted, so they stay consistent no matter how far the
    /// speculative parse ran.
    pub fn restore(&mut self, pos: SavedPos) {
        debug_assert!(pos.offset <= self.input.len());
        self.offset = pos.offset;
        let before = &self.input[..self.offset];
        self.line = 1 + memchr_iter(b'\n', before).count() as u32;
        self.column = match memrchr(b'\n', before) {
            Some(last) => (self.offset - last) as u32,
            None => self.offset as u32 + 1,
        };
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("source_name", &self.source_name)
            .field("offset", &self.offset)
            .field("line", &self.line)
            .field("column", &self.column)
            .finish()
    }
}
