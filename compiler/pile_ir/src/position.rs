//! Source locations.
//!
//! Byte offsets are what the lexer sees; line/column pairs are what scripts
//! and diagnostics see. [`LineIndex`] converts between the two.

use std::fmt;

/// A 1-based line/column location in a source text.
///
/// Columns count characters, not bytes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Maps byte offsets of one source text to [`Position`]s.
#[derive(Clone, Debug)]
pub struct LineIndex<'src> {
    source: &'src str,
    /// Byte offset at which each line starts.
    line_starts: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        LineIndex {
            source,
            line_starts,
        }
    }

    /// Position of the character starting at `offset`.
    ///
    /// Offsets past the end of the source clamp to the end.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let start = self.line_starts[line];
        let column = self
            .source
            .get(start..offset)
            .map_or(offset - start, |prefix| prefix.chars().count());

        Position::new(line as u32 + 1, column as u32 + 1)
    }

    /// Byte offset of `position`, the inverse of [`LineIndex::position`].
    ///
    /// Positions outside the source clamp to the end of their line, or to the
    /// end of the source.
    pub fn offset(&self, position: Position) -> usize {
        let line = (position.line as usize).saturating_sub(1);
        let Some(&start) = self.line_starts.get(line) else {
            return self.source.len();
        };
        let end = self
            .line_starts
            .get(line + 1)
            .map_or(self.source.len(), |next| next - 1);
        let column = (position.column as usize).saturating_sub(1);
        self.source[start..end]
            .char_indices()
            .nth(column)
            .map_or(end, |(at, _)| start + at)
    }
}
