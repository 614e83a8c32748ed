//! Byte offset to line/column mapping.
//!
//! Lines are 1-based and advance after every `\n`. Columns are 0-based and
//! count characters, not bytes.

use rowan::TextSize;

#[derive(Debug, Clone)]
pub struct LineIndex<'s> {
    source: &'s str,
    /// Byte offset where each line starts. Always contains `0`.
    line_starts: Vec<usize>,
}

impl<'s> LineIndex<'s> {
    pub fn new(source: &'s str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            source,
            line_starts,
        }
    }

    /// Returns `(line, column)` for a byte offset. Offsets past the end clamp
    /// to the end of input.
    pub fn position(&self, offset: usize) -> (u32, u32) {
        let offset = offset.min(self.source.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let line_start = self.line_starts[line];
        let column = self.source[line_start..]
            .char_indices()
            .take_while(|&(i, _)| line_start + i < offset)
            .count();
        (line as u32 + 1, column as u32)
    }

    pub fn position_at(&self, offset: TextSize) -> (u32, u32) {
        self.position(usize::from(offset))
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
