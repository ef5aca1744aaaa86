//! Line and column lookup for byte offsets.
//!
//! Diagnostics render positions lazily, so lookups happen only when a
//! report is actually displayed. [`LineOffsetTable`] pre-computes line
//! starts for O(log L) lookups when many positions in the same text are
//! rendered; [`offset_to_line_col`] is the one-shot linear scan.

/// Pre-computed line offset table.
///
/// # Example
///
/// ```
/// use fret_ir::LineOffsetTable;
///
/// let source = "line1\nline2\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
/// assert_eq!(table.line_text(source, 3), Some("line3"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// Get the 1-based line number containing a byte offset.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Get 1-based (line, column) from a byte offset.
    ///
    /// The column counts characters, not bytes. Offsets past the end of the
    /// text or inside a multi-byte character are clamped to the nearest
    /// preceding character boundary.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let offset = floor_char_boundary(source, offset as usize);
        let line = self.line_from_offset(u32::try_from(offset).unwrap_or(u32::MAX));
        let line_start = self
            .line_start_offset(line)
            .map_or(0, |start| start as usize)
            .min(offset);
        (line, column_of(&source[line_start..offset]))
    }

    /// Get the byte offset of a line start (1-based line number).
    ///
    /// Returns `None` if the line number is out of range.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Text of a 1-based line without its line terminator.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> Option<&'s str> {
        let start = (self.line_start_offset(line)? as usize).min(source.len());
        let end = self
            .line_start_offset(line + 1)
            .map_or(source.len(), |next| (next as usize).min(source.len()));
        let text = &source[start..end];
        let text = text.strip_suffix('\n').unwrap_or(text);
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Get the number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Compute 1-based (line, column) from a byte offset with a linear scan.
///
/// For repeated lookups on the same text, use [`LineOffsetTable`].
pub fn offset_to_line_col(source: &str, offset: u32) -> (u32, u32) {
    let offset = floor_char_boundary(source, offset as usize);
    let mut line = 1u32;
    let mut line_start = 0usize;

    for (i, &byte) in source.as_bytes()[..offset].iter().enumerate() {
        if byte == b'\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    (line, column_of(&source[line_start..offset]))
}

fn column_of(prefix: &str) -> u32 {
    u32::try_from(prefix.chars().count()).unwrap_or(u32::MAX - 1) + 1
}

fn floor_char_boundary(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
