//! Position anchors.
//!
//! An [`Anchor`] points into the text being parsed. It borrows that text and
//! renders it into a [`Location`] (line, column, one-line excerpt) only when
//! a diagnostic is displayed. Parsing engines hand anchors to the session
//! through the [`Anchored`] trait, implemented by whatever they can point
//! at: the live cursor, a token, an earlier sub-match.

use fret_ir::{LineOffsetTable, Span};

/// Rendered position of an anchor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column, in characters.
    pub column: u32,
    /// The full text of the anchored line, without its terminator.
    pub excerpt: String,
    /// Number of characters to mark, at least 1.
    pub width: u32,
}

/// A reference to a span of the parsed text.
#[derive(Clone, Debug)]
pub struct Anchor<'src> {
    span: Span,
    repr: Repr<'src>,
}

#[derive(Clone, Debug)]
enum Repr<'src> {
    Borrowed(&'src str),
    Detached(Location),
}

impl<'src> Anchor<'src> {
    /// Anchor a span of `text`.
    pub fn new(text: &'src str, span: Span) -> Self {
        Anchor {
            span,
            repr: Repr::Borrowed(text),
        }
    }

    /// Anchor a single position of `text`.
    pub fn point(text: &'src str, offset: u32) -> Self {
        Self::new(text, Span::point(offset))
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Render the anchored position.
    pub fn locate(&self) -> Location {
        match &self.repr {
            Repr::Borrowed(text) => locate(text, self.span),
            Repr::Detached(location) => location.clone(),
        }
    }

    /// Copy out the rendered position so the anchor no longer borrows the text.
    pub fn detach(&self) -> Anchor<'static> {
        Anchor {
            span: self.span,
            repr: Repr::Detached(self.locate()),
        }
    }

    /// Whether this anchor still borrows the parsed text.
    pub fn is_detached(&self) -> bool {
        matches!(self.repr, Repr::Detached(_))
    }
}

/// Anything a parsing engine can point a diagnostic at.
pub trait Anchored<'src> {
    fn anchor(&self) -> Anchor<'src>;
}

impl<'src> Anchored<'src> for Anchor<'src> {
    fn anchor(&self) -> Anchor<'src> {
        self.clone()
    }
}

fn locate(text: &str, span: Span) -> Location {
    let table = LineOffsetTable::build(text);
    let (line, column) = table.offset_to_line_col(text, span.start);
    let excerpt = table.line_text(text, line).unwrap_or_default();

    // Mark the span, clipped to the end of the anchored line.
    let marked = text
        .get(span.to_range())
        .map_or(0, |slice| slice.chars().count());
    let rest = excerpt
        .chars()
        .count()
        .saturating_sub(column as usize - 1);
    let width = u32::try_from(marked.min(rest)).unwrap_or(u32::MAX).max(1);

    Location {
        line,
        column,
        excerpt: excerpt.to_string(),
        width,
    }
}
