//! Character cursor over the checked text.

use fret_diagnostic::{Anchor, Anchored};
use fret_ir::Span;

/// Cursor for walking the text one character at a time.
///
/// The checker rejects texts longer than `u32::MAX` bytes before creating a
/// cursor, so positions always fit in a [`Span`].
#[derive(Clone, Debug)]
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Byte offset of the next character.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Text not yet consumed.
    pub fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consume `expected` if it is next.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds; returns how many were eaten.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while self.peek().is_some_and(&pred) {
            self.bump();
            count += 1;
        }
        count
    }

    /// Everything consumed since `start`, as a match the checker can point at later.
    pub fn matched(&self, start: usize) -> Match<'src> {
        Match {
            source: self.source,
            span: Span::from_range(start..self.pos),
        }
    }
}

impl<'src> Anchored<'src> for Cursor<'src> {
    fn anchor(&self) -> Anchor<'src> {
        Anchor::point(self.source, u32::try_from(self.pos).unwrap_or(u32::MAX))
    }
}

/// A consumed stretch of text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Match<'src> {
    source: &'src str,
    span: Span,
}

impl<'src> Match<'src> {
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn text(&self) -> &'src str {
        &self.source[self.span.to_range()]
    }
}

impl<'src> Anchored<'src> for Match<'src> {
    fn anchor(&self) -> Anchor<'src> {
        Anchor::new(self.source, self.span)
    }
}
