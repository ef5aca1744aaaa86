//! The delimiter and string checker.
//!
//! Walks the text once. Delimiter problems are sorries, style problems are
//! worries, and an unterminated string is a panic: once a quote is left
//! open, every later delimiter would be misread.

use fret_diagnostic::kinds::closing_delimiter;
use fret_diagnostic::{
    Anchored, Concern, EarlyEnd, ExtraParen, Mismatched, Obsolete, Session, SessionConfig,
    Unclosed,
};
use tracing::{debug, trace};

use crate::cursor::{Cursor, Match};
use crate::kinds::TrailingWhitespace;
use crate::CheckError;

/// What a clean check saw.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Delimiter pairs that opened and closed correctly.
    pub pairs: usize,
    /// Lines in the text.
    pub lines: usize,
}

pub(crate) struct Checker<'src> {
    cursor: Cursor<'src>,
    session: Session<'src>,
    open: Vec<(char, Match<'src>)>,
    summary: CheckSummary,
}

impl<'src> Checker<'src> {
    pub(crate) fn new(source: &'src str, config: SessionConfig) -> Self {
        Checker {
            cursor: Cursor::new(source),
            session: Session::with_config(config),
            open: Vec::new(),
            summary: CheckSummary {
                pairs: 0,
                lines: source.lines().count(),
            },
        }
    }

    pub(crate) fn run(mut self) -> Result<CheckSummary, CheckError<'src>> {
        debug!(filename = self.session.filename(), "check started");

        while let Some(ch) = self.cursor.peek() {
            let start = self.cursor.position();
            self.cursor.bump();
            match ch {
                '(' | '[' | '{' => {
                    trace!(open = %ch, offset = start, "delimiter opened");
                    self.open.push((ch, self.cursor.matched(start)));
                }
                ')' | ']' | '}' => self.close(ch, start)?,
                '"' => self.string(start)?,
                '<' => {
                    if self.cursor.eat('>') {
                        let site = self.cursor.matched(start);
                        self.session.worry(
                            Concern::new(Obsolete {
                                old: "<>".to_string(),
                                replacement: "!=".to_string(),
                            })
                            .at(&site),
                        )?;
                    }
                }
                ' ' | '\t' => self.whitespace(start)?,
                _ => {}
            }
        }

        for (open, site) in std::mem::take(&mut self.open) {
            self.session
                .sorry(Concern::new(Unclosed { open }).at(&site))?;
        }

        self.session.express_concerns()?;
        debug!(
            pairs = self.summary.pairs,
            lines = self.summary.lines,
            "check finished cleanly"
        );
        Ok(self.summary)
    }

    fn close(&mut self, close: char, start: usize) -> Result<(), CheckError<'src>> {
        let site = self.cursor.matched(start);
        match self.open.pop() {
            None => self
                .session
                .sorry(Concern::new(ExtraParen { close }).at(&site))?,
            Some((open, _)) if closing_delimiter(open) == Some(close) => {
                trace!(%open, %close, offset = start, "delimiter closed");
                self.summary.pairs += 1;
            }
            Some((open, _)) => self
                .session
                .sorry(Concern::new(Mismatched { open, found: close }).at(&site))?,
        }
        Ok(())
    }

    /// Skip a string literal whose opening quote was just consumed.
    fn string(&mut self, start: usize) -> Result<(), CheckError<'src>> {
        let opening = self.cursor.matched(start);
        loop {
            match self.cursor.bump() {
                Some('"') => return Ok(()),
                Some('\\') => {
                    self.cursor.bump();
                }
                Some(_) => {}
                None => {
                    let line = opening.anchor().locate().line;
                    let concern = Concern::new(EarlyEnd {
                        expecting: Some("a closing `\"`".to_string()),
                    })
                    .at(&self.cursor)
                    .with_hint(format!("the string opened on line {line} is never closed"));
                    return Err(self.session.panic(concern).into());
                }
            }
        }
    }

    /// Check a run of blanks whose first character was just consumed.
    fn whitespace(&mut self, start: usize) -> Result<(), CheckError<'src>> {
        self.cursor.eat_while(|c| c == ' ' || c == '\t');
        let rest = self.cursor.rest();
        if rest.is_empty() || rest.starts_with('\n') || rest.starts_with("\r\n") {
            let site = self.cursor.matched(start);
            let count = site.text().chars().count();
            self.session
                .worry(Concern::new(TrailingWhitespace { count }).at(&site))?;
        }
        Ok(())
    }
}
