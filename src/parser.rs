use crate::Document;
use crate::error::{ParseError, SyntaxErrorKind};
use crate::line::{self, Line};
use crate::section::Section;

/// Represents an on-going parse.
///
/// Lines are fed in order; the parser remembers which section is currently open so that
/// `key = value` pairs land in the right place. The first error ends the parse: every later
/// [`Parser::feed`] and the final [`Parser::finish`] report [`ParseError::Aborted`], so the
/// partially built document never leaves the parser.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    document: Document,
    current: Option<String>,
    line: usize,
    failed_at: Option<usize>,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the next line of input.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Syntax`] for malformed lines or pairs outside of any section,
    /// and [`ParseError::DuplicateSection`] when a header repeats an earlier one. Once either
    /// has been returned, all further calls return [`ParseError::Aborted`].
    pub fn feed(&mut self, text: &str) -> Result<(), ParseError> {
        if let Some(line) = self.failed_at {
            return Err(ParseError::Aborted { line });
        }

        self.line += 1;
        self.apply(text).inspect_err(|_| self.failed_at = Some(self.line))
    }

    /// Moves `self` since no more lines can be applied once the document is handed out.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Aborted`] if an earlier [`Parser::feed`] failed.
    pub fn finish(self) -> Result<Document, ParseError> {
        if let Some(line) = self.failed_at {
            return Err(ParseError::Aborted { line });
        }

        log::debug!(
            "parsed {} line(s) into {} section(s)",
            self.line,
            self.document.len()
        );
        Ok(self.document)
    }

    fn apply(&mut self, text: &str) -> Result<(), ParseError> {
        match line::classify(text, self.line)? {
            Line::Blank | Line::Comment => {}
            Line::SectionHeader(name) => self.open_section(name, text)?,
            Line::KeyValue(key, value) => {
                let section = self
                    .current
                    .as_deref()
                    .and_then(|name| self.document.sections.get_mut(name))
                    .ok_or_else(|| ParseError::Syntax {
                        line: self.line,
                        text: text.trim().to_owned(),
                        kind: SyntaxErrorKind::KeyOutsideSection,
                    })?;

                // Repeated keys are not an error; the last one wins.
                section.insert(key.to_owned(), value.to_owned());
            }
        }

        Ok(())
    }

    fn open_section(&mut self, name: &str, text: &str) -> Result<(), ParseError> {
        if self.document.contains_section(name) {
            return Err(ParseError::DuplicateSection {
                name: name.to_owned(),
                line: self.line,
                text: text.trim().to_owned(),
            });
        }

        log::trace!("line {}: opening section [{name}]", self.line);
        self.document
            .sections
            .insert(name.to_owned(), Section::new());
        self.current = Some(name.to_owned());

        Ok(())
    }
}

/// Run a full parse over `lines`, stopping at the first error.
///
/// # Errors
///
/// See [`Parser::feed`].
pub fn parse_lines<I, S>(lines: I) -> Result<Document, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = Parser::new();

    for line in lines {
        parser.feed(line.as_ref())?;
    }

    parser.finish()
}
