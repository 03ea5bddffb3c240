use crate::error::{ParseError, SyntaxErrorKind};

/// What a single line of INI text turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    SectionHeader(&'a str),
    KeyValue(&'a str, &'a str),
}

/// Classify one line of text. `number` is 1-based and only used for error context.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] if the line is neither blank, a comment, a well-formed
/// `[section]` header nor a `key = value` pair with a non-empty key.
pub fn classify(text: &str, number: usize) -> Result<Line<'_>, ParseError> {
    let line = text.trim();
    let syntax = |kind| ParseError::Syntax {
        line: number,
        text: line.to_owned(),
        kind,
    };

    if line.is_empty() {
        return Ok(Line::Blank);
    }

    if line.starts_with(';') || line.starts_with('#') {
        return Ok(Line::Comment);
    }

    match (line.starts_with('['), line.ends_with(']')) {
        (true, true) => {
            if line.matches('[').count() != 1 || line.matches(']').count() != 1 {
                return Err(syntax(SyntaxErrorKind::UnbalancedBrackets));
            }

            let name = line[1..line.len() - 1].trim();
            if name.is_empty() {
                return Err(syntax(SyntaxErrorKind::EmptySectionName));
            }

            return Ok(Line::SectionHeader(name));
        }
        (true, false) => return Err(syntax(SyntaxErrorKind::UnbalancedBrackets)),
        // A trailing ']' is only a broken header when the line cannot be a pair.
        (false, true) if !line.contains('=') => {
            return Err(syntax(SyntaxErrorKind::UnbalancedBrackets));
        }
        (false, _) => {}
    }

    // Only the first '=' separates the key; the value may contain more.
    let Some((key, value)) = line.split_once('=') else {
        return Err(syntax(SyntaxErrorKind::MissingEquals));
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(syntax(SyntaxErrorKind::EmptyKey));
    }

    Ok(Line::KeyValue(key, value.trim()))
}
