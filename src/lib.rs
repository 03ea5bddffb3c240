#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

//! Reading and writing sectioned `key = value` configuration text (INI files).
//!
//! ```
//! let document = ini::Document::parse("[NETWORK]\nhost = example.com\n").unwrap();
//! assert_eq!(document.get_value("NETWORK", "host"), Ok("example.com"));
//! ```

mod error;
pub mod fs;
mod line;
mod parser;
mod section;
pub mod writer;

use std::collections::HashMap;
use std::io::Read;
use std::str::FromStr;

pub use error::{AccessError, ParseError, SyntaxErrorKind};
pub use line::{Line, classify};
pub use parser::{Parser, parse_lines};
pub use section::{Iter as SectionIter, Section};

/// Byte Order Mark (BOM) is used to signal the endianness of an encoding. The order `0xFF 0xFE`
/// strongly suggests that the encoding is using little-endian byte order.
///
/// <https://en.wikipedia.org/wiki/Byte_order_mark>
const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];
const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];

/// A parsed configuration: section names mapped to their key/value pairs.
///
/// Neither sections nor keys keep their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub(crate) sections: HashMap<String, Section>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse INI text.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered; nothing is returned for the lines before it.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parse_lines(text.lines())
    }

    /// Parse an already split sequence of lines.
    ///
    /// # Errors
    ///
    /// See [`Document::parse`].
    pub fn from_lines<I, S>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parse_lines(lines)
    }

    /// Decode and parse raw bytes. UTF-16 LE is recognised by its BOM; anything else is read as
    /// UTF-8, with invalid sequences replaced.
    ///
    /// # Errors
    ///
    /// See [`Document::parse`].
    pub fn from_bytes(buffer: &[u8]) -> Result<Self, ParseError> {
        Self::parse(&decode_data(buffer))
    }

    /// # Errors
    ///
    /// Returns [`ParseError::ReadFailure`] if `reader` fails, otherwise see [`Document::parse`].
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, ParseError> {
        let mut buffer = Vec::with_capacity(4096);
        reader
            .read_to_end(&mut buffer)
            .map_err(|source| ParseError::ReadFailure { source })?;

        Self::from_bytes(&buffer)
    }

    /// Section names, in no particular order.
    #[must_use]
    pub fn section_names(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, section)| (name.as_str(), section))
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    #[must_use]
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Look up the value stored under `key` in `section`.
    ///
    /// # Errors
    ///
    /// [`AccessError::EmptySelector`] if either argument is empty,
    /// [`AccessError::SectionNotFound`] or [`AccessError::KeyNotFound`] if nothing is stored there.
    pub fn get_value(&self, section: &str, key: &str) -> Result<&str, AccessError> {
        if section.is_empty() || key.is_empty() {
            return Err(AccessError::EmptySelector);
        }

        let entries = self
            .sections
            .get(section)
            .ok_or_else(|| AccessError::SectionNotFound {
                section: section.to_owned(),
            })?;

        entries.get(key).ok_or_else(|| AccessError::KeyNotFound {
            section: section.to_owned(),
            key: key.to_owned(),
        })
    }

    /// Store `value` under `key` in `section`, creating the section when needed. An empty value
    /// is allowed.
    ///
    /// # Errors
    ///
    /// [`AccessError::EmptySelector`] if `section` or `key` is empty.
    pub fn set_value<S, K, V>(&mut self, section: S, key: K, value: V) -> Result<(), AccessError>
    where
        S: Into<String>,
        K: Into<String>,
        V: Into<String>,
    {
        let (section, key) = (section.into(), key.into());
        if section.is_empty() || key.is_empty() {
            return Err(AccessError::EmptySelector);
        }

        self.sections
            .entry(section)
            .or_insert_with(Section::new)
            .insert(key, value.into());

        Ok(())
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn decode_data(data: &[u8]) -> String {
    if let Some(data) = data.strip_prefix(BOM_UTF16_LE) {
        let chunks = data.chunks_exact(2);
        let truncated = !chunks.remainder().is_empty();
        let utf16 = chunks
            .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
            .collect::<Vec<u16>>();

        let mut text = char::decode_utf16(utf16)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect::<String>();

        // A dangling odd byte cannot form a code unit.
        if truncated {
            text.push(char::REPLACEMENT_CHARACTER);
        }

        text
    } else {
        let data = data.strip_prefix(BOM_UTF8).unwrap_or(data);
        String::from_utf8_lossy(data).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io;

    const VALID: &str = "
[NETWORK]
host= example.com
port = 7878

[database]
host = localhost
port = 5432
username = postgres
password = password

; mail settings
[Email]
username= host_email.com
password=12345

[LOCAL]
user = terry";

    fn document_of(entries: &[(&str, &str, &str)]) -> Document {
        let mut document = Document::new();
        for &(section, key, value) in entries {
            document
                .sections
                .entry(section.to_owned())
                .or_insert_with(Section::new)
                .insert(key.to_owned(), value.to_owned());
        }
        document
    }

    #[test]
    fn network_and_database() {
        let text = "[NETWORK]\nhost = example.com\nport = 7878\n\n[database]\nhost = localhost\n";

        let document = Document::parse(text).expect("failed to parse hardcoded INI text");

        assert_eq!(
            document,
            document_of(&[
                ("NETWORK", "host", "example.com"),
                ("NETWORK", "port", "7878"),
                ("database", "host", "localhost"),
            ])
        );
    }

    #[test]
    fn multiple_sections() {
        let document = Document::parse(VALID).expect("failed to parse hardcoded INI text");

        let mut names = document.section_names();
        names.sort_unstable();
        assert_eq!(names, vec!["Email", "LOCAL", "NETWORK", "database"]);
        assert_eq!(document.get_value("database", "port"), Ok("5432"));
        assert_eq!(document.get_value("Email", "username"), Ok("host_email.com"));
        assert_eq!(document.get_value("LOCAL", "user"), Ok("terry"));
    }

    #[test]
    fn missing_bracket_fails_with_its_line_number() {
        let text = "[NETWORK]\nhost = example.com\n\n[database\nhost = localhost\n";

        let err = Document::parse(text).unwrap_err();

        assert_eq!(err.line(), Some(4));
        assert!(matches!(
            err,
            ParseError::Syntax {
                kind: SyntaxErrorKind::UnbalancedBrackets,
                ..
            }
        ));
    }

    #[test]
    fn key_without_value_line() {
        let text = "[database]\nhost = localhost\npassword\n= password\n";

        let err = Document::parse(text).unwrap_err();

        assert!(matches!(
            err,
            ParseError::Syntax {
                line: 3,
                kind: SyntaxErrorKind::MissingEquals,
                ..
            }
        ));
    }

    #[test]
    fn value_split_on_first_equals() {
        let document = Document::parse("[S]\na=b=c").unwrap();

        assert_eq!(document.get_value("S", "a"), Ok("b=c"));
    }

    #[test]
    fn crlf_line_endings() {
        let document = Document::parse("[S]\r\nkey = value\r\n").unwrap();

        assert_eq!(document.get_value("S", "key"), Ok("value"));
    }

    #[rstest]
    #[case("", "k")]
    #[case("S", "")]
    #[case("", "")]
    fn get_value_empty_selector(#[case] section: &str, #[case] key: &str) {
        let document = Document::parse("[S]\nk = v").unwrap();

        assert_eq!(
            document.get_value(section, key),
            Err(AccessError::EmptySelector)
        );
    }

    #[test]
    fn get_value_missing_section() {
        let document = Document::parse("[S]\nk = v").unwrap();

        assert_eq!(
            document.get_value("Missing", "k"),
            Err(AccessError::SectionNotFound {
                section: "Missing".to_owned()
            })
        );
    }

    #[test]
    fn get_value_missing_key() {
        let document = Document::parse("[S]\nk = v").unwrap();

        assert_eq!(
            document.get_value("S", "missing"),
            Err(AccessError::KeyNotFound {
                section: "S".to_owned(),
                key: "missing".to_owned()
            })
        );
    }

    #[test]
    fn get_value_empty_value_is_found() {
        let document = Document::parse("[S]\nk =").unwrap();

        assert_eq!(document.get_value("S", "k"), Ok(""));
    }

    #[test]
    fn set_value_creates_section() {
        let mut document = Document::new();

        document.set_value("X", "k", "v").unwrap();

        assert_eq!(document.get_value("X", "k"), Ok("v"));
        assert_eq!(document.section_names(), vec!["X"]);
    }

    #[test]
    fn set_value_overwrites() {
        let mut document = Document::parse(VALID).unwrap();

        document.set_value("NETWORK", "host", "ex.com").unwrap();
        document.set_value("NETWORK", "timeout", "").unwrap();

        assert_eq!(document.get_value("NETWORK", "host"), Ok("ex.com"));
        assert_eq!(document.get_value("NETWORK", "timeout"), Ok(""));
        assert_eq!(document.get_value("NETWORK", "port"), Ok("7878"));
    }

    #[rstest]
    #[case("", "k")]
    #[case("S", "")]
    fn set_value_empty_selector(#[case] section: &str, #[case] key: &str) {
        let mut document = Document::new();

        assert_eq!(
            document.set_value(section, key, "v"),
            Err(AccessError::EmptySelector)
        );
        assert!(document.is_empty());
    }

    #[test]
    fn from_bytes_utf8_bom() {
        let mut buffer = BOM_UTF8.to_vec();
        buffer.extend_from_slice(b"[S]\nk = v\n");

        let document = Document::from_bytes(&buffer).unwrap();

        assert_eq!(document.get_value("S", "k"), Ok("v"));
    }

    #[test]
    fn from_bytes_utf16_le() {
        let mut buffer = BOM_UTF16_LE.to_vec();
        for unit in "[S]\r\nk = v\r\n".encode_utf16() {
            buffer.extend_from_slice(&unit.to_le_bytes());
        }

        let document = Document::from_bytes(&buffer).unwrap();

        assert_eq!(document.get_value("S", "k"), Ok("v"));
    }

    #[test]
    fn decode_utf16_odd_trailing_byte() {
        let mut buffer = BOM_UTF16_LE.to_vec();
        for unit in "[S]".encode_utf16() {
            buffer.extend_from_slice(&unit.to_le_bytes());
        }
        buffer.push(b'x');

        assert_eq!(decode_data(&buffer), "[S]\u{FFFD}");
    }

    #[test]
    fn decode_utf16_even_length_is_untouched() {
        let mut buffer = BOM_UTF16_LE.to_vec();
        for unit in "k = v".encode_utf16() {
            buffer.extend_from_slice(&unit.to_le_bytes());
        }

        assert_eq!(decode_data(&buffer), "k = v");
    }

    #[test]
    fn from_reader() {
        let mut reader = io::Cursor::new(b"[S]\nk = v\n".to_vec());

        let document = Document::from_reader(&mut reader).unwrap();

        assert_eq!(document.get_value("S", "k"), Ok("v"));
    }

    #[test]
    fn from_str() {
        let document: Document = "[S]\nk = v".parse().unwrap();

        assert_eq!(document, document_of(&[("S", "k", "v")]));
    }
}
