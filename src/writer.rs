//! Rendering a [`Document`] back to INI text.
//!
//! Every section becomes a `[name]` line followed by one `key = value` line per entry, with a
//! blank line between sections. Comments and the original layout are not kept, and sections
//! and keys come out in whatever order the underlying maps yield them.

use std::fmt::{self, Write as _};
use std::io;

use crate::Document;

/// Write the canonical text form of `document` to `writer`.
///
/// # Errors
///
/// Propagates any error returned by `writer`.
pub fn write_document<W: io::Write>(document: &Document, mut writer: W) -> io::Result<()> {
    writer.write_all(document.to_string().as_bytes())?;
    writer.flush()
}

fn render<W: fmt::Write>(document: &Document, out: &mut W) -> fmt::Result {
    for (i, (name, section)) in document.sections().enumerate() {
        if i > 0 {
            out.write_char('\n')?;
        }

        writeln!(out, "[{name}]")?;

        for (key, value) in section {
            writeln!(out, "{key} = {value}")?;
        }
    }

    Ok(())
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}
