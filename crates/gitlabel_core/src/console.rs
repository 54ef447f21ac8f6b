//! Console rendering of a label set.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::{GitLabelResult, LabelSet};

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;

/// Single-line JSON with a space after every `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn to_spaced_line<T: Serialize>(value: &T) -> io::Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, SpacedFormatter);
    value.serialize(&mut serializer).map_err(io::Error::from)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Writes a label set as a JSON array with one single-line label object per line,
/// e.g. `{"name": "bug", "color": "d73a4a"}`.
///
/// An empty label set produces no output at all.
pub fn render_label_set(labels: &LabelSet, out: &mut dyn Write) -> GitLabelResult<()> {
    if labels.is_empty() {
        return Ok(());
    }

    writeln!(out, "[")?;
    let last = labels.len() - 1;
    for (index, label) in labels.iter().enumerate() {
        let line = to_spaced_line(label)?;
        let separator = if index == last { "" } else { "," };
        writeln!(out, "    {line}{separator}")?;
    }
    writeln!(out, "]")?;

    Ok(())
}
