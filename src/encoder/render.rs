use crate::error::RenderError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::{Formatter, Serializer};
use std::io;

/// How a `Document` is turned into text. Key order is sorted in every style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStyle {
    /// No whitespace at all.
    #[default]
    Compact,
    /// Python's `json.dumps(doc, sort_keys=True)` layout: `", "` and `": "`
    /// separators, non-ASCII characters escaped as `\uXXXX`.
    Python,
    /// Two-space indented, one entry per line.
    Pretty,
}

pub(super) fn render(value: &Value, style: RenderStyle) -> Result<String, RenderError> {
    let mut buf = Vec::new();
    match style {
        RenderStyle::Compact => value.serialize(&mut Serializer::new(&mut buf))?,
        RenderStyle::Pretty => value.serialize(&mut Serializer::pretty(&mut buf))?,
        RenderStyle::Python => {
            value.serialize(&mut Serializer::with_formatter(&mut buf, PythonFormatter))?
        }
    }
    Ok(String::from_utf8(buf)?)
}

struct PythonFormatter;

impl Formatter for PythonFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\x7f' {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units).iter() {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
