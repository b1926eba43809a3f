//! JSON line encoding shared by the JSON formatters
//!
//! Writes `{"key": "value", "n": 1}`: `", "` between members, `": "` after
//! keys, non-ASCII and DEL escaped as lowercase `\uXXXX` (surrogate pairs
//! above the BMP) and floats in shortest round-trip form (`1e+16`, `0.5`).

use crate::core::field_value::float_repr;
use crate::core::{FormatError, Result};
use serde::Serialize;
use serde_json::ser::Formatter as JsonFormatter;
use serde_json::{Serializer, Value};
use std::io::{self, Write};

/// `serde_json` formatter for the JSON line layout
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLineFormatter;

impl JsonFormatter for JsonLineFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(float_repr(value).as_bytes())
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (index, c) in fragment.char_indices() {
            if c.is_ascii() && c != '\x7f' {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Encode `value` as one JSON line
pub(crate) fn to_json_line(value: &Value) -> Result<String> {
    let mut buffer = Vec::with_capacity(256);
    let mut serializer = Serializer::with_formatter(&mut buffer, JsonLineFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|err| FormatError::serialization("<line>", err.to_string()))
}
