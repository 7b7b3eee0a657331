use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

const INDENT: &[u8] = b"    ";

/// Serialize a locale document with 4-space indentation.
///
/// Non-ASCII characters are written literally, key order is preserved and no
/// trailing newline is written.
pub fn to_locale_string(data: &Map<String, Value>) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer)
        .context("Failed to serialize JSON")?;

    String::from_utf8(buf).context("Serialized JSON is not valid UTF-8")
}
