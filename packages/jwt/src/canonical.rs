//! Canonical JSON encoding for headers, claims and the issuance identifier
//!
//! Output is compact with object keys in bytewise order (the default
//! `serde_json::Map` is a `BTreeMap`). Two further rules keep tokens
//! byte-identical to those issued by earlier deployments:
//!
//! - `<`, `>`, `&`, U+2028 and U+2029 inside strings are written as `\u` escapes.
//! - Numbers are written as IEEE-754 doubles in shortest form: integral values
//!   without a fraction (`1.0` becomes `1`), exponent form below `1e-6` and from
//!   `1e21` upward (`1e+21`, `1e-7`).

use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

/// `serde_json` formatter applying the escaping and number rules above
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            let escaped: &[u8] = match ch {
                '<' => b"\\u003c",
                '>' => b"\\u003e",
                '&' => b"\\u0026",
                '\u{2028}' => b"\\u2028",
                '\u{2029}' => b"\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..index].as_bytes())?;
            writer.write_all(escaped)?;
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    #[allow(clippy::cast_precision_loss)]
    fn write_i64<W>(&mut self, writer: &mut W, value: i64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(format_double(value as f64).as_bytes())
    }

    #[allow(clippy::cast_precision_loss)]
    fn write_u64<W>(&mut self, writer: &mut W, value: u64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(format_double(value as f64).as_bytes())
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(format_double(value).as_bytes())
    }
}

/// Shortest round-trip text for a double
fn format_double(value: f64) -> String {
    let abs = value.abs();
    if abs != 0.0 && !(1e-6..1e21).contains(&abs) {
        let formatted = format!("{value:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    } else {
        format!("{value}")
    }
}

/// Encode `value` as canonical JSON bytes
pub(crate) fn to_canonical_vec<T>(value: &T) -> serde_json::Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, CanonicalFormatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Encode `value` as a canonical JSON string
pub(crate) fn to_canonical_string<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let bytes = to_canonical_vec(value)?;
    String::from_utf8(bytes).map_err(<serde_json::Error as serde::ser::Error>::custom)
}
