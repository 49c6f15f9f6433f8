//! Claim set decoding
//!
//! Claims are caller-chosen: any JSON object is accepted and no schema is
//! applied to the values. A `null` document is a valid, absent claim set and
//! is signed as `null`.

use crate::types::Diagnostic;
use serde_json::{Map, Value};

/// Decoded claims, keyed in bytewise order
pub type ClaimSet = Map<String, Value>;

/// Decode `claims_json` as a JSON object, or `None` for a `null` document
///
/// # Errors
/// Returns the decoder error for malformed text or a document that is
/// neither an object nor `null`.
pub fn decode_claims(claims_json: &str) -> serde_json::Result<Option<ClaimSet>> {
    serde_json::from_str(claims_json)
}

/// Decode `claims_json` without ever failing
///
/// Syntactically valid documents that the strict decoder refuses (lone
/// surrogate escapes, numbers outside the double range) are repaired and
/// reported with `ClaimsRepaired`. Anything else falls back to an empty
/// claim set with `ClaimsDecodeFailed`; existing configurations rely on
/// invalid claims still producing a token.
pub(crate) fn decode_claims_lenient(
    claims_json: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<ClaimSet> {
    let error = match decode_claims(claims_json) {
        Ok(claims) => return claims,
        Err(e) => e,
    };

    if let Some(Ok(claims)) = repair(claims_json).map(|text| decode_claims(&text)) {
        tracing::warn!(error = %error, "claims_json repaired before signing");
        diagnostics.push(Diagnostic::ClaimsRepaired {
            reason: error.to_string(),
        });
        return claims;
    }

    tracing::warn!(error = %error, "claims_json is not a JSON object, signing empty claims");
    diagnostics.push(Diagnostic::ClaimsDecodeFailed {
        reason: error.to_string(),
    });
    Some(ClaimSet::new())
}

const HEX_LEN: usize = 4;

/// Rewrite lone UTF-16 surrogate escapes as U+FFFD and out-of-range
/// numbers as `null`. Returns `None` when nothing needed rewriting.
fn repair(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut changed = false;
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        match ch {
            '"' => {
                let (consumed, string_changed) = repair_string(rest, &mut out);
                changed |= string_changed;
                rest = &rest[consumed..];
            }
            '-' | '0'..='9' => {
                let len = rest
                    .find(|c: char| !matches!(c, '0'..='9' | '-' | '+' | '.' | 'e' | 'E'))
                    .unwrap_or(rest.len());
                let literal = &rest[..len];
                if literal.parse::<f64>().is_ok_and(f64::is_infinite) {
                    out.push_str("null");
                    changed = true;
                } else {
                    out.push_str(literal);
                }
                rest = &rest[len..];
            }
            _ => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    changed.then_some(out)
}

/// Copy the string literal at the start of `text` into `out`, replacing lone
/// surrogate escapes. Returns bytes consumed and whether anything changed.
fn repair_string(text: &str, out: &mut String) -> (usize, bool) {
    let bytes = text.as_bytes();
    let mut changed = false;
    let mut copied = 0;
    let mut i = 1;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                out.push_str(&text[copied..=i]);
                return (i + 1, changed);
            }
            b'\\' if bytes.get(i + 1) == Some(&b'u') => {
                let Some(unit) = escape_unit(text, i) else {
                    i += 2;
                    continue;
                };
                let escape_len = 2 + HEX_LEN;
                if !(0xD800..0xE000).contains(&unit) {
                    i += escape_len;
                } else if (0xD800..0xDC00).contains(&unit)
                    && escape_unit(text, i + escape_len)
                        .is_some_and(|low| (0xDC00..0xE000).contains(&low))
                {
                    i += 2 * escape_len;
                } else {
                    out.push_str(&text[copied..i]);
                    out.push_str("\\ufffd");
                    changed = true;
                    i += escape_len;
                    copied = i;
                }
            }
            b'\\' => i += 2,
            _ => i += 1,
        }
    }

    out.push_str(&text[copied..]);
    (text.len(), changed)
}

/// Code unit of a `\uXXXX` escape starting at byte `at`
fn escape_unit(text: &str, at: usize) -> Option<u32> {
    let escape = text.get(at..at + 2 + HEX_LEN)?;
    let hex = escape.strip_prefix("\\u")?;
    u32::from_str_radix(hex, 16).ok()
}
