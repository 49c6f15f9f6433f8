//! Secret encodings and decoding into key bytes

use crate::error::{SecretDecodeError, ValidationError};
use base64::{
    alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroizing;

/// Standard alphabet with canonical padding that tolerates non-zero trailing
/// bits, matching the non-strict decoders that issued existing secrets.
const SECRET_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// How the caller-supplied secret string is turned into key bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SecretEncoding {
    /// UTF-8 bytes of the string, verbatim
    #[default]
    Raw,
    /// Standard base64 (RFC 4648 §4) with canonical padding; line breaks
    /// are skipped and trailing bits are not checked
    Base64,
    /// Hexadecimal, either case
    Hex,
}

impl SecretEncoding {
    /// All supported encodings
    pub const ALL: [SecretEncoding; 3] = [
        SecretEncoding::Raw,
        SecretEncoding::Base64,
        SecretEncoding::Hex,
    ];

    /// Configuration name of the encoding
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SecretEncoding::Raw => "raw",
            SecretEncoding::Base64 => "base64",
            SecretEncoding::Hex => "hex",
        }
    }

    /// Decode `secret` into key bytes
    ///
    /// The returned buffer is wiped on drop.
    ///
    /// # Errors
    /// Returns `SecretDecodeError` when the input is not valid for the encoding.
    pub fn decode(self, secret: &str) -> Result<Zeroizing<Vec<u8>>, SecretDecodeError> {
        let bytes = match self {
            SecretEncoding::Raw => secret.as_bytes().to_vec(),
            SecretEncoding::Base64 => {
                let unwrapped: Zeroizing<String> = Zeroizing::new(
                    secret.chars().filter(|c| !matches!(c, '\r' | '\n')).collect(),
                );
                SECRET_BASE64.decode(unwrapped.as_bytes())?
            }
            SecretEncoding::Hex => hex::decode(secret)?,
        };
        Ok(Zeroizing::new(bytes))
    }
}

impl fmt::Display for SecretEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SecretEncoding {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(SecretEncoding::Raw),
            "base64" => Ok(SecretEncoding::Base64),
            "hex" => Ok(SecretEncoding::Hex),
            other => Err(ValidationError::UnsupportedEncoding {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_is_verbatim() {
        let key = SecretEncoding::Raw.decode("notthegreatestkey").unwrap();
        assert_eq!(key.as_slice(), b"notthegreatestkey");
    }

    #[test]
    fn test_raw_keeps_multibyte_utf8() {
        let key = SecretEncoding::Raw.decode("ключ").unwrap();
        assert_eq!(key.as_slice(), "ключ".as_bytes());
    }

    #[test]
    fn test_base64_standard_alphabet() {
        let key = SecretEncoding::Base64.decode("ZX92vEaSMKXYAIF127SewQ==").unwrap();
        assert_eq!(key.len(), 16);
        assert_eq!(key[0], 0x65);
    }

    #[test]
    fn test_base64_ignores_line_breaks() {
        let wrapped = SecretEncoding::Base64.decode("ZX92vEaSMKXY\r\nAIF127\nSewQ==").unwrap();
        let plain = SecretEncoding::Base64.decode("ZX92vEaSMKXYAIF127SewQ==").unwrap();
        assert_eq!(wrapped.as_slice(), plain.as_slice());
    }

    #[test]
    fn test_base64_allows_trailing_bits() {
        let loose = SecretEncoding::Base64.decode("ZX92vEaSMKXYAIF127SewR==").unwrap();
        assert_eq!(
            loose.as_slice(),
            &hex_literal::hex!("657f76bc469230a5d8008175dbb49ec1")
        );
    }

    #[test]
    fn test_base64_other_whitespace_still_rejected() {
        assert!(SecretEncoding::Base64.decode("ZX92vEaSMKXY AIF127SewQ==").is_err());
        assert!(SecretEncoding::Base64.decode("ZX92vEaSMKXY\tAIF127SewQ==").is_err());
    }

    #[test]
    fn test_base64_rejects_url_safe_alphabet() {
        assert!(matches!(
            SecretEncoding::Base64.decode("ab-_"),
            Err(SecretDecodeError::Base64(_))
        ));
    }

    #[test]
    fn test_base64_rejects_missing_padding() {
        assert!(SecretEncoding::Base64.decode("ZX92vEaSMKXYAIF127SewQ").is_err());
    }

    #[test]
    fn test_hex_accepts_both_cases() {
        let lower = SecretEncoding::Hex.decode("deadbeef").unwrap();
        let upper = SecretEncoding::Hex.decode("DEADBEEF").unwrap();
        assert_eq!(lower.as_slice(), upper.as_slice());
        assert_eq!(lower.as_slice(), &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_hex_rejects_odd_length_and_bad_digits() {
        assert!(matches!(
            SecretEncoding::Hex.decode("abc"),
            Err(SecretDecodeError::Hex(hex::FromHexError::OddLength))
        ));
        assert!(matches!(
            SecretEncoding::Hex.decode("zz"),
            Err(SecretDecodeError::Hex(
                hex::FromHexError::InvalidHexCharacter { .. }
            ))
        ));
    }

    #[test]
    fn test_empty_secret_decodes_to_empty_key() {
        for encoding in SecretEncoding::ALL {
            assert!(encoding.decode("").unwrap().is_empty());
        }
    }

    #[test]
    fn test_names_round_trip() {
        for encoding in SecretEncoding::ALL {
            assert_eq!(encoding.name().parse::<SecretEncoding>(), Ok(encoding));
        }
    }
}
