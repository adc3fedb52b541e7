//! Terminal code types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid terminal code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid terminal code: {reason}")]
pub struct InvalidTerminalCode {
    reason: &'static str,
}

/// A valid 3-letter ferry terminal code (e.g. "TSA" for Tsawwassen).
///
/// Codes are stored uppercase, so equality and hashing are effectively
/// case-insensitive as long as values are built through [`parse_normalized`].
/// URL path segments and upstream feed keys arrive in arbitrary case;
/// normalizing at construction keeps every downstream lookup a plain
/// byte comparison.
///
/// [`parse_normalized`]: TerminalCode::parse_normalized
///
/// # Examples
///
/// ```
/// use ferry_server::domain::TerminalCode;
///
/// let tsa = TerminalCode::parse("TSA").unwrap();
/// assert_eq!(tsa.as_str(), "TSA");
///
/// // Strict parse rejects lowercase
/// assert!(TerminalCode::parse("tsa").is_err());
///
/// // Normalized parse accepts any case
/// assert_eq!(TerminalCode::parse_normalized("tsa").unwrap(), tsa);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TerminalCode([u8; 3]);

impl TerminalCode {
    /// Parse a terminal code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidTerminalCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidTerminalCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidTerminalCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(TerminalCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse a terminal code, accepting any letter case.
    ///
    /// The stored code is always uppercase, so two inputs differing only in
    /// case produce equal values.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidTerminalCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidTerminalCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_alphabetic() {
                return Err(InvalidTerminalCode {
                    reason: "must be ASCII letters",
                });
            }
        }

        Ok(TerminalCode([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }

    /// Returns the terminal code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for TerminalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TerminalCode({})", self.as_str())
    }
}

impl fmt::Display for TerminalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Hand-written serde impls: codes are used as JSON map keys, and the upstream
// feed is not guaranteed to send them uppercase, so deserialization must
// normalize rather than derive.
impl Serialize for TerminalCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TerminalCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TerminalCode::parse_normalized(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_code() {
        assert!(TerminalCode::parse("TSA").is_ok());
        assert!(TerminalCode::parse("SWB").is_ok());
        assert!(TerminalCode::parse("HSB").is_ok());
        assert!(TerminalCode::parse("AAA").is_ok());
        assert!(TerminalCode::parse("ZZZ").is_ok());
    }

    #[test]
    fn strict_parse_rejects_lowercase() {
        assert!(TerminalCode::parse("tsa").is_err());
        assert!(TerminalCode::parse("Tsa").is_err());
        assert!(TerminalCode::parse("TSa").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(TerminalCode::parse("").is_err());
        assert!(TerminalCode::parse("T").is_err());
        assert!(TerminalCode::parse("TS").is_err());
        assert!(TerminalCode::parse("TSAW").is_err());
        assert!(TerminalCode::parse_normalized("TSAW").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(TerminalCode::parse("T1A").is_err());
        assert!(TerminalCode::parse("T-A").is_err());
        assert!(TerminalCode::parse("T A").is_err());
        assert!(TerminalCode::parse_normalized("T1A").is_err());
        assert!(TerminalCode::parse_normalized("TÖA").is_err());
    }

    #[test]
    fn normalized_parse_uppercases() {
        let lower = TerminalCode::parse_normalized("tsa").unwrap();
        let mixed = TerminalCode::parse_normalized("TsA").unwrap();
        let upper = TerminalCode::parse("TSA").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(mixed, upper);
        assert_eq!(lower.as_str(), "TSA");
    }

    #[test]
    fn display() {
        let code = TerminalCode::parse("SWB").unwrap();
        assert_eq!(format!("{}", code), "SWB");
    }

    #[test]
    fn debug() {
        let code = TerminalCode::parse("DUK").unwrap();
        assert_eq!(format!("{:?}", code), "TerminalCode(DUK)");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(TerminalCode::parse("TSA").unwrap());
        assert!(set.contains(&TerminalCode::parse_normalized("tsa").unwrap()));
        assert!(!set.contains(&TerminalCode::parse("SWB").unwrap()));
    }

    #[test]
    fn serialize_as_string() {
        let code = TerminalCode::parse("TSA").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"TSA\"");
    }

    #[test]
    fn deserialize_normalizes_case() {
        let code: TerminalCode = serde_json::from_str("\"swb\"").unwrap();
        assert_eq!(code.as_str(), "SWB");
    }

    #[test]
    fn deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<TerminalCode>("\"SWBX\"").is_err());
        assert!(serde_json::from_str::<TerminalCode>("\"S1B\"").is_err());
    }

    #[test]
    fn works_as_json_map_key() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(TerminalCode::parse("TSA").unwrap(), 1);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, "{\"TSA\":1}");

        let back: HashMap<TerminalCode, i32> = serde_json::from_str("{\"tsa\":1}").unwrap();
        assert_eq!(back.get(&TerminalCode::parse("TSA").unwrap()), Some(&1));
    }
}
