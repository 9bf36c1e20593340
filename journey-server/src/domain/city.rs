//! City code types.

use std::fmt;

/// Error returned when parsing an invalid city code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid city code: {reason}")]
pub struct InvalidCityCode {
    reason: &'static str,
}

/// A valid 3-letter city code.
///
/// City codes (IATA-style, e.g. "BUE" or "MAD") are always 3 uppercase
/// ASCII letters. This type guarantees that any `CityCode` value is valid
/// by construction.
///
/// # Examples
///
/// ```
/// use journey_server::domain::CityCode;
///
/// let mad = CityCode::parse("MAD").unwrap();
/// assert_eq!(mad.as_str(), "MAD");
///
/// // Lowercase is rejected by the strict parser
/// assert!(CityCode::parse("mad").is_err());
///
/// // ...but accepted by the normalizing one
/// assert_eq!(CityCode::parse_normalized(" mad ").unwrap(), mad);
///
/// // Wrong length is rejected
/// assert!(CityCode::parse("MA").is_err());
/// assert!(CityCode::parse("MADR").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CityCode([u8; 3]);

impl CityCode {
    /// Parse a city code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidCityCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidCityCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidCityCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(CityCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse a city code, trimming whitespace and folding to uppercase.
    ///
    /// This is the entry point for user-supplied input; stored codes are
    /// always canonical, so comparisons stay case-insensitive without
    /// further work.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidCityCode> {
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidCityCode {
                reason: "must be exactly 3 characters",
            });
        }

        let mut normalized = [0u8; 3];
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_alphabetic() {
                return Err(InvalidCityCode {
                    reason: "must be ASCII letters A-Z",
                });
            }
            normalized[i] = b.to_ascii_uppercase();
        }

        Ok(CityCode(normalized))
    }

    /// Returns the city code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for CityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CityCode({})", self.as_str())
    }
}

impl fmt::Display for CityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
