//! Value types carried by the configuration.
//!
//! Each type is constructed by parsing source text and remembers that text,
//! so a loaded value always equals what the operator wrote.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::{Serialize, Serializer};

const REDACTED: &str = "[REDACTED]";

static TOKEN_LIFETIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)([smhd])$").expect("token lifetime pattern is valid"));

static POSTAL_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}-[0-9]{3}$").expect("postal code pattern is valid"));

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

/// A sensitive string value.
///
/// `Debug` and `Serialize` never reveal the value. Call [`Secret::expose`]
/// at the single place that needs the plaintext (signing, connecting).
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Secret(String);

impl Secret {
    /// Wrap a plaintext value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The plaintext value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the value is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Length of the plaintext in characters.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Secret").field(&REDACTED).finish()
    }
}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_empty() {
            serializer.serialize_str("")
        } else {
            serializer.serialize_str(REDACTED)
        }
    }
}

/// Error returned when a value does not match its expected format.
///
/// Carries only a description of the expected format, never the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("must match {expected}")]
pub struct FormatError {
    /// Human-readable description of the accepted format.
    pub expected: &'static str,
}

/// Token lifetime written as a count and a unit: `30s`, `15m`, `12h`, `7d`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLifetime {
    raw: String,
    duration: Duration,
}

impl TokenLifetime {
    /// The text as written in the source, e.g. `7d`.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The lifetime as a duration.
    pub const fn as_duration(&self) -> Duration {
        self.duration
    }
}

impl FromStr for TokenLifetime {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const EXPECTED: &str = "a positive count followed by s, m, h or d (e.g. 7d)";

        let caps = TOKEN_LIFETIME_PATTERN
            .captures(s)
            .ok_or(FormatError { expected: EXPECTED })?;
        let count: u64 = caps[1]
            .parse()
            .map_err(|_| FormatError { expected: EXPECTED })?;
        let unit_secs = match &caps[2] {
            "s" => 1,
            "m" => 60,
            "h" => 3_600,
            _ => 86_400,
        };
        let secs = count
            .checked_mul(unit_secs)
            .filter(|secs| *secs > 0)
            .ok_or(FormatError { expected: EXPECTED })?;

        Ok(Self {
            raw: s.to_string(),
            duration: Duration::from_secs(secs),
        })
    }
}

impl fmt::Display for TokenLifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for TokenLifetime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// Brazilian postal code (CEP) in `NNNNN-NNN` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalCode(String);

impl PostalCode {
    /// The code as written, e.g. `01310-100`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PostalCode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if POSTAL_CODE_PATTERN.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(FormatError {
                expected: "the postal code pattern NNNNN-NNN",
            })
        }
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for PostalCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Whether `s` looks like `local@domain.tld`.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_PATTERN.is_match(s)
}
