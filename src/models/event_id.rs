use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Stable identity of a stored event.
///
/// Stored as a hyphenated UUID. Databases written by the older desktop
/// application used the decimal integer form of a UUID; those are mapped to
/// the same 128-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a hyphenated (or simple) UUID, or a legacy decimal id.
    ///
    /// Digit-only input is always read as a decimal number, even when it
    /// would also be a valid 32-digit simple UUID.
    pub fn parse(s: &str) -> AppResult<Self> {
        let s = s.trim();

        if Self::is_legacy_form(s) {
            return s
                .parse::<u128>()
                .map(|n| Self(Uuid::from_u128(n)))
                .map_err(|_| AppError::InvalidEventId(s.to_string()));
        }

        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| AppError::InvalidEventId(s.to_string()))
    }

    /// True for the digit-only form written by the desktop application.
    pub fn is_legacy_form(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }

    /// Convert id → DB string
    pub fn to_db_str(&self) -> String {
        self.0.hyphenated().to_string()
    }

    /// First block of the UUID, enough to address an event from the CLI.
    pub fn short(&self) -> String {
        self.to_db_str().chars().take(8).collect()
    }

    pub fn as_u128(&self) -> u128 {
        self.0.as_u128()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
