//! Migration timestamps
//!
//! Generated schema migrations are ordered by a 14 digit UTC token
//! (`YYYYMMDDHHmmss`). This module formats those tokens and hands out strictly
//! increasing ones for migrations generated in the same run.

use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// `strftime` layout of a migration timestamp
pub const MIGRATION_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Length of every migration timestamp
pub const MIGRATION_TIMESTAMP_LEN: usize = 14;

// 0000-01-01T00:00:00Z and 9999-12-31T23:59:59Z, the range a 4 digit year can render
const MIN_TIMESTAMP_SECONDS: i64 = -62_167_219_200;
const MAX_TIMESTAMP_SECONDS: i64 = 253_402_300_799;

/// Input of [`format_migration_timestamp`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimestampRequest {
    /// Base instant, the current time when absent
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Signed offset in seconds added to the base instant
    #[serde(default)]
    pub increment: i64,
}

impl TimestampRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(date: DateTime<Utc>) -> Self {
        Self {
            date: Some(date),
            increment: 0,
        }
    }

    pub fn increment(mut self, increment: i64) -> Self {
        self.increment = increment;
        self
    }
}

/// Format `date + increment` seconds as `YYYYMMDDHHmmss` in UTC.
///
/// Sub-second precision is dropped. Results outside years 0000 through 9999
/// are clamped to the nearest bound, so the output is always 14 digits.
pub fn format_migration_timestamp(request: &TimestampRequest) -> String {
    let base = request.date.unwrap_or_else(Utc::now);
    let seconds = base
        .timestamp()
        .saturating_add(request.increment)
        .clamp(MIN_TIMESTAMP_SECONDS, MAX_TIMESTAMP_SECONDS);

    crate::trace_log!(
        "Formatting migration timestamp for {} + {}s",
        base,
        request.increment
    );

    DateTime::<Utc>::from_timestamp(seconds, 0)
        .unwrap_or_default()
        .format(MIGRATION_TIMESTAMP_FORMAT)
        .to_string()
}

/// Parse a migration timestamp back into the instant it encodes
pub fn parse_migration_timestamp(token: &str) -> Option<DateTime<Utc>> {
    if token.len() != MIGRATION_TIMESTAMP_LEN || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDateTime::parse_from_str(token, MIGRATION_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Issues strictly increasing migration timestamps from a single base instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationClock {
    base: DateTime<Utc>,
    issued: i64,
}

impl MigrationClock {
    pub fn new(base: DateTime<Utc>) -> Self {
        Self { base, issued: 0 }
    }

    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    /// Move the base past `last`, the newest timestamp already used by the project.
    ///
    /// Tokens that do not parse are ignored, and so are tokens at the last
    /// representable second, which nothing can follow.
    pub fn after(mut self, last: &str) -> Self {
        match parse_migration_timestamp(last) {
            Some(last) if last.timestamp() >= MAX_TIMESTAMP_SECONDS => {
                tracing::warn!(token = %last, "Ignoring migration timestamp at the upper bound");
            }
            Some(last) if last.timestamp() >= self.base.timestamp() => {
                self.base = last
                    .checked_add_signed(TimeDelta::seconds(1))
                    .unwrap_or(last);
                crate::debug_log!("Migration clock moved past {} to {}", last, self.base);
            }
            Some(_) => {}
            None => {
                tracing::warn!(token = last, "Ignoring malformed migration timestamp");
            }
        }
        self
    }

    pub fn base(&self) -> DateTime<Utc> {
        self.base
    }

    /// Next timestamp; each call is one second after the previous one.
    ///
    /// Tokens stop increasing once they reach `99991231235959`.
    pub fn next_timestamp(&mut self) -> String {
        let token = format_migration_timestamp(&TimestampRequest {
            date: Some(self.base),
            increment: self.issued,
        });
        self.issued += 1;
        token
    }
}

impl Iterator for MigrationClock {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_timestamp())
    }
}
