use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Duration;

use crate::error::{ModelError, ModelResult};

/// Minimum stack age before it becomes eligible for deletion.
///
/// Parsed from strings such as `"1h"`, `"90m"`, `"2h30m"` or `"1d"`.
/// A bare integer is read as hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MaxAge(Duration);

impl MaxAge {
    pub const DEFAULT: MaxAge = MaxAge(Duration::HOUR);

    /// Build from a non-negative duration.
    pub fn new(duration: Duration) -> ModelResult<Self> {
        if duration.is_negative() {
            return Err(ModelError::InvalidDuration {
                input: duration.to_string(),
                reason: "negative",
            });
        }
        Ok(Self(duration))
    }

    pub fn hours(hours: i64) -> ModelResult<Self> {
        Self::new(Duration::hours(hours))
    }

    #[inline]
    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl Default for MaxAge {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for MaxAge {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        let input = s.trim();
        let invalid = |reason| ModelError::InvalidDuration {
            input: s.to_string(),
            reason,
        };

        if input.is_empty() {
            return Err(invalid("empty"));
        }
        if input.bytes().all(|b| b.is_ascii_digit()) {
            let hours: i64 = input.parse().map_err(|_| invalid("out of range"))?;
            let secs = hours.checked_mul(3_600).ok_or_else(|| invalid("out of range"))?;
            return Ok(Self(Duration::seconds(secs)));
        }

        let mut total: i64 = 0;
        let mut digits = String::new();
        for ch in input.chars() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                continue;
            }
            let unit: i64 = match ch.to_ascii_lowercase() {
                'd' => 86_400,
                'h' => 3_600,
                'm' => 60,
                's' => 1,
                _ => return Err(invalid("unknown unit (expected d, h, m or s)")),
            };
            if digits.is_empty() {
                return Err(invalid("unit without a number"));
            }
            let n: i64 = digits.parse().map_err(|_| invalid("out of range"))?;
            total = n
                .checked_mul(unit)
                .and_then(|part| total.checked_add(part))
                .ok_or_else(|| invalid("out of range"))?;
            digits.clear();
        }
        if !digits.is_empty() {
            return Err(invalid("trailing number without a unit"));
        }
        Ok(Self(Duration::seconds(total)))
    }
}

impl fmt::Display for MaxAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut secs = self.0.whole_seconds();
        if secs == 0 {
            return f.write_str("0s");
        }
        for (unit, label) in [(86_400, 'd'), (3_600, 'h'), (60, 'm'), (1, 's')] {
            let n = secs / unit;
            if n > 0 {
                write!(f, "{n}{label}")?;
                secs %= unit;
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for MaxAge {
    type Error = ModelError;
    fn try_from(s: String) -> ModelResult<Self> {
        s.parse()
    }
}

impl From<MaxAge> for String {
    fn from(m: MaxAge) -> Self {
        m.to_string()
    }
}
