//! Timestamp codec.
//!
//! Trace and event timestamps use the warehouse export format
//! `2026-01-21 09:09:07.581000 UTC`. Values are decoded into UTC instants so
//! ordering compares instants rather than strings. RFC 3339 input is accepted
//! as well; output always uses the warehouse format.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{CoreError, Result};

const WAREHOUSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
const UTC_SUFFIX: &str = " UTC";

/// Parse a timestamp in warehouse or RFC 3339 format.
///
/// # Errors
///
/// Returns `CoreError::InvalidTimestamp` if neither format matches.
pub fn parse(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    let naive = trimmed.strip_suffix(UTC_SUFFIX).unwrap_or(trimmed);

    if let Ok(dt) = NaiveDateTime::parse_from_str(naive, WAREHOUSE_FORMAT) {
        return Ok(dt.and_utc());
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| CoreError::InvalidTimestamp(input.to_string()))
}

/// Format a timestamp in warehouse format with microsecond precision.
#[must_use]
pub fn format(ts: &DateTime<Utc>) -> String {
    format!("{}{UTC_SUFFIX}", ts.format("%Y-%m-%d %H:%M:%S%.6f"))
}

/// Serde adapter for `DateTime<Utc>` fields, used via `#[serde(with = "...")]`.
pub mod warehouse {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize in warehouse format.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format(ts))
    }

    /// Deserialize from warehouse or RFC 3339 format.
    ///
    /// # Errors
    ///
    /// Fails if the value is not a string or not a recognised timestamp.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse(&raw).map_err(serde::de::Error::custom)
    }

    /// Same as the parent module, for `Option<DateTime<Utc>>` fields.
    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        /// Serialize `Some` in warehouse format and `None` as null.
        ///
        /// # Errors
        ///
        /// Propagates serializer errors.
        #[allow(clippy::ref_option)]
        pub fn serialize<S: Serializer>(
            ts: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match ts {
                Some(ts) => serializer.serialize_str(&crate::time::format(ts)),
                None => serializer.serialize_none(),
            }
        }

        /// Deserialize an optional timestamp.
        ///
        /// # Errors
        ///
        /// Fails if a present value is not a recognised timestamp.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| crate::time::parse(&raw).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}
