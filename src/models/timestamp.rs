//! Parser for the API's `created_at` timestamp format.

use chrono::{DateTime, Utc};

use crate::{Error, Result};

/// Format used by v1.1 payloads, e.g. `Wed Aug 27 13:08:45 +0000 2008`.
pub const API_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Parse an API timestamp into UTC.
///
/// # Errors
///
/// Returns [`Error::MalformedEntity`] if the string does not match
/// [`API_TIMESTAMP_FORMAT`].
///
/// # Example
///
/// ```
/// use tweetlite_rs::models::timestamp;
///
/// let ts = timestamp::parse("Wed Aug 27 13:08:45 +0000 2008").unwrap();
/// assert_eq!(ts.timestamp(), 1219842525);
/// ```
pub fn parse(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_str(s, API_TIMESTAMP_FORMAT)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::malformed(format!("invalid timestamp {:?}: {}", s, e)))
}
