//! Request parameters, HTTP verbs and parameter placement.
//!
//! Parameters are kept as an ordered list of [`QueryParameter`]s. The same
//! list feeds both the signer (unencoded) and the wire (percent-encoded).
//! Where the encoded string travels depends only on the [`Method`]:
//!
//! | Method | Placement |
//! |--------|-----------|
//! | `GET`  | query string, appended after `?` |
//! | `POST` | form-urlencoded request body |

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// RFC 3986 unreserved characters stay as-is; everything else is escaped.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string the way the API (and OAuth 1.0a) expects.
///
/// ```
/// use tweetlite_rs::models::percent_encode;
///
/// assert_eq!(percent_encode("Hello Ladies + Gentlemen"), "Hello%20Ladies%20%2B%20Gentlemen");
/// ```
pub fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, UNRESERVED).to_string()
}

/// An immutable key/value pair sent with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameter {
    key: String,
    value: String,
}

impl QueryParameter {
    /// Create a new parameter.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The unencoded key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The unencoded value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for QueryParameter {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Encode parameters as `k1=v1&k2=v2`, preserving order.
///
/// Duplicate keys are passed through. An empty slice yields an empty string.
pub fn encode_parameters(params: &[QueryParameter]) -> String {
    params
        .iter()
        .map(|p| format!("{}={}", percent_encode(&p.key), percent_encode(&p.value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// HTTP verbs used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`, parameters in the query string
    Get,
    /// `POST`, parameters in the request body
    Post,
}

/// Where the encoded parameter string travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Appended to the URI after `?`
    Query,
    /// Sent as an `application/x-www-form-urlencoded` body
    Body,
}

impl Method {
    /// The placement policy for this verb.
    pub fn placement(self) -> Placement {
        match self {
            Method::Get => Placement::Query,
            Method::Post => Placement::Body,
        }
    }

    /// Upper-case verb as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paging and size bounds for timeline endpoints.
///
/// Only the fields that are set are sent. `count` is capped at 200 by the
/// remote API; no local check is made.
///
/// # Example
///
/// ```
/// use tweetlite_rs::{TimelineParams, TweetId};
///
/// let params = TimelineParams::new()
///     .count(50)
///     .max_id(TweetId::new(1_000_000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimelineParams {
    /// Number of tweets to request
    pub count: Option<u32>,
    /// Only return tweets newer than this ID
    pub since_id: Option<super::TweetId>,
    /// Only return tweets at or older than this ID
    pub max_id: Option<super::TweetId>,
}

impl TimelineParams {
    /// Empty parameters: the API's defaults apply.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of tweets to request.
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the lower ID bound (exclusive).
    pub fn since_id(mut self, id: super::TweetId) -> Self {
        self.since_id = Some(id);
        self
    }

    /// Set the upper ID bound (inclusive).
    pub fn max_id(mut self, id: super::TweetId) -> Self {
        self.max_id = Some(id);
        self
    }

    pub(crate) fn append_to(&self, params: &mut Vec<QueryParameter>) {
        if let Some(count) = self.count {
            params.push(QueryParameter::new("count", count.to_string()));
        }
        if let Some(since_id) = self.since_id {
            params.push(QueryParameter::new("since_id", since_id.to_string()));
        }
        if let Some(max_id) = self.max_id {
            params.push(QueryParameter::new("max_id", max_id.to_string()));
        }
    }
}

/// A new status to post.
///
/// # Example
///
/// ```
/// use tweetlite_rs::{StatusUpdate, TweetId};
///
/// let update = StatusUpdate::new("@jack agreed!").in_reply_to(TweetId::new(20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    /// Status text
    pub status: String,
    /// Tweet this status replies to
    pub in_reply_to_status_id: Option<super::TweetId>,
}

impl StatusUpdate {
    /// Create an update with the given text.
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            in_reply_to_status_id: None,
        }
    }

    /// Mark the update as a reply.
    pub fn in_reply_to(mut self, id: super::TweetId) -> Self {
        self.in_reply_to_status_id = Some(id);
        self
    }

    pub(crate) fn to_parameters(&self) -> Vec<QueryParameter> {
        let mut params = vec![QueryParameter::new("status", self.status.as_str())];
        if let Some(id) = self.in_reply_to_status_id {
            params.push(QueryParameter::new("in_reply_to_status_id", id.to_string()));
        }
        params
    }
}
