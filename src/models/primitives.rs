//! Primitive types and newtypes for type-safe API interactions.
//!
//! Users and tweets are both identified by unsigned 64-bit integers on the
//! wire. The newtypes here keep the two from being mixed up.

use std::fmt;

/// A strongly-typed user ID.
///
/// # Example
///
/// ```
/// use tweetlite_rs::UserId;
///
/// let id = UserId::new(783214);
/// assert_eq!(id.to_string(), "783214");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(u64);

impl UserId {
    /// Create a new user ID.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A strongly-typed tweet (status) ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweetId(u64);

impl TweetId {
    /// Create a new tweet ID.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TweetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TweetId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// How to identify a user in lookup and timeline endpoints.
///
/// # Example
///
/// ```
/// use tweetlite_rs::{UserId, UserLookup};
///
/// let by_name: UserLookup = "twitter".into();
/// let by_id: UserLookup = UserId::new(783214).into();
/// assert_ne!(by_name, by_id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    /// Look up by screen name (without the leading `@`)
    ScreenName(String),
    /// Look up by numeric ID
    Id(UserId),
}

impl UserLookup {
    /// The query parameter this lookup travels as.
    pub(crate) fn to_parameter(&self) -> super::QueryParameter {
        match self {
            UserLookup::ScreenName(name) => super::QueryParameter::new("screen_name", name.as_str()),
            UserLookup::Id(id) => super::QueryParameter::new("user_id", id.to_string()),
        }
    }
}

impl From<&str> for UserLookup {
    fn from(s: &str) -> Self {
        UserLookup::ScreenName(s.trim_start_matches('@').to_string())
    }
}

impl From<String> for UserLookup {
    fn from(s: String) -> Self {
        UserLookup::from(s.as_str())
    }
}

impl From<UserId> for UserLookup {
    fn from(id: UserId) -> Self {
        UserLookup::Id(id)
    }
}

impl fmt::Display for UserLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserLookup::ScreenName(name) => write!(f, "@{}", name),
            UserLookup::Id(id) => write!(f, "{}", id),
        }
    }
}
