//! User profiles.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::json::{self, as_object};
use super::{TimelineParams, Tweet, UserId, UserLookup};
use crate::api::{StatusesService, UsersService};
use crate::client::ClientHandle;
use crate::Result;

/// A user profile.
///
/// Users are only produced by the client. Optional fields that the API left
/// out (or sent as `null`) hold their type's default, so an empty
/// `location` means "not provided" as much as "provided empty".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Numeric user ID
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Handle, without the leading `@`
    pub screen_name: String,
    /// Free-form location
    pub location: String,
    /// Profile bio
    pub description: String,
    /// Profile link, expanded from `entities.url.urls[0].expanded_url`
    pub url: String,
    /// Whether tweets are protected
    pub protected: bool,
    /// Whether the account is verified
    pub verified: bool,
    /// Number of followers
    pub followers_count: u64,
    /// Number of accounts followed
    pub friends_count: u64,
    /// Number of tweets (including retweets)
    pub statuses_count: u64,
    /// Number of likes
    pub favourites_count: u64,
    /// HTTPS URL of the avatar
    pub profile_image_url_https: String,
    /// Account creation time
    pub created_at: DateTime<Utc>,
    client: ClientHandle,
}

impl User {
    pub(crate) fn from_json(value: &Value, client: &ClientHandle) -> Result<Self> {
        let obj = as_object(value, "user")?;

        Ok(Self {
            id: UserId::new(json::required_u64(obj, "id")?),
            name: json::optional_string(obj, "name")?,
            screen_name: json::optional_string(obj, "screen_name")?,
            location: json::optional_string(obj, "location")?,
            description: json::optional_string(obj, "description")?,
            url: json::string_at(value, "/entities/url/urls/0/expanded_url").unwrap_or_default(),
            protected: json::optional_bool(obj, "protected")?,
            verified: json::optional_bool(obj, "verified")?,
            followers_count: json::optional_u64(obj, "followers_count")?,
            friends_count: json::optional_u64(obj, "friends_count")?,
            statuses_count: json::optional_u64(obj, "statuses_count")?,
            favourites_count: json::optional_u64(obj, "favourites_count")?,
            profile_image_url_https: json::optional_string(obj, "profile_image_url_https")?,
            created_at: json::optional_timestamp(obj, "created_at")?,
            client: client.clone(),
        })
    }

    /// The client this user was fetched through.
    pub fn client(&self) -> &ClientHandle {
        &self.client
    }

    /// Fetch this user's timeline, most recent first.
    ///
    /// # Errors
    ///
    /// [`Error::Transport`](crate::Error::Transport) if the client has been
    /// dropped, otherwise as for
    /// [`StatusesService::user_timeline`].
    pub fn timeline(&self, params: &TimelineParams) -> Result<Vec<Tweet>> {
        StatusesService::new(self.client.upgrade()?).user_timeline(UserLookup::Id(self.id), params)
    }

    /// Fetch a fresh copy of this profile.
    pub fn refresh(&self) -> Result<User> {
        UsersService::new(self.client.upgrade()?).show(UserLookup::Id(self.id))
    }
}
