//! Tweets (statuses).

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::json::{self, as_object};
use super::{StatusUpdate, TweetId, User};
use crate::api::StatusesService;
use crate::client::ClientHandle;
use crate::Result;

/// A tweet.
///
/// Like [`User`], optional fields hold their type's default when the API
/// omitted them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    /// Numeric tweet ID
    pub id: TweetId,
    /// Tweet text
    pub text: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Posting application, as an HTML anchor
    pub source: String,
    /// Detected language (BCP 47)
    pub lang: String,
    /// Tweet this one replies to
    pub in_reply_to_status_id: Option<TweetId>,
    /// Screen name of the user replied to
    pub in_reply_to_screen_name: String,
    /// Number of retweets
    pub retweet_count: u64,
    /// Number of likes
    pub favorite_count: u64,
    /// Whether the authenticating user liked this tweet
    pub favorited: bool,
    /// Whether the authenticating user retweeted this tweet
    pub retweeted: bool,
    /// Whether the text was truncated
    pub truncated: bool,
    /// Embedded author, when the payload carries one
    pub user: Option<User>,
    client: ClientHandle,
}

impl Tweet {
    pub(crate) fn from_json(value: &Value, client: &ClientHandle) -> Result<Self> {
        let obj = as_object(value, "tweet")?;

        let in_reply_to_status_id = match json::optional_u64(obj, "in_reply_to_status_id")? {
            0 => None,
            id => Some(TweetId::new(id)),
        };
        let user = match obj.get("user") {
            None | Some(Value::Null) => None,
            Some(user) => Some(User::from_json(user, client)?),
        };

        Ok(Self {
            id: TweetId::new(json::required_u64(obj, "id")?),
            text: json::optional_string(obj, "text")?,
            created_at: json::optional_timestamp(obj, "created_at")?,
            source: json::optional_string(obj, "source")?,
            lang: json::optional_string(obj, "lang")?,
            in_reply_to_status_id,
            in_reply_to_screen_name: json::optional_string(obj, "in_reply_to_screen_name")?,
            retweet_count: json::optional_u64(obj, "retweet_count")?,
            favorite_count: json::optional_u64(obj, "favorite_count")?,
            favorited: json::optional_bool(obj, "favorited")?,
            retweeted: json::optional_bool(obj, "retweeted")?,
            truncated: json::optional_bool(obj, "truncated")?,
            user,
            client: client.clone(),
        })
    }

    /// The client this tweet was fetched through.
    pub fn client(&self) -> &ClientHandle {
        &self.client
    }

    /// The embedded author, if present.
    pub fn author(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Post a reply to this tweet.
    ///
    /// When the author is known and `text` does not already mention them,
    /// `@screen_name ` is prepended so the API threads the reply.
    pub fn reply(&self, text: &str) -> Result<Tweet> {
        let status = match self.author() {
            Some(author)
                if !author.screen_name.is_empty()
                    && !text.starts_with(&format!("@{}", author.screen_name)) =>
            {
                format!("@{} {}", author.screen_name, text)
            }
            _ => text.to_string(),
        };
        StatusesService::new(self.client.upgrade()?)
            .update(&StatusUpdate::new(status).in_reply_to(self.id))
    }

    /// Fetch a fresh copy of this tweet.
    pub fn refresh(&self) -> Result<Tweet> {
        StatusesService::new(self.client.upgrade()?).show(self.id)
    }
}
