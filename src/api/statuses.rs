//! Statuses service for posting tweets and reading timelines.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Method, QueryParameter, StatusUpdate, TimelineParams, Tweet, TweetId, UserLookup};
use crate::{Error, Result};

/// Service for tweet and timeline operations.
///
/// # Example
///
/// ```no_run
/// use tweetlite_rs::{StatusUpdate, TimelineParams};
///
/// # fn example(client: tweetlite_rs::TwitterClient) -> tweetlite_rs::Result<()> {
/// let posted = client.statuses().update(&StatusUpdate::new("hello"))?;
///
/// let timeline = client
///     .statuses()
///     .home_timeline(&TimelineParams::new().count(20).since_id(posted.id))?;
/// for tweet in timeline {
///     println!("{}", tweet.text);
/// }
/// # Ok(())
/// # }
/// ```
pub struct StatusesService {
    inner: Arc<ClientInner>,
}

impl StatusesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Post a new status.
    ///
    /// Returns the created tweet as the API echoes it back.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if the status text is empty; the request is
    /// not sent in that case.
    pub fn update(&self, update: &StatusUpdate) -> Result<Tweet> {
        if update.status.trim().is_empty() {
            return Err(Error::InvalidInput("status text must not be empty".to_string()));
        }
        self.inner
            .fetch_tweet(Method::Post, "statuses/update.json", update.to_parameters())
    }

    /// Get the authenticating user's home timeline, most recent first.
    pub fn home_timeline(&self, params: &TimelineParams) -> Result<Vec<Tweet>> {
        let mut query = Vec::new();
        params.append_to(&mut query);
        self.inner.fetch_tweets("statuses/home_timeline.json", query)
    }

    /// Get a user's timeline, most recent first.
    ///
    /// # Arguments
    ///
    /// * `user` - Screen name or numeric ID
    /// * `params` - Count and ID bounds
    pub fn user_timeline(
        &self,
        user: impl Into<UserLookup>,
        params: &TimelineParams,
    ) -> Result<Vec<Tweet>> {
        let mut query = vec![user.into().to_parameter()];
        params.append_to(&mut query);
        self.inner.fetch_tweets("statuses/user_timeline.json", query)
    }

    /// Get a single tweet by ID.
    pub fn show(&self, id: TweetId) -> Result<Tweet> {
        self.inner.fetch_tweet(
            Method::Get,
            "statuses/show.json",
            vec![QueryParameter::new("id", id.to_string())],
        )
    }
}
