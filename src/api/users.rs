//! Users service for profile lookups.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Method, User, UserLookup};
use crate::Result;

/// Service for user lookups.
///
/// # Example
///
/// ```no_run
/// use tweetlite_rs::UserId;
///
/// # fn example(client: tweetlite_rs::TwitterClient) -> tweetlite_rs::Result<()> {
/// let by_name = client.users().show("TwitterAPI")?;
/// let by_id = client.users().show(UserId::new(6253282))?;
/// assert_eq!(by_name.id, by_id.id);
/// # Ok(())
/// # }
/// ```
pub struct UsersService {
    inner: Arc<ClientInner>,
}

impl UsersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a user's profile by screen name or numeric ID.
    pub fn show(&self, user: impl Into<UserLookup>) -> Result<User> {
        self.inner
            .fetch_user(Method::Get, "users/show.json", vec![user.into().to_parameter()])
    }
}
