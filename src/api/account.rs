//! Account service for the authenticating user.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Method, User};
use crate::Result;

/// Service for operations on the authenticating account.
///
/// # Example
///
/// ```no_run
/// # fn example(client: tweetlite_rs::TwitterClient) -> tweetlite_rs::Result<()> {
/// let me = client.account().verify_credentials()?;
/// println!("Hello, @{}!", me.screen_name);
/// # Ok(())
/// # }
/// ```
pub struct AccountService {
    inner: Arc<ClientInner>,
}

impl AccountService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the authenticating user's profile.
    ///
    /// Also the cheapest way to check that the credentials are valid: bad
    /// credentials come back as a 401 [`Error::Api`](crate::Error::Api).
    pub fn verify_credentials(&self) -> Result<User> {
        self.inner
            .fetch_user(Method::Get, "account/verify_credentials.json", Vec::new())
    }
}
