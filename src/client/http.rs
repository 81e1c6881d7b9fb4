//! The authenticated request/response pipeline.

use std::fmt;
use std::sync::{Arc, Weak};

use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::api::{AccountService, StatusesService, UsersService};
use crate::auth::{AccessCredentials, ConsumerCredentials, OAuth1Signer, Signer};
use crate::models::{decode_array, Method, QueryParameter, Tweet, User};
use crate::{Error, Result};

use super::config::ClientConfig;
use super::reader::read_body;
use super::request::{RequestDescriptor, ResponseEnvelope};
use super::transport::{ReqwestTransport, Transport};

/// The main client for the Twitter REST API.
///
/// Endpoints are grouped into services returned by [`account`](Self::account),
/// [`statuses`](Self::statuses) and [`users`](Self::users). Every call is
/// blocking, makes exactly one round trip and is never retried.
///
/// Cloning is cheap; clones share the same transport and credentials. The
/// client holds no lock: credentials are fixed at construction, and
/// serializing requests over one connection is left to the transport.
///
/// # Example
///
/// ```no_run
/// use tweetlite_rs::{TwitterClient, TimelineParams};
/// use tweetlite_rs::auth::{AccessCredentials, ConsumerCredentials};
///
/// # fn example() -> tweetlite_rs::Result<()> {
/// let client = TwitterClient::new(
///     ConsumerCredentials::new("consumer-key", "consumer-secret"),
///     AccessCredentials::new("access-token", "access-token-secret"),
/// )?;
///
/// let me = client.account().verify_credentials()?;
/// println!("Signed in as @{}", me.screen_name);
///
/// for tweet in me.timeline(&TimelineParams::new().count(5))? {
///     println!("{}: {}", tweet.id, tweet.text);
/// }
/// # Ok(())
/// # }
/// ```
pub struct TwitterClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) transport: Box<dyn Transport>,
    pub(crate) signer: Box<dyn Signer>,
    pub(crate) consumer: ConsumerCredentials,
    pub(crate) access: AccessCredentials,
    pub(crate) config: ClientConfig,
}

impl TwitterClient {
    /// Create a client with the default configuration, transport and signer.
    pub fn new(consumer: ConsumerCredentials, access: AccessCredentials) -> Result<Self> {
        Self::builder(consumer, access).build()
    }

    /// Start building a client with custom configuration or collaborators.
    pub fn builder(consumer: ConsumerCredentials, access: AccessCredentials) -> ClientBuilder {
        ClientBuilder {
            consumer,
            access,
            config: ClientConfig::default(),
            transport: None,
            signer: None,
        }
    }

    /// Get the account service.
    pub fn account(&self) -> AccountService {
        AccountService::new(self.inner.clone())
    }

    /// Get the statuses (tweets and timelines) service.
    pub fn statuses(&self) -> StatusesService {
        StatusesService::new(self.inner.clone())
    }

    /// Get the users service.
    pub fn users(&self) -> UsersService {
        UsersService::new(self.inner.clone())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

/// Builder for [`TwitterClient`].
pub struct ClientBuilder {
    consumer: ConsumerCredentials,
    access: AccessCredentials,
    config: ClientConfig,
    transport: Option<Box<dyn Transport>>,
    signer: Option<Box<dyn Signer>>,
}

impl ClientBuilder {
    /// Use a custom configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a platform-provided transport instead of [`ReqwestTransport`].
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Use a custom signer instead of [`OAuth1Signer`].
    pub fn signer(mut self, signer: impl Signer + 'static) -> Self {
        self.signer = Some(Box::new(signer));
        self
    }

    /// Validate the configuration and build the client.
    ///
    /// # Errors
    ///
    /// Fails if the base URL does not parse or the default transport cannot
    /// be constructed.
    pub fn build(self) -> Result<TwitterClient> {
        let mut config = self.config;
        Url::parse(&config.base_url)?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        let transport = match self.transport {
            Some(transport) => transport,
            None => Box::new(ReqwestTransport::new(&config)?),
        };
        let signer = self.signer.unwrap_or_else(|| Box::new(OAuth1Signer::new()));

        Ok(TwitterClient {
            inner: Arc::new(ClientInner {
                transport,
                signer,
                consumer: self.consumer,
                access: self.access,
                config,
            }),
        })
    }
}

impl ClientInner {
    /// Absolute URI for an endpoint path such as `statuses/show.json`.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path.trim_start_matches('/'))
    }

    /// Sign, send, drain and wrap one request.
    #[instrument(skip(self, descriptor), fields(method = %descriptor.method, uri = %descriptor.base_uri))]
    pub(crate) fn execute(&self, descriptor: &RequestDescriptor) -> Result<ResponseEnvelope> {
        debug!(params = descriptor.params.len(), "Making Twitter API request");

        let authorization = self.signer.sign(
            descriptor.method,
            &descriptor.base_uri,
            &self.consumer,
            &self.access,
            &descriptor.params,
        )?;
        let request = descriptor.prepare(authorization);

        let mut response = self.transport.execute(&request)?;
        let bytes = read_body(
            &mut *response.body,
            response.content_length,
            self.config.body_policy(),
        )?;
        debug!(status = response.status, bytes = bytes.len(), "Read response body");

        ResponseEnvelope::from_bytes(response.status, bytes)
    }

    /// Run a request and parse a success body as JSON.
    pub(crate) fn call(&self, method: Method, path: &str, params: Vec<QueryParameter>) -> Result<Value> {
        let descriptor = RequestDescriptor::new(method, self.endpoint(path)).with_params(params);
        self.execute(&descriptor)?.into_json()
    }

    pub(crate) fn fetch_user(
        self: &Arc<Self>,
        method: Method,
        path: &str,
        params: Vec<QueryParameter>,
    ) -> Result<User> {
        let value = self.call(method, path, params)?;
        User::from_json(&value, &ClientHandle::new(self))
    }

    pub(crate) fn fetch_tweet(
        self: &Arc<Self>,
        method: Method,
        path: &str,
        params: Vec<QueryParameter>,
    ) -> Result<Tweet> {
        let value = self.call(method, path, params)?;
        Tweet::from_json(&value, &ClientHandle::new(self))
    }

    pub(crate) fn fetch_tweets(
        self: &Arc<Self>,
        path: &str,
        params: Vec<QueryParameter>,
    ) -> Result<Vec<Tweet>> {
        let value = self.call(Method::Get, path, params)?;
        let handle = ClientHandle::new(self);
        decode_array(&value, |element| Tweet::from_json(element, &handle))
    }
}

/// Non-owning reference from an entity back to the client that produced it.
///
/// Two handles compare equal when they refer to the same client.
#[derive(Clone)]
pub struct ClientHandle(Weak<ClientInner>);

impl ClientHandle {
    pub(crate) fn new(inner: &Arc<ClientInner>) -> Self {
        Self(Arc::downgrade(inner))
    }

    /// Whether the client is still alive.
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }

    pub(crate) fn upgrade(&self) -> Result<Arc<ClientInner>> {
        self.0
            .upgrade()
            .ok_or_else(|| Error::Transport("client has been dropped".to_string()))
    }
}

impl PartialEq for ClientHandle {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ClientHandle {}

impl fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClientHandle")
            .field(&if self.is_alive() { "alive" } else { "dropped" })
            .finish()
    }
}

impl Clone for TwitterClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl fmt::Debug for TwitterClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwitterClient")
            .field("config", &self.inner.config)
            .field("consumer", &self.inner.consumer)
            .finish()
    }
}

#[cfg(test)]
impl fmt::Debug for ClientInner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientInner")
            .field("config", &self.config)
            .field("consumer", &self.consumer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
impl ClientHandle {
    /// A handle that was never attached to a client.
    pub(crate) fn detached() -> Self {
        Self(Weak::new())
    }
}
