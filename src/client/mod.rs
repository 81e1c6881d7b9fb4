//! HTTP client and request pipeline for the Twitter API.
//!
//! This module provides the main entry point [`TwitterClient`] together with
//! the pieces of the pipeline it drives:
//!
//! - [`RequestDescriptor`] / [`PreparedRequest`]: parameter placement by verb
//! - [`Transport`]: the HTTP round trip ([`ReqwestTransport`] by default)
//! - [`read_body`]: draining a response stream of declared length
//! - [`ResponseEnvelope`]: status classification before JSON decoding
//!
//! # Example
//!
//! ```no_run
//! use tweetlite_rs::{ClientConfig, TwitterClient};
//! use tweetlite_rs::auth::{AccessCredentials, ConsumerCredentials};
//!
//! # fn example() -> tweetlite_rs::Result<()> {
//! let client = TwitterClient::builder(
//!     ConsumerCredentials::new("consumer-key", "consumer-secret"),
//!     AccessCredentials::new("access-token", "access-token-secret"),
//! )
//! .config(ClientConfig::default().with_strict_content_length(true))
//! .build()?;
//!
//! let user = client.users().show("twitter")?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
mod reader;
mod request;
mod transport;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use http::{ClientBuilder, ClientHandle, TwitterClient};
pub use reader::{read_body, BodyPolicy, DEFAULT_MAX_BODY_BYTES};
pub use request::{PreparedRequest, RequestDescriptor, ResponseEnvelope, FORM_CONTENT_TYPE};
pub use transport::{ReqwestTransport, Transport, TransportResponse};
pub(crate) use http::ClientInner;
