//! # tweetlite-rs
//!
//! A small, blocking client for the Twitter REST API v1.1, aimed at
//! constrained runtimes.
//!
//! Every call goes through one pipeline: parameters are placed in the query
//! string (GET) or a form body (POST), the request is signed with OAuth 1.0a,
//! the response body is drained to its declared length however the transport
//! chunks it, the status is classified, and only then is the JSON decoded
//! into typed entities.
//!
//! ## Features
//!
//! - **OAuth 1.0a**: HMAC-SHA1 signing, or bring your own [`auth::Signer`]
//! - **Pluggable transport**: `reqwest::blocking` by default, or any
//!   [`client::Transport`]
//! - **Short-read tolerant**: bodies are assembled from partial reads
//! - **Typed entities**: [`User`] and [`Tweet`] with follow-on calls such as
//!   [`User::timeline`] and [`Tweet::reply`]
//! - **Structured errors**: transport failures, API errors with the raw
//!   body, and malformed entities are distinct [`Error`] variants
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tweetlite_rs::{TwitterClient, TimelineParams, StatusUpdate};
//! use tweetlite_rs::auth::{AccessCredentials, ConsumerCredentials};
//!
//! fn main() -> tweetlite_rs::Result<()> {
//!     let client = TwitterClient::new(
//!         ConsumerCredentials::new("consumer-key", "consumer-secret"),
//!         AccessCredentials::new("access-token", "access-token-secret"),
//!     )?;
//!
//!     let me = client.account().verify_credentials()?;
//!     println!("Signed in as @{}", me.screen_name);
//!
//!     let tweet = client.statuses().update(&StatusUpdate::new("hello"))?;
//!     println!("Posted {}", tweet.id);
//!
//!     let home = client.statuses().home_timeline(&TimelineParams::new().count(5))?;
//!     for tweet in &home {
//!         println!("{}", tweet.text);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use tweetlite_rs::{Error, TwitterClient};
//!
//! # fn example(client: TwitterClient) {
//! match client.users().show("no_such_user_here") {
//!     Ok(user) => println!("{}", user.name),
//!     Err(Error::Api { status, body }) => eprintln!("HTTP {}: {}", status, body),
//!     Err(e) => eprintln!("request failed: {}", e),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use client::{ClientConfig, TwitterClient};
pub use error::{Error, Result};
pub use models::{
    StatusUpdate, TimelineParams, Tweet, TweetId, User, UserId, UserLookup,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use tweetlite_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::{AccessCredentials, ConsumerCredentials, OAuth1Signer, Signer};
    pub use crate::client::{ClientConfig, Transport, TwitterClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        QueryParameter, StatusUpdate, TimelineParams, Tweet, TweetId, User, UserId, UserLookup,
    };
}
