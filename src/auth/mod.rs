//! Credentials and request signing.
//!
//! Every request is signed with OAuth 1.0a using two credential pairs:
//!
//! 1. **Consumer credentials** identify the registered application.
//! 2. **Access credentials** identify the user the app acts for.
//!
//! ```
//! use tweetlite_rs::auth::{AccessCredentials, ConsumerCredentials, OAuth1Signer};
//!
//! let consumer = ConsumerCredentials::new("consumer-key", "consumer-secret");
//! let access = AccessCredentials::new("access-token", "access-token-secret");
//! let signer = OAuth1Signer::new();
//! # let _ = (consumer, access, signer);
//! ```
//!
//! Platforms with their own signing facility implement [`Signer`] and pass
//! it to [`TwitterClient::builder`](crate::TwitterClient::builder). Secrets
//! are handed out as [`SecretString`] and read through [`ExposeSecret`].

mod credentials;
mod signer;

pub use credentials::{AccessCredentials, ConsumerCredentials};
pub use secrecy::{ExposeSecret, SecretString};
pub use signer::{OAuth1Signer, Signer};
