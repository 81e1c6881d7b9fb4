//! Data models for the Twitter API.
//!
//! Models are organized by concern:
//!
//! - [`primitives`] - Typed IDs and user lookups
//! - [`params`] - Request parameters, verbs and parameter encoding
//! - [`timestamp`] - The API's `created_at` format
//! - [`user`] - User profiles
//! - [`tweet`] - Tweets
//!
//! Entities are decoded from `serde_json::Value` by hand rather than with
//! derived `Deserialize`, so that each one can carry a handle back to the
//! client and so that nested optional paths degrade to "absent" instead of
//! failing the whole decode.

pub mod params;
pub mod primitives;
pub mod timestamp;
pub mod tweet;
pub mod user;

mod json;

pub use json::decode_array;
pub use params::*;
pub use primitives::*;
pub use tweet::Tweet;
pub use user::User;
