//! API service modules for Twitter endpoints.
//!
//! Each service provides methods for one group of v1.1 endpoints. Services
//! are cheap to create and share the client's transport and credentials.

mod account;
mod statuses;
mod users;

pub use account::AccountService;
pub use statuses::StatusesService;
pub use users::UsersService;
