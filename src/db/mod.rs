//! Data storage.
//!
//! The only state the service keeps is its user accounts, held in an
//! in-memory store. Issued tokens are not stored anywhere; verification is
//! stateless, so there is no session or token table.

/// User accounts and the in-memory user store.
pub mod users;

pub use users::{User, UserStore};
