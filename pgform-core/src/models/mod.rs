//! Domain models with validation at construction
//!
//! Invalid input returns ValidationError, not panic.

pub mod entry;
pub mod user;
pub mod validation;

pub use entry::NewEntry;
pub use user::{NewUser, USER_FIELD_MAX_LEN};
pub use validation::ValidationError;
