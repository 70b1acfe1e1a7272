//! Domain models.
//!
//! These types represent validated domain objects separate from database row types.

pub mod catalog;
pub mod user;

pub use catalog::{NewCategory, NewProduct};
pub use user::{
    NewUserAccount, NewUserRecord, StoredUser, UserAccount, UserAccountChanges, UserRecordChanges,
};
