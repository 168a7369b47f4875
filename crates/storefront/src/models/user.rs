//! User domain types.
//!
//! These types represent validated domain objects separate from database row
//! types. The password hash never travels with the domain record; callers
//! that need it use `UserRepository::get_password_hash`.

use kitlocker_core::{Email, UserId, Username};

/// A registered storefront account.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Unique display name.
    pub username: Username,
    /// User's email address.
    pub email: Email,
}
