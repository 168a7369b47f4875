//! Session-related types.
//!
//! Types stored in the session: the logged-in identity and the basket.

use serde::{Deserialize, Serialize};

use kitlocker_core::{Email, UserId, Username};

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// User's display name.
    pub username: Username,
    /// User's email address.
    pub email: Email,
}

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the shopping basket (a list of shirt IDs).
    pub const BASKET: &str = "basket";
}
