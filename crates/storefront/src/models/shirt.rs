//! Shirt domain type.

use kitlocker_core::{Price, ShirtId, UserId};
use rust_decimal::Decimal;

/// A catalog shirt.
///
/// The owner relationship is an explicit foreign key; resolving the owning
/// [`super::User`] is a separate repository lookup, never an automatic
/// back-reference.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Shirt {
    /// Unique shirt ID.
    pub id: ShirtId,
    /// Team the shirt belongs to (e.g. "Everton").
    pub team_name: String,
    /// Image file name under `/static/images/`.
    pub shirt_image: String,
    /// Sale price.
    pub price: Price,
    /// Short listing description.
    pub description: String,
    /// Environmental-impact score, where known.
    pub environmental_impact: Option<Decimal>,
    /// Longer free-text history shown on the detail page.
    pub extended_description: Option<String>,
    /// The user selling this shirt.
    pub owner_id: UserId,
}
