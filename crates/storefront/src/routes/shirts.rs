//! Shirt detail route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;

use kitlocker_core::ShirtId;

use crate::db::{ShirtRepository, UserRepository};
use crate::error::{AppError, Result};
use crate::filters;
use crate::models::Shirt;
use crate::state::AppState;

/// Shirt display data for the detail page.
pub struct ShirtDetail {
    pub id: i32,
    pub team_name: String,
    pub image_url: String,
    pub price: String,
    pub description: String,
    /// Preformatted score, empty when the shirt has none.
    pub environmental_impact: String,
    /// Longer history, empty when the shirt has none.
    pub extended_description: String,
    /// Username of the seller.
    pub seller: String,
}

impl ShirtDetail {
    fn new(shirt: &Shirt, seller: String) -> Self {
        Self {
            id: shirt.id.as_i32(),
            team_name: shirt.team_name.clone(),
            image_url: format!("/static/images/{}", shirt.shirt_image),
            price: shirt.price.to_string(),
            description: shirt.description.clone(),
            environmental_impact: shirt
                .environmental_impact
                .map(|score| format!("{score:.1}"))
                .unwrap_or_default(),
            extended_description: shirt.extended_description.clone().unwrap_or_default(),
            seller,
        }
    }
}

/// Shirt detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "shirts/show.html")]
pub struct ShirtShowTemplate {
    pub shirt: ShirtDetail,
}

/// Display a shirt's detail page. Unknown IDs are a user-visible 404.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ShirtShowTemplate> {
    let shirt = ShirtRepository::new(state.pool())
        .get(ShirtId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("shirt {id}")))?;

    // The owner is an explicit foreign-key lookup, never a back-reference.
    let seller = UserRepository::new(state.pool())
        .get_by_id(shirt.owner_id)
        .await?
        .map_or_else(|| "unknown".to_string(), |user| user.username.to_string());

    Ok(ShirtShowTemplate {
        shirt: ShirtDetail::new(&shirt, seller),
    })
}
