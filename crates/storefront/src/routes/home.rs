//! Home page route handler: the searchable, sortable shirt listing.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::{self, CatalogQuery, SortField, SortOrder};
use crate::db::ShirtRepository;
use crate::error::Result;
use crate::filters;
use crate::models::Shirt;
use crate::state::AppState;

/// Listing query parameters.
///
/// `sort` is the legacy direction parameter kept for old bookmarks; the
/// canonical pair is `sort_field` + `sort_order`.
#[derive(Debug, Deserialize)]
pub struct ListingParams {
    pub query: Option<String>,
    pub sort: Option<String>,
    pub sort_field: Option<String>,
    pub sort_order: Option<String>,
    pub success: Option<String>,
}

/// Shirt display data for the listing grid.
#[derive(Clone)]
pub struct ShirtCard {
    pub id: i32,
    pub team_name: String,
    pub image_url: String,
    pub price: String,
    pub description: String,
    /// Preformatted score, empty when the shirt has none.
    pub environmental_impact: String,
}

impl From<&Shirt> for ShirtCard {
    fn from(shirt: &Shirt) -> Self {
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
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub shirts: Vec<ShirtCard>,
    pub query: String,
    pub sort_field: &'static str,
    pub sort_order: &'static str,
    pub notice: String,
}

/// Display the shirt listing.
#[instrument(skip(state))]
pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<HomeTemplate> {
    let catalog_query = CatalogQuery {
        text: params.query.clone(),
        field: SortField::parse(params.sort_field.as_deref()),
        order: SortOrder::parse(params.sort_order.as_deref().or(params.sort.as_deref())),
    };

    let snapshot = ShirtRepository::new(state.pool()).list_all().await?;
    let selected = catalog::select(&snapshot, &catalog_query);

    Ok(HomeTemplate {
        shirts: selected.iter().map(ShirtCard::from).collect(),
        query: params.query.unwrap_or_default(),
        sort_field: catalog_query.field.as_param(),
        sort_order: catalog_query.order.as_param(),
        notice: notice_message(params.success.as_deref()),
    })
}

fn notice_message(code: Option<&str>) -> String {
    match code {
        Some("basket_added") => "Item added to basket!".to_string(),
        Some("account_created") => "Account created - you can now log in.".to_string(),
        Some("logged_in") => "You are now logged in.".to_string(),
        _ => String::new(),
    }
}
