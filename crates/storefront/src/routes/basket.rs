//! Basket route handlers.
//!
//! The basket lives in the session as an ordered list of shirt IDs; these
//! handlers load it, apply one mutation or render it, and save it back.
//! Outcomes travel as query-string notice codes on the redirect, so a
//! failed removal is a visible notice rather than an error page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use kitlocker_core::ShirtId;

use crate::basket::{self, Basket, BasketLine};
use crate::db::ShirtRepository;
use crate::error::Result;
use crate::filters;
use crate::models::session_keys;
use crate::state::AppState;

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the basket from the session. An absent key is an empty basket.
async fn load_basket(session: &Session) -> std::result::Result<Basket, tower_sessions::session::Error> {
    Ok(session
        .get::<Basket>(session_keys::BASKET)
        .await?
        .unwrap_or_default())
}

/// Save the basket back into the session.
async fn save_basket(
    session: &Session,
    basket: &Basket,
) -> std::result::Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::BASKET, basket).await
}

// =============================================================================
// Views
// =============================================================================

/// Basket row display data for templates.
#[derive(Clone)]
pub struct BasketLineView {
    pub id: i32,
    pub team_name: String,
    pub image_url: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&BasketLine> for BasketLineView {
    fn from(line: &BasketLine) -> Self {
        Self {
            id: line.shirt.id.as_i32(),
            team_name: line.shirt.team_name.clone(),
            image_url: format!("/static/images/{}", line.shirt.shirt_image),
            unit_price: line.shirt.price.to_string(),
            quantity: line.quantity,
            line_total: line.line_total().to_string(),
        }
    }
}

/// Basket page query parameters (notice codes from redirects).
#[derive(Debug, Deserialize)]
pub struct BasketQuery {
    pub success: Option<String>,
    pub error: Option<String>,
}

/// Basket page template.
#[derive(Template, WebTemplate)]
#[template(path = "basket.html")]
pub struct BasketTemplate {
    pub lines: Vec<BasketLineView>,
    pub total: String,
    pub is_empty: bool,
    pub notice: String,
    pub error: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Add a shirt to the basket.
///
/// No duplicate check: repeated adds increase quantity implicitly. The
/// shirt's existence is not verified here; dangling IDs are dropped at
/// render time.
#[instrument(skip(session))]
pub async fn add(session: Session, Path(id): Path<i32>) -> Result<Redirect> {
    let mut basket = load_basket(&session).await?;
    basket.add(ShirtId::new(id));
    save_basket(&session, &basket).await?;

    Ok(Redirect::to("/?success=basket_added"))
}

/// Display the basket with its total.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<BasketQuery>,
) -> Result<BasketTemplate> {
    let notice = notice_message(params.success.as_deref());
    let error = error_message(params.error.as_deref());

    let basket = load_basket(&session).await?;
    if basket.is_empty() {
        return Ok(BasketTemplate {
            lines: Vec::new(),
            total: String::new(),
            is_empty: true,
            notice,
            error,
        });
    }

    let shirts = ShirtRepository::new(state.pool())
        .get_many(basket.ids())
        .await?;
    let lines = basket::resolve_lines(&basket, &shirts);
    let total = basket::total(&lines).to_string();

    Ok(BasketTemplate {
        lines: lines.iter().map(BasketLineView::from).collect(),
        total,
        is_empty: false,
        notice,
        error,
    })
}

/// Remove the first occurrence of a shirt from the basket.
///
/// Removing an ID that isn't in the basket is a notice, not an error.
#[instrument(skip(session))]
pub async fn remove(session: Session, Path(id): Path<i32>) -> Result<Redirect> {
    let mut basket = load_basket(&session).await?;
    if basket.remove(ShirtId::new(id)) {
        save_basket(&session, &basket).await?;
        Ok(Redirect::to("/basket?success=removed"))
    } else {
        Ok(Redirect::to("/basket?error=not_in_basket"))
    }
}

fn notice_message(code: Option<&str>) -> String {
    match code {
        Some("removed") => "Item removed from basket.".to_string(),
        _ => String::new(),
    }
}

fn error_message(code: Option<&str>) -> String {
    match code {
        Some("not_in_basket") => "Item not found in basket.".to_string(),
        _ => String::new(),
    }
}
