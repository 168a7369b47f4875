//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Shirt listing (query|sort|sort_field|sort_order)
//! GET  /home                    - Alias for /
//! GET  /health                  - Health check (wired in main)
//!
//! # Shirts
//! GET  /shirt/{id}              - Shirt detail (404 if missing)
//!
//! # Basket
//! POST /add_to_basket/{id}      - Append a shirt, redirect home
//! GET  /basket                  - Basket contents and total
//! POST /remove_from_basket/{id} - Remove first occurrence, redirect back
//!
//! # Checkout
//! GET  /checkout                - Checkout form
//! POST /checkout                - Validate; success page or re-render with errors
//!
//! # Auth
//! GET  /login                   - Login page
//! POST /login                   - Login action
//! GET  /register                - Register page
//! POST /register                - Register action
//! ```

pub mod auth;
pub mod basket;
pub mod checkout;
pub mod home;
pub mod shirts;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Listing
        .route("/", get(home::home))
        .route("/home", get(home::home))
        // Shirt detail
        .route("/shirt/{id}", get(shirts::show))
        // Basket
        .route("/add_to_basket/{id}", post(basket::add))
        .route("/basket", get(basket::show))
        .route("/remove_from_basket/{id}", post(basket::remove))
        // Checkout
        .route("/checkout", get(checkout::page).post(checkout::submit))
        // Auth
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
}
