//! Checkout route handlers.
//!
//! GET renders the form; POST validates and either renders the success page
//! or re-renders the form with per-field messages and the submitted values
//! intact. Nothing is persisted on success and the basket is left alone;
//! there is no payment capture behind this form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::checkout::{self, CheckoutForm, FieldErrors};
use crate::filters;

/// Submitted field values echoed back into the form.
#[derive(Default)]
pub struct CheckoutValues {
    pub card_number: String,
    pub holder_name: String,
    pub expiry: String,
    pub cvv: String,
}

impl From<CheckoutForm> for CheckoutValues {
    fn from(form: CheckoutForm) -> Self {
        Self {
            card_number: form.card_number,
            holder_name: form.holder_name,
            expiry: form.expiry,
            cvv: form.cvv,
        }
    }
}

/// Per-field messages for templates. Empty string means the field passed.
#[derive(Default)]
pub struct CheckoutErrors {
    pub card_number: String,
    pub holder_name: String,
    pub expiry: String,
    pub cvv: String,
}

impl From<FieldErrors> for CheckoutErrors {
    fn from(errors: FieldErrors) -> Self {
        Self {
            card_number: errors.card_number.unwrap_or_default().to_string(),
            holder_name: errors.holder_name.unwrap_or_default().to_string(),
            expiry: errors.expiry.unwrap_or_default().to_string(),
            cvv: errors.cvv.unwrap_or_default().to_string(),
        }
    }
}

/// Checkout form template.
#[derive(Template, WebTemplate, Default)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    pub values: CheckoutValues,
    pub errors: CheckoutErrors,
}

/// Checkout success template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout_success.html")]
pub struct CheckoutSuccessTemplate {}

/// Display the checkout form.
#[instrument]
pub async fn page() -> CheckoutTemplate {
    CheckoutTemplate::default()
}

/// Handle a checkout submission.
#[instrument(skip(form))]
pub async fn submit(Form(form): Form<CheckoutForm>) -> Response {
    match checkout::validate(&form) {
        Ok(()) => CheckoutSuccessTemplate {}.into_response(),
        Err(errors) => CheckoutTemplate {
            values: CheckoutValues::from(form),
            errors: CheckoutErrors::from(errors),
        }
        .into_response(),
    }
}
