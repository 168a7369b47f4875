//! Authentication route handlers.
//!
//! Login and registration. Failures redirect back with a notice code in the
//! query string; a failed login is deliberately generic.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::{CurrentUser, User, session_keys};
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Query parameters for notice display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: String,
    pub success: String,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub error: String,
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Store the logged-in identity in the session.
async fn set_current_user(
    session: &Session,
    user: &User,
) -> std::result::Result<(), tower_sessions::session::Error> {
    let current = CurrentUser {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
    };
    session.insert(session_keys::CURRENT_USER, &current).await
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(Query(query): Query<MessageQuery>) -> LoginTemplate {
    LoginTemplate {
        error: login_error_message(query.error.as_deref()),
        success: login_success_message(query.success.as_deref()),
    }
}

/// Handle login form submission.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match AuthService::new(state.pool())
        .login(&form.email, &form.password)
        .await
    {
        Ok(user) => {
            set_current_user(&session, &user)
                .await
                .map_err(AppError::Session)?;
            Ok(Redirect::to("/?success=logged_in").into_response())
        }
        Err(err @ (AuthError::Repository(_) | AuthError::PasswordHash)) => {
            Err(AppError::Auth(err))
        }
        Err(_) => {
            tracing::warn!("login failed");
            Ok(Redirect::to("/login?error=credentials").into_response())
        }
    }
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
pub async fn register_page(Query(query): Query<MessageQuery>) -> RegisterTemplate {
    RegisterTemplate {
        error: register_error_message(query.error.as_deref()),
    }
}

/// Handle registration form submission.
#[instrument(skip(state, form))]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    if form.password != form.password_confirm {
        return Ok(Redirect::to("/register?error=password_mismatch").into_response());
    }

    match AuthService::new(state.pool())
        .register(&form.username, &form.email, &form.password)
        .await
    {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "account created");
            Ok(Redirect::to("/?success=account_created").into_response())
        }
        Err(AuthError::UserAlreadyExists) => {
            Ok(Redirect::to("/register?error=taken").into_response())
        }
        Err(AuthError::WeakPassword(_)) => {
            Ok(Redirect::to("/register?error=password_too_short").into_response())
        }
        Err(AuthError::InvalidEmail(_)) => {
            Ok(Redirect::to("/register?error=invalid_email").into_response())
        }
        Err(AuthError::InvalidUsername(_)) => {
            Ok(Redirect::to("/register?error=invalid_username").into_response())
        }
        Err(err) => Err(AppError::Auth(err)),
    }
}

// =============================================================================
// Notice Messages
// =============================================================================

fn login_error_message(code: Option<&str>) -> String {
    match code {
        Some("credentials") => {
            "Login unsuccessful. Please check email and password.".to_string()
        }
        Some(_) => "Login failed. Please try again.".to_string(),
        None => String::new(),
    }
}

fn login_success_message(code: Option<&str>) -> String {
    match code {
        Some("registered") => "Account created - you can now log in.".to_string(),
        _ => String::new(),
    }
}

fn register_error_message(code: Option<&str>) -> String {
    match code {
        Some("password_mismatch") => "Passwords do not match.".to_string(),
        Some("password_too_short") => "Password must be at least 8 characters.".to_string(),
        Some("invalid_email") => "That email address doesn't look right.".to_string(),
        Some("invalid_username") => {
            "Usernames are at most 20 characters with no spaces.".to_string()
        }
        Some("taken") => "An account with that email or username already exists.".to_string(),
        Some(_) => "Registration failed. Please try again.".to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_message_is_generic() {
        let message = login_error_message(Some("credentials"));
        assert!(message.contains("check email and password"));
        assert!(login_error_message(None).is_empty());
    }

    #[test]
    fn test_register_error_messages_cover_known_codes() {
        for code in [
            "password_mismatch",
            "password_too_short",
            "invalid_email",
            "invalid_username",
            "taken",
        ] {
            assert!(!register_error_message(Some(code)).is_empty());
        }
    }
}
