//! Authentication route handlers.
//!
//! Handles admin login/logout plus the two static page shells. The pages
//! carry no logic; they drive the JSON API from the browser.

use axum::{
    Json,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::{OptionalAdmin, RequireAdmin, clear_current_admin, set_current_admin};
use crate::models::{AdminResponse, CurrentAdmin};
use crate::services::AuthService;
use crate::state::AppState;

/// Login request body.
///
/// Fields are optional so a missing key and an empty value both fall into
/// the same 400 response instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login response body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub admin: AdminResponse,
}

/// Confirmation message body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Handle login.
///
/// POST /admin/login
///
/// # Errors
///
/// Returns 400 if email or password is missing or empty, 401 on a
/// credential mismatch (unknown email and wrong password are identical).
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let (Some(email), Some(password)) = (
        body.email.filter(|e| !e.is_empty()),
        body.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(AppError::BadRequest(
            "Email and password required".to_string(),
        ));
    };

    let auth = AuthService::new(state.pool());
    let admin = auth.login(&email, &password).await?;

    let current_admin = CurrentAdmin {
        id: admin.id,
        name: admin.name.clone(),
    };
    set_current_admin(&session, &current_admin)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    tracing::info!(admin_id = %admin.id, "Admin logged in");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        admin: AdminResponse::from(&admin),
    }))
}

/// Handle logout.
///
/// POST /admin/logout
///
/// Destroys the entire session record, not just the admin keys.
///
/// # Errors
///
/// Returns 401 without a valid session, 500 if the session store fails.
pub async fn logout(
    session: Session,
    RequireAdmin(admin): RequireAdmin,
) -> Result<Json<MessageResponse>> {
    clear_current_admin(&session)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    // Also destroy the entire session record
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    tracing::info!(admin_id = %admin.id, "Admin logged out");

    Ok(Json(MessageResponse {
        message: "Logged out successfully".to_string(),
    }))
}

/// Display the login page.
///
/// GET /admin
///
/// An already-authenticated admin is sent straight to the dashboard.
pub async fn login_page(OptionalAdmin(admin): OptionalAdmin) -> Response {
    if admin.is_some() {
        return Redirect::to("/admin/dashboard").into_response();
    }
    Html(include_str!("../../static/login.html")).into_response()
}

/// Display the management dashboard.
///
/// GET /admin/dashboard
pub async fn dashboard(RequireAdmin(_admin): RequireAdmin) -> impl IntoResponse {
    Html(include_str!("../../static/dashboard.html"))
}
