//! HTTP handlers for sign-in, registration and sign-out

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use shared::{translate, RegisterData, UserProfile};

use super::language_from;
use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::auth::{PendingVerification, Session};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Sign in
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<Session>> {
    let session = state.auth.login(&input.email, &input.password).await?;
    Ok(Json(session))
}

/// Start a registration; the account is created once the OTP is confirmed
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterData>,
) -> AppResult<(StatusCode, Json<PendingVerification>)> {
    let pending = state.auth.register(input).await?;
    Ok((StatusCode::ACCEPTED, Json(pending)))
}

#[derive(Debug, Deserialize)]
pub struct VerifyPhoneRequest {
    pub verification_id: String,
    #[serde(default)]
    pub phone: String,
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Send (pretend to send) an OTP to the phone number
pub async fn verify_phone(
    State(state): State<AppState>,
    Json(input): Json<VerifyPhoneRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .auth
        .verify_phone(&input.verification_id, &input.phone)
        .await?;

    let language = language_from(input.lang.as_deref());
    Ok(Json(MessageResponse {
        message: translate(language, "otpSent").to_string(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct ConfirmOtpRequest {
    pub verification_id: String,
    #[serde(default)]
    pub otp: String,
}

/// Confirm the OTP and sign in as the new user
pub async fn confirm_otp(
    State(state): State<AppState>,
    Json(input): Json<ConfirmOtpRequest>,
) -> AppResult<Json<Session>> {
    let session = state
        .auth
        .confirm_otp(&input.verification_id, &input.otp)
        .await?;
    Ok(Json(session))
}

/// Sign out
pub async fn logout(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.auth.logout().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// The signed-in user's profile
pub async fn me(current_user: CurrentUser) -> Json<UserProfile> {
    Json(current_user.0.profile)
}
