//! Authentication endpoints: email/password, OAuth linking, phone OTP and
//! guest login. Every success returns a sanitized profile - the password
//! digest never leaves the server.

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use sewa_domain::{
    LoginRequest, OauthRequest, OtpSendRequest, OtpSendResponse, OtpVerifyRequest, Provider, Role,
    SignupRequest, UserProfile,
};

use crate::auth::RedeemError;
use crate::error::ApiError;
use crate::kernel::ServerDeps;

pub async fn signup(
    Extension(deps): Extension<ServerDeps>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserProfile>), ApiError> {
    if deps.users.find_by_email(&req.email).await?.is_some() {
        return Err(ApiError::DuplicateUser);
    }

    let role = req.role.unwrap_or(Role::Citizen);
    let user = deps
        .users
        .insert(UserProfile::local(req.name, req.email, &req.password, role))
        .await?;

    Ok((StatusCode::CREATED, Json(user.sanitized())))
}

pub async fn login(
    Extension(deps): Extension<ServerDeps>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    let user = deps
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if user.provider != Provider::Local || !user.password_matches(&req.password) {
        return Err(ApiError::InvalidCredentials);
    }

    Ok(Json(user.sanitized()))
}

/// Find by email or (provider, providerId); link the provider onto an
/// existing unlinked account; otherwise create a fresh citizen profile.
pub async fn oauth(
    Extension(deps): Extension<ServerDeps>,
    Json(req): Json<OauthRequest>,
) -> Result<(StatusCode, Json<UserProfile>), ApiError> {
    let existing = match deps.users.find_by_email(&req.email).await? {
        Some(user) => Some(user),
        None => {
            deps.users
                .find_by_provider(req.provider, &req.provider_id)
                .await?
        }
    };

    if let Some(mut user) = existing {
        if user.provider != req.provider && user.provider_id.is_none() {
            user.provider = req.provider;
            user.provider_id = Some(req.provider_id);
            user = deps.users.update(user).await?;
        }
        return Ok((StatusCode::OK, Json(user.sanitized())));
    }

    let user = deps
        .users
        .insert(UserProfile::oauth(
            req.name,
            req.email,
            req.provider,
            req.provider_id,
            req.avatar,
        ))
        .await?;

    Ok((StatusCode::CREATED, Json(user.sanitized())))
}

pub async fn otp_send(
    Extension(deps): Extension<ServerDeps>,
    Json(req): Json<OtpSendRequest>,
) -> Result<Json<OtpSendResponse>, ApiError> {
    if req.phone_number.trim().is_empty() {
        return Err(ApiError::Validation("Phone number required".into()));
    }

    let code = deps.otp.issue(&req.phone_number).await;
    deps.sms.send_code(&req.phone_number, &code).await?;

    Ok(Json(OtpSendResponse {
        message: "OTP sent successfully".into(),
        mock_otp: code,
    }))
}

pub async fn otp_verify(
    Extension(deps): Extension<ServerDeps>,
    Json(req): Json<OtpVerifyRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    deps.otp
        .redeem(&req.phone_number, &req.otp)
        .await
        .map_err(|e| match e {
            RedeemError::NotRequested => ApiError::OtpNotRequested,
            RedeemError::Expired => ApiError::OtpExpired,
            RedeemError::InvalidCode => ApiError::OtpInvalid,
        })?;

    // Idempotent per phone number: repeat verifications land on the same
    // identity, never a duplicate.
    let user = match deps.users.find_by_phone(&req.phone_number).await? {
        Some(user) => user,
        None => {
            let name = req.name.unwrap_or_else(|| "Mobile User".into());
            deps.users
                .insert(UserProfile::phone(name, req.phone_number))
                .await?
        }
    };

    Ok(Json(user.sanitized()))
}

pub async fn guest(
    Extension(deps): Extension<ServerDeps>,
) -> Result<(StatusCode, Json<UserProfile>), ApiError> {
    let user = deps.users.insert(UserProfile::guest(Utc::now())).await?;
    Ok((StatusCode::CREATED, Json(user.sanitized())))
}
