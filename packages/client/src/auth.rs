//! Authentication operations.
//!
//! Offline semantics: login checks the locally registered users, signup
//! registers into them, and the fixed demo code `1234` stands in for a
//! real OTP. Mock-mode failures are functional errors and surface exactly
//! like server-side ones.

use chrono::Utc;

use sewa_domain::{
    LoginRequest, OauthRequest, OtpSendRequest, OtpSendResponse, OtpVerifyRequest, ProfileUpdate,
    Role, SignupRequest, UserProfile,
};

use crate::api::{ApiClient, Sourced};
use crate::error::Error;
use crate::state::keys;

/// Demo OTP accepted by the offline path.
const MOCK_OTP: &str = "1234";

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> Result<Sourced<UserProfile>, Error> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let user = self
            .try_or_fallback("/api/auth/login", self.post("/api/auth/login", &body), || {
                let users: Vec<UserProfile> = self.read_collection(keys::USERS)?;
                users
                    .iter()
                    .find(|u| u.email.as_deref() == Some(email) && u.password_matches(password))
                    .map(|u| u.sanitized())
                    .ok_or_else(|| Error::api(401, "Invalid credentials (Mock Mode)"))
            })
            .await?;

        self.session().set(&user.value)?;
        Ok(user)
    }

    pub async fn signup(&self, req: SignupRequest) -> Result<Sourced<UserProfile>, Error> {
        let user = self
            .try_or_fallback("/api/auth/signup", self.post("/api/auth/signup", &req), || {
                let mut users: Vec<UserProfile> = self.read_collection(keys::USERS)?;
                if users.iter().any(|u| u.email.as_deref() == Some(req.email.as_str())) {
                    return Err(Error::api(400, "User already exists (Mock Mode)"));
                }
                let user = UserProfile::local(
                    req.name.clone(),
                    req.email.clone(),
                    &req.password,
                    req.role.unwrap_or(Role::Citizen),
                );
                users.push(user.clone());
                self.write_collection(keys::USERS, &users)?;
                Ok(user.sanitized())
            })
            .await?;

        self.session().set(&user.value)?;
        Ok(user)
    }

    pub async fn oauth_login(&self, req: OauthRequest) -> Result<Sourced<UserProfile>, Error> {
        let user = self
            .try_or_fallback("/api/auth/oauth", self.post("/api/auth/oauth", &req), || {
                Ok(UserProfile::oauth(
                    req.name.clone(),
                    req.email.clone(),
                    req.provider,
                    req.provider_id.clone(),
                    req.avatar.clone(),
                ))
            })
            .await?;

        self.session().set(&user.value)?;
        Ok(user)
    }

    pub async fn send_otp(&self, phone_number: &str) -> Result<Sourced<OtpSendResponse>, Error> {
        let body = OtpSendRequest {
            phone_number: phone_number.to_string(),
        };
        self.try_or_fallback(
            "/api/auth/otp/send",
            self.post("/api/auth/otp/send", &body),
            || {
                Ok(OtpSendResponse {
                    message: "OTP Sent".into(),
                    mock_otp: MOCK_OTP.into(),
                })
            },
        )
        .await
    }

    pub async fn verify_otp(
        &self,
        phone_number: &str,
        otp: &str,
        name: Option<&str>,
    ) -> Result<Sourced<UserProfile>, Error> {
        let body = OtpVerifyRequest {
            phone_number: phone_number.to_string(),
            otp: otp.to_string(),
            name: name.map(str::to_string),
        };
        let user = self
            .try_or_fallback(
                "/api/auth/otp/verify",
                self.post("/api/auth/otp/verify", &body),
                || {
                    if otp != MOCK_OTP {
                        return Err(Error::api(400, "Invalid OTP (Mock Mode)"));
                    }
                    Ok(UserProfile::phone(
                        name.unwrap_or("Mobile User").to_string(),
                        phone_number.to_string(),
                    ))
                },
            )
            .await?;

        self.session().set(&user.value)?;
        Ok(user)
    }

    pub async fn guest_login(&self) -> Result<Sourced<UserProfile>, Error> {
        let user = self
            .try_or_fallback(
                "/api/auth/guest",
                self.post_empty("/api/auth/guest"),
                || Ok(UserProfile::guest(Utc::now())),
            )
            .await?;

        self.session().set(&user.value)?;
        Ok(user)
    }

    /// Profile edits are a purely local operation: the session user is
    /// patched and, when locally registered, the stored account follows.
    pub fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile, Error> {
        let mut user = self.session().current().ok_or(Error::NoSession)?;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(avatar) = update.avatar {
            user.avatar = Some(avatar);
        }

        let mut users: Vec<UserProfile> = self.read_collection(keys::USERS)?;
        if let Some(stored) = users.iter_mut().find(|u| u.id == user.id) {
            stored.name = user.name.clone();
            stored.avatar = user.avatar.clone();
            self.write_collection(keys::USERS, &users)?;
        }

        self.session().set(&user)?;
        Ok(user)
    }

    /// Logout is purely local: drop the session record.
    pub fn logout(&self) -> Result<(), Error> {
        self.session().clear()
    }
}
