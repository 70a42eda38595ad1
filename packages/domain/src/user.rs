//! User identity types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Platform role. Closed set; match exhaustively wherever role-specific
/// behavior occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Citizen,
    Ngo,
    Govt,
    Volunteer,
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::Citizen
    }
}

/// How an account was established. Closed set, mirrors the supported
/// sign-in methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Provider {
    Local,
    Phone,
    Guest,
    Google,
    Microsoft,
    Yahoo,
    Apple,
}

/// A registered identity. Email and phone number are each unique when
/// present; either may be absent depending on the provider.
///
/// `password_hash` is only ever `Some` for `Provider::Local` accounts and
/// must be stripped with [`UserProfile::sanitized`] before a profile leaves
/// the server or is handed to UI code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    pub provider: Provider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    pub role: Role,
    pub karma_points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserProfile {
    /// New email/password account.
    pub fn local(name: String, email: String, password: &str, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email: Some(email),
            phone_number: None,
            password_hash: Some(password_digest(password)),
            provider: Provider::Local,
            provider_id: None,
            role,
            karma_points: 0,
            avatar: None,
        }
    }

    /// New account established through OTP verification of a phone number.
    pub fn phone(name: String, phone_number: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email: None,
            phone_number: Some(phone_number),
            password_hash: None,
            provider: Provider::Phone,
            provider_id: None,
            role: Role::Citizen,
            karma_points: 0,
            avatar: None,
        }
    }

    /// New account created on first OAuth sign-in.
    pub fn oauth(
        name: String,
        email: String,
        provider: Provider,
        provider_id: String,
        avatar: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email: Some(email),
            phone_number: None,
            password_hash: None,
            provider,
            provider_id: Some(provider_id),
            role: Role::Citizen,
            karma_points: 0,
            avatar,
        }
    }

    /// Throwaway guest account. The name carries the last four digits of
    /// the creation timestamp so guests are tellable apart.
    pub fn guest(created_at: DateTime<Utc>) -> Self {
        let millis = created_at.timestamp_millis();
        let tag = format!("{:04}", millis.rem_euclid(10_000));
        Self {
            id: Uuid::new_v4(),
            name: format!("Guest {tag}"),
            email: Some(format!("guest_{millis}@sewa.local")),
            phone_number: None,
            password_hash: None,
            provider: Provider::Guest,
            provider_id: None,
            role: Role::Citizen,
            karma_points: 0,
            avatar: None,
        }
    }

    /// Copy with the password digest removed, safe to serialize into a
    /// response or a session record.
    pub fn sanitized(&self) -> Self {
        Self {
            password_hash: None,
            ..self.clone()
        }
    }

    /// Check a login attempt against the stored digest. Always false for
    /// accounts without one (OAuth, phone, guest).
    pub fn password_matches(&self, candidate: &str) -> bool {
        match &self.password_hash {
            Some(digest) => *digest == password_digest(candidate),
            None => false,
        }
    }
}

/// SHA-256 hex digest used for password storage.
pub fn password_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
