use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A pending one-time password.
#[derive(Clone, Debug)]
struct OtpRecord {
    code: String,
    expires_at: DateTime<Utc>,
}

/// Why a redeem attempt failed. `InvalidCode` leaves the record in place
/// so the user can retry within the expiry window; the other two are
/// terminal and require a fresh send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedeemError {
    NotRequested,
    Expired,
    InvalidCode,
}

/// In-memory OTP store keyed by phone number.
///
/// Codes expire after 5 minutes; expiry is checked lazily on redeem rather
/// than swept. At most one live record exists per phone number - issuing
/// again overwrites the previous code (last-write-wins).
pub struct OtpStore {
    codes: RwLock<HashMap<String, OtpRecord>>,
    ttl: Duration,
}

impl OtpStore {
    pub fn new() -> Self {
        Self::with_ttl(Duration::minutes(5))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            codes: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Issue a fresh 4-digit code for the phone number and return it.
    pub async fn issue(&self, phone_number: &str) -> String {
        let code = rand::thread_rng().gen_range(1000..=9999).to_string();
        let record = OtpRecord {
            code: code.clone(),
            expires_at: Utc::now() + self.ttl,
        };
        let mut codes = self.codes.write().await;
        codes.insert(phone_number.to_string(), record);
        code
    }

    /// Redeem a code. Success and terminal failures consume the record;
    /// a wrong code keeps it so a correct retry can still land.
    pub async fn redeem(&self, phone_number: &str, code: &str) -> Result<(), RedeemError> {
        let mut codes = self.codes.write().await;
        let record = codes.get(phone_number).ok_or(RedeemError::NotRequested)?;

        if Utc::now() > record.expires_at {
            codes.remove(phone_number);
            return Err(RedeemError::Expired);
        }
        if record.code != code {
            return Err(RedeemError::InvalidCode);
        }
        codes.remove(phone_number);
        Ok(())
    }
}

impl Default for OtpStore {
    fn default() -> Self {
        Self::new()
    }
}
