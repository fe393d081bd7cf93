//! Two-factor authentication state for an account.
//!
//! The one-time-password algorithm is not implemented here: callers inject a
//! [`TotpVerifier`]. This module owns the stored secret, the single-use
//! recovery codes and the trusted-device cookie naming.

use chrono::{DateTime, Duration, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const RECOVERY_CODE_COUNT: usize = 8;
const RECOVERY_HALF_LEN: usize = 10;
const COOKIE_PREFIX: &str = "tf_";

/// Checks a one-time code against a shared secret.
pub trait TotpVerifier {
    fn verify(&self, secret: &str, code: &str) -> bool;
}

// ---------------------------------------------------------------------------
// TwoFactorState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoFactorState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(default)]
    pub recovery_codes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_at: Option<DateTime<Utc>>,
}

impl TwoFactorState {
    /// Two-factor is only in force once the secret has been confirmed.
    pub fn is_enabled(&self) -> bool {
        self.confirmed_at.is_some()
    }

    /// Store a freshly generated secret. The state stays unconfirmed until
    /// [`TwoFactorState::confirm`] is called.
    pub fn enable(&mut self, secret: impl Into<String>) {
        self.secret = Some(secret.into());
        self.confirmed_at = None;
    }

    pub fn confirm(&mut self, now: DateTime<Utc>) {
        self.confirmed_at = Some(now);
    }

    pub fn disable(&mut self) {
        self.secret = None;
        self.recovery_codes.clear();
        self.confirmed_at = None;
    }

    /// Replace the recovery codes with a new set and return it.
    pub fn generate_recovery_codes(&mut self) -> &[String] {
        self.recovery_codes = (0..RECOVERY_CODE_COUNT).map(|_| recovery_code()).collect();
        &self.recovery_codes
    }

    pub fn verify_code(&self, verifier: &dyn TotpVerifier, code: Option<&str>) -> bool {
        match (self.secret.as_deref(), code) {
            (Some(secret), Some(code)) if !code.is_empty() => verifier.verify(secret, code),
            _ => false,
        }
    }

    /// Accept `code` if it is an unused recovery code. A match is consumed.
    pub fn verify_recovery_code(&mut self, code: &str) -> bool {
        let code = code.trim();
        match self.recovery_codes.iter().position(|c| c == code) {
            Some(index) => {
                self.recovery_codes.remove(index);
                tracing::debug!(remaining = self.recovery_codes.len(), "recovery code used");
                true
            }
            None => false,
        }
    }
}

fn recovery_code() -> String {
    format!("{}-{}", random_alphanumeric(), random_alphanumeric())
}

fn random_alphanumeric() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RECOVERY_HALF_LEN)
        .map(char::from)
        .collect()
}

// ---------------------------------------------------------------------------
// Trusted devices
// ---------------------------------------------------------------------------

/// What a trusted-device cookie is bound to. Changing the password or moving
/// to another browser yields a different cookie name.
#[derive(Debug, Clone)]
pub struct DeviceFingerprint<'a> {
    pub user_id: &'a str,
    pub password_hash: &'a str,
    pub device_id: &'a str,
    pub user_agent: &'a str,
}

pub fn trusted_device_cookie_name(fingerprint: &DeviceFingerprint<'_>) -> String {
    let input = format!(
        "{}{}{}{}",
        fingerprint.user_id,
        fingerprint.password_hash,
        fingerprint.device_id,
        fingerprint.user_agent
    );
    format!("{COOKIE_PREFIX}{:x}", Sha256::digest(input.as_bytes()))
}

/// How long a device stays trusted. `None` disables device trust.
pub fn trust_duration(days: Option<u32>) -> Option<Duration> {
    days.filter(|&d| d > 0).map(|d| Duration::days(i64::from(d)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
