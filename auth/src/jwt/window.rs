use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

/// Validity window of an issued token, as Unix timestamps for `iat`/`exp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenWindow {
    pub issued_at: i64,
    pub expires_at: i64,
}

impl TokenWindow {
    /// Window opening at `now` and lasting `lifetime`.
    pub fn starting_at(now: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            issued_at: now.timestamp(),
            expires_at: (now + lifetime).timestamp(),
        }
    }

    pub fn starting_now(lifetime: Duration) -> Self {
        Self::starting_at(Utc::now(), lifetime)
    }
}
