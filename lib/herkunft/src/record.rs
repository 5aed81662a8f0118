use serde::Serialize;

/// Attribution of a session to its first referrer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferralRecord {
    /// Human-readable classification, e.g. `search - google`, `link` or `direct`
    pub medium: String,

    /// Milliseconds since the UNIX epoch
    pub observed_at: u64,

    /// Referrer header as received, possibly empty
    pub raw_referrer: String,

    /// URL of the page the visitor landed on
    pub canonical_uri: String,
}

/// Attribution as read back from a stored token
///
/// All fields are empty if there was no token or it couldn't be decoded.
/// The timestamp stays in its textual form since the token might be foreign.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReferral {
    pub medium: String,
    pub observed_at: String,
    pub raw_referrer: String,
    pub canonical_uri: String,
}

impl StoredReferral {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.medium.is_empty()
            && self.observed_at.is_empty()
            && self.raw_referrer.is_empty()
            && self.canonical_uri.is_empty()
    }

    #[must_use]
    pub fn observed_at_millis(&self) -> Option<u64> {
        self.observed_at.parse().ok()
    }
}

impl From<ReferralRecord> for StoredReferral {
    fn from(value: ReferralRecord) -> Self {
        Self {
            medium: value.medium,
            observed_at: value.observed_at.to_string(),
            raw_referrer: value.raw_referrer,
            canonical_uri: value.canonical_uri,
        }
    }
}
