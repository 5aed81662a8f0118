use crate::record::{ReferralRecord, StoredReferral};
use herkunft_config::referrer::TokenEncoding;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;

const DELIMITER: &str = "||";
const FIELD_COUNT: usize = 4;
const BASE64: base64_simd::Base64 = base64_simd::URL_SAFE_NO_PAD;

/// Everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
///
/// Matches JavaScript's `encodeURIComponent`. `|` is escaped, so the delimiter never shows up inside a field.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn decode_field(field: &str) -> Option<String> {
    percent_decode_str(field)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

/// Converts records into cookie-safe tokens and back
#[derive(Clone, Copy, Debug, Default)]
pub struct TokenCodec {
    encoding: TokenEncoding,
}

impl TokenCodec {
    #[must_use]
    pub fn new(encoding: TokenEncoding) -> Self {
        Self { encoding }
    }

    #[must_use]
    pub fn encode(&self, record: &ReferralRecord) -> String {
        let token = format!(
            "{medium}{DELIMITER}{observed_at}{DELIMITER}{raw_referrer}{DELIMITER}{canonical_uri}",
            medium = utf8_percent_encode(&record.medium, COMPONENT),
            observed_at = record.observed_at,
            raw_referrer = utf8_percent_encode(&record.raw_referrer, COMPONENT),
            canonical_uri = utf8_percent_encode(&record.canonical_uri, COMPONENT),
        );

        match self.encoding {
            TokenEncoding::Plain => token,
            TokenEncoding::Base64 => BASE64.encode_to_string(token.as_bytes()),
        }
    }

    /// Decode a token
    ///
    /// Never fails. Anything that isn't a token produced by [`TokenCodec::encode`] with the same
    /// encoding yields an empty [`StoredReferral`].
    #[must_use]
    pub fn decode(&self, token: Option<&str>) -> StoredReferral {
        self.try_decode(token.unwrap_or_default())
            .unwrap_or_default()
    }

    fn try_decode(&self, token: &str) -> Option<StoredReferral> {
        if token.is_empty() {
            return None;
        }

        let token: Cow<'_, str> = match self.encoding {
            TokenEncoding::Plain => Cow::Borrowed(token),
            TokenEncoding::Base64 => {
                let bytes = BASE64.decode_to_vec(token).ok()?;
                Cow::Owned(String::from_utf8(bytes).ok()?)
            }
        };

        if !token.contains(DELIMITER) {
            return None;
        }

        let parts = token.split(DELIMITER).collect::<Vec<_>>();
        if parts.len() > FIELD_COUNT {
            return None;
        }

        let field = |idx: usize| parts.get(idx).copied().unwrap_or_default();

        Some(StoredReferral {
            medium: decode_field(field(0))?,
            observed_at: field(1).to_owned(),
            raw_referrer: decode_field(field(2))?,
            canonical_uri: decode_field(field(3))?,
        })
    }
}
