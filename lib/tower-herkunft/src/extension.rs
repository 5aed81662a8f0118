use herkunft::StoredReferral;
use std::ops::Deref;
use triomphe::Arc;

/// Attribution stored before the current request arrived
///
/// Empty if the visitor had no (valid) attribution cookie.
/// An attribution made while handling the current request only shows up on the next one.
#[derive(Clone, Debug, Default)]
pub struct OriginalReferrer(pub(crate) Arc<StoredReferral>);

impl OriginalReferrer {
    #[must_use]
    pub fn new(stored: StoredReferral) -> Self {
        Self(Arc::new(stored))
    }
}

impl Deref for OriginalReferrer {
    type Target = StoredReferral;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(feature = "axum")]
mod axum_impl {
    use super::OriginalReferrer;
    use axum_core::extract::FromRequestParts;
    use http::request::Parts;
    use std::convert::Infallible;

    impl<S> FromRequestParts<S> for OriginalReferrer
    where
        S: Sync,
    {
        type Rejection = Infallible;

        async fn from_request_parts(
            parts: &mut Parts,
            _state: &S,
        ) -> Result<Self, Self::Rejection> {
            let referrer = parts
                .extensions
                .get::<Self>()
                .cloned()
                .unwrap_or_default();

            Ok(referrer)
        }
    }
}
