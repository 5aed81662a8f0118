use crate::{event::VisitEvent, extension::OriginalReferrer, request, ResponseFuture};
use cookie::{
    time::{Duration, OffsetDateTime},
    Cookie,
};
use herkunft::{
    classify, Config, MediumEngine, ReferralRecord, RequestFacts, StoredReferral, TokenCodec,
    Verdict,
};
use http::{header, HeaderValue, Method, Request, Response};
use smol_str::SmolStr;
use std::{
    task::{self, Poll},
    time::SystemTime,
};
use tower::Service;
use triomphe::Arc;

pub struct Shared<E> {
    pub(crate) codec: TokenCodec,
    pub(crate) config: Config,
    pub(crate) default_scheme: SmolStr,
    pub(crate) engine: E,
}

impl<E> Shared<E>
where
    E: MediumEngine,
{
    fn set_cookie(&self, record: &ReferralRecord) -> Option<HeaderValue> {
        let max_age =
            Duration::seconds(i64::try_from(self.config.ttl.as_secs()).unwrap_or(i64::MAX));

        let mut cookie = Cookie::build((
            self.config.cookie_name.as_str(),
            self.codec.encode(record),
        ))
        .path("/")
        .max_age(max_age)
        .build();

        if let Some(expires) = OffsetDateTime::now_utc().checked_add(max_age) {
            cookie.set_expires(expires);
        }

        match HeaderValue::from_str(&cookie.to_string()) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(?error, "attribution cookie isn't a valid header value");
                None
            }
        }
    }

    fn attribute<B>(
        &self,
        req: &Request<B>,
        stored: &StoredReferral,
        token: &str,
    ) -> Option<(HeaderValue, Option<VisitEvent>)> {
        let headers = req.headers();
        let raw_referrer = request::referrer(headers);
        let canonical_uri = request::canonical_uri(req, &self.default_scheme);

        let facts = RequestFacts {
            raw_referrer: &raw_referrer,
            canonical_uri: &canonical_uri,
            request_path: req.uri().path(),
            accept: request::header_str(headers, header::ACCEPT),
            // Unreadable cookies don't count as an attribution
            existing_token: if stored.is_empty() { "" } else { token },
        };

        let (record, search_term) =
            match classify(&self.config, &self.engine, &facts, SystemTime::now()) {
                Ok(Verdict::Attribute {
                    record,
                    search_term,
                }) => (record, search_term),
                Ok(Verdict::Skip(reason)) => {
                    debug!(?reason, "skipping attribution");
                    return None;
                }
                Err(error) => {
                    warn!(?error, referrer = %raw_referrer, "failed to classify referrer");
                    return None;
                }
            };

        let set_cookie = self.set_cookie(&record)?;
        let event = self.config.verbose.then(|| {
            VisitEvent::new(
                record,
                request::header_str(headers, header::USER_AGENT),
                search_term,
            )
        });

        Some((set_cookie, event))
    }
}

pub struct HerkunftService<S, E> {
    inner: S,
    shared: Arc<Shared<E>>,
}

impl<S, E> HerkunftService<S, E> {
    pub(crate) fn new(inner: S, shared: Arc<Shared<E>>) -> Self {
        Self { inner, shared }
    }
}

impl<S, E> Clone for HerkunftService<S, E>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<S, E, ReqBody, ResBody> Service<Request<ReqBody>> for HerkunftService<S, E>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    E: MediumEngine,
{
    type Error = S::Error;
    type Future = ResponseFuture<S::Future>;
    type Response = S::Response;

    #[inline]
    fn poll_ready(&mut self, cx: &mut task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        let token = request::cookie_value(req.headers(), &self.shared.config.cookie_name);
        let stored = self.shared.codec.decode(token.as_deref());

        let attribution = if req.method() == Method::GET {
            self.shared
                .attribute(&req, &stored, token.as_deref().unwrap_or_default())
        } else {
            None
        };

        req.extensions_mut().insert(OriginalReferrer::new(stored));

        ResponseFuture {
            inner: self.inner.call(req),
            attribution,
        }
    }
}
