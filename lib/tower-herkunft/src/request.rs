use cookie::Cookie;
use http::{
    header::{self, AsHeaderName, HeaderName},
    uri::{Authority, PathAndQuery},
    HeaderMap, Request,
};
use std::borrow::Cow;

const X_FORWARDED_PROTO: HeaderName = HeaderName::from_static("x-forwarded-proto");

/// Header value as a string, empty if it's missing or not visible ASCII
pub fn header_str<K>(headers: &HeaderMap, key: K) -> &str
where
    K: AsHeaderName,
{
    headers
        .get(key)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// Raw referrer, empty if absent
///
/// Non-ASCII bytes are replaced rather than dropping the whole header, a mangled link is still a link.
pub fn referrer(headers: &HeaderMap) -> Cow<'_, str> {
    headers
        .get(header::REFERER)
        .map_or(Cow::Borrowed(""), |value| {
            String::from_utf8_lossy(value.as_bytes())
        })
}

/// Value of the first cookie with the given name
///
/// Unparseable cookie pairs are skipped.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    for header in headers.get_all(header::COOKIE) {
        let Ok(value_str) = header.to_str() else {
            continue;
        };

        for cookie in Cookie::split_parse(value_str) {
            let Ok(cookie) = cookie else {
                continue;
            };

            if cookie.name() == name {
                return Some(cookie.value_trimmed().to_owned());
            }
        }
    }

    None
}

/// Fully-qualified URL of the request
///
/// The scheme comes from the first `X-Forwarded-Proto` entry, then the request URI, then the fallback.
pub fn canonical_uri<B>(req: &Request<B>, default_scheme: &str) -> String {
    let forwarded_proto = header_str(req.headers(), X_FORWARDED_PROTO)
        .split(',')
        .next()
        .map(str::trim)
        .filter(|proto| !proto.is_empty());

    let scheme = forwarded_proto
        .or_else(|| req.uri().scheme_str())
        .unwrap_or(default_scheme);

    let host = Some(header_str(req.headers(), header::HOST))
        .filter(|host| !host.is_empty())
        .or_else(|| req.uri().authority().map(Authority::as_str))
        .unwrap_or_default();

    let path = req
        .uri()
        .path_and_query()
        .map_or("/", PathAndQuery::as_str);

    format!("{scheme}://{host}{path}")
}
