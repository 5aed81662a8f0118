use crate::error::{Error, Result};
use herkunft_config::referrer::{Configuration, TokenEncoding};
use smol_str::SmolStr;
use std::time::Duration;

/// Path substring that is never attributed, whether configured or not
pub const FAVICON_PATH: &str = "favicon.ico";

const MIN_TTL: Duration = Duration::from_secs(1);

/// Largest TTL a cookie `Max-Age` can express
#[allow(clippy::cast_sign_loss)]
const MAX_TTL_MS: u128 = i64::MAX as u128;

#[inline]
fn is_tchar(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(ch)
}

/// Read-only settings shared by every request
///
/// Assembled once at startup. Construct it through [`Config::from_configuration`] or run
/// [`Config::validate`] on a hand-built value before handing it out.
#[derive(Clone, Debug)]
pub struct Config {
    pub cookie_name: SmolStr,
    pub ttl: Duration,
    /// Substrings of the raw referrer that suppress attribution
    pub blocked_domains: Vec<String>,
    /// Substrings of the request path that suppress attribution
    pub blocked_paths: Vec<String>,
    /// Substring the `Accept` header has to contain
    pub required_accept: Option<String>,
    pub token_encoding: TokenEncoding,
    pub verbose: bool,
}

impl Config {
    pub fn from_configuration(config: &Configuration) -> Result<Self> {
        let config = Self {
            cookie_name: config.cookie_name.clone(),
            ttl: Duration::from_millis(config.ttl),
            blocked_domains: config.blocked_domains.clone(),
            blocked_paths: config.blocked_paths.clone(),
            required_accept: config
                .required_accept
                .clone()
                .filter(|accept| !accept.is_empty()),
            token_encoding: config.token_encoding,
            verbose: config.verbose,
        };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cookie_name.is_empty() || !self.cookie_name.chars().all(is_tchar) {
            return Err(Error::InvalidCookieName(self.cookie_name.clone()));
        }

        if self.ttl < MIN_TTL || self.ttl.as_millis() > MAX_TTL_MS {
            return Err(Error::InvalidTtl(self.ttl.as_millis()));
        }

        if self
            .blocked_domains
            .iter()
            .chain(self.blocked_paths.iter())
            .any(String::is_empty)
        {
            return Err(Error::EmptyBlocklistEntry);
        }

        Ok(())
    }

    /// Blocked path substrings, including the implicit favicon entry
    pub fn blocked_paths(&self) -> impl Iterator<Item = &str> {
        self.blocked_paths
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(FAVICON_PATH))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_configuration(&Configuration::default())
            .expect("[Bug] Default configuration is invalid")
    }
}
