use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// 30 days in milliseconds
const DEFAULT_TTL: u64 = 30 * 86_400_000;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenEncoding {
    #[default]
    Plain,
    Base64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Configuration {
    pub cookie_name: SmolStr,
    /// Lifetime of the cookie in milliseconds
    pub ttl: u64,
    pub blocked_domains: Vec<String>,
    pub blocked_paths: Vec<String>,
    pub required_accept: Option<String>,
    pub verbose: bool,
    pub token_encoding: TokenEncoding,
    /// Custom referer table replacing the embedded one
    pub rules_file: Option<SmolStr>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            cookie_name: SmolStr::new_static("ref"),
            ttl: DEFAULT_TTL,
            blocked_domains: Vec::new(),
            blocked_paths: Vec::new(),
            required_accept: None,
            verbose: false,
            token_encoding: TokenEncoding::default(),
            rules_file: None,
        }
    }
}
