use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

fn default_scheme() -> SmolStr {
    SmolStr::new_static("http")
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    /// Scheme used for the canonical URL when neither `X-Forwarded-Proto` nor the request URI carry one
    #[serde(default = "default_scheme")]
    pub default_scheme: SmolStr,
    pub port: u16,
}
