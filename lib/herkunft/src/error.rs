use smol_str::SmolStr;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Blocklist entries must not be empty")]
    EmptyBlocklistEntry,

    #[error("Medium engine returned an empty medium")]
    EmptyMedium,

    #[error("Medium engine failed")]
    Engine(#[source] BoxError),

    #[error("Invalid cookie name {0:?}")]
    InvalidCookieName(SmolStr),

    #[error("TTL of {0}ms is out of range")]
    InvalidTtl(u128),
}
