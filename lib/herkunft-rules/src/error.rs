use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Domain {0:?} is listed more than once")]
    DuplicateDomain(String),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
