use crate::error::BoxError;
use smol_str::SmolStr;
use std::fmt;

/// Coarse category of a referrer
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Medium {
    /// Referrer is on the same site as the request
    Internal,
    /// Engine couldn't classify the referrer
    Unknown,
    Email,
    Paid,
    Search,
    Social,
    Other(SmolStr),
}

impl Medium {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Internal => "internal",
            Self::Unknown => "unknown",
            Self::Email => "email",
            Self::Paid => "paid",
            Self::Search => "search",
            Self::Social => "social",
            Self::Other(tag) => tag.as_str(),
        }
    }
}

impl From<&str> for Medium {
    fn from(value: &str) -> Self {
        match value {
            "internal" => Self::Internal,
            "unknown" => Self::Unknown,
            "email" => Self::Email,
            "paid" => Self::Paid,
            "search" => Self::Search,
            "social" => Self::Social,
            other => Self::Other(other.into()),
        }
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Judgement of a medium engine about a referrer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub medium: Medium,
    /// Specific origin within the medium, e.g. `google`
    pub source: Option<SmolStr>,
    /// Search term extracted from the referrer, if the engine knows where to find one
    pub term: Option<String>,
}

impl Classification {
    #[must_use]
    pub fn new(medium: Medium) -> Self {
        Self {
            medium,
            source: None,
            term: None,
        }
    }

    #[must_use]
    pub fn with_source(self, source: impl Into<SmolStr>) -> Self {
        Self {
            source: Some(source.into()),
            ..self
        }
    }

    #[must_use]
    pub fn with_term(self, term: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
            ..self
        }
    }
}

/// Classifies a referrer relative to the URL it led to
///
/// Implementations must be pure and non-blocking; they run inline with request processing.
pub trait MediumEngine: Send + Sync {
    fn classify(&self, referrer: &str, target: &str) -> Result<Classification, BoxError>;
}

impl<F> MediumEngine for F
where
    F: Fn(&str, &str) -> Result<Classification, BoxError> + Send + Sync,
{
    #[inline]
    fn classify(&self, referrer: &str, target: &str) -> Result<Classification, BoxError> {
        self(referrer, target)
    }
}
