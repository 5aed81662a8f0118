use crate::{
    config::Config,
    error::{Error, Result},
    medium::{Classification, Medium, MediumEngine},
    record::ReferralRecord,
};
use std::time::{SystemTime, UNIX_EPOCH};

const DIRECT: &str = "direct";
const LINK: &str = "link";
const SOURCE_SEPARATOR: &str = " - ";

/// Everything the classifier needs to know about a single request
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestFacts<'a> {
    /// Referrer header as received (empty if absent)
    pub raw_referrer: &'a str,
    /// Fully-qualified URL of the request
    pub canonical_uri: &'a str,
    pub request_path: &'a str,
    pub accept: &'a str,
    /// Value of the attribution cookie (empty if absent or unusable)
    pub existing_token: &'a str,
}

/// Why a request wasn't attributed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyAttributed,
    NotAcceptable,
    BlockedDomain,
    BlockedPath,
    Internal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Attribute {
        record: ReferralRecord,
        search_term: Option<String>,
    },
    Skip(SkipReason),
}

impl Verdict {
    #[must_use]
    pub fn into_record(self) -> Option<ReferralRecord> {
        match self {
            Self::Attribute { record, .. } => Some(record),
            Self::Skip(..) => None,
        }
    }
}

fn gate(config: &Config, facts: &RequestFacts<'_>) -> Option<SkipReason> {
    if !facts.existing_token.is_empty() {
        return Some(SkipReason::AlreadyAttributed);
    }

    if let Some(ref accept) = config.required_accept {
        if !facts.accept.contains(accept.as_str()) {
            return Some(SkipReason::NotAcceptable);
        }
    }

    if config
        .blocked_domains
        .iter()
        .any(|domain| facts.raw_referrer.contains(domain.as_str()))
    {
        return Some(SkipReason::BlockedDomain);
    }

    if config
        .blocked_paths()
        .any(|path| facts.request_path.contains(path))
    {
        return Some(SkipReason::BlockedPath);
    }

    None
}

/// Human-readable medium, or `None` for same-site navigation
fn label(classification: Classification, raw_referrer: &str) -> Option<String> {
    let label = match (classification.medium, classification.source) {
        (Medium::Internal, _) => return None,
        (Medium::Unknown, Some(source)) => source.into(),
        (Medium::Unknown, None) if raw_referrer.is_empty() => DIRECT.into(),
        (Medium::Unknown, None) => LINK.into(),
        (medium, Some(source)) => [medium.as_str(), source.as_str()].join(SOURCE_SEPARATOR),
        (medium, None) => medium.as_str().into(),
    };

    Some(label)
}

fn unix_millis(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |since| u64::try_from(since.as_millis()).unwrap_or(u64::MAX))
}

/// Decide whether the request gets attributed and build its record
///
/// Errors are only ever returned when the medium engine misbehaves.
/// Callers should treat them like a skip.
pub fn classify<E>(
    config: &Config,
    engine: &E,
    facts: &RequestFacts<'_>,
    now: SystemTime,
) -> Result<Verdict>
where
    E: MediumEngine + ?Sized,
{
    if let Some(reason) = gate(config, facts) {
        return Ok(Verdict::Skip(reason));
    }

    let mut classification = engine
        .classify(facts.raw_referrer, facts.canonical_uri)
        .map_err(Error::Engine)?;

    if classification.medium.as_str().is_empty() {
        return Err(Error::EmptyMedium);
    }

    let search_term = classification.term.take();
    let Some(medium) = label(classification, facts.raw_referrer) else {
        return Ok(Verdict::Skip(SkipReason::Internal));
    };

    let record = ReferralRecord {
        medium,
        observed_at: unix_millis(now),
        raw_referrer: facts.raw_referrer.to_owned(),
        canonical_uri: facts.canonical_uri.to_owned(),
    };

    Ok(Verdict::Attribute {
        record,
        search_term,
    })
}
