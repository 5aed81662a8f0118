use crate::user_agent;
use herkunft::ReferralRecord;

/// Diagnostic details of an attribution, logged once its cookie is actually sent
pub struct VisitEvent {
    record: ReferralRecord,
    user_agent: String,
    search_term: Option<String>,
}

impl VisitEvent {
    pub fn new(record: ReferralRecord, user_agent: &str, search_term: Option<String>) -> Self {
        Self {
            record,
            user_agent: user_agent.to_owned(),
            search_term,
        }
    }

    pub fn emit(&self) {
        let browser = user_agent::parse(&self.user_agent);

        info!(
            target: "herkunft",
            medium = %self.record.medium,
            referrer = %self.record.raw_referrer,
            url = %self.record.canonical_uri,
            user_agent = self.user_agent.as_str(),
            browser_family = browser.family,
            browser_version = browser.version,
            search_term = self.search_term.as_deref(),
            "attributed visit"
        );
    }
}
