//! Upstream aggregation: three lookups joined into one customer record.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use profilehub_core::aggregation::{AggregationError, Result};
use profilehub_core::profile::{normalize_record, CustomerRecord};
use profilehub_core::upstream::{UpstreamKind, UpstreamSource};

/// Fetches the three upstream payloads for an identifier and normalizes them.
///
/// The lookups run concurrently. Transport faults win over absences, and
/// both are reported for the first offending source in the order personal
/// details, contact details, compliance form.
pub struct UpstreamAggregator<U>
where
    U: UpstreamSource,
{
    upstream: Arc<U>,
}

impl<U> UpstreamAggregator<U>
where
    U: UpstreamSource,
{
    pub fn new(upstream: Arc<U>) -> Self {
        Self { upstream }
    }

    /// Fetches a record using today's UTC date for the compliance form.
    pub async fn fetch(&self, identifier: &str) -> Result<CustomerRecord> {
        self.fetch_as_of(identifier, Utc::now().date_naive()).await
    }

    /// Fetches a record using the compliance form as it stood on `as_of`.
    ///
    /// The returned record has no `cached_at`; only the durable tier sets it.
    pub async fn fetch_as_of(&self, identifier: &str, as_of: NaiveDate) -> Result<CustomerRecord> {
        tracing::trace!(identifier, %as_of, "Fetching upstream data");

        let (personal, contact, form) = tokio::join!(
            self.upstream.personal_details(identifier),
            self.upstream.contact_details(identifier),
            self.upstream.compliance_form(identifier, as_of),
        );
        let (personal, contact, form) = (personal?, contact?, form?);

        let incomplete = |missing: UpstreamKind| AggregationError::IncompleteUpstreamData {
            identifier: identifier.to_string(),
            missing,
        };
        let personal = personal.ok_or_else(|| incomplete(UpstreamKind::PersonalDetails))?;
        let contact = contact.ok_or_else(|| incomplete(UpstreamKind::ContactDetails))?;
        let form = form.ok_or_else(|| incomplete(UpstreamKind::ComplianceForm))?;

        Ok(normalize_record(identifier, &personal, &contact, &form))
    }
}
