use async_trait::async_trait;
use chrono::NaiveDate;

use super::{ComplianceForm, ContactDetails, PersonalDetails, Result};

/// The three upstream lookups a customer profile is aggregated from.
///
/// Every method distinguishes an explicit "no data" answer (`Ok(None)`) from
/// a transport fault (`Err`).
#[async_trait]
pub trait UpstreamSource: Send + Sync {
    /// Gets the customer's name.
    async fn personal_details(&self, identifier: &str) -> Result<Option<PersonalDetails>>;

    /// Gets the customer's addresses, emails and phone numbers.
    async fn contact_details(&self, identifier: &str) -> Result<Option<ContactDetails>>;

    /// Gets the customer's compliance form as it stood on `as_of`.
    async fn compliance_form(
        &self,
        identifier: &str,
        as_of: NaiveDate,
    ) -> Result<Option<ComplianceForm>>;
}
