//! Scripted upstream for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use profilehub_core::upstream::{
    Address, ComplianceForm, ContactDetails, EmailAddress, FormItem, PersonalDetails, PhoneNumber,
    Result, UpstreamError, UpstreamKind, UpstreamSource,
};

/// What one upstream lookup answers with.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Found(T),
    Absent,
    Unavailable,
}

impl<T: Clone> Reply<T> {
    fn answer(&self, kind: UpstreamKind) -> Result<Option<T>> {
        match self {
            Reply::Found(payload) => Ok(Some(payload.clone())),
            Reply::Absent => Ok(None),
            Reply::Unavailable => Err(UpstreamError::UnexpectedStatus { kind, status: 502 }),
        }
    }
}

/// Upstream with scripted replies and per-lookup call counters.
pub struct StubUpstream {
    personal: Mutex<Reply<PersonalDetails>>,
    contact: Mutex<Reply<ContactDetails>>,
    compliance: Mutex<Reply<ComplianceForm>>,
    last_as_of: Mutex<Option<NaiveDate>>,
    personal_calls: AtomicUsize,
    contact_calls: AtomicUsize,
    compliance_calls: AtomicUsize,
}

impl StubUpstream {
    pub fn new(
        personal: Reply<PersonalDetails>,
        contact: Reply<ContactDetails>,
        compliance: Reply<ComplianceForm>,
    ) -> Self {
        Self {
            personal: Mutex::new(personal),
            contact: Mutex::new(contact),
            compliance: Mutex::new(compliance),
            last_as_of: Mutex::new(None),
            personal_calls: AtomicUsize::new(0),
            contact_calls: AtomicUsize::new(0),
            compliance_calls: AtomicUsize::new(0),
        }
    }

    /// All three providers know Lars Larsson.
    pub fn lars() -> Self {
        Self::new(
            Reply::Found(PersonalDetails::new("Lars", "Larsson")),
            Reply::Found(
                ContactDetails::default()
                    .with_address(Address::new("Smågatan 1", "123 22", "Malmö", "Sweden"))
                    .with_email(EmailAddress::new("lars.larsson@example.com", true))
                    .with_phone_number(PhoneNumber::new("+46 70 123 45 67", true)),
            ),
            Reply::Found(ComplianceForm::new(vec![
                FormItem::new("tax_country", "SE"),
                FormItem::new("annual_income", "550000"),
            ])),
        )
    }

    pub fn set_personal(&self, reply: Reply<PersonalDetails>) {
        *self.personal.lock().unwrap() = reply;
    }

    pub fn set_contact(&self, reply: Reply<ContactDetails>) {
        *self.contact.lock().unwrap() = reply;
    }

    pub fn set_compliance(&self, reply: Reply<ComplianceForm>) {
        *self.compliance.lock().unwrap() = reply;
    }

    /// Number of personal details lookups so far.
    pub fn personal_calls(&self) -> usize {
        self.personal_calls.load(Ordering::SeqCst)
    }

    /// Number of complete fetches, counted as the largest per-lookup count.
    pub fn fetches(&self) -> usize {
        self.personal_calls
            .load(Ordering::SeqCst)
            .max(self.contact_calls.load(Ordering::SeqCst))
            .max(self.compliance_calls.load(Ordering::SeqCst))
    }

    pub fn last_as_of(&self) -> Option<NaiveDate> {
        *self.last_as_of.lock().unwrap()
    }
}

#[async_trait]
impl UpstreamSource for StubUpstream {
    async fn personal_details(&self, _identifier: &str) -> Result<Option<PersonalDetails>> {
        self.personal_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.personal.lock().unwrap().clone();
        reply.answer(UpstreamKind::PersonalDetails)
    }

    async fn contact_details(&self, _identifier: &str) -> Result<Option<ContactDetails>> {
        self.contact_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.contact.lock().unwrap().clone();
        reply.answer(UpstreamKind::ContactDetails)
    }

    async fn compliance_form(
        &self,
        _identifier: &str,
        as_of: NaiveDate,
    ) -> Result<Option<ComplianceForm>> {
        self.compliance_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_as_of.lock().unwrap() = Some(as_of);
        let reply = self.compliance.lock().unwrap().clone();
        reply.answer(UpstreamKind::ComplianceForm)
    }
}
