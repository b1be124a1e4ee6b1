//! Mock upstream providers for development and testing.
//!
//! Serves the three upstream endpoints from a fixed set of customers so the
//! whole aggregate-and-cache path can run without the real providers:
//!
//! - `GET /personal-details/{id}`
//! - `GET /contact-details/{id}`
//! - `GET /compliance-forms/{id}/{as_of}`
//!
//! Unknown identifiers, and customers without a given payload, answer 404.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Serialize;

use profilehub_core::upstream::{
    Address, ComplianceForm, ContactDetails, EmailAddress, FormItem, PersonalDetails, PhoneNumber,
};

/// Payloads the mock answers with for one customer.
///
/// A `None` payload is served as 404.
#[derive(Debug, Clone, Default)]
pub struct MockCustomer {
    pub personal: Option<PersonalDetails>,
    pub contact: Option<ContactDetails>,
    pub compliance: Option<ComplianceForm>,
}

impl MockCustomer {
    /// A customer every provider knows about.
    pub fn complete(
        personal: PersonalDetails,
        contact: ContactDetails,
        compliance: ComplianceForm,
    ) -> Self {
        Self {
            personal: Some(personal),
            contact: Some(contact),
            compliance: Some(compliance),
        }
    }
}

/// Mock upstream server state.
#[derive(Debug, Clone, Default)]
pub struct MockUpstream {
    customers: HashMap<String, MockCustomer>,
}

impl MockUpstream {
    /// Creates a mock that knows no customers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a customer.
    pub fn with_customer(mut self, identifier: impl Into<String>, customer: MockCustomer) -> Self {
        self.customers.insert(identifier.into(), customer);
        self
    }

    /// Creates a mock seeded with demo customers.
    ///
    /// - `19800101-1234`: complete, lowercase form keys, preferred contacts
    /// - `19900202-5678`: complete, capitalized form keys, no preferred flags
    /// - `19700303-9999`: personal details only
    pub fn with_demo_data() -> Self {
        let lars = MockCustomer::complete(
            PersonalDetails::new("Lars", "Larsson"),
            ContactDetails::default()
                .with_address(Address::new("Smågatan 1", "123 22", "Malmö", "Sweden"))
                .with_email(EmailAddress::new("lars.larsson@example.com", true))
                .with_phone_number(PhoneNumber::new("+46 70 123 45 67", true)),
            ComplianceForm::new(vec![
                FormItem::new("tax_country", "SE"),
                FormItem::new("annual_income", "550000"),
            ]),
        );

        let anna = MockCustomer::complete(
            PersonalDetails::new("Anna", "Andersson"),
            ContactDetails::default()
                .with_address(Address::new("Kungsgatan 12", "111 43", "Stockholm", "Sweden"))
                .with_address(Address::new("Strandvägen 3", "114 51", "Stockholm", "Sweden"))
                .with_email(EmailAddress::new("anna@example.com", false))
                .with_email(EmailAddress::new("anna.andersson@example.com", false))
                .with_phone_number(PhoneNumber::new("+46 73 555 01 02", false)),
            ComplianceForm::new(vec![
                FormItem::new("Tax_Country", "SE"),
                FormItem::new("Annual_Income", "not disclosed"),
            ]),
        );

        let olle = MockCustomer {
            personal: Some(PersonalDetails::new("Olle", "Olsson")),
            ..MockCustomer::default()
        };

        Self::new()
            .with_customer("19800101-1234", lars)
            .with_customer("19900202-5678", anna)
            .with_customer("19700303-9999", olle)
    }

    /// Builds the router serving the three upstream endpoints.
    pub fn router(self) -> Router {
        Router::new()
            .route("/personal-details/{id}", get(personal_details))
            .route("/contact-details/{id}", get(contact_details))
            .route("/compliance-forms/{id}/{as_of}", get(compliance_form))
            .with_state(Arc::new(self))
    }
}

type MockState = Arc<MockUpstream>;

fn found_or_404<T: Serialize>(payload: Option<T>) -> Response {
    match payload {
        Some(payload) => Json(payload).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn personal_details(State(mock): State<MockState>, Path(id): Path<String>) -> Response {
    found_or_404(mock.customers.get(&id).and_then(|c| c.personal.clone()))
}

async fn contact_details(State(mock): State<MockState>, Path(id): Path<String>) -> Response {
    found_or_404(mock.customers.get(&id).and_then(|c| c.contact.clone()))
}

async fn compliance_form(
    State(mock): State<MockState>,
    Path((id, as_of)): Path<(String, NaiveDate)>,
) -> Response {
    tracing::trace!(identifier = %id, %as_of, "Mock compliance form requested");
    found_or_404(mock.customers.get(&id).and_then(|c| c.compliance.clone()))
}
