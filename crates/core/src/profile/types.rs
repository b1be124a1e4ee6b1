use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The consolidated profile of one customer.
///
/// Produced by merging the three upstream payloads and cached in both the
/// volatile and the durable tier. `cached_at` is only set once the record has
/// been written to the durable tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub identifier: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub tax_country: String,
    pub income: Option<i64>,
    pub cached_at: Option<DateTime<Utc>>,
}

impl CustomerRecord {
    /// Creates an empty record for the given identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            first_name: String::new(),
            last_name: String::new(),
            address: String::new(),
            phone_number: None,
            email: None,
            tax_country: String::new(),
            income: None,
            cached_at: None,
        }
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_tax_country(mut self, tax_country: impl Into<String>) -> Self {
        self.tax_country = tax_country.into();
        self
    }

    pub fn with_income(mut self, income: i64) -> Self {
        self.income = Some(income);
        self
    }

    /// Marks the record as written to the durable tier at `cached_at`.
    pub fn with_cached_at(mut self, cached_at: DateTime<Utc>) -> Self {
        self.cached_at = Some(cached_at);
        self
    }

    /// Returns true if every field except `cached_at` matches `other`.
    pub fn same_content(&self, other: &CustomerRecord) -> bool {
        Self {
            cached_at: None,
            ..self.clone()
        } == Self {
            cached_at: None,
            ..other.clone()
        }
    }
}
