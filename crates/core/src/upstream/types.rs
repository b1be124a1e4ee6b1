//! Raw payload shapes returned by the upstream providers.
//!
//! These mirror the upstream JSON as closely as possible. They are transient:
//! the normalizer turns them into a [`CustomerRecord`](crate::profile::CustomerRecord)
//! and they are dropped afterwards.

use serde::{Deserialize, Serialize};

use crate::serde_ext::{deserialize_null_default, deserialize_optional_string};

/// Personal details payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDetails {
    #[serde(
        rename = "firstName",
        alias = "first_name",
        default,
        deserialize_with = "deserialize_optional_string"
    )]
    pub first_name: Option<String>,
    #[serde(
        rename = "lastName",
        alias = "last_name",
        default,
        deserialize_with = "deserialize_optional_string"
    )]
    pub last_name: Option<String>,
}

impl PersonalDetails {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }
}

/// A postal address. Any part may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub street: Option<String>,
    #[serde(
        alias = "postalCode",
        default,
        deserialize_with = "deserialize_optional_string"
    )]
    pub postal_code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub country: Option<String>,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: Some(street.into()),
            postal_code: Some(postal_code.into()),
            city: Some(city.into()),
            country: Some(country.into()),
        }
    }

    /// Returns the address parts in display order.
    pub fn parts(&self) -> [Option<&str>; 4] {
        [
            self.street.as_deref(),
            self.postal_code.as_deref(),
            self.city.as_deref(),
            self.country.as_deref(),
        ]
    }
}

/// An email address, optionally flagged as the preferred one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub preferred: bool,
    #[serde(
        rename = "address",
        alias = "email_address",
        default,
        deserialize_with = "deserialize_optional_string"
    )]
    pub email_address: Option<String>,
}

impl EmailAddress {
    pub fn new(email_address: impl Into<String>, preferred: bool) -> Self {
        Self {
            preferred,
            email_address: Some(email_address.into()),
        }
    }
}

/// A phone number, optionally flagged as the preferred one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub preferred: bool,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub number: Option<String>,
}

impl PhoneNumber {
    pub fn new(number: impl Into<String>, preferred: bool) -> Self {
        Self {
            preferred,
            number: Some(number.into()),
        }
    }
}

/// Common shape of contact entries that carry a "preferred" flag.
pub trait ContactPoint {
    fn is_preferred(&self) -> bool;
    fn value(&self) -> Option<&str>;
}

impl ContactPoint for EmailAddress {
    fn is_preferred(&self) -> bool {
        self.preferred
    }

    fn value(&self) -> Option<&str> {
        self.email_address.as_deref()
    }
}

impl ContactPoint for PhoneNumber {
    fn is_preferred(&self) -> bool {
        self.preferred
    }

    fn value(&self) -> Option<&str> {
        self.number.as_deref()
    }
}

/// Contact details payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub addresses: Vec<Address>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub emails: Vec<EmailAddress>,
    #[serde(
        rename = "phones",
        alias = "phone_numbers",
        default,
        deserialize_with = "deserialize_null_default"
    )]
    pub phone_numbers: Vec<PhoneNumber>,
}

impl ContactDetails {
    pub fn with_address(mut self, address: Address) -> Self {
        self.addresses.push(address);
        self
    }

    pub fn with_email(mut self, email: EmailAddress) -> Self {
        self.emails.push(email);
        self
    }

    pub fn with_phone_number(mut self, phone: PhoneNumber) -> Self {
        self.phone_numbers.push(phone);
        self
    }
}

/// A single key/value answer on the compliance form.
///
/// Key casing is not consistent across upstream versions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormItem {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub key: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub value: Option<String>,
}

impl FormItem {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }
}

/// Compliance form payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceForm {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub items: Vec<FormItem>,
}

impl ComplianceForm {
    pub fn new(items: Vec<FormItem>) -> Self {
        Self { items }
    }
}
