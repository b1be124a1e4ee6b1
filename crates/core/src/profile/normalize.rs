//! Pure functions turning upstream payloads into canonical record fields.
//!
//! Upstream data-quality problems (no address, unparseable income, missing
//! form keys) degrade to empty or absent fields. Nothing here fails.

use crate::upstream::{Address, ComplianceForm, ContactDetails, ContactPoint, FormItem, PersonalDetails};

use super::CustomerRecord;

/// Separator between address parts.
pub const ADDRESS_SEPARATOR: &str = ", ";

/// Form keys the tax country may arrive under, tried in order.
pub const TAX_COUNTRY_KEYS: &[&str] = &["tax_country", "Tax_Country"];

/// Form keys the annual income may arrive under, tried in order.
pub const ANNUAL_INCOME_KEYS: &[&str] = &["annual_income", "Annual_Income"];

/// Formats the first address as a single line.
///
/// Only the first entry is used. Missing or blank parts are skipped; an empty
/// list yields an empty string.
pub fn format_address(addresses: &[Address]) -> String {
    let Some(address) = addresses.first() else {
        return String::new();
    };

    address
        .parts()
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(ADDRESS_SEPARATOR)
}

/// Selects the preferred contact value.
///
/// Entries without a usable value are ignored. Of the rest, returns the first
/// one flagged preferred, falling back to the first one when none is flagged.
/// Returns None when no entry has a value.
pub fn select_preferred<T: ContactPoint>(entries: &[T]) -> Option<String> {
    let usable = || {
        entries
            .iter()
            .filter(|entry| entry.value().is_some_and(|value| !value.trim().is_empty()))
    };

    usable()
        .find(|entry| entry.is_preferred())
        .or_else(|| usable().next())
        .and_then(|entry| entry.value())
        .map(str::to_string)
}

/// Resolves a form value by alias set.
///
/// Each alias is tried in order and compared case-insensitively against the
/// item keys. The first alias with a matching, non-empty item wins.
pub fn resolve_form_value<'a>(items: &'a [FormItem], aliases: &[&str]) -> Option<&'a str> {
    aliases.iter().find_map(|alias| {
        items
            .iter()
            .filter(|item| item.key.trim().eq_ignore_ascii_case(alias))
            .find_map(|item| item.value.as_deref())
    })
}

/// Parses an income string into an integer.
pub fn parse_income(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Merges the three upstream payloads into a record.
///
/// The returned record has no `cached_at`; it has not been persisted yet.
pub fn normalize_record(
    identifier: &str,
    personal: &PersonalDetails,
    contact: &ContactDetails,
    form: &ComplianceForm,
) -> CustomerRecord {
    CustomerRecord {
        identifier: identifier.to_string(),
        first_name: personal.first_name.clone().unwrap_or_default(),
        last_name: personal.last_name.clone().unwrap_or_default(),
        address: format_address(&contact.addresses),
        phone_number: select_preferred(&contact.phone_numbers),
        email: select_preferred(&contact.emails),
        tax_country: resolve_form_value(&form.items, TAX_COUNTRY_KEYS)
            .unwrap_or_default()
            .to_string(),
        income: parse_income(resolve_form_value(&form.items, ANNUAL_INCOME_KEYS)),
        cached_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::{EmailAddress, PhoneNumber};

    fn lars_contact() -> ContactDetails {
        ContactDetails::default()
            .with_address(Address::new("Smågatan 1", "123 22", "Malmö", "Sweden"))
            .with_email(EmailAddress::new("lars.larsson@example.com", true))
            .with_phone_number(PhoneNumber::new("+46 70 123 45 67", true))
    }

    #[test]
    fn test_normalize_lars_larsson() {
        let personal = PersonalDetails::new("Lars", "Larsson");
        let form = ComplianceForm::new(vec![
            FormItem::new("tax_country", "SE"),
            FormItem::new("annual_income", "550000"),
        ]);

        let record = normalize_record("19800101-1234", &personal, &lars_contact(), &form);

        assert_eq!(
            record,
            CustomerRecord::new("19800101-1234")
                .with_name("Lars", "Larsson")
                .with_address("Smågatan 1, 123 22, Malmö, Sweden")
                .with_email("lars.larsson@example.com")
                .with_phone_number("+46 70 123 45 67")
                .with_tax_country("SE")
                .with_income(550_000)
        );
    }

    #[test]
    fn test_format_address_uses_first_entry_only() {
        let addresses = vec![
            Address::new("First 1", "111 11", "Lund", "Sweden"),
            Address::new("Second 2", "222 22", "Oslo", "Norway"),
        ];

        assert_eq!(format_address(&addresses), "First 1, 111 11, Lund, Sweden");
    }

    #[test]
    fn test_format_address_skips_missing_parts() {
        let address = Address {
            street: Some("Storgatan 5".to_string()),
            postal_code: None,
            city: Some("  ".to_string()),
            country: Some("Sweden".to_string()),
        };

        assert_eq!(format_address(&[address]), "Storgatan 5, Sweden");
    }

    #[test]
    fn test_format_address_empty_list() {
        assert_eq!(format_address(&[]), "");
    }

    #[test]
    fn test_select_preferred_regardless_of_order() {
        let phones = vec![
            PhoneNumber::new("+46 1", false),
            PhoneNumber::new("+46 2", false),
            PhoneNumber::new("+46 3", true),
        ];

        assert_eq!(select_preferred(&phones), Some("+46 3".to_string()));
    }

    #[test]
    fn test_select_preferred_falls_back_to_first() {
        let emails = vec![
            EmailAddress::new("first@example.com", false),
            EmailAddress::new("second@example.com", false),
        ];

        assert_eq!(select_preferred(&emails), Some("first@example.com".to_string()));
    }

    #[test]
    fn test_select_preferred_skips_entries_without_value() {
        let blank_preferred = PhoneNumber {
            preferred: true,
            number: None,
        };
        let phones = vec![
            blank_preferred,
            PhoneNumber::new("", true),
            PhoneNumber::new("+46 2", false),
            PhoneNumber::new("+46 3", true),
        ];

        assert_eq!(select_preferred(&phones), Some("+46 3".to_string()));
        assert_eq!(
            select_preferred(&phones[..3]),
            Some("+46 2".to_string())
        );
        assert_eq!(select_preferred(&phones[..2]), None);
    }

    #[test]
    fn test_select_preferred_empty_list() {
        let emails: Vec<EmailAddress> = vec![];
        assert_eq!(select_preferred(&emails), None);
    }

    #[test]
    fn test_tax_country_either_casing() {
        let lower = vec![FormItem::new("tax_country", "SE")];
        let upper = vec![FormItem::new("Tax_Country", "SE")];

        assert_eq!(resolve_form_value(&lower, TAX_COUNTRY_KEYS), Some("SE"));
        assert_eq!(resolve_form_value(&upper, TAX_COUNTRY_KEYS), Some("SE"));
    }

    #[test]
    fn test_resolve_form_value_is_case_insensitive() {
        let items = vec![FormItem::new("ANNUAL_INCOME", "42")];
        assert_eq!(resolve_form_value(&items, ANNUAL_INCOME_KEYS), Some("42"));
    }

    #[test]
    fn test_resolve_form_value_missing_key() {
        let items = vec![FormItem::new("occupation", "Engineer")];
        assert_eq!(resolve_form_value(&items, TAX_COUNTRY_KEYS), None);
    }

    #[test]
    fn test_parse_income() {
        assert_eq!(parse_income(Some("550000")), Some(550_000));
        assert_eq!(parse_income(Some(" 1200 ")), Some(1200));
        assert_eq!(parse_income(Some("lots")), None);
        assert_eq!(parse_income(Some("55.5")), None);
        assert_eq!(parse_income(None), None);
    }

    #[test]
    fn test_normalize_degrades_gracefully() {
        let personal = PersonalDetails::default();
        let contact = ContactDetails::default();
        let form = ComplianceForm::new(vec![FormItem::new("Annual_Income", "n/a")]);

        let record = normalize_record("abc", &personal, &contact, &form);

        assert_eq!(record, CustomerRecord::new("abc"));
    }
}
