mod normalize;
mod types;

pub use normalize::{
    format_address, normalize_record, parse_income, resolve_form_value, select_preferred,
    ADDRESS_SEPARATOR, ANNUAL_INCOME_KEYS, TAX_COUNTRY_KEYS,
};
pub use types::CustomerRecord;
