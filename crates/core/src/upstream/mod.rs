mod error;
mod traits;
mod types;

pub use error::{Result, UpstreamError, UpstreamKind};
pub use traits::UpstreamSource;
pub use types::{
    Address, ComplianceForm, ContactDetails, ContactPoint, EmailAddress, FormItem,
    PersonalDetails, PhoneNumber,
};
