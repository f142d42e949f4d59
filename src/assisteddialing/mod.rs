mod constraints;
mod country_code_provider;
pub mod enums;
pub mod errors;
mod phone_number;

pub use constraints::Constraints;
pub use country_code_provider::{CountryCodeProvider, DEFAULT_COUNTRY_CODES};
pub use enums::{CountryCodeSource, EligibilityResult, IneligibleReason};
pub use phone_number::ParsedNumber;
