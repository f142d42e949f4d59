mod assisteddialing;
mod interfaces;
pub mod i18n;

pub use assisteddialing::errors::ParseError;
pub use assisteddialing::{
    Constraints, CountryCodeProvider, CountryCodeSource, EligibilityResult, IneligibleReason,
    ParsedNumber, DEFAULT_COUNTRY_CODES,
};
pub use interfaces::{EmergencyNumberClassifier, NumberParser, NumberValidator};

#[cfg(test)]
mod tests;
