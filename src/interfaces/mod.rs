use crate::assisteddialing::errors::ParseError;
use crate::assisteddialing::ParsedNumber;

/// Parsing API used to isolate the underlying phone number library and allow
/// different implementations to be swapped in easily.
pub trait NumberParser {
    /// Parses `number_to_parse` with `default_region` as the fallback region,
    /// keeping the raw-input metadata (in particular the country code source)
    /// that the eligibility checks depend on.
    fn parse_and_keep_raw_input(
        &self,
        number_to_parse: &str,
        default_region: &str,
    ) -> Result<ParsedNumber, ParseError>;
}

/// Validity checking API for a parsed number.
pub trait NumberValidator {
    /// Returns whether the number is a valid, dialable number for its region.
    fn is_valid_number(&self, number: &ParsedNumber) -> bool;
}

/// Classifies raw number strings as emergency numbers.
///
/// Implementations typically consult live radio and region state. The general
/// check may miss while roaming and out of service, which is why a locally
/// scoped check exists alongside it; callers consult both.
pub trait EmergencyNumberClassifier {
    fn is_emergency_number(&self, number: &str) -> bool;

    fn is_local_emergency_number(&self, number: &str) -> bool;
}
