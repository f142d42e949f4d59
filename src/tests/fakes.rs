use crate::{
    CountryCodeSource, EmergencyNumberClassifier, NumberParser, NumberValidator, ParseError,
    ParsedNumber,
};

/// Small stand-in for a phone number library, just rich enough for the
/// eligibility scenarios: digits only, `;` separates an extension, a leading
/// `+` or `011` marks an explicitly international number.
pub struct FakePhoneNumberUtil;

fn calling_code_for_region(region: &str) -> Result<i32, ParseError> {
    match region {
        "US" | "CA" => Ok(1),
        "FR" => Ok(33),
        "GB" => Ok(44),
        "MX" => Ok(52),
        "JP" => Ok(81),
        _ => Err(ParseError::InvalidCountryCode),
    }
}

impl NumberParser for FakePhoneNumberUtil {
    fn parse_and_keep_raw_input(
        &self,
        number_to_parse: &str,
        default_region: &str,
    ) -> Result<ParsedNumber, ParseError> {
        let (main, extension) = match number_to_parse.split_once(';') {
            Some((main, extension)) => (main, Some(extension)),
            None => (number_to_parse, None),
        };

        let mut number = ParsedNumber::new();
        let national = if let Some(rest) = main.strip_prefix('+') {
            // Single-digit calling codes cover every region the fake knows.
            let code = rest
                .chars()
                .next()
                .ok_or(ParseError::TooShortNsn)?
                .to_digit(10)
                .ok_or(ParseError::NotANumber)?;
            number.set_country_code(code as i32);
            number.set_country_code_source(CountryCodeSource::FromNumberWithPlusSign);
            &rest[1..]
        } else if let Some(rest) = main.strip_prefix("011") {
            let code = rest
                .chars()
                .next()
                .ok_or(ParseError::TooShortAfterIdd)?
                .to_digit(10)
                .ok_or(ParseError::NotANumber)?;
            number.set_country_code(code as i32);
            number.set_country_code_source(CountryCodeSource::FromNumberWithIdd);
            &rest[1..]
        } else {
            number.set_country_code(calling_code_for_region(default_region)?);
            number.set_country_code_source(CountryCodeSource::FromDefaultCountry);
            main
        };

        if national.is_empty() {
            return Err(ParseError::TooShortNsn);
        }
        if !national.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseError::NotANumber);
        }
        number.set_national_number(national.parse().map_err(|_| ParseError::TooLongNsn)?);
        if let Some(extension) = extension {
            number.set_extension(extension.to_owned());
        }
        number.set_raw_input(number_to_parse.to_owned());
        Ok(number)
    }
}

impl NumberValidator for FakePhoneNumberUtil {
    /// NANPA-shaped validity: ten significant digits, no leading zero or one.
    fn is_valid_number(&self, number: &ParsedNumber) -> bool {
        number.has_country_code()
            && (2_000_000_000..=9_999_999_999).contains(&number.national_number())
    }
}

/// Fixed emergency tables; `999` is only known to the locally scoped check.
pub struct FakeEmergencyNumberClassifier;

impl EmergencyNumberClassifier for FakeEmergencyNumberClassifier {
    fn is_emergency_number(&self, number: &str) -> bool {
        matches!(number, "911" | "112")
    }

    fn is_local_emergency_number(&self, number: &str) -> bool {
        self.is_emergency_number(number) || number == "999"
    }
}
