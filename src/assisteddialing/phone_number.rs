// Copyright (C) 2017 The Android Open Source Project
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::assisteddialing::enums::CountryCodeSource;

/// A structured phone number as produced by a [`NumberParser`].
///
/// Accessors follow the presence/value convention of phone-number metadata
/// messages: `has_*` reports whether a field was set, the value accessor
/// returns a zero value (`0`, `""`) when it was not. A parsed number is
/// treated as immutable once handed to the checker.
///
/// [`NumberParser`]: crate::interfaces::NumberParser
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedNumber {
    country_code: Option<i32>,
    national_number: u64,
    country_code_source: CountryCodeSource,
    extension: Option<String>,
    raw_input: Option<String>,
}

impl ParsedNumber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_country_code(&mut self, country_code: i32) {
        self.country_code = Some(country_code);
    }

    pub fn has_country_code(&self) -> bool {
        self.country_code.is_some()
    }

    pub fn country_code(&self) -> i32 {
        self.country_code.unwrap_or(0)
    }

    pub fn set_national_number(&mut self, national_number: u64) {
        self.national_number = national_number;
    }

    pub fn national_number(&self) -> u64 {
        self.national_number
    }

    pub fn set_country_code_source(&mut self, source: CountryCodeSource) {
        self.country_code_source = source;
    }

    pub fn country_code_source(&self) -> CountryCodeSource {
        self.country_code_source
    }

    pub fn set_extension(&mut self, extension: String) {
        self.extension = Some(extension);
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    pub fn extension(&self) -> &str {
        self.extension.as_deref().unwrap_or("")
    }

    pub fn set_raw_input(&mut self, raw_input: String) {
        self.raw_input = Some(raw_input);
    }

    pub fn has_raw_input(&self) -> bool {
        self.raw_input.is_some()
    }

    pub fn raw_input(&self) -> &str {
        self.raw_input.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_report_zero_values() {
        let number = ParsedNumber::new();
        assert!(!number.has_country_code());
        assert_eq!(0, number.country_code());
        assert_eq!(0, number.national_number());
        assert_eq!(CountryCodeSource::Unspecified, number.country_code_source());
        assert!(!number.has_extension());
        assert_eq!("", number.extension());
        assert!(!number.has_raw_input());
    }

    #[test]
    fn set_fields_round_trip() {
        let mut number = ParsedNumber::new();
        number.set_country_code(1);
        number.set_national_number(5551234567);
        number.set_country_code_source(CountryCodeSource::FromDefaultCountry);
        number.set_extension("123".to_owned());
        number.set_raw_input("5551234567;123".to_owned());

        assert!(number.has_country_code());
        assert_eq!(1, number.country_code());
        assert_eq!(5551234567, number.national_number());
        assert_eq!(
            CountryCodeSource::FromDefaultCountry,
            number.country_code_source()
        );
        assert_eq!("123", number.extension());
        assert_eq!("5551234567;123", number.raw_input());
    }
}
