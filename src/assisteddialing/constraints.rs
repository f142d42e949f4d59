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

use log::info;

use crate::assisteddialing::country_code_provider::CountryCodeProvider;
use crate::assisteddialing::enums::{CountryCodeSource, EligibilityResult, IneligibleReason};
use crate::assisteddialing::phone_number::ParsedNumber;
use crate::interfaces::{EmergencyNumberClassifier, NumberParser, NumberValidator};

/// Ensures that a number is eligible for assisted dialing.
///
/// Holds no state of its own; every check is a pure function of its inputs
/// and the collaborators' current answers, so a `Constraints` value can be
/// shared freely across threads.
pub struct Constraints<'a> {
    parser: &'a dyn NumberParser,
    validator: &'a dyn NumberValidator,
    emergency_classifier: &'a dyn EmergencyNumberClassifier,
    country_code_provider: &'a CountryCodeProvider,
}

impl<'a> Constraints<'a> {
    /// Creates a new instance of `Constraints`.
    ///
    /// All collaborators are mandatory; there is no fallback to ambient
    /// global instances.
    pub fn new(
        parser: &'a dyn NumberParser,
        validator: &'a dyn NumberValidator,
        emergency_classifier: &'a dyn EmergencyNumberClassifier,
        country_code_provider: &'a CountryCodeProvider,
    ) -> Self {
        Self {
            parser,
            validator,
            emergency_classifier,
            country_code_provider,
        }
    }

    /// Determines whether or not we think assisted dialing is possible.
    ///
    /// * `number_to_check` — the phone number, as entered.
    /// * `user_home_country_code` — ISO 3166-1 alpha-2 code of the user's
    ///   home country.
    /// * `user_roaming_country_code` — ISO 3166-1 alpha-2 code of the country
    ///   the user is roaming in.
    ///
    /// Country codes are accepted in any case. Returns `true` only when every
    /// precondition holds.
    pub fn meets_preconditions(
        &self,
        number_to_check: &str,
        user_home_country_code: &str,
        user_roaming_country_code: &str,
    ) -> bool {
        self.check_preconditions(
            number_to_check,
            user_home_country_code,
            user_roaming_country_code,
        )
        .is_eligible()
    }

    /// Same check as [`meets_preconditions`], reporting the first failing
    /// precondition instead of collapsing to a boolean.
    ///
    /// Preconditions are evaluated in a fixed order and the first failure
    /// wins; later checks are not consulted.
    ///
    /// [`meets_preconditions`]: Self::meets_preconditions
    pub fn check_preconditions(
        &self,
        number_to_check: &str,
        user_home_country_code: &str,
        user_roaming_country_code: &str,
    ) -> EligibilityResult {
        if number_to_check.is_empty() {
            info!("number_to_check was empty");
            return EligibilityResult::Ineligible(IneligibleReason::EmptyNumber);
        }

        if user_home_country_code.is_empty() {
            info!("user_home_country_code was empty");
            return EligibilityResult::Ineligible(IneligibleReason::EmptyHomeCountryCode);
        }

        if user_roaming_country_code.is_empty() {
            info!("user_roaming_country_code was empty");
            return EligibilityResult::Ineligible(IneligibleReason::EmptyRoamingCountryCode);
        }

        let user_home_country_code = user_home_country_code.to_uppercase();
        let user_roaming_country_code = user_roaming_country_code.to_uppercase();

        let parsed_phone_number =
            match self.parse_phone_number(number_to_check, &user_home_country_code) {
                Some(number) => number,
                None => return EligibilityResult::Ineligible(IneligibleReason::ParseFailure),
            };

        if !self.are_supported_country_codes(&user_home_country_code, &user_roaming_country_code) {
            return EligibilityResult::Ineligible(IneligibleReason::UnsupportedCountryCode);
        }
        if !Self::is_user_roaming(&user_home_country_code, &user_roaming_country_code) {
            return EligibilityResult::Ineligible(IneligibleReason::NotRoaming);
        }
        if Self::is_international_number(&parsed_phone_number) {
            return EligibilityResult::Ineligible(IneligibleReason::AlreadyInternational);
        }
        if self.is_emergency_number(number_to_check) {
            return EligibilityResult::Ineligible(IneligibleReason::EmergencyNumber);
        }
        if !self.is_valid_number(&parsed_phone_number) {
            return EligibilityResult::Ineligible(IneligibleReason::InvalidNumber);
        }
        if Self::has_extension(&parsed_phone_number) {
            return EligibilityResult::Ineligible(IneligibleReason::HasExtension);
        }
        EligibilityResult::Eligible
    }

    /// A convenience method to take a number as a string and a specified
    /// country code, and return a parsed number. A parse failure is captured
    /// here, never propagated.
    fn parse_phone_number(
        &self,
        number_to_parse: &str,
        user_home_country_code: &str,
    ) -> Option<ParsedNumber> {
        match self
            .parser
            .parse_and_keep_raw_input(number_to_parse, user_home_country_code)
        {
            Ok(number) => Some(number),
            Err(err) => {
                info!("could not parse the number: {}", err);
                None
            }
        }
    }

    /// Returns a boolean indicating the support of both provided country
    /// codes. Both must be on the allow-list.
    fn are_supported_country_codes(
        &self,
        user_home_country_code: &str,
        user_roaming_country_code: &str,
    ) -> bool {
        let result = self
            .country_code_provider
            .is_supported_country_code(user_home_country_code)
            && self
                .country_code_provider
                .is_supported_country_code(user_roaming_country_code);
        info!("are_supported_country_codes = {}", result);
        result
    }

    /// Returns a boolean indicating the value equivalence of the provided
    /// country codes.
    fn is_user_roaming(user_home_country_code: &str, user_roaming_country_code: &str) -> bool {
        let result = user_home_country_code != user_roaming_country_code;
        info!("is_user_roaming = {}", result);
        result
    }

    /// Returns a boolean indicating if the provided number is already
    /// internationally formatted.
    fn is_international_number(parsed_phone_number: &ParsedNumber) -> bool {
        if parsed_phone_number.has_country_code()
            && parsed_phone_number.country_code_source() != CountryCodeSource::FromDefaultCountry
        {
            info!("phone number already provided the country code");
            return true;
        }
        false
    }

    /// Returns a boolean indicating if the provided number is an emergency
    /// number.
    fn is_emergency_number(&self, number_to_check: &str) -> bool {
        // The general check may depend on network state, so also consult the
        // locally scoped check when roaming and out of service.
        let result = self.emergency_classifier.is_emergency_number(number_to_check)
            || self
                .emergency_classifier
                .is_local_emergency_number(number_to_check);
        info!("is_emergency_number = {}", result);
        result
    }

    /// Returns a boolean indicating if the provided number is considered to
    /// be a valid number.
    fn is_valid_number(&self, parsed_phone_number: &ParsedNumber) -> bool {
        let result = self.validator.is_valid_number(parsed_phone_number);
        info!("is_valid_number = {}", result);
        result
    }

    /// Returns a boolean indicating if the provided number has an extension.
    ///
    /// Extensions are stripped when formatting a number for mobile dialing,
    /// so we don't want to purposefully truncate a number.
    fn has_extension(parsed_phone_number: &ParsedNumber) -> bool {
        if parsed_phone_number.has_extension() && !parsed_phone_number.extension().is_empty() {
            info!("phone number has an extension");
            return true;
        }
        false
    }
}
