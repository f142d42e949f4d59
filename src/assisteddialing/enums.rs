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

use strum::{Display, EnumIter};

/// Records where the country calling code of a parsed number came from.
///
/// Assisted dialing only rewrites numbers whose country code was *inferred*
/// from the default region. Any of the explicit sources means the caller
/// already dialed internationally and the number must be left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CountryCodeSource {
    /// The input carried a leading `+` sign.
    /// Example: `+41 44 668 1800`.
    FromNumberWithPlusSign,
    /// The input started with an international direct dialing prefix,
    /// such as `011` in the US or `00` in most of Europe.
    FromNumberWithIdd,
    /// The input started with the country calling code itself, without a
    /// `+` sign or an IDD prefix.
    FromNumberWithoutPlusSign,
    /// The country code was taken from the default region supplied at parse
    /// time; nothing in the input itself identified a country.
    FromDefaultCountry,
    /// No country code information was recorded for this number.
    #[default]
    Unspecified,
}

/// The first precondition an assisted-dialing candidate failed.
///
/// `Display` renders the variant name, which is what ends up in diagnostic
/// logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum IneligibleReason {
    /// The number to check was empty.
    EmptyNumber,
    /// The user's home country code was empty.
    EmptyHomeCountryCode,
    /// The user's roaming country code was empty.
    EmptyRoamingCountryCode,
    /// The number could not be parsed at all.
    ParseFailure,
    /// The home or roaming country is not on the supported allow-list.
    UnsupportedCountryCode,
    /// Home and roaming country are the same, so the user is not roaming.
    NotRoaming,
    /// The number already carries an explicit country code.
    AlreadyInternational,
    /// The number routes to emergency services, globally or locally.
    EmergencyNumber,
    /// The number failed phone-number validation.
    InvalidNumber,
    /// The number carries an extension, which formatting would strip.
    HasExtension,
}

/// Outcome of an eligibility check: either assisted dialing may be offered,
/// or the first failing precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EligibilityResult {
    Eligible,
    Ineligible(IneligibleReason),
}

impl EligibilityResult {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }

    pub fn reason(&self) -> Option<IneligibleReason> {
        match self {
            Self::Eligible => None,
            Self::Ineligible(reason) => Some(*reason),
        }
    }
}
