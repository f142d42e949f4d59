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

use std::collections::HashSet;
use std::sync::LazyLock;

use log::warn;
use regex::Regex;

/// Compiled-in allow-list used when no configuration is supplied.
pub const DEFAULT_COUNTRY_CODES: &str = "CA,GB,JP,MX,US";

static COUNTRY_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Z]{2}$").expect("country code pattern must compile"));

/// The set of ISO 3166-1 alpha-2 country codes assisted dialing is allowed
/// for. Read-only once built.
pub struct CountryCodeProvider {
    supported_country_codes: HashSet<String>,
}

impl CountryCodeProvider {
    /// Creates a provider backed by [`DEFAULT_COUNTRY_CODES`].
    pub fn new() -> Self {
        Self::from_csv(DEFAULT_COUNTRY_CODES)
    }

    /// Builds a provider from a csv of country codes, e.g. `"US,CA"`.
    ///
    /// Entries are trimmed and upper-cased. Anything that is not a two-letter
    /// code after normalization is logged and dropped rather than failing the
    /// whole configuration.
    pub fn from_csv(config_country_codes: &str) -> Self {
        let mut supported_country_codes = HashSet::new();
        for entry in config_country_codes.split(',') {
            let code = entry.trim().to_uppercase();
            if COUNTRY_CODE_PATTERN.is_match(&code) {
                supported_country_codes.insert(code);
            } else if !code.is_empty() {
                warn!("dropping malformed country code entry: {:?}", entry);
            }
        }
        Self {
            supported_country_codes,
        }
    }

    /// Membership query. Expects a normalized (upper-case) country code.
    pub fn is_supported_country_code(&self, country_code: &str) -> bool {
        self.supported_country_codes.contains(country_code)
    }
}

impl Default for CountryCodeProvider {
    fn default() -> Self {
        Self::new()
    }
}
