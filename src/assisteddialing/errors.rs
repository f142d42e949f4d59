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

use thiserror::Error;

/// Why a number parser rejected its input.
///
/// The eligibility checker never propagates this; any variant collapses to an
/// ineligible result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid country code")]
    InvalidCountryCode,
    #[error("Not a number")]
    NotANumber,
    #[error("Too short after IDD")]
    TooShortAfterIdd,
    #[error("Too short NSN")]
    TooShortNsn,
    #[error("Too long NSN")]
    TooLongNsn,
}
