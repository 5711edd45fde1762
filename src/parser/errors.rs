// Copyright (C) 2026 The dialparse authors
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

/// A caller mistake. These are the only errors `parse` and `validate`
/// surface; text that merely fails to contain a number is reported through
/// the result value, never through an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum UsageError {
    /// A required or default country identifier is not present in the
    /// dataset. Raised before any text processing: a bad fallback country is
    /// a configuration mistake even when the text alone would have parsed.
    #[error("Unknown country: {0}")]
    UnknownCountry(String),
}

/// The ways a national significant number's digit count can be wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LengthError {
    /// The number is shorter than all valid numbers for this country.
    #[error("The number is shorter than all valid numbers for this country")]
    TooShort,
    /// The number is longer than the shortest valid numbers for this
    /// country, shorter than the longest, and does not itself have a length
    /// that matches any valid number.
    #[error(
        "The number is between the shortest and longest valid lengths for \
         this country but matches none of them"
    )]
    InvalidLength,
    /// The number is longer than all valid numbers for this country.
    #[error("The number is longer than all valid numbers for this country")]
    TooLong,
}
