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

use log::trace;
use strum::IntoEnumIterator;

use crate::interfaces::MatcherApi;
use crate::metadata::{CountryRecord, NumberDesc};

use super::enums::{NumberLengthType, NumberType};
use super::errors::LengthError;

/// How a national significant number stands against its country's rules.
/// `possible` is a pure digit-count judgement; `valid` also requires the
/// country's patterns to accept the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub possible: bool,
    pub valid: bool,
}

/// Both checks always run, so a caller asking for the full picture gets the
/// negative outcomes reported instead of the pipeline stopping early.
pub(super) fn classify(
    number: &str,
    record: &CountryRecord,
    matcher: &dyn MatcherApi,
) -> Classification {
    Classification {
        possible: check_number_length(number, record).is_ok(),
        valid: is_valid_for_record(number, record, matcher),
    }
}

/// Checks a number against the possible lengths of the country and reports
/// whether it matches, or is too short or too long.
pub(super) fn check_number_length(
    number: &str,
    record: &CountryRecord,
) -> Result<NumberLengthType, LengthError> {
    let general = &record.general_desc;
    if general.possible_lengths.is_empty() {
        // No length data means length alone can never reject.
        return Ok(NumberLengthType::IsPossible);
    }

    let actual_length = number.len();
    // There is never an overlap between the possible lengths and the
    // local-only lengths.
    if general.possible_lengths_local_only.contains(&actual_length) {
        return Ok(NumberLengthType::IsPossibleLocalOnly);
    }

    let minimum_length = general.possible_lengths[0];
    if minimum_length == actual_length {
        return Ok(NumberLengthType::IsPossible);
    } else if minimum_length > actual_length {
        return Err(LengthError::TooShort);
    } else if general.possible_lengths[general.possible_lengths.len() - 1] < actual_length {
        return Err(LengthError::TooLong);
    }
    // We skip the first element; it has already been checked.
    if general.possible_lengths[1..].contains(&actual_length) {
        Ok(NumberLengthType::IsPossible)
    } else {
        Err(LengthError::InvalidLength)
    }
}

/// A number is valid when the general pattern accepts it in full and, for
/// countries carrying per-type data, at least one type pattern does too.
/// Not every record carries per-type patterns; for those the general
/// pattern alone decides.
fn is_valid_for_record(number: &str, record: &CountryRecord, matcher: &dyn MatcherApi) -> bool {
    if record.general_desc.has_pattern()
        && !matcher.match_national_number(number, &record.general_desc, false)
    {
        trace!("Number '{number}' doesn't match the general national number pattern");
        return false;
    }

    let mut any_type_has_pattern = false;
    for number_type in NumberType::iter() {
        let Some(desc) = desc_for_type(record, number_type) else {
            continue;
        };
        if !desc.has_pattern() {
            continue;
        }
        any_type_has_pattern = true;
        if is_number_matching_desc(number, desc, matcher) {
            trace!("Number '{number}' is a {number_type:?} number");
            return true;
        }
    }
    !any_type_has_pattern
}

/// Returns the description inside the record for the appropriate type.
pub(super) fn desc_for_type(record: &CountryRecord, number_type: NumberType) -> Option<&NumberDesc> {
    match number_type {
        NumberType::FixedLine => record.fixed_line.as_ref(),
        NumberType::Mobile => record.mobile.as_ref(),
        NumberType::TollFree => record.toll_free.as_ref(),
        NumberType::PremiumRate => record.premium_rate.as_ref(),
        NumberType::SharedCost => record.shared_cost.as_ref(),
        NumberType::PersonalNumber => record.personal_number.as_ref(),
        NumberType::VoIP => record.voip.as_ref(),
        NumberType::Pager => record.pager.as_ref(),
        NumberType::UAN => record.uan.as_ref(),
        NumberType::VoiceMail => record.voicemail.as_ref(),
    }
}

fn is_number_matching_desc(number: &str, desc: &NumberDesc, matcher: &dyn MatcherApi) -> bool {
    // Check possible lengths first when present; they rule the pattern out
    // without running it.
    let actual_length = number.len();
    if !desc.possible_lengths.is_empty() && !desc.possible_lengths.contains(&actual_length) {
        return false;
    }
    matcher.match_national_number(number, desc, false)
}
