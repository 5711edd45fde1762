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

use std::borrow::Cow;

use log::{error, trace};
use regex::Captures;

use crate::interfaces::MatcherApi;
use crate::metadata::CountryRecord;
use crate::regex_util::RegexConsume;
use crate::regexp_cache::RegexCache;

use super::classifier::check_number_length;
use super::errors::LengthError;

/// A resolved national significant number. Borrowed when the input went
/// through unchanged.
pub(super) struct NationalNumber<'a> {
    pub number: Cow<'a, str>,
    pub carrier_code: Option<String>,
}

impl<'a> NationalNumber<'a> {
    fn unchanged(number: &'a str) -> Self {
        Self {
            number: Cow::Borrowed(number),
            carrier_code: None,
        }
    }
}

/// Applies the country's national-prefix rule to a national dialing string:
/// detects the prefix at the start, rewrites it through the transform
/// template when one is declared (and a group captured), removes it
/// otherwise, and pulls the carrier code out of the capture group the
/// record names. This step never fails — when no rule applies, or applying
/// it would damage the number, the input comes back unchanged and length or
/// pattern screening happens downstream.
pub(super) fn extract_national_number<'a>(
    number: &'a str,
    record: &CountryRecord,
    cache: &RegexCache,
    matcher: &dyn MatcherApi,
) -> NationalNumber<'a> {
    let Some(prefix_pattern) = record.national_prefix_for_parsing.as_deref() else {
        // The bare national-prefix string, if any, is informational only.
        return NationalNumber::unchanged(number);
    };
    let regex = match cache.get_regex(prefix_pattern) {
        Ok(regex) => regex,
        Err(err) => {
            error!("Invalid regex! {err}");
            return NationalNumber::unchanged(number);
        }
    };
    let Some(captures) = regex.captures_start(number) else {
        return NationalNumber::unchanged(number);
    };
    let Some(prefix) = captures.get(0) else {
        return NationalNumber::unchanged(number);
    };

    let captured_any_group = captures.iter().skip(1).any(|group| group.is_some());
    let transform_rule = record.national_prefix_transform_rule.as_deref();
    let candidate = if let (Some(rule), true) = (transform_rule, captured_any_group) {
        let mut rewritten = expand_transform(rule, &captures);
        rewritten.push_str(&number[prefix.end()..]);
        rewritten
    } else {
        number[prefix.end()..].to_string()
    };
    if candidate == number {
        return NationalNumber::unchanged(number);
    }

    // Stripping that turns a number matching the country's general pattern
    // into one that doesn't, or leaves too few digits, is taken back; the
    // prefix digits were part of the number itself.
    if record.general_desc.has_pattern()
        && matcher.match_national_number(number, &record.general_desc, false)
        && !matcher.match_national_number(&candidate, &record.general_desc, false)
    {
        trace!("Not stripping national prefix of '{number}': the rest would not be a number");
        return NationalNumber::unchanged(number);
    }
    if !record.general_desc.possible_lengths.is_empty()
        && matches!(
            check_number_length(&candidate, record),
            Err(LengthError::TooShort)
        )
    {
        trace!("Not stripping national prefix of '{number}': the rest would be too short");
        return NationalNumber::unchanged(number);
    }

    let carrier_code = record
        .carrier_code_group
        .and_then(|group| captures.get(group))
        .map(|matched| matched.as_str().to_string());
    NationalNumber {
        number: Cow::Owned(candidate),
        carrier_code,
    }
}

/// Expands a transform template against the groups the prefix pattern
/// captured. Slots are spelled `$n`; the expansion is done by hand so the
/// template language does not depend on any particular pattern engine's
/// substitution syntax.
fn expand_transform(template: &str, captures: &Captures<'_>) -> String {
    let mut expanded = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '$' {
            if let Some(slot) = chars.peek().and_then(|next| next.to_digit(10)) {
                chars.next();
                if let Some(group) = captures.get(slot as usize) {
                    expanded.push_str(group.as_str());
                }
                continue;
            }
        }
        expanded.push(c);
    }
    expanded
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::expand_transform;

    #[test]
    fn transform_expansion() {
        let pattern = Regex::new(r"(\d{2})(\d{3})").unwrap();
        let captures = pattern.captures("12345").unwrap();
        assert_eq!(expand_transform("$2", &captures), "345");
        assert_eq!(expand_transform("$1-$2", &captures), "12-345");
        // a literal template carries no slots at all
        assert_eq!(expand_transform("1", &captures), "1");
        // unknown slots expand to nothing
        assert_eq!(expand_transform("$9", &captures), "");
    }
}
