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

use log::{error, trace};

use crate::metadata::{CallingCodeGroup, CountryRecord, MetadataStore};
use crate::regex_util::RegexConsume;
use crate::regexp_cache::RegexCache;

use super::helper_constants::{MAX_LENGTH_COUNTRY_CODE, PLUS_SIGN};

/// What could be derived from the international part of a number: the
/// calling code and the digits following it. All-empty when the text gave
/// nothing to work with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallingCodeMatch {
    pub country_calling_code: Option<String>,
    pub number: Option<String>,
}

/// Extracts the country calling code from a normalized number that is in
/// international form: either `+`-prefixed, or led by the IDD prefix of the
/// candidate country. Returns the code and the remaining digits, or `None`
/// when the number is national (or nothing dialable remains).
pub(super) fn extract_calling_code<'a>(
    number: &'a str,
    candidate_country: Option<&CountryRecord>,
    store: &MetadataStore,
    cache: &RegexCache,
) -> Option<(String, &'a str)> {
    if number.is_empty() {
        return None;
    }
    let rest = match number.strip_prefix(PLUS_SIGN) {
        Some(rest) => rest,
        None => strip_idd_prefix(number, candidate_country?, cache)?,
    };
    // A calling code never starts with zero.
    if rest.is_empty() || rest.starts_with('0') {
        return None;
    }

    // Codes are prefix-free across the dataset, so probing from the
    // shortest length up finds the only one that can match.
    let limit = MAX_LENGTH_COUNTRY_CODE.min(rest.len());
    for length in 1..=limit {
        let code = &rest[..length];
        if !store.lookup_by_calling_code(code).is_empty() {
            return Some((code.to_string(), &rest[length..]));
        }
    }
    trace!("No calling code of the dataset prefixes '{rest}'");
    None
}

/// Detects an out-of-country dialing prefix (e.g. "011" from North America,
/// "810" from Russia) and cuts it off. A `0` right after the exit code
/// means this was a national dial after all.
fn strip_idd_prefix<'a>(
    number: &'a str,
    country: &CountryRecord,
    cache: &RegexCache,
) -> Option<&'a str> {
    let idd = country.international_prefix.as_deref()?;
    let regex = match cache.get_regex(idd) {
        Ok(regex) => regex,
        Err(err) => {
            error!("Invalid regex! {err}");
            return None;
        }
    };
    let matched = regex.find_start(number)?;
    if matched.end() == 0 {
        return None;
    }
    let rest = &number[matched.end()..];
    if rest.starts_with('0') {
        return None;
    }
    Some(rest)
}

/// Narrows a shared calling code down to one country by the leading digits
/// of the national number. Exactly one member may match; when none or
/// several do, the country stays undetermined (the calling code itself is
/// still reported upstream).
pub(super) fn disambiguate<'a>(
    group: &CallingCodeGroup<'a>,
    national_number: &str,
    cache: &RegexCache,
) -> Option<&'a CountryRecord> {
    if group.len() == 1 {
        return group.main_country();
    }
    let mut selected: Option<&CountryRecord> = None;
    for record in group.iter() {
        let Some(leading) = record.leading_digits.as_deref() else {
            continue;
        };
        let regex = match cache.get_regex(leading) {
            Ok(regex) => regex,
            Err(err) => {
                error!("Invalid regex! {err}");
                continue;
            }
        };
        if regex.matches_start(national_number) {
            if selected.is_some() {
                trace!(
                    "Leading digits of '{national_number}' fit more than one country \
                     sharing the calling code"
                );
                return None;
            }
            selected = Some(record);
        }
    }
    selected
}
