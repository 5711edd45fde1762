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

use regex::Regex;

use crate::regexp_cache::RegexCache;

use super::helper_constants::{
    DIGITS, MAX_LENGTH_FOR_EXTENSION, MIN_LENGTH_FOR_NSN, PLUS_CHARS,
    POSSIBLE_CHARS_AFTER_EXT_LABEL, POSSIBLE_SEPARATORS_BEFORE_EXT_LABEL, VALID_PUNCTUATION,
};

pub(super) struct ParserRegExps {
    /// Regular expression of viable phone numbers, run case-insensitively
    /// over the whole candidate with an optional extension suffix.
    ///
    /// Corresponds to the following:
    /// `plus_sign?([punctuation]*[digits]){3,}([punctuation]|[digits])*`
    /// with a separate alternative admitting bare two-digit numbers, which
    /// are viable only without any punctuation in them.
    pub viable_phone_number_pattern: Regex,

    /// All recognized ways to write an extension, anchored to the end of the
    /// candidate. Each notation captures its digits in its own group; the
    /// extension is the first non-empty capture.
    pub extn_pattern: Regex,

    /// The dialable part of a `tel:` URI: digits, an optional leading plus
    /// and the RFC 3966 visual separators, nothing else. A stray letter here
    /// fails the whole input rather than being dropped.
    pub rfc3966_dialable_part_pattern: Regex,

    /// Digits acceptable in an RFC 3966 `;ext=` parameter.
    pub rfc3966_extension_pattern: Regex,

    /// Compiled-pattern cache for every pattern that arrives with the
    /// dataset (prefix rules, leading digits, IDD prefixes).
    pub regexp_cache: RegexCache,
}

/// Helper method for constructing the extension digit capture: up to
/// `max_length` digits in a single group.
fn extn_digits(max_length: usize) -> String {
    format!("({}{{1,{}}})", DIGITS, max_length)
}

// Helper initialiser method to create the regular-expression pattern to
// match extensions. Note that the only capturing groups should be around
// the digits that are wanted as part of the extension, or else matching
// breaks.
fn create_extn_pattern() -> String {
    // Extensions called out in an explicit way, e.g. "ext." or the
    // Cyrillic "доб". Canonical equivalence is not an option here, so both
    // the composed and the decomposed form of "ó" are listed.
    let explicit_ext_labels =
        "(?:e?xt(?:ensi(?:o\u{0301}?|\u{00F3}))?n?|\u{0434}\u{043E}\u{0431}|anexo)";
    // One-character symbols that can indicate an extension, and more
    // ambiguous labels.
    let ambiguous_ext_labels = "[x\u{FF58}#\u{FF03}~\u{FF5E}]";
    // When the extension is not separated clearly.
    let ambiguous_separator = "[- \u{00A0}\\t,]*";

    let digits = extn_digits(MAX_LENGTH_FOR_EXTENSION);
    let rfc_extn = fast_cat::concat_str!(";ext=", &digits);
    let explicit_extn = fast_cat::concat_str!(
        POSSIBLE_SEPARATORS_BEFORE_EXT_LABEL,
        explicit_ext_labels,
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        &digits
    );
    let ambiguous_extn = fast_cat::concat_str!(
        ambiguous_separator,
        ambiguous_ext_labels,
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        &digits
    );
    // The special case of American numbers where the extension is written
    // with a hash at the end, such as "- 503#".
    let american_style_extn_with_suffix = fast_cat::concat_str!("[- ]+", &digits, "#");

    fast_cat::concat_str!(
        &rfc_extn,
        "|",
        &explicit_extn,
        "|",
        &ambiguous_extn,
        "|",
        &american_style_extn_with_suffix
    )
}

impl ParserRegExps {
    pub fn new() -> Self {
        let extn_patterns = create_extn_pattern();
        let viable_phone_number = format!(
            "[{}]?(?:[{}]*{}){{3,}}[{}{}]*",
            PLUS_CHARS, VALID_PUNCTUATION, DIGITS, VALID_PUNCTUATION, DIGITS,
        );

        Self {
            // These patterns are constants; compilation cannot fail once the
            // constants themselves are right, which the module tests pin.
            viable_phone_number_pattern: Regex::new(&format!(
                // the bare short-number alternative goes last so a full
                // number is matched first
                "(?i)^(?:{}(?:{})?|{}{{{}}})$",
                viable_phone_number, extn_patterns, DIGITS, MIN_LENGTH_FOR_NSN,
            ))
            .unwrap(),
            extn_pattern: Regex::new(&format!("(?i)(?:{})$", extn_patterns)).unwrap(),
            rfc3966_dialable_part_pattern: Regex::new(&format!(
                "^[{}]?[{}\\-.()]*$",
                PLUS_CHARS, DIGITS
            ))
            .unwrap(),
            rfc3966_extension_pattern: Regex::new(&format!(
                "^{}{{1,{}}}$",
                DIGITS, MAX_LENGTH_FOR_EXTENSION
            ))
            .unwrap(),
            regexp_cache: RegexCache::with_capacity(128),
        }
    }
}
