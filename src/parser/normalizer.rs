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

use dec_from_char::DecimalExtended;

use crate::regex_util::RegexFullMatch;

use super::helper_constants::{
    MAX_INPUT_LENGTH, PLUS_CHARS, PLUS_SIGN, RFC3966_EXTN_PARAMETER, RFC3966_PREFIX,
};
use super::parser_regexps::ParserRegExps;

/// A candidate number boiled down to what the rest of the pipeline works
/// on: ASCII digits with an optional leading `+`, and the extension that
/// was split off, if any.
pub(super) struct NormalizedInput {
    pub number: String,
    pub ext: Option<String>,
}

/// Runs the whole text-level pipeline: length cap, candidate extraction
/// (either the `tel:` URI form or a free-text scan), the viability screen,
/// extension stripping and digit folding. `None` means the text carries no
/// recognizable number; that is a property of the data, never an error.
pub(super) fn normalize_input(text: &str, reg_exps: &ParserRegExps) -> Option<NormalizedInput> {
    if text.len() > MAX_INPUT_LENGTH {
        return None;
    }
    let trimmed = text.trim();

    let (body, ext) = if let Some(uri_rest) = trimmed.strip_prefix(RFC3966_PREFIX) {
        extract_from_tel_uri(uri_rest, reg_exps)?
    } else {
        (extract_candidate(trimmed)?, None)
    };

    if !reg_exps.viable_phone_number_pattern.full_match(body) {
        return None;
    }

    let (body, ext) = match ext {
        // A URI extension is authoritative; nothing further is scanned.
        Some(ext) => (body, Some(ext)),
        None => strip_extension(body, reg_exps),
    };

    Some(NormalizedInput {
        number: fold_to_dialable(body),
        ext,
    })
}

/// Cuts the part of the text that plausibly is the number: from the first
/// `+` or decimal digit, with trailing characters that are neither letters,
/// digits nor `#` removed. The hash stays because it may mark the previous
/// block as an extension.
fn extract_candidate(text: &str) -> Option<&str> {
    let start = text.find(|c: char| PLUS_CHARS.contains(c) || c.is_decimal_utf8())?;
    let candidate =
        text[start..].trim_end_matches(|c: char| !(c.is_alphanumeric() || c == '#'));
    (!candidate.is_empty()).then_some(candidate)
}

/// Picks the dialable part and the `ext=` parameter out of an RFC 3966
/// number, discarding the other parameters. An illegal character inside the
/// dialable part, or a malformed `ext=`, fails the whole input rather than
/// being dropped.
fn extract_from_tel_uri<'a>(
    uri_rest: &'a str,
    reg_exps: &ParserRegExps,
) -> Option<(&'a str, Option<String>)> {
    let mut parameters = uri_rest.split(';');
    let dialable = parameters.next().unwrap_or("");
    if dialable.is_empty() || !reg_exps.rfc3966_dialable_part_pattern.full_match(dialable) {
        return None;
    }

    let mut extension = None;
    for parameter in parameters {
        if let Some(digits) = parameter.strip_prefix(RFC3966_EXTN_PARAMETER) {
            if !reg_exps.rfc3966_extension_pattern.full_match(digits) {
                return None;
            }
            extension = Some(fold_digits(digits));
        }
        // ";isub=", ";phone-context=" and the like carry no number data
    }
    Some((dialable, extension))
}

/// Splits a trailing extension off the candidate. The notation patterns
/// capture their digits in separate groups; the first non-empty one wins.
fn strip_extension<'a>(body: &'a str, reg_exps: &ParserRegExps) -> (&'a str, Option<String>) {
    let Some(captures) = reg_exps.extn_pattern.captures(body) else {
        return (body, None);
    };
    let Some(full) = captures.get(0) else {
        return (body, None);
    };
    for group in captures.iter().skip(1).flatten() {
        let ext = fold_digits(group.as_str());
        if !ext.is_empty() {
            return (&body[..full.start()], Some(ext));
        }
    }
    (body, None)
}

/// Folds every Unicode decimal digit to ASCII and drops everything else,
/// keeping one leading `+` when the candidate starts with one.
fn fold_to_dialable(body: &str) -> String {
    let folded = dec_from_char::normalize_decimals(body);
    let mut number = String::with_capacity(folded.len());
    for c in folded.chars() {
        if c.is_ascii_digit() {
            number.push(c);
        } else if number.is_empty() && PLUS_CHARS.contains(c) {
            number.push(PLUS_SIGN);
        }
    }
    number
}

fn fold_digits(s: &str) -> String {
    let folded = dec_from_char::normalize_decimals(s);
    folded.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str) -> Option<NormalizedInput> {
        normalize_input(text, &ParserRegExps::new())
    }

    #[test]
    fn candidate_is_cut_out_of_surrounding_text() {
        let normalized = normalize("Phone: 8 (800) 555 35 35.").unwrap();
        assert_eq!(normalized.number, "88005553535");
        assert_eq!(normalized.ext, None);
    }

    #[test]
    fn normalization_is_idempotent() {
        let normalized = normalize("88005553535").unwrap();
        assert_eq!(normalized.number, "88005553535");
        let renormalized = normalize(&normalized.number).unwrap();
        assert_eq!(renormalized.number, normalized.number);
    }

    #[test]
    fn non_european_digits_fold_to_ascii() {
        let normalized = normalize("+\u{0661}\u{0662}\u{0661}\u{0662}\u{0662}\u{0663}\u{0662}\u{0663}\u{0662}\u{0663}\u{0662}").unwrap();
        assert_eq!(normalized.number, "+12122323232");
    }

    #[test]
    fn extension_notations() {
        let normalized = normalize("2134567890 ext 123").unwrap();
        assert_eq!(normalized.number, "2134567890");
        assert_eq!(normalized.ext.as_deref(), Some("123"));

        let normalized = normalize("+12134567890#1234").unwrap();
        assert_eq!(normalized.number, "+12134567890");
        assert_eq!(normalized.ext.as_deref(), Some("1234"));

        let normalized = normalize("+78005553535 x1234").unwrap();
        assert_eq!(normalized.ext.as_deref(), Some("1234"));

        let normalized = normalize("+78005553535 \u{0434}\u{043E}\u{0431}. 1234").unwrap();
        assert_eq!(normalized.ext.as_deref(), Some("1234"));
    }

    #[test]
    fn overlong_extension_is_not_an_extension() {
        assert!(normalize("2134567890 ext. 1234567890").is_none());
    }

    #[test]
    fn tel_uri() {
        let normalized = normalize("tel:+78005553535;ext=123").unwrap();
        assert_eq!(normalized.number, "+78005553535");
        assert_eq!(normalized.ext.as_deref(), Some("123"));

        // visual separators are legal inside the dialable part
        let normalized = normalize("tel:+7(800)555-35.35;ext=123").unwrap();
        assert_eq!(normalized.number, "+78005553535");
        assert_eq!(normalized.ext.as_deref(), Some("123"));

        // a letter in the dialable part fails the whole input
        assert!(normalize("tel:+7x8005553535;ext=123").is_none());
    }

    #[test]
    fn oversized_input_is_rejected_before_any_work() {
        let long = format!("8005553535{}", " ".repeat(MAX_INPUT_LENGTH));
        assert!(normalize(&long).is_none());
    }

    #[test]
    fn no_candidate_means_no_number() {
        assert!(normalize("").is_none());
        assert!(normalize("abcdefg").is_none());
        assert!(normalize("+").is_none());
    }
}
