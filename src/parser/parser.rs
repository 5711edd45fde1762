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

use crate::interfaces::MatcherApi;
use crate::metadata::{MetadataError, MetadataStore};
use crate::regex_based_matcher::RegexBasedMatcher;

use super::calling_code::{disambiguate, extract_calling_code, CallingCodeMatch};
use super::classifier::classify;
use super::errors::UsageError;
use super::helper_constants::{MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN, PLUS_SIGN};
use super::national_number::extract_national_number;
use super::normalizer::normalize_input;
use super::parser_regexps::ParserRegExps;

/// How a parse call resolves its operating country. The same value covers
/// the legacy call shapes: a bare country identifier maps onto
/// `required_country`, an option bag onto the remaining fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions<'a> {
    /// Country whose rules the text is read under, regardless of what the
    /// text itself says.
    pub required_country: Option<&'a str>,
    /// Fallback country, used only when no country can be derived from the
    /// text itself.
    pub default_country: Option<&'a str>,
    /// Selects the extended output shape: calling code plus the
    /// `valid`/`possible` judgement, even for numbers that fail it.
    pub extended: bool,
}

impl<'a> ParseOptions<'a> {
    pub fn country(id: &'a str) -> Self {
        Self {
            required_country: Some(id),
            ..Self::default()
        }
    }

    pub fn default_country(id: &'a str) -> Self {
        Self {
            default_country: Some(id),
            ..Self::default()
        }
    }

    pub fn extended(mut self) -> Self {
        self.extended = true;
        self
    }
}

impl<'a> From<&'a str> for ParseOptions<'a> {
    fn from(id: &'a str) -> Self {
        Self::country(id)
    }
}

impl From<()> for ParseOptions<'static> {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

/// The outcome of a parse. The default value — every field absent — is the
/// canonical "no number found" result, distinct from an error. In extended
/// mode `valid` and `possible` are always both set (unless the input gave
/// literally nothing to judge), and the calling code is reported whenever
/// it could be derived, even with the country left undetermined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    pub country: Option<String>,
    /// Extended mode only.
    pub country_calling_code: Option<String>,
    /// The national significant number.
    pub phone: Option<String>,
    pub ext: Option<String>,
    pub carrier_code: Option<String>,
    /// Extended mode only, always set together with `possible`.
    pub valid: Option<bool>,
    /// Extended mode only, always set together with `valid`.
    pub possible: Option<bool>,
}

impl ParseResult {
    /// Whether this is the canonical "no number found" outcome.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A validation request: free text (parsed first), or an already-structured
/// country/number pair (classified directly).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationQuery<'a> {
    Text {
        text: &'a str,
        country: Option<&'a str>,
    },
    Structured {
        country: &'a str,
        phone: &'a str,
    },
}

impl<'a> ValidationQuery<'a> {
    pub fn text(text: &'a str) -> Self {
        Self::Text {
            text,
            country: None,
        }
    }

    pub fn text_with_country(text: &'a str, country: &'a str) -> Self {
        Self::Text {
            text,
            country: Some(country),
        }
    }

    pub fn structured(country: &'a str, phone: &'a str) -> Self {
        Self::Structured { country, phone }
    }
}

impl<'a> From<&'a str> for ValidationQuery<'a> {
    fn from(text: &'a str) -> Self {
        Self::text(text)
    }
}

/// The parsing-and-classification engine, bound once to a dataset. Purely
/// functional over the immutable metadata: any number of calls may run
/// concurrently across threads.
pub struct PhoneParser {
    store: MetadataStore,
    reg_exps: ParserRegExps,
    matcher_api: Box<dyn MatcherApi + Send + Sync>,
}

impl PhoneParser {
    pub fn new(store: MetadataStore) -> Self {
        Self {
            store,
            reg_exps: ParserRegExps::new(),
            matcher_api: Box::new(RegexBasedMatcher::new()),
        }
    }

    /// Convenience composition root: loads the dataset resource and binds
    /// the parser to it in one step.
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self, MetadataError> {
        Ok(Self::new(MetadataStore::from_json_file(path)?))
    }

    pub fn metadata(&self) -> &MetadataStore {
        &self.store
    }

    /// Parses free-form text into a structured number.
    ///
    /// The country the text is read under resolves in priority order: a
    /// required country in `options`, a country derived from an
    /// international-format number in the text itself, the default country
    /// in `options`. A required or default country the dataset does not
    /// know is a usage error, raised before the text is even looked at.
    ///
    /// Text that carries no recognizable number — or a number that cannot
    /// be attributed to exactly one country — comes back as the empty
    /// result, never an error. In plain mode a result is only produced for
    /// numbers that are at least possible; extended mode reports the
    /// classification flags either way.
    pub fn parse<'a>(
        &self,
        text: &str,
        options: impl Into<ParseOptions<'a>>,
    ) -> Result<ParseResult, UsageError> {
        let options = options.into();
        let required = match options.required_country {
            Some(id) => Some(self.store.lookup_by_country(id)?),
            None => None,
        };
        let default = match options.default_country {
            Some(id) => Some(self.store.lookup_by_country(id)?),
            None => None,
        };
        let operating_default = required.or(default);

        let Some(normalized) = normalize_input(text, &self.reg_exps) else {
            return Ok(ParseResult::default());
        };
        if normalized.number.is_empty() {
            return Ok(ParseResult::default());
        }

        let cache = &self.reg_exps.regexp_cache;
        let matcher = self.matcher_api.as_ref();

        let extracted =
            extract_calling_code(&normalized.number, operating_default, &self.store, cache);
        let (calling_code, country, classify_with, national) = match extracted {
            Some((calling_code, rest)) => {
                if rest.is_empty() {
                    return Ok(ParseResult::default());
                }
                let group = self.store.lookup_by_calling_code(&calling_code);
                // Parsing rules of a shared code live with its main
                // country, unless the caller pinned a member of the group.
                let operating = required
                    .filter(|record| record.country_calling_code == calling_code)
                    .or_else(|| group.main_country());
                let Some(operating) = operating else {
                    return Ok(ParseResult::default());
                };
                let national = extract_national_number(rest, operating, cache, matcher);
                let country = disambiguate(&group, &national.number, cache);
                (calling_code, country, country.unwrap_or(operating), national)
            }
            None => {
                if normalized.number.starts_with(PLUS_SIGN) {
                    // International marker with a calling code the dataset
                    // does not know: nothing to report.
                    return Ok(ParseResult::default());
                }
                let Some(operating) = operating_default else {
                    return Ok(ParseResult::default());
                };
                let national =
                    extract_national_number(&normalized.number, operating, cache, matcher);
                let group = self
                    .store
                    .lookup_by_calling_code(&operating.country_calling_code);
                // The supplied country may be standing in for a smaller
                // neighbour sharing its calling code (e.g. an Isle of Man
                // number given as a GB one); keep it only when the leading
                // digits don't say otherwise.
                let country = disambiguate(&group, &national.number, cache).unwrap_or(operating);
                (
                    operating.country_calling_code.clone(),
                    Some(country),
                    country,
                    national,
                )
            }
        };

        let length = national.number.len();
        if !(MIN_LENGTH_FOR_NSN..=MAX_LENGTH_FOR_NSN).contains(&length) {
            return Ok(ParseResult::default());
        }

        let classification = classify(&national.number, classify_with, matcher);
        let phone = national.number.into_owned();

        if !options.extended {
            let Some(country) = country else {
                return Ok(ParseResult::default());
            };
            if !classification.possible {
                return Ok(ParseResult::default());
            }
            return Ok(ParseResult {
                country: Some(country.id.clone()),
                phone: Some(phone),
                ext: normalized.ext,
                carrier_code: national.carrier_code,
                ..ParseResult::default()
            });
        }

        Ok(ParseResult {
            country: country.map(|record| record.id.clone()),
            country_calling_code: Some(calling_code),
            phone: Some(phone),
            ext: normalized.ext,
            carrier_code: national.carrier_code,
            valid: Some(classification.valid),
            possible: Some(classification.possible),
        })
    }

    /// Answers whether the query holds a number that is at least possible
    /// and accepted by its country's patterns. Free text goes through
    /// [`parse`](Self::parse) first; a structured pair is classified
    /// directly against the named country's record.
    pub fn validate<'a>(
        &self,
        query: impl Into<ValidationQuery<'a>>,
    ) -> Result<bool, UsageError> {
        match query.into() {
            ValidationQuery::Text { text, country } => {
                let options = ParseOptions {
                    required_country: country,
                    default_country: None,
                    extended: true,
                };
                let result = self.parse(text, options)?;
                Ok(result.possible == Some(true) && result.valid == Some(true))
            }
            ValidationQuery::Structured { country, phone } => {
                let record = self.store.lookup_by_country(country)?;
                let classification = classify(phone, record, self.matcher_api.as_ref());
                Ok(classification.possible && classification.valid)
            }
        }
    }

    /// Derives the country calling code from text in international format,
    /// either `+`-prefixed or dialed through the default country's IDD
    /// prefix. Comes back all-empty when nothing can be derived.
    pub fn extract_country_calling_code(
        &self,
        text: &str,
        default_country: Option<&str>,
    ) -> Result<CallingCodeMatch, UsageError> {
        let default = match default_country {
            Some(id) => Some(self.store.lookup_by_country(id)?),
            None => None,
        };
        let Some(normalized) = normalize_input(text, &self.reg_exps) else {
            return Ok(CallingCodeMatch::default());
        };
        match extract_calling_code(
            &normalized.number,
            default,
            &self.store,
            &self.reg_exps.regexp_cache,
        ) {
            Some((calling_code, rest)) => Ok(CallingCodeMatch {
                country_calling_code: Some(calling_code),
                number: Some(rest.to_string()),
            }),
            None => Ok(CallingCodeMatch::default()),
        }
    }
}
