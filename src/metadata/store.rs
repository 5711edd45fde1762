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

use std::{
    collections::{HashMap, VecDeque},
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::parser::UsageError;

use super::records::{CountryRecord, MetadataCollection, NumberDesc};

/// A configuration failure while loading the dataset. Distinct from every
/// per-call error: no parse or validate call can produce one of these.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The dataset resource does not exist at the given location.
    #[error("metadata dataset is missing: {path}: {source}")]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read metadata dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed metadata dataset: {0}")]
    Malformed(#[from] serde_json::Error),
    /// A record carries a pattern the engine cannot compile. Checked up
    /// front so per-call matching never has to surface pattern errors.
    #[error("invalid pattern in metadata for {country}: {source}")]
    InvalidPattern {
        country: String,
        #[source]
        source: regex::Error,
    },
    #[error("invalid country calling code {calling_code:?} in metadata for {country}")]
    InvalidCallingCode { country: String, calling_code: String },
}

/// Read-only accessor over the externally supplied dataset; the single
/// source of truth for every other component. All lookups are pure reads
/// against data that is immutable after construction.
#[derive(Debug)]
pub struct MetadataStore {
    countries: Vec<CountryRecord>,

    /// Country identifier to its position in `countries`.
    country_index: HashMap<String, usize>,

    /// A mapping from a country calling code to the records sharing it, the
    /// main country first. This is implemented as a sorted vector to achieve
    /// better performance.
    calling_code_index: Vec<(String, Vec<usize>)>,
}

impl MetadataStore {
    /// Decodes a dataset from its JSON document.
    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        let collection: MetadataCollection = serde_json::from_str(json)?;
        Self::from_collection(collection)
    }

    /// Decodes a dataset from a reader over its JSON document.
    pub fn from_reader(reader: impl Read) -> Result<Self, MetadataError> {
        let collection: MetadataCollection = serde_json::from_reader(reader)?;
        Self::from_collection(collection)
    }

    /// Loads the dataset resource from disk. A missing resource is reported
    /// as [`MetadataError::Missing`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, MetadataError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                MetadataError::Missing {
                    path: path.to_path_buf(),
                    source,
                }
            } else {
                MetadataError::Io(source)
            }
        })?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_collection(collection: MetadataCollection) -> Result<Self, MetadataError> {
        let countries = collection.countries;
        for record in &countries {
            validate_record(record)?;
        }

        let mut country_index = HashMap::with_capacity(countries.len());
        // Storing group members in a temporary map of deques so the main
        // country for a shared calling code can be put in front of regions
        // inserted before it.
        let mut calling_code_map = HashMap::<String, VecDeque<usize>>::new();
        for (position, record) in countries.iter().enumerate() {
            country_index.insert(record.id.clone(), position);

            if let Some(members) = calling_code_map.get_mut(&record.country_calling_code) {
                if record.main_country_for_code {
                    members.push_front(position);
                } else {
                    members.push_back(position);
                }
            } else {
                // For most country calling codes, there will be only one
                // record.
                let mut members = VecDeque::new();
                members.push_back(position);
                calling_code_map.insert(record.country_calling_code.clone(), members);
            }
        }

        let mut calling_code_index: Vec<(String, Vec<usize>)> = calling_code_map
            .into_iter()
            .map(|(code, members)| (code, Vec::from(members)))
            .collect();
        // Sort all the pairs in ascending order according to calling code.
        calling_code_index.sort_by(|(a, _), (b, _)| a.cmp(b));

        Ok(Self {
            countries,
            country_index,
            calling_code_index,
        })
    }

    /// Resolves a country identifier to its rule record. An identifier
    /// absent from the dataset is a usage error, even when the caller only
    /// wanted a fallback.
    pub fn lookup_by_country(&self, id: &str) -> Result<&CountryRecord, UsageError> {
        self.country_index
            .get(id)
            .map(|position| &self.countries[*position])
            .ok_or_else(|| UsageError::UnknownCountry(id.to_string()))
    }

    /// Resolves a calling code to the records sharing it. An unused calling
    /// code yields an empty group, not an error.
    pub fn lookup_by_calling_code<'a>(&'a self, calling_code: &str) -> CallingCodeGroup<'a> {
        let records = self
            .calling_code_index
            .binary_search_by(|(code, _)| code.as_str().cmp(calling_code))
            .map(|index| {
                self.calling_code_index[index]
                    .1
                    .iter()
                    .map(|position| &self.countries[*position])
                    .collect()
            })
            .unwrap_or_default();
        CallingCodeGroup { records }
    }

    pub fn supported_countries(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(|record| record.id.as_str())
    }

    pub fn supported_calling_codes(&self) -> impl Iterator<Item = &str> {
        self.calling_code_index.iter().map(|(code, _)| code.as_str())
    }
}

/// Derived view over the records sharing one calling code, the main country
/// first. When the group has exactly one member that country is used
/// directly; otherwise the leading-digits tie-break runs over the members in
/// this order.
pub struct CallingCodeGroup<'a> {
    records: Vec<&'a CountryRecord>,
}

impl<'a> CallingCodeGroup<'a> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// The record others in the group defer to for parsing rules.
    pub fn main_country(&self) -> Option<&'a CountryRecord> {
        self.records.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a CountryRecord> + '_ {
        self.records.iter().copied()
    }
}

fn validate_record(record: &CountryRecord) -> Result<(), MetadataError> {
    let code = &record.country_calling_code;
    if code.is_empty()
        || code.len() > 3
        || code.starts_with('0')
        || !code.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(MetadataError::InvalidCallingCode {
            country: record.id.clone(),
            calling_code: code.clone(),
        });
    }

    let bare_patterns = [
        record.international_prefix.as_deref(),
        record.national_prefix_for_parsing.as_deref(),
        record.leading_digits.as_deref(),
    ];
    let descs = descs_of(record);
    let desc_patterns = descs
        .iter()
        .map(|desc| desc.national_number_pattern.as_deref());

    for pattern in bare_patterns.into_iter().chain(desc_patterns).flatten() {
        regex::Regex::new(pattern).map_err(|source| MetadataError::InvalidPattern {
            country: record.id.clone(),
            source,
        })?;
    }
    Ok(())
}

fn descs_of(record: &CountryRecord) -> Vec<&NumberDesc> {
    let mut descs = vec![&record.general_desc];
    descs.extend(
        [
            &record.fixed_line,
            &record.mobile,
            &record.toll_free,
            &record.premium_rate,
            &record.shared_cost,
            &record.personal_number,
            &record.voip,
            &record.pager,
            &record.uan,
            &record.voicemail,
        ]
        .into_iter()
        .flatten(),
    );
    descs
}
