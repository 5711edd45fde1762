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

use serde::Deserialize;

/// Validation data for one class of numbers: the full-match pattern and the
/// digit counts a number of this class may have.
///
/// Where a per-type description omits `possible_lengths`, the lengths of the
/// country's general description apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NumberDesc {
    /// Pattern a national significant number of this class matches in full.
    #[serde(default)]
    pub national_number_pattern: Option<String>,
    /// Lengths of complete, dialable numbers.
    #[serde(default)]
    pub possible_lengths: Vec<usize>,
    /// Lengths only dialable within a local area (e.g. without an area
    /// code). Never overlaps `possible_lengths`.
    #[serde(default)]
    pub possible_lengths_local_only: Vec<usize>,
}

impl NumberDesc {
    pub fn has_pattern(&self) -> bool {
        self.national_number_pattern.is_some()
    }
}

/// The per-country rule record of the dataset. One calling code per record;
/// immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryRecord {
    /// Country identifier (ISO 3166-1 alpha-2, e.g. "RU").
    pub id: String,
    /// The country calling code as a digit string (e.g. "7"); may be shared
    /// with other records.
    pub country_calling_code: String,
    /// Marks the record leading its calling-code group. Note regions of the
    /// North American plan share the calling code 1 and Russia and
    /// Kazakhstan share the calling code 7; under this flag 1 leads to "US"
    /// and 7 leads to "RU".
    #[serde(default)]
    pub main_country_for_code: bool,
    /// Pattern of the international dialing prefix (IDD) dialed from within
    /// this country instead of "+", e.g. "011" for the US.
    #[serde(default)]
    pub international_prefix: Option<String>,
    /// The domestic-only prefix dialed before a national number, e.g. "8".
    /// Informational; parsing uses `national_prefix_for_parsing`.
    #[serde(default)]
    pub national_prefix: Option<String>,
    /// Pattern matched (anchored) against the start of a national dialing
    /// string to detect and remove the national prefix; may carry capture
    /// groups used by the transform rule and the carrier-code group.
    #[serde(default)]
    pub national_prefix_for_parsing: Option<String>,
    /// Replacement template with `$n` capture slots applied to the matched
    /// prefix instead of plain removal (e.g. Mexico's "044" -> "1").
    #[serde(default)]
    pub national_prefix_transform_rule: Option<String>,
    /// Index of the capture group of `national_prefix_for_parsing` that
    /// holds a dialing carrier code, where the country uses them.
    #[serde(default)]
    pub carrier_code_group: Option<usize>,
    /// Disambiguation pattern over the first digits of a national number,
    /// used only when the calling code is shared.
    #[serde(default)]
    pub leading_digits: Option<String>,
    /// The "is a number at all" description every valid number matches.
    #[serde(default)]
    pub general_desc: NumberDesc,
    #[serde(default)]
    pub fixed_line: Option<NumberDesc>,
    #[serde(default)]
    pub mobile: Option<NumberDesc>,
    #[serde(default)]
    pub toll_free: Option<NumberDesc>,
    #[serde(default)]
    pub premium_rate: Option<NumberDesc>,
    #[serde(default)]
    pub shared_cost: Option<NumberDesc>,
    #[serde(default)]
    pub personal_number: Option<NumberDesc>,
    #[serde(default)]
    pub voip: Option<NumberDesc>,
    #[serde(default)]
    pub pager: Option<NumberDesc>,
    #[serde(default)]
    pub uan: Option<NumberDesc>,
    #[serde(default)]
    pub voicemail: Option<NumberDesc>,
}

/// The dataset document: an ordered collection of country records. Order is
/// meaningful — it fixes the tie-break order within a calling-code group
/// (after the main country, which always goes first).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MetadataCollection {
    pub countries: Vec<CountryRecord>,
}
