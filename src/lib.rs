//! Recognition, normalization and validation of phone numbers in free-form
//! text, driven by an externally supplied per-country rule dataset.
//!
//! The entry point is [`PhoneParser`], bound once to a [`MetadataStore`]:
//!
//! ```no_run
//! use dialparse::{MetadataStore, PhoneParser};
//!
//! let store = MetadataStore::from_json_file("metadata.json")?;
//! let parser = PhoneParser::new(store);
//!
//! let result = parser.parse("Phone: +7 (800) 555-35-35.", ())?;
//! assert_eq!(result.country.as_deref(), Some("RU"));
//! assert_eq!(result.phone.as_deref(), Some("8005553535"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod interfaces;
mod metadata;
mod parser;
mod regex_based_matcher;
mod regexp_cache;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use metadata::{CallingCodeGroup, CountryRecord, MetadataError, MetadataStore, NumberDesc};
pub use parser::{
    CallingCodeMatch, Classification, LengthError, NumberLengthType, NumberType, ParseOptions,
    ParseResult, PhoneParser, UsageError, ValidationQuery,
};
