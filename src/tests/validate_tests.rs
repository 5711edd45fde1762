use crate::{MetadataStore, PhoneParser, UsageError, ValidationQuery};

use super::fixtures::parser;

#[test]
fn validates_phone_numbers() {
    let parser = parser();

    assert!(parser.validate("+1-213-373-4253").unwrap());
    assert!(!parser.validate("+1-213-373").unwrap());

    assert!(parser
        .validate(ValidationQuery::text_with_country("(213) 373-4253", "US"))
        .unwrap());
    assert!(!parser
        .validate(ValidationQuery::text_with_country("(213) 37", "US"))
        .unwrap());

    assert!(parser
        .validate(ValidationQuery::structured("US", "2133734253"))
        .unwrap());

    // No per-type patterns in the record: the general pattern decides.
    assert!(parser.validate("+380972423740").unwrap());

    assert!(parser
        .validate(ValidationQuery::text_with_country("0912345678", "TW"))
        .unwrap());

    // Mobile numbers starting 7624* are Isle of Man, which has its own
    // record inside the GB calling-code zone; the number is still valid
    // when handed in as GB.
    assert!(parser
        .validate(ValidationQuery::text_with_country("07624369230", "GB"))
        .unwrap());
}

#[test]
fn per_type_patterns_refine_validation() {
    let parser = parser();

    // The shared dataset has no per-type data for UZ, so the general
    // pattern is the whole story.
    assert!(parser
        .validate(ValidationQuery::text_with_country("961111111", "UZ"))
        .unwrap());

    // A dataset carrying per-type patterns is a different dataset, not a
    // patched copy of the shared one.
    let refined = PhoneParser::new(
        MetadataStore::from_json(
            r#"{
              "countries": [
                {
                  "id": "UZ",
                  "country_calling_code": "998",
                  "international_prefix": "810",
                  "national_prefix": "8",
                  "national_prefix_for_parsing": "8",
                  "general_desc": {
                    "national_number_pattern": "[679]\\d{8}",
                    "possible_lengths": [9]
                  },
                  "fixed_line": { "national_number_pattern": "[67]\\d{8}" },
                  "mobile": { "national_number_pattern": "9[1-57-9]\\d{7}" }
                }
              ]
            }"#,
        )
        .expect("refined dataset should load"),
    );

    assert!(!refined
        .validate(ValidationQuery::text_with_country("961111111", "UZ"))
        .unwrap());
    assert!(refined
        .validate(ValidationQuery::text_with_country("912345678", "UZ"))
        .unwrap());
}

#[test]
fn works_in_edge_cases() {
    let parser = parser();

    // Non-number characters stuck to a number.
    assert!(!parser.validate("+499821958a").unwrap());
    assert!(!parser
        .validate(ValidationQuery::text_with_country("88005553535x", "RU"))
        .unwrap());

    // Structured input against a record without per-type patterns.
    assert!(parser
        .validate(ValidationQuery::structured("UA", "300000000"))
        .unwrap());
    assert!(!parser
        .validate(ValidationQuery::structured("UA", "200000000"))
        .unwrap());

    // Long country calling code.
    assert!(parser.validate("+3725555555").unwrap());

    // An unknown country in structured input is a usage error.
    assert_eq!(
        parser
            .validate(ValidationQuery::structured("RUS", "8005553535"))
            .unwrap_err(),
        UsageError::UnknownCountry("RUS".to_string())
    );
}

#[test]
fn accepts_phone_number_extensions() {
    let parser = parser();

    // International.
    assert!(parser.validate("+12133734253 ext. 123").unwrap());
    // National.
    assert!(parser
        .validate(ValidationQuery::text_with_country("88005553535 x123", "RU"))
        .unwrap());
}
