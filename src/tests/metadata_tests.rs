use crate::{MetadataError, MetadataStore, UsageError};

use super::fixtures::{store, DATASET};

#[test]
fn loads_the_dataset() {
    let store = store();
    let countries: Vec<&str> = store.supported_countries().collect();
    assert!(countries.contains(&"RU"));
    assert!(countries.contains(&"US"));

    let codes: Vec<&str> = store.supported_calling_codes().collect();
    assert!(codes.contains(&"7"));
    assert!(codes.contains(&"966"));
}

#[test]
fn lookup_by_country() {
    let store = store();
    let record = store.lookup_by_country("RU").unwrap();
    assert_eq!(record.country_calling_code, "7");
    assert_eq!(record.national_prefix.as_deref(), Some("8"));

    assert_eq!(
        store.lookup_by_country("ZZ").unwrap_err(),
        UsageError::UnknownCountry("ZZ".to_string())
    );
}

#[test]
fn lookup_by_calling_code_orders_the_main_country_first() {
    let store = store();

    let group = store.lookup_by_calling_code("1");
    assert_eq!(group.len(), 3);
    assert_eq!(group.main_country().unwrap().id, "US");
    let members: Vec<&str> = group.iter().map(|record| record.id.as_str()).collect();
    assert_eq!(members, ["US", "CA", "BB"]);

    let group = store.lookup_by_calling_code("44");
    assert_eq!(group.main_country().unwrap().id, "GB");

    // An unused calling code is an empty group, not an error.
    assert!(store.lookup_by_calling_code("210").is_empty());
}

#[test]
fn missing_dataset_resource_is_its_own_error() {
    let error = MetadataStore::from_json_file("no/such/metadata.json").unwrap_err();
    assert!(matches!(error, MetadataError::Missing { .. }));
}

#[test]
fn malformed_dataset_is_rejected() {
    let error = MetadataStore::from_json("{").unwrap_err();
    assert!(matches!(error, MetadataError::Malformed(_)));

    let error = MetadataStore::from_json(r#"{"countries": [{"id": "XX"}]}"#).unwrap_err();
    assert!(matches!(error, MetadataError::Malformed(_)));
}

#[test]
fn broken_patterns_are_rejected_up_front() {
    let error = MetadataStore::from_json(
        r#"{
          "countries": [
            {
              "id": "XX",
              "country_calling_code": "999",
              "general_desc": { "national_number_pattern": "(", "possible_lengths": [5] }
            }
          ]
        }"#,
    )
    .unwrap_err();
    assert!(matches!(error, MetadataError::InvalidPattern { ref country, .. } if country == "XX"));
}

#[test]
fn nonsense_calling_codes_are_rejected_up_front() {
    let error = MetadataStore::from_json(
        r#"{
          "countries": [
            {
              "id": "XX",
              "country_calling_code": "0123",
              "general_desc": { "possible_lengths": [5] }
            }
          ]
        }"#,
    )
    .unwrap_err();
    assert!(matches!(error, MetadataError::InvalidCallingCode { .. }));
}

#[test]
fn dataset_decodes_every_fixture_record() {
    // The fixture document and the record structs must stay in step.
    let store = MetadataStore::from_json(DATASET).unwrap();
    let brazil = store.lookup_by_country("BR").unwrap();
    assert_eq!(brazil.carrier_code_group, Some(1));
    assert_eq!(brazil.national_prefix_transform_rule.as_deref(), Some("$2"));
    let mexico = store.lookup_by_country("MX").unwrap();
    assert_eq!(mexico.national_prefix_transform_rule.as_deref(), Some("1"));
    assert!(store.lookup_by_country("AC").unwrap().national_prefix_for_parsing.is_none());
}
