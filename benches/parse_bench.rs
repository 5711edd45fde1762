use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dialparse::{MetadataStore, ParseOptions, PhoneParser};

/// A small dataset with enough rule variety (shared code, national prefix,
/// carrier codes) to make the timings representative.
const DATASET: &str = r#"{
  "countries": [
    {
      "id": "US",
      "country_calling_code": "1",
      "main_country_for_code": true,
      "international_prefix": "011",
      "national_prefix": "1",
      "national_prefix_for_parsing": "1",
      "leading_digits": "2(?:0[1-35-9]|1[02-9]|2[03-589]|3[149]|4[08]|5[1-46]|6[0279]|7[0-26]|8[13])",
      "general_desc": { "national_number_pattern": "[2-9]\\d{9}", "possible_lengths": [10] },
      "fixed_line": { "national_number_pattern": "[2-9]\\d{2}[2-9]\\d{6}" },
      "mobile": { "national_number_pattern": "[2-9]\\d{2}[2-9]\\d{6}" }
    },
    {
      "id": "RU",
      "country_calling_code": "7",
      "main_country_for_code": true,
      "international_prefix": "810",
      "national_prefix": "8",
      "national_prefix_for_parsing": "8",
      "leading_digits": "[3489]",
      "general_desc": { "national_number_pattern": "[3489]\\d{9}", "possible_lengths": [10] },
      "fixed_line": { "national_number_pattern": "[348]\\d{9}" },
      "mobile": { "national_number_pattern": "9\\d{9}" }
    },
    {
      "id": "GB",
      "country_calling_code": "44",
      "main_country_for_code": true,
      "international_prefix": "00",
      "national_prefix": "0",
      "national_prefix_for_parsing": "0",
      "general_desc": { "national_number_pattern": "[1-9]\\d{8,9}", "possible_lengths": [9, 10] },
      "fixed_line": { "national_number_pattern": "[12]\\d{9}" },
      "mobile": { "national_number_pattern": "7[1-57-9]\\d{8}" }
    },
    {
      "id": "BR",
      "country_calling_code": "55",
      "international_prefix": "00",
      "national_prefix": "0",
      "national_prefix_for_parsing": "(?:0|90)(?:(1[245]|2[1-35]|31|4[13]|[56]5|7[1-58]|8[1-79]|9[123])(\\d{10,11}))?",
      "national_prefix_transform_rule": "$2",
      "carrier_code_group": 1,
      "general_desc": { "national_number_pattern": "[1-9]\\d{9,10}", "possible_lengths": [10, 11] },
      "fixed_line": { "national_number_pattern": "[1-9]{2}[2-5]\\d{7}" },
      "mobile": { "national_number_pattern": "[1-9]{2}9?[6-9]\\d{7}" }
    }
  ]
}"#;

/// A varied corpus gives a more honest picture than one number parsed in a
/// loop: international and national notation, extensions, carrier codes and
/// text that carries no number at all.
fn setup_parsing_data() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("+7 (800) 555-35-35", None),
        ("Phone: 8 (800) 555 35 35.", Some("RU")),
        ("+44 20 8765 4321", None),
        ("020 8765 4321", Some("GB")),
        ("(213) 373-4253 ext. 1234", Some("US")),
        ("0 15 21 5555-5555", Some("BR")),
        ("tel:+78005553535;ext=123", None),
        ("not a phone number at all", Some("US")),
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let store = MetadataStore::from_json(DATASET).expect("benchmark dataset should load");
    let parser = PhoneParser::new(store);
    let corpus = setup_parsing_data();

    let mut group = c.benchmark_group("parsing");

    group.bench_function("parse", |b| {
        b.iter(|| {
            for (text, country) in &corpus {
                let options = match country {
                    Some(country) => ParseOptions::country(country),
                    None => ParseOptions::default(),
                };
                let _ = parser.parse(black_box(text), black_box(options));
            }
        })
    });

    group.bench_function("validate", |b| {
        b.iter(|| {
            for (text, _) in &corpus {
                let _ = parser.validate(black_box(*text));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
