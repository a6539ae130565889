use tests::*;

use pretty_assertions::assert_eq;

use rowmap::{Mapped, RowMapper};

#[derive(Debug, rowmap::Mapped)]
#[mapped(constructor = Settings::defaults)]
struct Settings {
    retries: i32,
    region: String,

    #[mapped(skip)]
    loaded_from: String,

    #[column("is_enabled")]
    enabled: bool,
}

impl Settings {
    fn defaults() -> Result<Settings, std::convert::Infallible> {
        Ok(Settings {
            retries: 3,
            region: "eu-west".to_string(),
            loaded_from: "defaults".to_string(),
            enabled: true,
        })
    }
}

#[derive(Debug, rowmap::Mapped)]
struct Raw {
    r#type: String,
    payload: Vec<u8>,
    ratio: f64,
    small: i16,
}

#[test]
fn skipped_fields_have_no_descriptor() {
    let descriptor = Settings::descriptor();

    let names: Vec<_> = descriptor.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["retries", "region", "enabled"]);
    assert_none!(descriptor.field("loaded_from"));
}

#[test]
fn descriptor_is_built_once() {
    let first = Settings::descriptor() as *const _;
    let second = Settings::descriptor() as *const _;
    assert_eq!(first, second);
}

fn constructor_supplies_starting_values(test: &mut RowTest) {
    let mapper = RowMapper::<Settings>::new();

    let settings = assert_ok!(test.map(&mapper, columns!("retries" => 5i32)));
    assert_eq!(settings.retries, 5);
    assert_eq!(settings.region, "eu-west");
    assert!(settings.enabled);
    assert_eq!(settings.loaded_from, "defaults");
}

fn skipped_field_ignores_matching_column(test: &mut RowTest) {
    let mapper = RowMapper::<Settings>::new();

    let settings = assert_ok!(test.map(
        &mapper,
        columns!("loaded_from" => "row", "is_enabled" => false)
    ));
    assert_eq!(settings.loaded_from, "defaults");
    assert!(!settings.enabled);
}

fn raw_identifiers_and_remaining_builtins(test: &mut RowTest) {
    let mapper = RowMapper::<Raw>::new();

    let raw = assert_ok!(test.map(
        &mapper,
        columns!(
            "TYPE" => "blob",
            "payload" => vec![0xdeu8, 0xad],
            "ratio" => 0.5f64,
            "small" => 12i16,
        )
    ));
    assert_eq!(raw.r#type, "blob");
    assert_eq!(raw.payload, [0xde, 0xad]);
    assert_eq!(raw.ratio, 0.5);
    assert_eq!(raw.small, 12);
}

tests!(
    constructor_supplies_starting_values,
    skipped_field_ignores_matching_column,
    raw_identifiers_and_remaining_builtins,
);
