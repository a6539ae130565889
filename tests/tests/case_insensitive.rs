use tests::*;

use rowmap::RowMapper;

#[derive(Debug, Default, rowmap::Mapped)]
struct Counter {
    long_field: i64,
    name: String,
}

fn mixed_case_label(test: &mut RowTest) {
    let mapper = RowMapper::<Counter>::new();

    let counter = assert_ok!(test.map(&mapper, columns!("LoNgfielD" => 5i64)));
    assert_eq!(counter.long_field, 5);
    assert_eq!(counter.name, "");
}

fn upper_case_labels(test: &mut RowTest) {
    let mapper = RowMapper::<Counter>::new();

    let counter = assert_ok!(test.map(&mapper, columns!("LONG_FIELD" => 9i64, "NAME" => "shout")));
    assert_eq!(counter.long_field, 9);
    assert_eq!(counter.name, "shout");
}

fn later_column_wins_on_collision(test: &mut RowTest) {
    let mapper = RowMapper::<Counter>::new();

    let counter = assert_ok!(test.map(&mapper, columns!("name" => "first", "NAME" => "second")));
    assert_eq!(counter.name, "second");
}

tests!(
    mixed_case_label,
    upper_case_labels,
    later_column_wins_on_collision,
);
