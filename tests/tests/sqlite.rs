#![cfg(feature = "sqlite")]

use tests::*;

use rowmap::driver::sqlite::query_map;
use rowmap::{BigDecimal, Error, Registry, StatementContext};
use rusqlite::Connection;
use std::str::FromStr;

#[derive(Debug, rowmap::Mapped)]
struct Product {
    id: i64,
    name: String,

    #[column("unit_price")]
    price: BigDecimal,

    stock: Option<i32>,
    image: Option<Vec<u8>>,
}

fn connection() -> Connection {
    init_tracing();

    let conn = assert_ok!(Connection::open_in_memory());
    assert_ok!(conn.execute_batch(
        "CREATE TABLE products (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            unit_price TEXT NOT NULL,
            stock INTEGER,
            image BLOB
        );
        INSERT INTO products VALUES (1, 'bolt', '0.25', 400, NULL);
        INSERT INTO products VALUES (2, 'nut', '0.10', NULL, x'89504e47');
        INSERT INTO products VALUES (3, 'washer', '0.05', 0, NULL);",
    ));
    conn
}

#[test]
fn maps_every_row_in_order() {
    let conn = connection();
    let registry = Registry::new();
    let mapper = registry.mapper_for::<Product>();
    let cx = StatementContext::with_sql("SELECT * FROM products ORDER BY id");

    let mut stmt = assert_ok!(conn.prepare(assert_some!(cx.sql())));
    let products = assert_ok!(query_map(&mut stmt, [], |i, row| mapper.map(i, row, &cx)));

    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["bolt", "nut", "washer"]);

    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].price, assert_ok!(BigDecimal::from_str("0.25")));
    assert_eq!(products[0].stock, Some(400));
    assert_none!(&products[0].image);

    assert_none!(products[1].stock);
    assert_eq!(assert_some!(products[1].image.as_deref()), b"\x89PNG");

    assert_eq!(products[2].stock, Some(0));
}

#[test]
fn selected_subset_leaves_other_fields_default() {
    let conn = connection();
    let mapper = Registry::new().mapper_for::<Product>();
    let cx = StatementContext::new();

    let sql = "SELECT NAME, Unit_Price FROM products WHERE id = ?1";
    let mut stmt = assert_ok!(conn.prepare(sql));
    let products = assert_ok!(query_map(&mut stmt, [2], |i, row| mapper.map(i, row, &cx)));

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 0);
    assert_eq!(products[0].name, "nut");
    assert_eq!(products[0].price, assert_ok!(BigDecimal::from_str("0.10")));
    assert_none!(products[0].stock);
}

#[test]
fn first_error_stops_mapping() {
    let conn = connection();
    assert_ok!(conn.execute(
        "INSERT INTO products VALUES (4, 'gear', 'n/a', 1, NULL)",
        [],
    ));

    let mapper = Registry::new().mapper_for::<Product>();
    let cx = StatementContext::new();
    let mut seen = vec![];

    let mut stmt = assert_ok!(conn.prepare("SELECT * FROM products ORDER BY id DESC"));
    let err: Error = assert_err!(query_map(&mut stmt, [], |i, row| {
        seen.push(i);
        mapper.map(i, row, &cx)
    }));

    assert!(err.is_type_mismatch(), "{err}");
    assert_eq!(seen, [0]);
}

#[test]
fn empty_result_set_maps_to_nothing() {
    let conn = connection();
    let mapper = Registry::new().mapper_for::<Product>();
    let cx = StatementContext::new();

    let mut stmt = assert_ok!(conn.prepare("SELECT * FROM products WHERE id > 100"));
    let products = assert_ok!(query_map(&mut stmt, [], |i, row| mapper.map(i, row, &cx)));
    assert!(products.is_empty());
}
