use tests::*;

use rowmap::{err, BigDecimal, FieldMapper, Registry, Result, Row, StatementContext};

#[derive(Debug, rowmap::Mapped)]
struct Invoice {
    id: i64,
    amount: BigDecimal,
    currency: String,
    discount: Option<BigDecimal>,
}

/// Ignores the cursor and always produces the same amount.
struct Sentinel(i64);

impl FieldMapper for Sentinel {
    type Value = BigDecimal;

    fn map(&self, _row: &mut dyn Row, _index: usize, _cx: &StatementContext) -> Result<BigDecimal> {
        Ok(BigDecimal::from(self.0))
    }
}

/// Reads the column and doubles it.
struct Doubled;

impl FieldMapper for Doubled {
    type Value = i64;

    fn map(&self, row: &mut dyn Row, index: usize, _cx: &StatementContext) -> Result<i64> {
        Ok(row.get_i64(index)? * 2)
    }
}

/// Takes the currency from the statement context instead of the row.
struct CurrencyFromContext;

impl FieldMapper for CurrencyFromContext {
    type Value = String;

    fn map(&self, _row: &mut dyn Row, _index: usize, cx: &StatementContext) -> Result<String> {
        match cx.attribute("currency") {
            Some(currency) => Ok(currency.to_string()),
            None => Err(err!("no currency in context")),
        }
    }
}

fn invoice_columns() -> Vec<(&'static str, Value)> {
    columns!(
        "id" => 21i64,
        "amount" => BigDecimal::from(10),
        "currency" => "EUR",
        "discount" => BigDecimal::from(2),
    )
}

fn sentinel_supersedes_builtin(test: &mut RowTest) {
    let registry = Registry::new();
    registry.register(Sentinel(-1));

    let mapper = registry.mapper_for::<Invoice>();
    let invoice = assert_ok!(test.map(&mapper, invoice_columns()));

    assert_eq!(invoice.amount, BigDecimal::from(-1));
    assert_eq!(invoice.id, 21);
    assert_eq!(invoice.currency, "EUR");

    // Overrides match the exact field type
    assert_eq!(assert_some!(invoice.discount), BigDecimal::from(2));
}

fn earliest_registered_override_wins(test: &mut RowTest) {
    let registry = Registry::new();
    registry.register(Sentinel(1)).register(Sentinel(2));

    let mapper = registry.mapper_for::<Invoice>();
    let invoice = assert_ok!(test.map(&mapper, invoice_columns()));

    assert_eq!(invoice.amount, BigDecimal::from(1));
}

fn override_registered_after_mapper_is_honored(test: &mut RowTest) {
    let registry = Registry::new();
    let mapper = registry.mapper_for::<Invoice>();

    let before = assert_ok!(test.map(&mapper, invoice_columns()));
    assert_eq!(before.id, 21);

    registry.register(Doubled);

    let after = assert_ok!(test.map(&mapper, invoice_columns()));
    assert_eq!(after.id, 42);
}

fn builder_registers_overrides(test: &mut RowTest) {
    let registry = Registry::builder()
        .register(Doubled)
        .register(Sentinel(7))
        .build();

    let mapper = registry.mapper_for::<Invoice>();
    let invoice = assert_ok!(test.map(&mapper, invoice_columns()));

    assert_eq!(invoice.id, 42);
    assert_eq!(invoice.amount, BigDecimal::from(7));
}

fn context_reaches_overrides(test: &mut RowTest) {
    let registry = Registry::new();
    registry.register(CurrencyFromContext);
    let mapper = registry.mapper_for::<Invoice>();

    test.cx.set_attribute("currency", "USD");

    let invoice = assert_ok!(test.map(&mapper, invoice_columns()));
    assert_eq!(invoice.currency, "USD");
}

fn override_errors_propagate_unchanged(test: &mut RowTest) {
    let registry = Registry::new();
    registry.register(CurrencyFromContext);
    let mapper = registry.mapper_for::<Invoice>();

    let err = assert_err!(test.map(&mapper, invoice_columns()));
    assert!(err.is_adhoc());
    assert_eq!(err.to_string(), "no currency in context");
}

fn override_not_called_without_matching_column(test: &mut RowTest) {
    let registry = Registry::new();
    registry.register(CurrencyFromContext);
    let mapper = registry.mapper_for::<Invoice>();

    let invoice = assert_ok!(test.map(&mapper, columns!("id" => 3i64)));
    assert_eq!(invoice.id, 3);
    assert_eq!(invoice.currency, "");
}

tests!(
    sentinel_supersedes_builtin,
    earliest_registered_override_wins,
    override_registered_after_mapper_is_honored,
    builder_registers_overrides,
    context_reaches_overrides,
    override_errors_propagate_unchanged,
    override_not_called_without_matching_column,
);
