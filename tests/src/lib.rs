#[macro_use]
mod macros;

pub use row_test::RowTest;

pub use rowmap::Value;
pub use std_util::*;

/// Installs a test-writer subscriber so `tracing` output shows up for failed
/// tests. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}
