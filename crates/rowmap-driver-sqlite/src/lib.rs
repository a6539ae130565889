mod row;
pub use row::SqliteRow;

use rowmap_core::{Error, Result};
use rusqlite::{Params, Statement};

/// Runs `stmt` and hands each result row to `f` as a [`SqliteRow`] cursor,
/// numbering rows from zero.
///
/// Rows are visited in the order SQLite returns them. The first error, from
/// SQLite or from `f`, stops the iteration and is returned.
///
/// ```ignore
/// let accounts = query_map(&mut stmt, [], |i, row| mapper.map(i, row, &cx))?;
/// ```
pub fn query_map<T, P, F>(stmt: &mut Statement<'_>, params: P, mut f: F) -> Result<Vec<T>>
where
    P: Params,
    F: FnMut(usize, &mut SqliteRow<'_, '_>) -> Result<T>,
{
    let mut rows = stmt.query(params).map_err(Error::driver)?;
    let mut out = vec![];

    while let Some(row) = rows.next().map_err(Error::driver)? {
        let mut cursor = SqliteRow::new(row);
        out.push(f(out.len(), &mut cursor)?);
    }

    tracing::trace!(rows = out.len(), "mapped sqlite result set");

    Ok(out)
}
