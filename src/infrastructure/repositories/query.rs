//! SQL fragments shared by the PostgreSQL repositories.

use sqlx::{Postgres, QueryBuilder};

use crate::domain::criteria::{Page, Sort, SortField};

/// Appends ORDER BY, LIMIT and OFFSET clauses
///
/// Only whitelisted column names reach the SQL text. A sort is tie-broken on
/// `id` so pages are stable; without a sort, rows come back in whatever order
/// PostgreSQL returns them and pagination over them is not stable.
pub fn push_order_and_page<F: SortField>(
    builder: &mut QueryBuilder<'_, Postgres>,
    sort: Option<Sort<F>>,
    page: Page,
) {
    if let Some(sort) = sort {
        builder
            .push(" ORDER BY ")
            .push(sort.field.column())
            .push(" ")
            .push(sort.direction.as_sql())
            .push(", id");
    }
    if let Some(limit) = page.limit {
        builder
            .push(" LIMIT ")
            .push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
    }
    if page.skip > 0 {
        builder
            .push(" OFFSET ")
            .push_bind(i64::try_from(page.skip).unwrap_or(i64::MAX));
    }
}
