use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::query::push_order_and_page;
use crate::domain::errors::RepositoryError;
use crate::domain::event::{Event, EventChanges, EventCriteria};
use crate::domain::repositories::EventRepository;

/// PostgreSQL implementation of EventRepository
///
/// Filters are assembled at runtime with `QueryBuilder`; every user-supplied
/// value is bound, and only whitelisted column names are spliced into SQL.
pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    /// Creates a new PostgresEventRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    title: String,
    date: DateTime<Utc>,
    location: String,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event::from_persistence(row.id, row.title, row.date, row.location)
    }
}

const SELECT_EVENTS: &str = "SELECT id, title, date, location FROM events";

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, criteria: &EventCriteria) {
    builder.push(" WHERE TRUE");

    if let Some(title) = &criteria.title {
        builder.push(" AND title ~* ").push_bind(title.clone());
    }
    if let Some(location) = &criteria.location {
        builder.push(" AND location ~* ").push_bind(location.clone());
    }
    if let Some(start) = criteria.start_date {
        builder.push(" AND date >= ").push_bind(start);
    }
    if let Some(end) = criteria.end_date {
        builder.push(" AND date <= ").push_bind(end);
    }
}

fn search_query(criteria: &EventCriteria) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::<Postgres>::new(SELECT_EVENTS);
    push_filters(&mut builder, criteria);
    push_order_and_page(&mut builder, criteria.sort, criteria.page);
    builder
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn find(&self, criteria: &EventCriteria) -> Result<Vec<Event>, RepositoryError> {
        let mut builder = search_query(criteria);
        tracing::debug!(sql = builder.sql(), "Searching events");

        let rows = builder
            .build_query_as::<EventRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn count(&self, criteria: &EventCriteria) -> Result<u64, RepositoryError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM events");
        push_filters(&mut builder, criteria);

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn create(&self, event: &Event) -> Result<Event, RepositoryError> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (id, title, date, location)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, date, location
            "#,
        )
        .bind(event.id())
        .bind(event.title())
        .bind(event.date())
        .bind(event.location())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Event::from).ok_or(RepositoryError::CreateFailed)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Event>, RepositoryError> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, title, date, location
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Event::from))
    }

    async fn update(&self, id: Uuid, changes: &EventChanges) -> Result<Event, RepositoryError> {
        if changes.is_empty() {
            return self.get(id).await?.ok_or(RepositoryError::NotFound);
        }

        let row = sqlx::query_as::<_, EventRow>(
            r#"
            UPDATE events SET
                title = COALESCE($2, title),
                date = COALESCE($3, date),
                location = COALESCE($4, location)
            WHERE id = $1
            RETURNING id, title, date, location
            "#,
        )
        .bind(id)
        .bind(changes.title.as_deref())
        .bind(changes.date)
        .bind(changes.location.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Event::from).ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
