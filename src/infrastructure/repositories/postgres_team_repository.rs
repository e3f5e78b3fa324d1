use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::query::push_order_and_page;
use crate::domain::errors::RepositoryError;
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{Team, TeamChanges, TeamCriteria};

/// PostgreSQL implementation of TeamRepository
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Team::from_persistence(row.id, row.name)
    }
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, criteria: &TeamCriteria) {
    builder.push(" WHERE TRUE");

    if let Some(name) = &criteria.name {
        builder.push(" AND name ~* ").push_bind(name.clone());
    }
}

fn search_query(criteria: &TeamCriteria) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::<Postgres>::new("SELECT id, name FROM teams");
    push_filters(&mut builder, criteria);
    push_order_and_page(&mut builder, criteria.sort, criteria.page);
    builder
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn find(&self, criteria: &TeamCriteria) -> Result<Vec<Team>, RepositoryError> {
        let mut builder = search_query(criteria);
        let rows = builder
            .build_query_as::<TeamRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn count(&self, criteria: &TeamCriteria) -> Result<u64, RepositoryError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM teams");
        push_filters(&mut builder, criteria);

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, RepositoryError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name
            FROM teams
            WHERE name = $1
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Team::from))
    }

    async fn create(&self, team: &Team) -> Result<Team, RepositoryError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            INSERT INTO teams (id, name)
            VALUES ($1, $2)
            RETURNING id, name
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Team::from).ok_or(RepositoryError::CreateFailed)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Team>, RepositoryError> {
        let row = sqlx::query_as::<_, TeamRow>("SELECT id, name FROM teams WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Team::from))
    }

    async fn update(&self, id: Uuid, changes: &TeamChanges) -> Result<Team, RepositoryError> {
        if changes.is_empty() {
            return self.get(id).await?.ok_or(RepositoryError::NotFound);
        }

        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            UPDATE teams SET name = COALESCE($2, name)
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(id)
        .bind(changes.name.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Team::from).ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::{Page, Sort};

    #[test]
    fn search_sorts_with_tiebreak_and_paginates() {
        let criteria = TeamCriteria::from_raw(Some("rovers".to_string()))
            .with_sort(Sort::parse(Some("name"), Some("desc")))
            .with_page(Page::new(Some(5), Some(10)));

        assert_eq!(
            search_query(&criteria).sql(),
            "SELECT id, name FROM teams WHERE TRUE AND name ~* $1 \
             ORDER BY name DESC, id LIMIT $2 OFFSET $3"
        );
    }

    #[test]
    fn search_with_unknown_sort_has_no_order_by() {
        let criteria = TeamCriteria::default()
            .with_sort(Sort::parse(Some("title"), Some("asc")))
            .with_page(Page::new(None, Some(3)));

        assert_eq!(search_query(&criteria).sql(), "SELECT id, name FROM teams WHERE TRUE LIMIT $1");
    }

    #[test]
    fn search_with_zero_limit_has_no_limit() {
        let criteria = TeamCriteria::default()
            .with_sort(Sort::parse(Some("name"), None))
            .with_page(Page::new(None, Some(0)));

        assert_eq!(
            search_query(&criteria).sql(),
            "SELECT id, name FROM teams WHERE TRUE ORDER BY name ASC, id"
        );
    }
}
