//! In-process repositories backed by a `Vec` behind a `tokio` RwLock.
//!
//! Rows are kept in insertion order, which is the order unsorted searches
//! return. Text filters follow the PostgreSQL `~*` semantics closely enough
//! for tests: a case-insensitive regular expression matched anywhere.

use std::cmp::Ordering;

use async_trait::async_trait;
use regex::{Regex, RegexBuilder};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::criteria::{Sort, SortDirection};
use crate::domain::errors::RepositoryError;
use crate::domain::event::{Event, EventChanges, EventCriteria, EventSortField};
use crate::domain::repositories::{EventRepository, TeamRepository};
use crate::domain::team::{Team, TeamChanges, TeamCriteria, TeamSortField};

fn pattern(raw: &Option<String>) -> Result<Option<Regex>, RepositoryError> {
    raw.as_deref()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .map_err(|e| RepositoryError::Database(format!("invalid regular expression: {}", e)))
        })
        .transpose()
}

fn is_match(pattern: &Option<Regex>, value: &str) -> bool {
    pattern.as_ref().map_or(true, |re| re.is_match(value))
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// In-memory implementation of EventRepository
#[derive(Default)]
pub struct InMemoryEventRepository {
    events: RwLock<Vec<Event>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn matching(&self, criteria: &EventCriteria) -> Result<Vec<Event>, RepositoryError> {
        let title = pattern(&criteria.title)?;
        let location = pattern(&criteria.location)?;
        let events = self.events.read().await;

        Ok(events
            .iter()
            .filter(|e| is_match(&title, e.title()))
            .filter(|e| is_match(&location, e.location()))
            .filter(|e| criteria.start_date.map_or(true, |start| e.date() >= start))
            .filter(|e| criteria.end_date.map_or(true, |end| e.date() <= end))
            .cloned()
            .collect())
    }
}

fn sort_events(events: &mut [Event], sort: Sort<EventSortField>) {
    events.sort_by(|a, b| {
        let ordering = match sort.field {
            EventSortField::Title => a.title().cmp(b.title()),
            EventSortField::Date => a.date().cmp(&b.date()),
            EventSortField::Location => a.location().cmp(b.location()),
        };
        directed(ordering, sort.direction)
    });
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn find(&self, criteria: &EventCriteria) -> Result<Vec<Event>, RepositoryError> {
        let mut events = self.matching(criteria).await?;
        if let Some(sort) = criteria.sort {
            sort_events(&mut events, sort);
        }
        Ok(criteria.page.apply(events))
    }

    async fn count(&self, criteria: &EventCriteria) -> Result<u64, RepositoryError> {
        Ok(self.matching(criteria).await?.len() as u64)
    }

    async fn create(&self, event: &Event) -> Result<Event, RepositoryError> {
        let mut events = self.events.write().await;
        if events.iter().any(|e| e.id() == event.id()) {
            return Err(RepositoryError::Database(format!("duplicate id: {}", event.id())));
        }
        events.push(event.clone());
        Ok(event.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Event>, RepositoryError> {
        let events = self.events.read().await;
        Ok(events.iter().find(|e| e.id() == id).cloned())
    }

    async fn update(&self, id: Uuid, changes: &EventChanges) -> Result<Event, RepositoryError> {
        let mut events = self.events.write().await;
        let event = events
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(RepositoryError::NotFound)?;
        event.apply(changes);
        Ok(event.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|e| e.id() != id);
        Ok(events.len() != before)
    }
}

/// In-memory implementation of TeamRepository
#[derive(Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<Vec<Team>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn matching(&self, criteria: &TeamCriteria) -> Result<Vec<Team>, RepositoryError> {
        let name = pattern(&criteria.name)?;
        let teams = self.teams.read().await;

        Ok(teams
            .iter()
            .filter(|t| is_match(&name, t.name()))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn find(&self, criteria: &TeamCriteria) -> Result<Vec<Team>, RepositoryError> {
        let mut teams = self.matching(criteria).await?;
        if let Some(sort) = criteria.sort {
            teams.sort_by(|a, b| {
                let ordering = match sort.field {
                    TeamSortField::Name => a.name().cmp(b.name()),
                };
                directed(ordering, sort.direction)
            });
        }
        Ok(criteria.page.apply(teams))
    }

    async fn count(&self, criteria: &TeamCriteria) -> Result<u64, RepositoryError> {
        Ok(self.matching(criteria).await?.len() as u64)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, RepositoryError> {
        let teams = self.teams.read().await;
        Ok(teams.iter().find(|t| t.name() == name).cloned())
    }

    async fn create(&self, team: &Team) -> Result<Team, RepositoryError> {
        let mut teams = self.teams.write().await;
        if teams.iter().any(|t| t.id() == team.id()) {
            return Err(RepositoryError::Database(format!("duplicate id: {}", team.id())));
        }
        teams.push(team.clone());
        Ok(team.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Team>, RepositoryError> {
        let teams = self.teams.read().await;
        Ok(teams.iter().find(|t| t.id() == id).cloned())
    }

    async fn update(&self, id: Uuid, changes: &TeamChanges) -> Result<Team, RepositoryError> {
        let mut teams = self.teams.write().await;
        let team = teams
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(RepositoryError::NotFound)?;
        team.apply(changes);
        Ok(team.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut teams = self.teams.write().await;
        let before = teams.len();
        teams.retain(|t| t.id() != id);
        Ok(teams.len() != before)
    }
}
