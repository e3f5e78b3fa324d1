use chrono::{DateTime, Utc};

use crate::domain::criteria::{non_empty, parse_optional_timestamp, Page, Sort, SortField};
use crate::domain::errors::RepositoryError;

/// Event attributes that can be used for ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSortField {
    Title,
    Date,
    Location,
}

impl SortField for EventSortField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "date" => Some(Self::Date),
            "location" => Some(Self::Location),
            _ => None,
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Date => "date",
            Self::Location => "location",
        }
    }
}

/// Filter, ordering and pagination for event searches
///
/// Every `None` imposes no constraint. `title` and `location` are
/// case-insensitive regular expressions matched anywhere in the value;
/// the date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCriteria {
    pub title: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub sort: Option<Sort<EventSortField>>,
    pub page: Page,
}

impl EventCriteria {
    /// Builds criteria from raw request values
    ///
    /// Empty strings are treated as absent. Fails only when a date bound
    /// cannot be parsed.
    pub fn from_raw(
        title: Option<String>,
        location: Option<String>,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> Result<Self, RepositoryError> {
        Ok(Self {
            title: non_empty(title),
            location: non_empty(location),
            start_date: parse_optional_timestamp("start_date", start_date)?,
            end_date: parse_optional_timestamp("end_date", end_date)?,
            ..Default::default()
        })
    }

    pub fn with_sort(mut self, sort: Option<Sort<EventSortField>>) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}

/// Partial update of an event
///
/// Absent fields are left unchanged by the update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventChanges {
    pub title: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
}

impl EventChanges {
    /// Builds changes from raw request values, dropping empty ones
    pub fn from_raw(
        title: Option<String>,
        date: Option<String>,
        location: Option<String>,
    ) -> Result<Self, RepositoryError> {
        Ok(Self {
            title: non_empty(title),
            date: parse_optional_timestamp("date", date)?,
            location: non_empty(location),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.date.is_none() && self.location.is_none()
    }
}
