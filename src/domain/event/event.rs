use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::criteria::EventChanges;
use crate::domain::errors::RepositoryError;

/// A scheduled event
///
/// # Invariants
/// - Title and location are never empty
/// - The identifier is assigned on creation and never changes
///
/// # Example
/// ```
/// use chrono::Utc;
/// use fixtures_api::domain::event::Event;
///
/// let event = Event::new(
///     "Season opener".to_string(),
///     Utc::now(),
///     "Main arena".to_string(),
/// ).expect("valid event");
///
/// assert_eq!(event.title(), "Season opener");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: Uuid,
    title: String,
    date: DateTime<Utc>,
    location: String,
}

impl Event {
    /// Creates a new Event with a fresh identifier
    ///
    /// # Returns
    /// * `Ok(Event)` - The new event
    /// * `Err(RepositoryError::Validation)` - If title or location is empty
    pub fn new(title: String, date: DateTime<Utc>, location: String) -> Result<Self, RepositoryError> {
        if title.trim().is_empty() {
            return Err(RepositoryError::Validation("title is required".to_string()));
        }

        if location.trim().is_empty() {
            return Err(RepositoryError::Validation("location is required".to_string()));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            date,
            location,
        })
    }

    /// Applies a partial update; fields absent from `changes` are left as they are
    pub fn apply(&mut self, changes: &EventChanges) {
        if let Some(title) = &changes.title {
            self.title = title.clone();
        }
        if let Some(date) = changes.date {
            self.date = date;
        }
        if let Some(location) = &changes.location {
            self.location = location.clone();
        }
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Reconstructs an Event from stored data
    ///
    /// Skips validation; only repository implementations should call this.
    pub fn from_persistence(id: Uuid, title: String, date: DateTime<Utc>, location: String) -> Self {
        Self {
            id,
            title,
            date,
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Event {
        Event::new(
            "Cup final".to_string(),
            Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap(),
            "Wembley".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn create_event_with_valid_fields() {
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap();
        let event = Event::new("Cup final".to_string(), date, "Wembley".to_string()).unwrap();

        assert_eq!(event.title(), "Cup final");
        assert_eq!(event.date(), date);
        assert_eq!(event.location(), "Wembley");
    }

    #[test]
    fn create_event_with_empty_title_fails() {
        let result = Event::new(String::new(), Utc::now(), "Wembley".to_string());

        assert!(matches!(result, Err(RepositoryError::Validation(msg)) if msg.contains("title")));
    }

    #[test]
    fn create_event_with_blank_location_fails() {
        let result = Event::new("Cup final".to_string(), Utc::now(), "  ".to_string());

        assert!(matches!(result, Err(RepositoryError::Validation(msg)) if msg.contains("location")));
    }

    #[test]
    fn new_events_get_distinct_ids() {
        assert_ne!(sample().id(), sample().id());
    }

    #[test]
    fn apply_partial_changes_keeps_other_fields() {
        let mut event = sample();
        let original = event.clone();

        event.apply(&EventChanges {
            location: Some("Old Trafford".to_string()),
            ..Default::default()
        });

        assert_eq!(event.id(), original.id());
        assert_eq!(event.title(), original.title());
        assert_eq!(event.date(), original.date());
        assert_eq!(event.location(), "Old Trafford");
    }

    #[test]
    fn apply_same_changes_twice_is_stable() {
        let mut event = sample();
        let changes = EventChanges {
            title: Some("Replay".to_string()),
            ..Default::default()
        };

        event.apply(&changes);
        let once = event.clone();
        event.apply(&changes);

        assert_eq!(event, once);
    }
}
