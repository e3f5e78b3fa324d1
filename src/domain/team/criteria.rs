use crate::domain::criteria::{non_empty, Page, Sort, SortField};

/// Team attributes that can be used for ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSortField {
    Name,
}

impl SortField for TeamSortField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            _ => None,
        }
    }

    fn column(&self) -> &'static str {
        "name"
    }
}

/// Filter, ordering and pagination for team searches
///
/// `name` is a case-insensitive regular expression matched anywhere in the
/// team name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamCriteria {
    pub name: Option<String>,
    pub sort: Option<Sort<TeamSortField>>,
    pub page: Page,
}

impl TeamCriteria {
    pub fn from_raw(name: Option<String>) -> Self {
        Self {
            name: non_empty(name),
            ..Default::default()
        }
    }

    pub fn with_sort(mut self, sort: Option<Sort<TeamSortField>>) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}

/// Partial update of a team
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamChanges {
    pub name: Option<String>,
}

impl TeamChanges {
    pub fn from_raw(name: Option<String>) -> Self {
        Self {
            name: non_empty(name),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_imposes_no_filter() {
        assert_eq!(TeamCriteria::from_raw(Some(" ".to_string())), TeamCriteria::default());
    }

    #[test]
    fn only_name_is_sortable() {
        assert!(Sort::<TeamSortField>::parse(Some("name"), None).is_some());
        assert!(Sort::<TeamSortField>::parse(Some("title"), None).is_none());
    }

    #[test]
    fn blank_name_change_is_dropped() {
        assert!(TeamChanges::from_raw(Some(String::new())).is_empty());
        assert!(!TeamChanges::from_raw(Some("Rovers".to_string())).is_empty());
    }
}
