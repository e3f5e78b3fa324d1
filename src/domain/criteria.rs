//! Query building blocks shared by the entity criteria types.

use chrono::{DateTime, NaiveDate, Utc};

use super::errors::RepositoryError;

/// Direction of an ORDER BY clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Interprets a direction parameter
    ///
    /// `desc`, `descending` and `-1` select descending order; anything else
    /// (including an absent value) is ascending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("desc") | Some("descending") | Some("-1") => Self::Descending,
            _ => Self::Ascending,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// A recognized sort field paired with a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<F> {
    pub field: F,
    pub direction: SortDirection,
}

/// Attributes an entity can be sorted by
pub trait SortField: Sized + Copy {
    /// Resolves a field name, `None` when the entity has no such attribute
    fn from_name(name: &str) -> Option<Self>;

    /// Column the field is stored in
    fn column(&self) -> &'static str;
}

impl<F: SortField> Sort<F> {
    /// Builds a sort from request parameters
    ///
    /// Unknown or missing field names yield `None` so the query runs unsorted.
    pub fn parse(field: Option<&str>, direction: Option<&str>) -> Option<Self> {
        let field = F::from_name(field?.trim())?;
        Some(Self {
            field,
            direction: SortDirection::parse(direction),
        })
    }
}

/// Skip/limit pagination
///
/// A `limit` of zero is treated the same as no limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Page {
    pub skip: u64,
    pub limit: Option<u64>,
}

impl Page {
    pub fn new(skip: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            skip: skip.unwrap_or(0),
            limit: limit.filter(|l| *l > 0),
        }
    }

    /// Applies the page to an already ordered sequence
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let skip = usize::try_from(self.skip).unwrap_or(usize::MAX);
        let iter = items.into_iter().skip(skip);
        match self.limit {
            Some(limit) => iter
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .collect(),
            None => iter.collect(),
        }
    }
}

/// Drops absent, empty and whitespace-only values
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (midnight UTC)
pub fn parse_timestamp(field: &str, raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| RepositoryError::Validation(format!("{} is not a valid date: {}", field, raw)))
}

/// Parses an optional date parameter, treating empty values as absent
pub fn parse_optional_timestamp(
    field: &str,
    raw: Option<String>,
) -> Result<Option<DateTime<Utc>>, RepositoryError> {
    non_empty(raw)
        .map(|value| parse_timestamp(field, &value))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Field {
        Name,
    }

    impl SortField for Field {
        fn from_name(name: &str) -> Option<Self> {
            (name == "name").then_some(Field::Name)
        }

        fn column(&self) -> &'static str {
            "name"
        }
    }

    #[test]
    fn direction_defaults_to_ascending() {
        assert_eq!(SortDirection::parse(None), SortDirection::Ascending);
        assert_eq!(SortDirection::parse(Some("asc")), SortDirection::Ascending);
        assert_eq!(SortDirection::parse(Some("1")), SortDirection::Ascending);
        assert_eq!(SortDirection::parse(Some("sideways")), SortDirection::Ascending);
    }

    #[test]
    fn direction_accepts_descending_spellings() {
        assert_eq!(SortDirection::parse(Some("desc")), SortDirection::Descending);
        assert_eq!(SortDirection::parse(Some("DESC")), SortDirection::Descending);
        assert_eq!(SortDirection::parse(Some("-1")), SortDirection::Descending);
    }

    #[test]
    fn unknown_sort_field_is_ignored() {
        assert_eq!(Sort::<Field>::parse(Some("color"), Some("desc")), None);
        assert_eq!(Sort::<Field>::parse(None, Some("desc")), None);
    }

    #[test]
    fn known_sort_field_is_kept() {
        let sort = Sort::<Field>::parse(Some("name"), Some("desc")).unwrap();
        assert_eq!(sort.field, Field::Name);
        assert_eq!(sort.direction, SortDirection::Descending);
        assert_eq!(sort.field.column(), "name");
    }

    #[test]
    fn zero_limit_means_unlimited() {
        let page = Page::new(None, Some(0));
        assert_eq!(page.limit, None);
        assert_eq!(page.apply(1..=5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn page_skips_then_limits() {
        let page = Page::new(Some(1), Some(2));
        assert_eq!(page.apply(1..=5), vec![2, 3]);
    }

    #[test]
    fn skip_past_end_is_empty() {
        let page = Page::new(Some(10), None);
        assert!(page.apply(1..=5).is_empty());
    }

    #[test]
    fn non_empty_filters_blank_values() {
        assert_eq!(non_empty(Some("".to_string())), None);
        assert_eq!(non_empty(Some("   ".to_string())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
    }

    #[test]
    fn parses_rfc3339_and_plain_dates() {
        let ts = parse_timestamp("date", "2024-05-01T10:30:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap());

        let day = parse_timestamp("date", "2024-05-01").unwrap();
        assert_eq!(day, Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage_dates() {
        let err = parse_timestamp("start_date", "yesterday").unwrap_err();
        assert!(matches!(err, RepositoryError::Validation(msg) if msg.contains("start_date")));
    }

    #[test]
    fn optional_timestamp_skips_empty() {
        assert_eq!(parse_optional_timestamp("date", Some(String::new())), Ok(None));
        assert_eq!(parse_optional_timestamp("date", None), Ok(None));
    }
}
