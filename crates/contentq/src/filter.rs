use serde::{Deserialize, Serialize};

///
/// FilterSpec
///
/// Raw filter input as it arrives from UI state or URL parameters.
/// Absent fields impose no constraint; an empty string is treated as
/// absent. Interpretation happens in a single normalization pass, so
/// constraint generation never re-checks field presence ad hoc.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSpec {
    pub content_type: Option<String>,
    pub status: Option<String>,
    pub date_range: Option<DateRange>,
}

impl FilterSpec {
    /// Construct an empty filter (no constraints).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            content_type: None,
            status: None,
            date_range: None,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content_type.is_none() && self.status.is_none() && self.date_range.is_none()
    }

    /// Resolve this raw input into its normalized form.
    ///
    /// Empty and absent fields collapse to the same representation here,
    /// which is what makes plans for equivalent inputs element-wise equal.
    #[must_use]
    pub(crate) fn normalize(&self) -> NormalizedFilter {
        let (start, end) = match &self.date_range {
            Some(range) => (present(&range.start), present(&range.end)),
            None => (None, None),
        };

        NormalizedFilter {
            content_type: present(&self.content_type),
            status: present(&self.status),
            created_after: start,
            created_before: end,
        }
    }
}

///
/// DateRange
///
/// Inclusive bounds on the creation-time field, as ISO-date strings.
/// No date validation occurs in this crate; bounds are passed to the
/// storage collaborator uninterpreted.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

///
/// NormalizedFilter
///
/// Fully-populated filter resolved at the boundary: every field is either
/// a non-empty value or definitively absent. This is the only filter shape
/// the plan emitter consumes.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct NormalizedFilter {
    pub(crate) content_type: Option<String>,
    pub(crate) status: Option<String>,
    pub(crate) created_after: Option<String>,
    pub(crate) created_before: Option<String>,
}

impl NormalizedFilter {
    /// Normalized form of an absent filter: nothing set.
    pub(crate) const EMPTY: Self = Self {
        content_type: None,
        status: None,
        created_after: None,
        created_before: None,
    };
}

/// Collapse empty strings into absence.
fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{DateRange, FilterSpec, NormalizedFilter};

    #[test]
    fn empty_filter_normalizes_to_empty() {
        assert_eq!(FilterSpec::new().normalize(), NormalizedFilter::EMPTY);
        assert!(FilterSpec::default().is_empty());
    }

    #[test]
    fn empty_strings_are_treated_as_absent() {
        let spec = FilterSpec {
            content_type: Some(String::new()),
            status: Some(String::new()),
            date_range: Some(DateRange {
                start: Some(String::new()),
                end: Some(String::new()),
            }),
        };

        assert_eq!(spec.normalize(), NormalizedFilter::EMPTY);
    }

    #[test]
    fn set_fields_survive_normalization() {
        let spec = FilterSpec {
            content_type: Some("promotion".to_string()),
            status: Some("active".to_string()),
            date_range: Some(DateRange {
                start: Some("2026-01-01".to_string()),
                end: None,
            }),
        };

        let normalized = spec.normalize();
        assert_eq!(normalized.content_type.as_deref(), Some("promotion"));
        assert_eq!(normalized.status.as_deref(), Some("active"));
        assert_eq!(normalized.created_after.as_deref(), Some("2026-01-01"));
        assert_eq!(normalized.created_before, None);
    }

    #[test]
    fn boundary_shape_is_camel_case() {
        let spec: FilterSpec = serde_json::from_str(
            r#"{"contentType":"job","dateRange":{"start":"2026-02-01"}}"#,
        )
        .unwrap();

        assert_eq!(spec.content_type.as_deref(), Some("job"));
        assert_eq!(spec.status, None);
        let range = spec.date_range.unwrap();
        assert_eq!(range.start.as_deref(), Some("2026-02-01"));
        assert_eq!(range.end, None);
    }
}
