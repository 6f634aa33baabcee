//! Row predicates for the table controller.
//!
//! Both predicates are pure and cheap; the controller re-runs them over the
//! whole record set on every query or filter change.

use super::field_path::FieldPath;
use super::record::TableRecord;

/// Case-insensitive substring search over a set of field paths
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    /// `None` for an empty query, which matches every record
    pub fn new(query: &str) -> Option<Self> {
        if query.is_empty() {
            None
        } else {
            Some(Self { needle: query.to_lowercase() })
        }
    }

    /// True if any field resolves to text containing the query.
    ///
    /// With no searchable fields configured the query is ignored.
    pub fn matches<T: TableRecord + ?Sized>(&self, record: &T, fields: &[FieldPath]) -> bool {
        if fields.is_empty() {
            return true;
        }
        fields.iter().any(|path| {
            record
                .field_text(path)
                .map(|text| text.to_lowercase().contains(&self.needle))
                .unwrap_or(false)
        })
    }
}

/// Case-insensitive equality on one designated field
#[derive(Debug, Clone, PartialEq)]
pub struct StatusFilter {
    field: FieldPath,
    expected: String,
}

impl StatusFilter {
    /// `None` when no status field is configured or the value is empty
    pub fn new(field: Option<&FieldPath>, value: Option<&str>) -> Option<Self> {
        let field = field?;
        let value = value.filter(|v| !v.is_empty())?;
        Some(Self {
            field: field.clone(),
            expected: value.to_lowercase(),
        })
    }

    pub fn matches<T: TableRecord + ?Sized>(&self, record: &T) -> bool {
        record
            .field_text(&self.field)
            .map(|text| text.to_lowercase() == self.expected)
            .unwrap_or(false)
    }
}

/// Combined predicate: search AND status
pub fn matches_record<T: TableRecord + ?Sized>(
    record: &T,
    search: Option<&SearchFilter>,
    searchable_fields: &[FieldPath],
    status: Option<&StatusFilter>,
) -> bool {
    let search_ok = search.map_or(true, |filter| filter.matches(record, searchable_fields));
    let status_ok = status.map_or(true, |filter| filter.matches(record));
    search_ok && status_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(paths: &[&str]) -> Vec<FieldPath> {
        paths.iter().map(|p| FieldPath::from(*p)).collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let record = json!({"name": "john smith"});
        let filter = SearchFilter::new("SMITH").unwrap();

        assert!(filter.matches(&record, &fields(&["name"])));
    }

    #[test]
    fn test_search_any_field_matches() {
        let record = json!({"name": "Acme", "customer": {"email": "buyer@prints.test"}});
        let filter = SearchFilter::new("prints").unwrap();

        assert!(filter.matches(&record, &fields(&["name", "customer.email"])));
        assert!(!filter.matches(&record, &fields(&["name"])));
    }

    #[test]
    fn test_search_null_and_missing_do_not_match() {
        let record = json!({"name": null});
        let filter = SearchFilter::new("null").unwrap();

        assert!(!filter.matches(&record, &fields(&["name", "customer.name"])));
    }

    #[test]
    fn test_search_numbers_by_text() {
        let record = json!({"order_number": 10452});
        let filter = SearchFilter::new("045").unwrap();

        assert!(filter.matches(&record, &fields(&["order_number"])));
    }

    #[test]
    fn test_empty_query_and_empty_fields() {
        assert!(SearchFilter::new("").is_none());

        let record = json!({"name": "anything"});
        let filter = SearchFilter::new("zzz").unwrap();
        assert!(filter.matches(&record, &[]));
    }

    #[test]
    fn test_status_equality() {
        let status_field = FieldPath::from("status");
        let filter = StatusFilter::new(Some(&status_field), Some("active")).unwrap();

        assert!(filter.matches(&json!({"status": "Active"})));
        assert!(!filter.matches(&json!({"status": "Inactive"})));
        assert!(!filter.matches(&json!({"status": "Active-ish"})));
        assert!(!filter.matches(&json!({})));
    }

    #[test]
    fn test_status_inactive_cases() {
        let status_field = FieldPath::from("status");

        assert!(StatusFilter::new(None, Some("Active")).is_none());
        assert!(StatusFilter::new(Some(&status_field), Some("")).is_none());
        assert!(StatusFilter::new(Some(&status_field), None).is_none());
    }

    #[test]
    fn test_combined_predicate() {
        let searchable = fields(&["name"]);
        let status_field = FieldPath::from("status");
        let search = SearchFilter::new("card");
        let status = StatusFilter::new(Some(&status_field), Some("Active"));

        let record = json!({"name": "Business cards", "status": "Active"});
        assert!(matches_record(&record, search.as_ref(), &searchable, status.as_ref()));

        let record = json!({"name": "Business cards", "status": "Inactive"});
        assert!(!matches_record(&record, search.as_ref(), &searchable, status.as_ref()));

        let record = json!({"name": "Posters", "status": "Active"});
        assert!(!matches_record(&record, search.as_ref(), &searchable, status.as_ref()));
    }
}
