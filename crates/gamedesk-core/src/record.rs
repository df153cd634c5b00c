//! Record schema abstraction: field values and the schema descriptor trait.
//!
//! Every management table (users, admins, topics, game stats) holds a
//! homogeneous list of records. A record type describes its own schema:
//! a stable identifier, the set of sortable fields, the subset of fields
//! the free-text search runs over, and an accessor mapping field names to
//! loosely-typed values.

use std::fmt;
use std::hash::Hash;

/// A single field value as seen by sorting and filtering.
///
/// Enumerated statuses surface as their canonical text, so they order
/// lexicographically like any other string.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Absent value (e.g. a record that was never modified).
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Textual form used for substring matching. `None` for null values,
    /// which never match a search term.
    pub fn as_search_text(&self) -> Option<String> {
        match self {
            FieldValue::Null => None,
            FieldValue::Int(n) => Some(n.to_string()),
            FieldValue::Float(f) => Some(f.to_string()),
            FieldValue::Text(s) => Some(s.clone()),
        }
    }
}

/// Schema descriptor for one table's record type.
///
/// Implementations are declarative: a static field list, a static
/// searchable subset, and a `value` accessor. The engine is generic over
/// one record type at a time, so records with different schemas can never
/// end up in the same sort.
pub trait Record: Clone {
    /// Stable unique identifier, used as the selection key.
    type Id: Copy + Eq + Hash + fmt::Display;

    fn id(&self) -> Self::Id;

    /// All sortable field names, in display order.
    fn fields() -> &'static [&'static str];

    /// Fields the free-text search matches against.
    fn searchable() -> &'static [&'static str];

    /// Value of the named field. Callers pass names from `fields()`;
    /// anything else reads as null.
    fn value(&self, field: &str) -> FieldValue;

    /// Case-insensitive substring match of `term` against the searchable
    /// fields. An empty term matches everything.
    fn matches_term(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        Self::searchable().iter().any(|field| {
            self.value(field)
                .as_search_text()
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Probe {
        id: i64,
        name: String,
    }

    impl Record for Probe {
        type Id = i64;

        fn id(&self) -> i64 {
            self.id
        }

        fn fields() -> &'static [&'static str] {
            &["id", "name"]
        }

        fn searchable() -> &'static [&'static str] {
            &["name"]
        }

        fn value(&self, field: &str) -> FieldValue {
            match field {
                "id" => FieldValue::Int(self.id),
                "name" => FieldValue::Text(self.name.clone()),
                _ => FieldValue::Null,
            }
        }
    }

    #[test]
    fn term_match_is_case_insensitive_substring() {
        let p = Probe {
            id: 1,
            name: "Test1".to_string(),
        };
        assert!(p.matches_term("test"));
        assert!(p.matches_term("EST1"));
        assert!(!p.matches_term("test2"));
    }

    #[test]
    fn empty_term_matches_everything() {
        let p = Probe {
            id: 1,
            name: "anything".to_string(),
        };
        assert!(p.matches_term(""));
    }

    #[test]
    fn unknown_field_reads_as_null() {
        let p = Probe {
            id: 1,
            name: "x".to_string(),
        };
        assert!(p.value("nope").is_null());
    }
}
