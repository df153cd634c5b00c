//! Sort directive and the field-value comparator.

use std::cmp::Ordering;

use crate::record::FieldValue;

/// The active sort: one field, one direction. Replaced wholesale on each
/// sort request; there is no "clear sort" operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective {
    pub field: &'static str,
    pub ascending: bool,
}

impl SortDirective {
    pub fn ascending(field: &'static str) -> Self {
        Self {
            field,
            ascending: true,
        }
    }

    /// Same field, opposite direction.
    pub fn flipped(self) -> Self {
        Self {
            ascending: !self.ascending,
            ..self
        }
    }
}

/// Ascending comparison of two field values.
///
/// Null sorts before any non-null value; two nulls tie. Same-type values
/// use standard ordering (numeric / lexicographic). Values of different
/// non-null types cannot meet in a well-formed schema (each field has one
/// static type); that arm ties, as does a float NaN pair.
pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Null, FieldValue::Null) => Ordering::Equal,
        (FieldValue::Null, _) => Ordering::Less,
        (_, FieldValue::Null) => Ordering::Greater,
        (FieldValue::Int(x), FieldValue::Int(y)) => x.cmp(y),
        (FieldValue::Float(x), FieldValue::Float(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

/// Comparison with the directive's direction applied. Reversing the
/// ascending order moves nulls to the end, which is the contract for
/// descending sorts.
pub fn compare_directed(a: &FieldValue, b: &FieldValue, ascending: bool) -> Ordering {
    let cmp = compare_values(a, b);
    if ascending { cmp } else { cmp.reverse() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_sorts_before_any_value_ascending() {
        assert_eq!(
            compare_directed(&FieldValue::Null, &FieldValue::Int(-100), true),
            Ordering::Less
        );
        assert_eq!(
            compare_directed(&FieldValue::Text("a".into()), &FieldValue::Null, true),
            Ordering::Greater
        );
    }

    #[test]
    fn null_sorts_after_any_value_descending() {
        assert_eq!(
            compare_directed(&FieldValue::Null, &FieldValue::Int(-100), false),
            Ordering::Greater
        );
        assert_eq!(
            compare_directed(&FieldValue::Text("a".into()), &FieldValue::Null, false),
            Ordering::Less
        );
    }

    #[test]
    fn two_nulls_tie_in_both_directions() {
        assert_eq!(
            compare_directed(&FieldValue::Null, &FieldValue::Null, true),
            Ordering::Equal
        );
        assert_eq!(
            compare_directed(&FieldValue::Null, &FieldValue::Null, false),
            Ordering::Equal
        );
    }

    #[test]
    fn same_type_values_use_standard_ordering() {
        assert_eq!(
            compare_values(&FieldValue::Int(2), &FieldValue::Int(10)),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&FieldValue::Float(1.5), &FieldValue::Float(0.5)),
            Ordering::Greater
        );
        assert_eq!(
            compare_values(
                &FieldValue::Text("abc".into()),
                &FieldValue::Text("abd".into())
            ),
            Ordering::Less
        );
    }

    #[test]
    fn nan_pair_ties() {
        assert_eq!(
            compare_values(&FieldValue::Float(f64::NAN), &FieldValue::Float(f64::NAN)),
            Ordering::Equal
        );
    }

    #[test]
    fn flipped_toggles_direction_only() {
        let d = SortDirective::ascending("email");
        let f = d.flipped();
        assert_eq!(f.field, "email");
        assert!(!f.ascending);
        assert_eq!(f.flipped(), d);
    }
}
