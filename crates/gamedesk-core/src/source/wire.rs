//! Transport-layer helpers: sort-token encoding and HTTP status wording.
//!
//! The backend takes the sort directive as a single enumerated token
//! (`usageCountAsc`, `titleDesc`, ...). Encoding is a transport concern;
//! the engine only ever exposes the (field, direction) pair, and each
//! schema supplies a field-name → wire-name table here.

use crate::engine::SortDirective;

/// Wire names for the game statistics endpoint. The backend defaults to
/// ascending usage count when no sort is requested.
pub const GAME_STAT_SORT_FIELDS: &[(&str, &str)] = &[
    ("id", "id"),
    ("title", "title"),
    ("usage_count", "usageCount"),
    ("question_count", "questionCount"),
    ("completion_rate", "completionRate"),
];

pub const GAME_STAT_DEFAULT_SORT: &str = "usageCountAsc";

/// Encodes a sort directive against a schema's wire-name table.
/// `None` when the field has no wire mapping; callers fall back to the
/// endpoint's default token.
pub fn encode_sort(table: &[(&str, &str)], directive: &SortDirective) -> Option<String> {
    let wire = table
        .iter()
        .find(|(field, _)| *field == directive.field)
        .map(|(_, wire)| *wire)?;
    let suffix = if directive.ascending { "Asc" } else { "Desc" };
    Some(format!("{}{}", wire, suffix))
}

/// Human-readable wording for an HTTP status code, for caller-side
/// messaging. The engine never interprets statuses itself.
pub fn describe_status(status: u16) -> String {
    let message = match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        other => return format!("Error ({})", other),
    };
    message.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_field_and_direction() {
        let d = SortDirective {
            field: "usage_count",
            ascending: true,
        };
        assert_eq!(
            encode_sort(GAME_STAT_SORT_FIELDS, &d),
            Some("usageCountAsc".to_string())
        );
        assert_eq!(
            encode_sort(GAME_STAT_SORT_FIELDS, &d.flipped()),
            Some("usageCountDesc".to_string())
        );
    }

    #[test]
    fn unmapped_field_yields_none() {
        let d = SortDirective::ascending("created_at");
        assert_eq!(encode_sort(GAME_STAT_SORT_FIELDS, &d), None);
    }

    #[test]
    fn every_game_stat_field_has_a_wire_name() {
        use crate::models::GameStatRecord;
        use crate::record::Record;

        for field in GameStatRecord::fields() {
            let d = SortDirective::ascending(field);
            assert!(
                encode_sort(GAME_STAT_SORT_FIELDS, &d).is_some(),
                "field {} missing from wire table",
                field
            );
        }
    }

    #[test]
    fn status_wording_matches_table_with_fallback() {
        assert_eq!(describe_status(404), "Not Found");
        assert_eq!(describe_status(503), "Service Unavailable");
        assert_eq!(describe_status(418), "Error (418)");
    }
}
