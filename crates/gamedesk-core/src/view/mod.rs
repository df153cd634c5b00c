//! UI-agnostic view models.
//!
//! These types represent presentation data without any dependency on a
//! specific rendering layer: the CLI maps them to plain-text columns, a
//! web frontend would map them to table markup. Selection and sort
//! indicator state is carried alongside the cells so the frontend never
//! has to reach back into the engine while rendering.

use crate::engine::{PageWindow, TableEngine};
use crate::fmt;
use crate::models::{AdminRecord, GameStatRecord, TopicRecord, UserRecord};
use crate::record::Record;

/// One table row, parameterized by entity ID type.
#[derive(Debug, Clone)]
pub struct ViewRow<Id> {
    pub id: Id,
    pub cells: Vec<String>,
    pub selected: bool,
    /// Whether the row-level delete action is enabled under the table's
    /// protection policy.
    pub deletable: bool,
}

/// Complete table ready to be rendered by any frontend.
#[derive(Debug, Clone)]
pub struct TableViewModel<Id> {
    pub title: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<ViewRow<Id>>,
    pub sort_field: Option<&'static str>,
    /// Column index of the sorted field, for header indicators. Field
    /// order and column order coincide for every schema here.
    pub sort_col: Option<usize>,
    pub sort_ascending: bool,
    pub all_selected: bool,
    pub page: PageWindow,
}

impl<Id> TableViewModel<Id> {
    /// Ids whose rows are both selected and deletable: the set a
    /// bulk-delete control operates on.
    pub fn deletable_ids(&self) -> Vec<&Id> {
        self.rows
            .iter()
            .filter(|r| r.selected && r.deletable)
            .map(|r| &r.id)
            .collect()
    }
}

/// Presentation schema for one record type: column headers and cell
/// rendering. Kept separate from [`Record`] so the engine itself never
/// deals in display strings.
pub trait TableDisplay: Record {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

/// Builds the view model for the engine's current page: filtered, sorted,
/// windowed rows with selection markers and per-row delete enablement.
pub fn build_view<R: TableDisplay>(
    title: &str,
    engine: &TableEngine<R>,
    policy: impl Fn(&R) -> bool,
) -> TableViewModel<R::Id> {
    let rows: Vec<ViewRow<R::Id>> = engine
        .page_items()
        .into_iter()
        .map(|record| ViewRow {
            id: record.id(),
            cells: record.cells(),
            selected: engine.selected().contains(&record.id()),
            deletable: policy(record),
        })
        .collect();

    let title = if engine.filter_term().is_empty() {
        format!("{} [{} rows]", title, rows.len())
    } else {
        format!(
            "{} (filter: {}) [{} rows]",
            title,
            engine.filter_term(),
            rows.len()
        )
    };

    let (sort_field, sort_ascending) = match engine.sort_directive() {
        Some(d) => (Some(d.field), d.ascending),
        None => (None, true),
    };
    let sort_col = sort_field.and_then(|f| R::fields().iter().position(|x| *x == f));

    TableViewModel {
        title,
        headers: R::headers().to_vec(),
        rows,
        sort_field,
        sort_col,
        sort_ascending,
        all_selected: engine.is_all_selected(),
        page: engine.page_window(),
    }
}

// ===========================================================================
// Per-table presentation schemas
// ===========================================================================

impl TableDisplay for UserRecord {
    fn headers() -> &'static [&'static str] {
        &["ID", "USERNAME", "EMAIL", "CREATED", "MODIFIED", "STATUS", "ROLE"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.username.clone(),
            self.email.clone(),
            self.created_at.to_string(),
            fmt::format_opt_date(self.modified_at),
            self.status.as_str().to_string(),
            self.role.as_str().to_string(),
        ]
    }
}

impl TableDisplay for AdminRecord {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "EMAIL", "CREATED", "MODIFIED", "STATUS", "PERMISSION"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.created_at.to_string(),
            fmt::format_opt_date(self.modified_at),
            self.status.as_str().to_string(),
            self.permission.as_str().to_string(),
        ]
    }
}

impl TableDisplay for TopicRecord {
    fn headers() -> &'static [&'static str] {
        &["ID", "TITLE", "CREATED", "QUESTIONS", "STATUS", "DELETED"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.created_at.to_string(),
            self.question_count.to_string(),
            self.status.as_str().to_string(),
            fmt::format_opt_datetime(self.deleted_at),
        ]
    }
}

impl TableDisplay for GameStatRecord {
    fn headers() -> &'static [&'static str] {
        &["ID", "TITLE", "PLAYS", "QUESTIONS", "COMPLETION"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.topic_id.to_string(),
            self.title.clone(),
            fmt::format_count(self.usage_count),
            self.question_count.to_string(),
            fmt::format_pct(self.completion_rate),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Paging;
    use crate::models::seed;

    #[test]
    fn view_carries_selection_and_deletability() {
        let mut engine = TableEngine::new(Paging::Local { page_size: 10 });
        engine.set_records(seed::users());
        engine.toggle_select(1);
        engine.toggle_select(4); // admin, protected

        let view = build_view("Users", &engine, UserRecord::can_delete);
        assert_eq!(view.headers.len(), 7);
        assert_eq!(view.rows.len(), 4);

        let row1 = view.rows.iter().find(|r| r.id == 1).unwrap();
        assert!(row1.selected && row1.deletable);
        let row4 = view.rows.iter().find(|r| r.id == 4).unwrap();
        assert!(row4.selected && !row4.deletable);

        assert_eq!(view.deletable_ids(), vec![&1]);
    }

    #[test]
    fn cell_count_matches_headers_for_every_schema() {
        for u in seed::users() {
            assert_eq!(u.cells().len(), UserRecord::headers().len());
        }
        for a in seed::admins() {
            assert_eq!(a.cells().len(), AdminRecord::headers().len());
        }
        for t in seed::topics() {
            assert_eq!(t.cells().len(), TopicRecord::headers().len());
        }
        for s in seed::game_stats() {
            assert_eq!(s.cells().len(), GameStatRecord::headers().len());
        }
    }

    #[test]
    fn title_reports_filter_and_row_count() {
        let mut engine = TableEngine::new(Paging::Local { page_size: 10 });
        engine.set_records(seed::users());
        engine.set_filter("test");
        let view = build_view("Users", &engine, UserRecord::can_delete);
        assert_eq!(view.title, "Users (filter: test) [3 rows]");
    }

    #[test]
    fn sort_indicator_reflects_engine_directive() {
        let mut engine = TableEngine::new(Paging::Local { page_size: 10 });
        engine.set_records(seed::users());
        engine.request_sort("email").unwrap();
        engine.request_sort("email").unwrap();
        let view = build_view("Users", &engine, UserRecord::can_delete);
        assert_eq!(view.sort_field, Some("email"));
        assert!(!view.sort_ascending);
    }
}
