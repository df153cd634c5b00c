//! In-memory backend implementing both collaborator traits.
//!
//! Serves tests and the CLI the way a mock filesystem serves a collector:
//! deterministic data, no I/O, plus hooks to inject per-id failures.

use std::collections::HashMap;

use crate::engine::FetchParams;
use crate::engine::sort::compare_directed;
use crate::record::Record;

use super::{DeleteEffect, PageResponse, PageSource, RecordStore, SourceError};

/// Record list with server-side pagination and delete semantics.
///
/// Constructed with [`MemoryStore::new`] for hard-delete tables (users,
/// admins) or [`MemoryStore::with_transition`] for soft-delete tables
/// (topics).
pub struct MemoryStore<R: Record> {
    records: Vec<R>,
    /// Soft-delete transition; `None` means hard delete.
    transition: Option<fn(&mut R)>,
    /// Injected failures, consumed on first use.
    fail: HashMap<R::Id, SourceError>,
}

impl<R: Record> MemoryStore<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            transition: None,
            fail: HashMap::new(),
        }
    }

    pub fn with_transition(records: Vec<R>, transition: fn(&mut R)) -> Self {
        Self {
            records,
            transition: Some(transition),
            fail: HashMap::new(),
        }
    }

    /// Makes the next delete of `id` fail with the given error.
    pub fn fail_delete(&mut self, id: R::Id, error: SourceError) {
        self.fail.insert(id, error);
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }
}

impl<R: Record> PageSource<R> for MemoryStore<R> {
    fn fetch_page(&mut self, params: &FetchParams) -> Result<PageResponse<R>, SourceError> {
        let mut rows: Vec<&R> = self
            .records
            .iter()
            .filter(|r| r.matches_term(&params.filter))
            .collect();
        if let Some(directive) = params.sort {
            rows.sort_by(|a, b| {
                compare_directed(
                    &a.value(directive.field),
                    &b.value(directive.field),
                    directive.ascending,
                )
            });
        }

        let page_size = params.page_size.max(1);
        let total_pages = (rows.len() as u32).div_ceil(page_size);
        let start = (params.page.saturating_sub(1) as usize) * page_size as usize;
        let records = rows
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .cloned()
            .collect();

        Ok(PageResponse {
            records,
            total_pages,
        })
    }
}

impl<R: Record> RecordStore<R> for MemoryStore<R> {
    fn delete(&mut self, id: R::Id) -> Result<DeleteEffect<R>, SourceError> {
        if let Some(error) = self.fail.remove(&id) {
            return Err(error);
        }

        let Some(pos) = self.records.iter().position(|r| r.id() == id) else {
            return Err(SourceError::NotFound(id.to_string()));
        };

        match self.transition {
            Some(transition) => {
                let record = &mut self.records[pos];
                transition(record);
                Ok(DeleteEffect::Updated(record.clone()))
            }
            None => {
                self.records.remove(pos);
                Ok(DeleteEffect::Removed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SortDirective;
    use crate::models::{GameStatRecord, TopicStatus, seed};

    fn params(
        sort: Option<SortDirective>,
        page: u32,
        page_size: u32,
        filter: &str,
    ) -> FetchParams {
        FetchParams {
            sort,
            page,
            page_size,
            filter: filter.to_string(),
        }
    }

    #[test]
    fn fetch_page_sorts_and_slices() {
        let mut store = MemoryStore::new(seed::game_stats());
        let directive = SortDirective {
            field: "usage_count",
            ascending: false,
        };
        let page = store
            .fetch_page(&params(Some(directive), 1, 2, ""))
            .unwrap();
        assert_eq!(page.total_pages, 2);
        let ids: Vec<i64> = page.records.iter().map(|r| r.topic_id).collect();
        assert_eq!(ids, vec![3, 1]); // 2940, 1284

        let page2 = store
            .fetch_page(&params(Some(directive), 2, 2, ""))
            .unwrap();
        let ids: Vec<i64> = page2.records.iter().map(|r| r.topic_id).collect();
        assert_eq!(ids, vec![2, 4]); // 861, 97
    }

    #[test]
    fn fetch_page_applies_filter_before_paging() {
        let mut store = MemoryStore::new(seed::game_stats());
        let page = store.fetch_page(&params(None, 1, 10, "world")).unwrap();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].topic_id, 2);
    }

    #[test]
    fn fetch_past_the_end_returns_empty_page() {
        let mut store: MemoryStore<GameStatRecord> = MemoryStore::new(seed::game_stats());
        let page = store.fetch_page(&params(None, 9, 10, "")).unwrap();
        assert!(page.records.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn hard_delete_removes_record() {
        let mut store = MemoryStore::new(seed::users());
        assert!(matches!(store.delete(1), Ok(DeleteEffect::Removed)));
        assert!(store.records().iter().all(|u| u.id != 1));
    }

    #[test]
    fn soft_delete_returns_transitioned_record() {
        let mut store = MemoryStore::with_transition(seed::topics(), |t| t.mark_deleted());
        match store.delete(1) {
            Ok(DeleteEffect::Updated(topic)) => {
                assert_eq!(topic.status, TopicStatus::Deleted);
                assert!(topic.deleted_at.is_some());
            }
            other => panic!("expected soft delete, got {:?}", other),
        }
        // Record stays in the store.
        assert_eq!(store.records().len(), 3);
    }

    #[test]
    fn missing_id_reports_not_found() {
        let mut store = MemoryStore::new(seed::users());
        assert_eq!(
            store.delete(99),
            Err(SourceError::NotFound("99".to_string()))
        );
    }

    #[test]
    fn injected_failure_is_consumed_once() {
        let mut store = MemoryStore::new(seed::users());
        store.fail_delete(1, SourceError::Transport("timeout".to_string()));
        assert!(store.delete(1).is_err());
        assert!(matches!(store.delete(1), Ok(DeleteEffect::Removed)));
    }
}
