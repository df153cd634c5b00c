//! Tabular view engine: one generic filter/sort/select/paginate state
//! machine shared by every management table.
//!
//! The engine owns the derived view (filtered, stably sorted, windowed)
//! and the selection set. The raw record list is handed in as a snapshot
//! by the data source; the engine never talks to the network itself. In
//! server mode, parameter changes produce fetch tickets and completed
//! fetches are applied only while their parameter snapshot still matches
//! current state, so a slow response can never roll the view backwards.

pub mod page;
pub mod sort;

pub use page::{FetchParams, FetchTicket, PageWindow, Paging};
pub use sort::SortDirective;

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::record::Record;
use crate::source::{DeleteEffect, RecordStore, SourceError};

/// Engine-boundary validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Sort requested on a field the schema does not declare.
    UnknownField { field: String },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::UnknownField { field } => {
                write!(f, "unknown field: {}", field)
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Whether a completed fetch was applied or thrown away as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDisposition {
    Applied,
    Stale,
}

/// Per-id outcomes of one bulk delete, in the order the intents were
/// fired. Partial failure is data here, never a single opaque error.
#[derive(Debug)]
pub struct DeleteReport<Id> {
    pub outcomes: Vec<(Id, Result<(), SourceError>)>,
}

impl<Id: Copy> DeleteReport<Id> {
    pub fn succeeded(&self) -> Vec<Id> {
        self.outcomes
            .iter()
            .filter(|(_, r)| r.is_ok())
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn failed(&self) -> Vec<(Id, &SourceError)> {
        self.outcomes
            .iter()
            .filter_map(|(id, r)| r.as_ref().err().map(|e| (*id, e)))
            .collect()
    }

    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(|(_, r)| r.is_ok())
    }
}

/// Generic table state for one record type.
pub struct TableEngine<R: Record> {
    records: Vec<R>,
    sort: Option<SortDirective>,
    filter: String,
    selected: HashSet<R::Id>,
    paging: Paging,
    current_page: u32,
    total_pages: u32,
    pending_fetch: Option<FetchTicket>,
    fetch_seq: u64,
}

impl<R: Record> TableEngine<R> {
    /// Creates an engine in the given paging mode. A server-mode engine
    /// starts with a pending fetch for page 1, mirroring the initial load
    /// of a server-paginated table.
    pub fn new(paging: Paging) -> Self {
        let mut engine = Self {
            records: Vec::new(),
            sort: None,
            filter: String::new(),
            selected: HashSet::new(),
            paging,
            current_page: 1,
            total_pages: 0,
            pending_fetch: None,
            fetch_seq: 0,
        };
        if matches!(paging, Paging::Server { .. }) {
            engine.schedule_fetch();
        }
        engine
    }

    // ------------------------------------------------------------------
    // Source list
    // ------------------------------------------------------------------

    /// Replaces the source list wholesale. Selected ids that are no longer
    /// present are dropped; filter and sort are untouched.
    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.reintersect_selection();
    }

    /// The full loaded list, unfiltered.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    fn reintersect_selection(&mut self) {
        let universe: HashSet<R::Id> = self.records.iter().map(Record::id).collect();
        self.selected.retain(|id| universe.contains(id));
    }

    // ------------------------------------------------------------------
    // Filter
    // ------------------------------------------------------------------

    /// Replaces the search term. No effect on selection or sort. An empty
    /// term matches everything.
    pub fn set_filter(&mut self, term: &str) {
        if self.filter == term {
            return;
        }
        self.filter = term.to_string();
        if self.is_server_mode() {
            self.schedule_fetch();
        }
    }

    pub fn filter_term(&self) -> &str {
        &self.filter
    }

    // ------------------------------------------------------------------
    // Sort
    // ------------------------------------------------------------------

    /// The only sort entry point: repeated requests on the active field
    /// flip the direction, a new field starts ascending. Unknown fields
    /// are rejected, not ignored.
    pub fn request_sort(&mut self, field: &str) -> Result<(), EngineError> {
        let field = R::fields()
            .iter()
            .find(|f| **f == field)
            .copied()
            .ok_or_else(|| EngineError::UnknownField {
                field: field.to_string(),
            })?;

        self.sort = Some(match self.sort {
            Some(active) if active.field == field => active.flipped(),
            _ => SortDirective::ascending(field),
        });
        if self.is_server_mode() {
            self.schedule_fetch();
        }
        Ok(())
    }

    pub fn sort_directive(&self) -> Option<SortDirective> {
        self.sort
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    /// Moves to page `n` (1-based). The engine does not clamp: in local
    /// mode an out-of-range page yields an empty slice, which is defined
    /// behavior, not an error.
    pub fn set_page(&mut self, n: u32) {
        if self.current_page == n {
            return;
        }
        self.current_page = n;
        if self.is_server_mode() {
            self.schedule_fetch();
        }
    }

    pub fn page_window(&self) -> PageWindow {
        PageWindow {
            current_page: self.current_page,
            page_size: self.paging.page_size(),
            total_pages: match self.paging {
                Paging::Local { page_size } => {
                    let len = self.filtered_sorted().len() as u32;
                    len.div_ceil(page_size.max(1))
                }
                Paging::Server { .. } => self.total_pages,
            },
        }
    }

    /// Records visible on the current page: the filtered, sorted window
    /// in local mode; exactly what the backend returned in server mode.
    pub fn page_items(&self) -> Vec<&R> {
        match self.paging {
            Paging::Local { page_size } => {
                let start = (self.current_page.saturating_sub(1) as usize) * page_size as usize;
                self.filtered_sorted()
                    .into_iter()
                    .skip(start)
                    .take(page_size as usize)
                    .collect()
            }
            Paging::Server { .. } => self.records.iter().collect(),
        }
    }

    /// Filtered then stably sorted view of the loaded list. Ties keep
    /// their source order; there is no secondary sort key.
    fn filtered_sorted(&self) -> Vec<&R> {
        let mut rows: Vec<&R> = self
            .records
            .iter()
            .filter(|r| r.matches_term(&self.filter))
            .collect();
        if let Some(directive) = self.sort {
            rows.sort_by(|a, b| {
                sort::compare_directed(
                    &a.value(directive.field),
                    &b.value(directive.field),
                    directive.ascending,
                )
            });
        }
        rows
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Toggles one id in or out of the selection set. Ids not present in
    /// the loaded list are ignored: the selection is always a subset of
    /// the loaded identifiers.
    pub fn toggle_select(&mut self, id: R::Id) {
        if self.selected.remove(&id) {
            return;
        }
        if self.records.iter().any(|r| r.id() == id) {
            self.selected.insert(id);
        }
    }

    /// Selects every loaded record (not just the filtered view), or
    /// clears the selection when everything is already selected. Two
    /// calls with no intervening change restore the original set.
    pub fn toggle_select_all(&mut self) {
        if self.selected.len() == self.records.len() {
            self.selected.clear();
        } else {
            self.selected = self.records.iter().map(Record::id).collect();
        }
    }

    pub fn selected(&self) -> &HashSet<R::Id> {
        &self.selected
    }

    pub fn is_all_selected(&self) -> bool {
        !self.records.is_empty() && self.selected.len() == self.records.len()
    }

    /// Selected ids that pass the protection policy, in record order.
    /// Protected rows are silently excluded; bulk delete never errors on
    /// them.
    pub fn compute_deletable(&self, policy: impl Fn(&R) -> bool) -> Vec<R::Id> {
        self.records
            .iter()
            .filter(|r| self.selected.contains(&r.id()) && policy(r))
            .map(Record::id)
            .collect()
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Fires one removal intent per id, in order, best-effort: a failed
    /// id is reported and does not block the rest, and nothing is rolled
    /// back. Hard deletes drop the local record, soft deletes apply the
    /// store's status transition. The selection is cleared once all
    /// intents have been attempted, regardless of individual outcomes.
    pub fn commit_delete(
        &mut self,
        ids: &[R::Id],
        store: &mut dyn RecordStore<R>,
    ) -> DeleteReport<R::Id> {
        let mut outcomes = Vec::with_capacity(ids.len());
        for &id in ids {
            match store.delete(id) {
                Ok(DeleteEffect::Removed) => {
                    self.records.retain(|r| r.id() != id);
                    outcomes.push((id, Ok(())));
                }
                Ok(DeleteEffect::Updated(updated)) => {
                    if let Some(slot) = self.records.iter_mut().find(|r| r.id() == id) {
                        *slot = updated;
                    }
                    outcomes.push((id, Ok(())));
                }
                Err(e) => {
                    warn!(id = %id, error = %e, "delete failed");
                    outcomes.push((id, Err(e)));
                }
            }
        }
        self.selected.clear();
        DeleteReport { outcomes }
    }

    // ------------------------------------------------------------------
    // Server-mode fetch plumbing
    // ------------------------------------------------------------------

    fn is_server_mode(&self) -> bool {
        matches!(self.paging, Paging::Server { .. })
    }

    fn current_params(&self) -> FetchParams {
        FetchParams {
            sort: self.sort,
            page: self.current_page,
            page_size: self.paging.page_size(),
            filter: self.filter.clone(),
        }
    }

    fn schedule_fetch(&mut self) {
        self.fetch_seq += 1;
        self.pending_fetch = Some(FetchTicket {
            seq: self.fetch_seq,
            params: self.current_params(),
        });
    }

    /// Takes the pending fetch ticket, if any. The host performs the
    /// fetch with the ticket's parameters and reports back through
    /// [`TableEngine::apply_fetch`].
    pub fn take_fetch(&mut self) -> Option<FetchTicket> {
        self.pending_fetch.take()
    }

    /// Applies a completed server-mode fetch. Last request wins: if the
    /// ticket's parameter snapshot no longer matches current state, the
    /// response is discarded and state is untouched.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        response: crate::source::PageResponse<R>,
    ) -> FetchDisposition {
        if ticket.params != self.current_params() {
            debug!(seq = ticket.seq, "discarding stale fetch response");
            return FetchDisposition::Stale;
        }
        self.records = response.records;
        self.total_pages = response.total_pages;
        self.reintersect_selection();
        FetchDisposition::Applied
    }
}
