//! Page window, paging modes, and the fetch-ticket token used for
//! stale-response discard in server mode.

use super::sort::SortDirective;

/// Paging mode, fixed per engine instance at construction. The two modes
/// are never mixed: local mode slices the filtered/sorted list itself,
/// server mode displays exactly what the backend returned for the current
/// parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paging {
    Local { page_size: u32 },
    Server { page_size: u32 },
}

impl Paging {
    pub fn page_size(self) -> u32 {
        match self {
            Paging::Local { page_size } | Paging::Server { page_size } => page_size,
        }
    }
}

/// Current pagination view: 1-based page, page size, and total page count
/// (computed locally or reported by the backend, depending on mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// The exact parameter snapshot a server-mode fetch was issued for.
/// A completed fetch is applied only while this still matches the
/// engine's current parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchParams {
    pub sort: Option<SortDirective>,
    pub page: u32,
    pub page_size: u32,
    pub filter: String,
}

/// Token tagging one in-flight server-mode fetch. `seq` is monotonic and
/// only used for diagnostics; staleness is decided by comparing `params`.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    pub seq: u64,
    pub params: FetchParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_params_compare_by_full_snapshot() {
        let a = FetchParams {
            sort: Some(SortDirective::ascending("title")),
            page: 1,
            page_size: 10,
            filter: String::new(),
        };
        let mut b = a.clone();
        assert_eq!(a, b);
        b.page = 2;
        assert_ne!(a, b);
    }

    #[test]
    fn page_size_identical_across_modes() {
        assert_eq!(Paging::Local { page_size: 25 }.page_size(), 25);
        assert_eq!(Paging::Server { page_size: 25 }.page_size(), 25);
    }
}
