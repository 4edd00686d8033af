//! Cursor pagination over a tenant's app sequence.
//!
//! The cursor is the id of the last app a client has seen. Nothing is kept
//! between calls: every request resolves its cursor by scanning the sequence
//! again, so a client resumes by passing back the `cursor` of the previous
//! page as `after_app_id`.
//!
//! An `after_app_id` that matches no app is not an error. Pagination silently
//! restarts at the first app, which keeps stale cursors usable after the
//! sequence they came from is gone.

use tracing::debug;

use crate::lookup::position_of;
use crate::model::{App, Page};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub count: Option<usize>,
    pub after_app_id: Option<String>,
}

impl PageRequest {
    pub fn new(count: Option<usize>, after_app_id: Option<String>) -> Self {
        Self {
            count,
            after_app_id,
        }
    }

    pub fn first(count: usize) -> Self {
        Self::new(Some(count), None)
    }

    pub fn after(count: usize, after_app_id: impl Into<String>) -> Self {
        Self::new(Some(count), Some(after_app_id.into()))
    }

    pub fn page_size(&self) -> usize {
        self.count.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

/// Index of the first app to return for `after_app_id`.
pub fn start_index(apps: &[App], after_app_id: Option<&str>) -> usize {
    match after_app_id {
        None => 0,
        Some(cursor) => match position_of(apps, cursor) {
            Some(index) => index + 1,
            None => {
                debug!("Cursor '{}' not found, restarting pagination", cursor);
                0
            }
        },
    }
}

pub fn paginate(apps: &[App], request: &PageRequest) -> Page {
    let start = start_index(apps, request.after_app_id.as_deref());
    let results: Vec<App> = apps
        .iter()
        .skip(start)
        .take(request.page_size())
        .cloned()
        .collect();

    Page::from_results(results)
}
