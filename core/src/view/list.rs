//! List page: sortable table over the fetched file list.
//!
//! The sort choice lives here, seeded from the page URL's query string so a
//! sorted view is shareable and bookmarkable. Every sort change re-issues the
//! list fetch and reports the canonical query string back to the router when
//! it differs from the current one.

use crate::http::Transport;
use crate::sort::{SortDirection, SortField, SortInstruction};
use crate::state::FileState;
use crate::store::FileStore;
use crate::view::format_local_date;

/// One table row, every cell already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    pub id: String,
    pub file_name: String,
    pub file_type: String,
    pub last_modified: String,
    pub converted: String,
    pub s3_url: String,
    pub category: String,
}

pub struct FileListPage {
    sort: SortInstruction,
    current_query: String,
}

impl FileListPage {
    /// Seed the sort state from the URL query string (`?sort=<field>,<dir>`),
    /// falling back to `id` ascending when the parameter is absent or names
    /// an unknown field.
    pub fn from_query(query: &str) -> Self {
        let sort = sort_param(query)
            .and_then(SortInstruction::parse)
            .unwrap_or_else(|| SortInstruction::new(SortField::Id, SortDirection::Asc));
        Self {
            sort,
            current_query: query.to_string(),
        }
    }

    pub fn sort(&self) -> SortInstruction {
        self.sort
    }

    /// Fetch the list with the current sort and return the query string the
    /// router should navigate to, or `None` when the URL is already current.
    pub fn sync<T: Transport>(&mut self, store: &mut FileStore<T>) -> Option<String> {
        store.fetch_list(Some(self.sort));
        let end_query = format!("?sort={}", self.sort);
        if self.current_query != end_query {
            self.current_query = end_query.clone();
            return Some(end_query);
        }
        None
    }

    /// Refresh button: re-issue the current sort's fetch.
    pub fn refresh<T: Transport>(&mut self, store: &mut FileStore<T>) -> Option<String> {
        self.sync(store)
    }

    /// Column header click: toggle direction on the active field, otherwise
    /// select the new field ascending. Callers follow up with `sync`.
    pub fn toggle(&mut self, field: SortField) {
        if self.sort.field == field {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort = SortInstruction::new(field, SortDirection::Asc);
        }
    }

    /// Direction marker for a column header; `None` when the column is not
    /// the active sort key.
    pub fn sort_marker(&self, field: SortField) -> Option<SortDirection> {
        (self.sort.field == field).then_some(self.sort.direction)
    }

    pub fn rows(state: &FileState) -> Vec<FileRow> {
        state
            .entities
            .iter()
            .map(|f| FileRow {
                id: f.id.map(|id| id.to_string()).unwrap_or_default(),
                file_name: f.file_name.clone(),
                file_type: f.file_type.clone(),
                last_modified: format_local_date(f.last_modified),
                converted: f.converted.to_string(),
                s3_url: f.s3_url.clone().unwrap_or_default(),
                category: f.category.clone(),
            })
            .collect()
    }

    /// The "No Files found" message shows only when the list is known to be
    /// empty — never while a fetch is still in flight.
    pub fn show_empty_message(state: &FileState) -> bool {
        state.entities.is_empty() && !state.loading
    }
}

fn sort_param(query: &str) -> Option<&str> {
    query
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("sort="))
}
