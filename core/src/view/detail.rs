//! Detail page: read-only rendering of a single file.

use crate::http::Transport;
use crate::state::FileState;
use crate::store::FileStore;
use crate::view::format_local_date;

pub struct FileDetailPage {
    id: i64,
}

impl FileDetailPage {
    /// `id` comes from the route (`/file/{id}`); routing itself is the host
    /// application's concern.
    pub fn new(id: i64) -> Self {
        Self { id }
    }

    /// Dispatch the fetch for this page's file. Called once on mount.
    pub fn load<T: Transport>(&self, store: &mut FileStore<T>) {
        store.fetch_one(self.id);
    }

    /// Label/value pairs for the currently loaded entity, in display order.
    /// Empty until the fetch completes.
    pub fn fields(state: &FileState) -> Vec<(&'static str, String)> {
        let Some(file) = &state.entity else {
            return Vec::new();
        };
        vec![
            ("id", file.id.map(|id| id.to_string()).unwrap_or_default()),
            ("fileName", file.file_name.clone()),
            ("fileType", file.file_type.clone()),
            ("lastModified", format_local_date(file.last_modified)),
            ("converted", file.converted.to_string()),
            ("s3Url", file.s3_url.clone().unwrap_or_default()),
            ("category", file.category.clone()),
        ]
    }

    /// Navigation target of the back button.
    pub fn back_target(&self) -> &'static str {
        "/file"
    }

    /// Navigation target of the edit button.
    pub fn edit_target(&self) -> String {
        format!("/file/{}/edit", self.id)
    }
}
