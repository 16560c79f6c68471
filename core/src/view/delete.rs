//! Delete confirmation dialog.
//!
//! Opening the dialog fetches the target file so the confirmation text can
//! name it; confirming issues the delete. The host closes the dialog once
//! `update_success` turns true — a failed delete leaves it open with the
//! error visible.

use crate::http::Transport;
use crate::state::FileState;
use crate::store::FileStore;

pub struct DeleteDialog {
    id: i64,
}

impl DeleteDialog {
    pub fn open<T: Transport>(id: i64, store: &mut FileStore<T>) -> Self {
        store.fetch_one(id);
        Self { id }
    }

    /// Confirmation question naming the file about to be removed.
    pub fn question(&self) -> String {
        format!("Are you sure you want to delete File {}?", self.id)
    }

    pub fn confirm<T: Transport>(&self, store: &mut FileStore<T>) {
        store.delete(self.id);
    }

    pub fn should_close(state: &FileState) -> bool {
        state.update_success
    }
}
