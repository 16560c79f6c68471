//! Create/edit form: field buffers, client-side validation, save.
//!
//! Field buffers hold raw input text; validation runs before submission so
//! a request is only dispatched for a well-formed payload. A failed save
//! leaves `update_success` false and the form open for correction; the host
//! closes the form once `update_success` turns true.

use chrono::NaiveDate;

use crate::http::Transport;
use crate::state::FileState;
use crate::store::FileStore;
use crate::types::{File, NewFile};

/// A per-field validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError {
    pub field: &'static str,
    pub message: &'static str,
}

const REQUIRED: &str = "This field is required.";
const INVALID_DATE: &str = "This field should be a valid date.";

#[derive(Debug, Clone, Default)]
pub struct FileForm {
    pub id: Option<i64>,
    pub file_name: String,
    pub file_type: String,
    /// Raw input text, `YYYY-MM-DD`; parsed during validation.
    pub last_modified: String,
    pub converted: bool,
    pub s3_url: String,
    pub category: String,
}

impl FileForm {
    /// Blank form for `/file/new`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form for `/file/{id}/edit`, seeded from a loaded entity.
    pub fn edit(file: &File) -> Self {
        Self {
            id: file.id,
            file_name: file.file_name.clone(),
            file_type: file.file_type.clone(),
            last_modified: file.last_modified.to_string(),
            converted: file.converted,
            s3_url: file.s3_url.clone().unwrap_or_default(),
            category: file.category.clone(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Check the required fields and the date's form. Returns every failure,
    /// not just the first, so the host can mark all offending inputs.
    pub fn validate(&self) -> Result<(), Vec<FormError>> {
        let mut errors = Vec::new();
        for (field, value) in [
            ("fileName", &self.file_name),
            ("fileType", &self.file_type),
            ("category", &self.category),
        ] {
            if value.trim().is_empty() {
                errors.push(FormError {
                    field,
                    message: REQUIRED,
                });
            }
        }
        if self.last_modified.trim().is_empty() {
            errors.push(FormError {
                field: "lastModified",
                message: REQUIRED,
            });
        } else if self.last_modified.parse::<NaiveDate>().is_err() {
            errors.push(FormError {
                field: "lastModified",
                message: INVALID_DATE,
            });
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate, then create (no id yet) or full-update (persisted). The
    /// `Err` carries validation failures; request failures land in the state
    /// container's `error_message` as usual.
    pub fn save<T: Transport>(&self, store: &mut FileStore<T>) -> Result<(), Vec<FormError>> {
        self.validate()?;
        let last_modified: NaiveDate = self.last_modified.parse().map_err(|_| {
            vec![FormError {
                field: "lastModified",
                message: INVALID_DATE,
            }]
        })?;
        let s3_url = (!self.s3_url.is_empty()).then(|| self.s3_url.clone());

        match self.id {
            None => store.create(&NewFile {
                file_name: self.file_name.clone(),
                file_type: self.file_type.clone(),
                last_modified,
                converted: self.converted,
                s3_url,
                category: self.category.clone(),
            }),
            Some(id) => store.update(
                id,
                &File {
                    id: Some(id),
                    file_name: self.file_name.clone(),
                    file_type: self.file_type.clone(),
                    last_modified,
                    converted: self.converted,
                    s3_url,
                    category: self.category.clone(),
                },
            ),
        }
        Ok(())
    }

    /// The host closes the form once the save has been acknowledged.
    pub fn should_close(state: &FileState) -> bool {
        state.update_success
    }
}
