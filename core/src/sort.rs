//! List ordering instructions.
//!
//! A sort instruction is the `"<field>,<direction>"` pair that rides on the
//! list request's query string and is round-tripped through the page URL.
//! Comparison uses the natural `Ord` of each field's value type (byte-wise
//! for strings, never locale-aware). Direction parsing mirrors the backend's
//! convention: the ascending marker selects ascending, anything else
//! descending.

use std::cmp::Ordering;
use std::fmt;

use crate::types::File;

/// Query-string marker for ascending order.
pub const ASC: &str = "asc";
/// Query-string marker for descending order.
pub const DESC: &str = "desc";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn parse(marker: &str) -> Self {
        if marker == ASC {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => ASC,
            SortDirection::Desc => DESC,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// A sortable column of the file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    FileName,
    FileType,
    LastModified,
    Converted,
    S3Url,
    Category,
}

impl SortField {
    /// The field's wire name, as it appears in the query string.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::FileName => "fileName",
            SortField::FileType => "fileType",
            SortField::LastModified => "lastModified",
            SortField::Converted => "converted",
            SortField::S3Url => "s3Url",
            SortField::Category => "category",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(SortField::Id),
            "fileName" => Some(SortField::FileName),
            "fileType" => Some(SortField::FileType),
            "lastModified" => Some(SortField::LastModified),
            "converted" => Some(SortField::Converted),
            "s3Url" => Some(SortField::S3Url),
            "category" => Some(SortField::Category),
            _ => None,
        }
    }

    /// Ascending comparison of two files on this field.
    fn cmp_values(self, a: &File, b: &File) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::FileName => a.file_name.cmp(&b.file_name),
            SortField::FileType => a.file_type.cmp(&b.file_type),
            SortField::LastModified => a.last_modified.cmp(&b.last_modified),
            SortField::Converted => a.converted.cmp(&b.converted),
            SortField::S3Url => a.s3_url.cmp(&b.s3_url),
            SortField::Category => a.category.cmp(&b.category),
        }
    }
}

/// A `"<field>,<direction>"` pair controlling list ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortInstruction {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortInstruction {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parse a `"<field>,<direction>"` value. Unknown fields yield `None`;
    /// an unknown direction marker means descending.
    pub fn parse(value: &str) -> Option<Self> {
        let (field, direction) = value.split_once(',')?;
        Some(Self {
            field: SortField::parse(field)?,
            direction: SortDirection::parse(direction),
        })
    }

    /// Compare two files for sorting. Ties are `Equal`, so a stable sort
    /// keeps backend order within equal keys.
    pub fn compare(&self, a: &File, b: &File) -> Ordering {
        let ord = self.field.cmp_values(a, b);
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

impl fmt::Display for SortInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field.as_str(), self.direction.as_str())
    }
}
