//! Common types shared by collection endpoints

use serde::{Deserialize, Serialize};

use super::null_as_empty;

/// A single HAL page of records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// The embedded records, absent on some error-shaped responses
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Embedded<T>>,
}

/// The `_embedded` object of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Embedded<T> {
    /// The records on this page
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub records: Vec<T>,
}

impl<T> Page<T> {
    /// Records on this page; a missing `_embedded` yields an empty slice
    pub fn records(&self) -> &[T] {
        match &self.embedded {
            Some(embedded) => &embedded.records,
            None => &[],
        }
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.records().len()
    }

    /// Whether the page has no records
    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { embedded: None }
    }
}
