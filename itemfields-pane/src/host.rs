//! Contracts of the host application.

use crate::error::PaneResult;
use crate::row::RowContext;
use itemfields_model::FieldPosition;
use std::fmt;

/// Host identifier of a library item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Opaque token the host returns for a registered row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowHandle(String);

impl RowHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-item key/value storage (the item's extra field).
pub trait ItemStore: Send + Sync {
    /// Every value stored under `key` for `item`. Unknown items have none.
    fn get(&self, item: &ItemId, key: &str) -> Vec<String>;

    /// Makes `value` the only value of `key` for `item`, in memory.
    fn set(&self, item: &ItemId, key: &str, value: &str) -> PaneResult<()>;

    /// Persists `item` in one transaction.
    fn save_tx(&self, item: &ItemId) -> PaneResult<()>;
}

/// Everything the host needs to show one custom row.
#[derive(Debug, Clone)]
pub struct InfoRowSpec {
    pub row_id: String,
    pub plugin_id: String,
    /// Literal label text, shown without localisation.
    pub label: String,
    pub position: FieldPosition,
    pub multiline: bool,
    pub nowrap: bool,
    pub editable: bool,
    /// Read/write handlers for the row's value.
    pub context: RowContext,
}

/// Row registration API of the host item pane.
pub trait ItemPane {
    /// Registers a row. A row id that is already registered is replaced.
    /// Returns `None` when the host refuses the row.
    fn register_info_row(&mut self, spec: InfoRowSpec) -> Option<RowHandle>;

    /// Removes a row. Returns `false` for handles that are not registered.
    fn unregister_info_row(&mut self, handle: &RowHandle) -> bool;
}
