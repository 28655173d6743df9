//! Error types for the item-pane integration.

use crate::host::ItemId;
use itemfields_prefs::PrefsError;
use thiserror::Error;

/// Result type for item-pane operations.
pub type PaneResult<T> = Result<T, PaneError>;

#[derive(Debug, Error)]
pub enum PaneError {
    #[error("item not found: {0}")]
    UnknownItem(ItemId),

    #[error("item storage error: {0}")]
    Storage(String),

    #[error("preference error: {0}")]
    Prefs(#[from] PrefsError),
}
