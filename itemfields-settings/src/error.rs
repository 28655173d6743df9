//! Error types for the settings table.

use crate::row::RowId;
use itemfields_prefs::PrefsError;
use thiserror::Error;

/// Result type for settings table operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Why a save was refused. Validation variants are user-correctable; the
/// table stays editable and nothing was written.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("field names contain forbidden characters in {} row(s)", .rows.len())]
    InvalidCharacters { rows: Vec<RowId> },

    #[error("duplicate field names: {}", .names.join(", "))]
    DuplicateNames { names: Vec<String> },

    #[error("{} row(s) have an empty field name", .rows.len())]
    EmptyNames { rows: Vec<RowId> },

    #[error("preference error: {0}")]
    Prefs(#[from] PrefsError),
}
