//! Settings table for defining custom item fields.
//!
//! [`SettingsTable`] is the controller behind the preferences pane: one
//! editable row per field, seeded from the stored preference, validated on
//! every keystroke and again before saving. A save is all-or-nothing: either
//! every visible row is encoded into the preference, or nothing is written
//! and a [`Notice`] explains why.

mod error;
mod notice;
mod row;
mod table;

pub use error::{SettingsError, SettingsResult};
pub use notice::{Notice, NoticeKind, Notifier};
pub use row::{RowId, TableRow, Validity, POSITION_OPTIONS};
pub use table::{SettingsTable, TableState};
