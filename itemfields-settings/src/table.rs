//! Settings table controller.
//!
//! ```text
//! Idle ──edit──▶ Editing ──save──▶ Validating ──ok──▶ Idle
//!                   ▲                   │
//!                   └──────rejected─────┘
//! ```
//!
//! The table keeps a hidden template row; every visible row is a clone of
//! it. Row order is insertion order and is the order fields are encoded in,
//! but placement in the item pane comes only from each row's position.

use crate::error::{SettingsError, SettingsResult};
use crate::notice::{Notice, NoticeKind, Notifier};
use crate::row::{option_index, RowId, TableRow, Validity, POSITION_OPTIONS};
use itemfields_model::validation::{contains_forbidden_characters, duplicate_names};
use itemfields_model::{codec, FieldDescriptor, FieldList, FieldPosition};
use itemfields_prefs::PreferenceStore;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    /// Rows match the stored preference.
    Idle,
    /// Rows were added, removed or edited since the last load or save.
    Editing,
    /// A save is checking the rows.
    Validating,
}

pub struct SettingsTable<N: Notifier> {
    prefs: Arc<dyn PreferenceStore>,
    pref_key: String,
    notifier: N,
    template: TableRow,
    rows: Vec<TableRow>,
    next_id: u64,
    state: TableState,
}

impl<N: Notifier> SettingsTable<N> {
    /// Creates an empty table bound to the preference `pref_key`. Call
    /// [`load`](Self::load) to show the stored fields.
    pub fn new(prefs: Arc<dyn PreferenceStore>, pref_key: impl Into<String>, notifier: N) -> Self {
        Self {
            prefs,
            pref_key: pref_key.into(),
            notifier,
            template: TableRow::template(),
            rows: Vec::new(),
            next_id: 1,
            state: TableState::Idle,
        }
    }

    // ================================================================
    // Loading
    // ================================================================

    /// Replaces the visible rows with one row per stored field.
    pub fn load(&mut self) {
        let stored = self.prefs.get(&self.pref_key).unwrap_or_default();
        let fields = codec::decode(&stored);
        self.rows.clear();
        for field in &fields {
            let row = self.clone_template(&field.name, &field.position);
            self.rows.push(row);
        }
        self.state = TableState::Idle;
        debug!(rows = self.rows.len(), "Settings table loaded");
    }

    /// Clears the stored preference and the table, leaving an empty table
    /// that matches the (now empty) preference.
    pub fn reset_all(&mut self) -> SettingsResult<()> {
        self.prefs.set(&self.pref_key, "")?;
        self.rows.clear();
        self.load();
        info!("Custom field definitions reset");
        Ok(())
    }

    fn clone_template(&mut self, name: &str, position: &FieldPosition) -> TableRow {
        let mut row = self.template.clone();
        row.id = RowId::new(self.next_id);
        self.next_id += 1;
        row.hidden = false;
        row.name = name.to_string();
        row.selected = option_index(position);
        row
    }

    // ================================================================
    // Editing
    // ================================================================

    /// Appends an empty row with the first position option selected.
    pub fn add_row(&mut self) -> RowId {
        let row = self.clone_template("", &POSITION_OPTIONS[0]);
        let id = row.id;
        self.rows.push(row);
        self.state = TableState::Editing;
        id
    }

    /// Removes a row without saving. Unknown ids are ignored and return
    /// `false`.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        let removed = self.rows.len() != before;
        if removed {
            self.state = TableState::Editing;
            // clear markers that depended on the removed row
            if self.rows.iter().any(|row| !row.validity.is_valid()) {
                self.validate();
            }
        }
        removed
    }

    /// Name input changed. Re-validates every row for live feedback.
    pub fn set_name(&mut self, id: RowId, name: &str) -> bool {
        let Some(row) = self.row_mut(id) else {
            return false;
        };
        row.name = name.to_string();
        self.state = TableState::Editing;
        self.validate();
        true
    }

    /// Position selector changed. Unrecognized positions select the first
    /// option.
    pub fn set_position(&mut self, id: RowId, position: &FieldPosition) -> bool {
        let Some(row) = self.row_mut(id) else {
            return false;
        };
        row.selected = option_index(position);
        self.state = TableState::Editing;
        true
    }

    /// Recomputes every row's validity marker. Returns `true` when all rows
    /// are valid.
    pub fn validate(&mut self) -> bool {
        let duplicates = duplicate_names(self.rows.iter().map(|row| row.name.as_str()));
        for row in &mut self.rows {
            row.validity = if contains_forbidden_characters(&row.name) {
                Validity::InvalidCharacters
            } else if duplicates.contains(&row.name) {
                Validity::Duplicate
            } else if row.name.is_empty() {
                Validity::EmptyName
            } else {
                Validity::Valid
            };
        }
        self.rows.iter().all(|row| row.validity.is_valid())
    }

    // ================================================================
    // Saving
    // ================================================================

    /// Validates every row and, if all pass, writes the encoded fields to
    /// the preference. Returns the saved fields.
    ///
    /// Returning does not wait for observers of the preference to react.
    pub fn save(&mut self) -> SettingsResult<FieldList> {
        self.state = TableState::Validating;
        self.validate();

        let invalid = self.rows_where(|row| contains_forbidden_characters(&row.name));
        if !invalid.is_empty() {
            return Err(self.reject(
                NoticeKind::InvalidCharacters,
                SettingsError::InvalidCharacters { rows: invalid },
            ));
        }

        let duplicates = duplicate_names(self.rows.iter().map(|row| row.name.as_str()));
        if !duplicates.is_empty() {
            return Err(self.reject(
                NoticeKind::DuplicateNames,
                SettingsError::DuplicateNames {
                    names: duplicates.into_iter().collect(),
                },
            ));
        }

        let empty = self.rows_where(|row| row.name.is_empty());
        if !empty.is_empty() {
            return Err(self.reject(
                NoticeKind::EmptyName,
                SettingsError::EmptyNames { rows: empty },
            ));
        }

        let fields: FieldList = self
            .rows
            .iter()
            .map(|row| FieldDescriptor::new(row.name.clone(), row.position()))
            .collect();
        if let Err(e) = self.prefs.set(&self.pref_key, &codec::encode(&fields)) {
            self.state = TableState::Editing;
            return Err(e.into());
        }

        self.state = TableState::Idle;
        info!(fields = fields.len(), "Custom field definitions saved");
        Ok(fields)
    }

    fn rows_where(&self, predicate: impl Fn(&TableRow) -> bool) -> Vec<RowId> {
        self.rows
            .iter()
            .filter(|row| predicate(*row))
            .map(|row| row.id)
            .collect()
    }

    fn reject(&mut self, kind: NoticeKind, error: SettingsError) -> SettingsError {
        self.state = TableState::Editing;
        warn!("Custom field definitions not saved: {}", error);
        self.notifier.alert(&Notice::new(kind));
        error
    }

    // ================================================================
    // Accessors
    // ================================================================

    /// Visible rows in display order.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&TableRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut TableRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    /// First visible row with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&TableRow> {
        self.rows.iter().find(|row| row.name == name)
    }

    /// The hidden row new rows are cloned from.
    pub fn template(&self) -> &TableRow {
        &self.template
    }

    pub fn state(&self) -> TableState {
        self.state
    }

    pub fn pref_key(&self) -> &str {
        &self.pref_key
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
