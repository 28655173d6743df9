//! In-process host: an item pane that records registered rows and an item
//! store keeping each item's extra field as text.

use crate::error::{PaneError, PaneResult};
use crate::host::{InfoRowSpec, ItemId, ItemPane, ItemStore, RowHandle};
use itemfields_model::extra;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Item pane that keeps registered rows keyed by row id.
#[derive(Debug, Default)]
pub struct MemoryItemPane {
    rows: BTreeMap<String, InfoRowSpec>,
    registrations: usize,
    unregistrations: usize,
}

impl MemoryItemPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered rows, ordered by row id.
    pub fn rows(&self) -> impl Iterator<Item = &InfoRowSpec> {
        self.rows.values()
    }

    pub fn row(&self, handle: &RowHandle) -> Option<&InfoRowSpec> {
        self.rows.get(handle.as_str())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total successful `register_info_row` calls.
    pub fn registrations(&self) -> usize {
        self.registrations
    }

    /// Total `unregister_info_row` calls that removed a row.
    pub fn unregistrations(&self) -> usize {
        self.unregistrations
    }

    /// What the pane displays in `handle`'s row for `item`.
    pub fn get_data(&self, handle: &RowHandle, item: &ItemId) -> Option<String> {
        self.row(handle).map(|row| row.context.on_get_data(item))
    }

    /// Simulates the user committing an edit in `handle`'s row.
    /// Returns `false` when the row is not registered.
    pub fn set_data(&self, handle: &RowHandle, item: &ItemId, value: &str) -> bool {
        match self.row(handle) {
            Some(row) => {
                row.context.on_set_data(item, value);
                true
            }
            None => false,
        }
    }
}

impl ItemPane for MemoryItemPane {
    fn register_info_row(&mut self, spec: InfoRowSpec) -> Option<RowHandle> {
        let handle = RowHandle::new(spec.row_id.clone());
        self.rows.insert(spec.row_id.clone(), spec);
        self.registrations += 1;
        Some(handle)
    }

    fn unregister_info_row(&mut self, handle: &RowHandle) -> bool {
        let removed = self.rows.remove(handle.as_str()).is_some();
        if removed {
            self.unregistrations += 1;
        }
        removed
    }
}

#[derive(Debug, Clone, Default)]
struct StoredItem {
    extra: String,
    dirty: bool,
    saves: usize,
}

/// Item store holding each item's extra field as `key: value` lines.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: Mutex<HashMap<ItemId, StoredItem>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> MutexGuard<'_, HashMap<ItemId, StoredItem>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds (or replaces) an item with the given extra text.
    pub fn insert_item(&self, item: ItemId, extra: impl Into<String>) {
        self.items().insert(
            item,
            StoredItem {
                extra: extra.into(),
                ..StoredItem::default()
            },
        );
    }

    pub fn extra(&self, item: &ItemId) -> Option<String> {
        self.items().get(item).map(|stored| stored.extra.clone())
    }

    /// Number of completed `save_tx` calls for `item`.
    pub fn save_count(&self, item: &ItemId) -> usize {
        self.items().get(item).map_or(0, |stored| stored.saves)
    }

    /// Whether `item` has changes not yet saved.
    pub fn is_dirty(&self, item: &ItemId) -> bool {
        self.items().get(item).is_some_and(|stored| stored.dirty)
    }
}

impl ItemStore for MemoryItemStore {
    fn get(&self, item: &ItemId, key: &str) -> Vec<String> {
        self.items()
            .get(item)
            .map(|stored| extra::get_values(&stored.extra, key))
            .unwrap_or_default()
    }

    fn set(&self, item: &ItemId, key: &str, value: &str) -> PaneResult<()> {
        let mut items = self.items();
        let stored = items
            .get_mut(item)
            .ok_or_else(|| PaneError::UnknownItem(item.clone()))?;
        stored.extra = extra::set_value(&stored.extra, key, value);
        stored.dirty = true;
        Ok(())
    }

    fn save_tx(&self, item: &ItemId) -> PaneResult<()> {
        let mut items = self.items();
        let stored = items
            .get_mut(item)
            .ok_or_else(|| PaneError::UnknownItem(item.clone()))?;
        stored.dirty = false;
        stored.saves += 1;
        Ok(())
    }
}
