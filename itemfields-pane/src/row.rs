use crate::host::{ItemId, ItemStore};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Handler state bound to one registered row: which field it shows and
/// where item values live.
#[derive(Clone)]
pub struct RowContext {
    field_name: String,
    store: Arc<dyn ItemStore>,
}

impl RowContext {
    pub fn new(field_name: impl Into<String>, store: Arc<dyn ItemStore>) -> Self {
        Self {
            field_name: field_name.into(),
            store,
        }
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Value shown in the row for `item`.
    ///
    /// Zero stored values and more than one both read as `""`.
    pub fn on_get_data(&self, item: &ItemId) -> String {
        let mut values = self.store.get(item, &self.field_name);
        if values.len() == 1 {
            values.swap_remove(0)
        } else {
            String::new()
        }
    }

    /// Stores an edit made in the row and saves the item.
    ///
    /// Fire-and-forget: failures are logged and the row keeps its text.
    /// Overlapping edits of the same item and field are last-write-wins.
    pub fn on_set_data(&self, item: &ItemId, value: &str) {
        if let Err(e) = self.store.set(item, &self.field_name, value) {
            warn!(
                item = %item,
                field = %self.field_name,
                "Failed to store custom field value: {}", e
            );
            return;
        }
        if let Err(e) = self.store.save_tx(item) {
            warn!(item = %item, field = %self.field_name, "Failed to save item: {}", e);
        }
    }
}

impl fmt::Debug for RowContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowContext")
            .field("field_name", &self.field_name)
            .finish_non_exhaustive()
    }
}
