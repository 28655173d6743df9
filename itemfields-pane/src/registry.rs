//! Keeps the host's custom rows in lockstep with the field preference.
//!
//! The registry owns every [`RowHandle`] it receives. On each preference
//! change it releases all of them and registers a fresh set from the newly
//! decoded list. There is no diffing: field counts are small, and a full
//! rebuild guarantees no row outlives the field it was created for.

use crate::config::PaneConfig;
use crate::error::PaneResult;
use crate::host::{InfoRowSpec, ItemPane, ItemStore, RowHandle};
use crate::row::RowContext;
use itemfields_model::{codec, FieldDescriptor, FieldList, FieldPosition};
use itemfields_prefs::{PreferenceStore, Subscription};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Position used when a stored position is not one the host knows.
const FALLBACK_POSITION: FieldPosition = FieldPosition::End;

pub struct FieldRegistry<P: ItemPane> {
    config: PaneConfig,
    prefs: Arc<dyn PreferenceStore>,
    store: Arc<dyn ItemStore>,
    pane: P,
    fields: FieldList,
    rows: Vec<RowHandle>,
    subscription: Option<Subscription>,
}

impl<P: ItemPane> FieldRegistry<P> {
    pub fn new(
        config: PaneConfig,
        prefs: Arc<dyn PreferenceStore>,
        store: Arc<dyn ItemStore>,
        pane: P,
    ) -> Self {
        Self {
            config,
            prefs,
            store,
            pane,
            fields: Vec::new(),
            rows: Vec::new(),
            subscription: None,
        }
    }

    // ================================================================
    // Lifecycle
    // ================================================================

    /// Registers one row per stored field and starts watching the
    /// preference. An earlier registration is torn down first.
    pub fn initialize(&mut self) -> PaneResult<()> {
        if self.is_initialized() || !self.rows.is_empty() {
            self.teardown();
        }

        let key = self.config.pref_key();
        if self.prefs.init_default(&key, "")? {
            debug!(key = %key, "Initialized empty field preference");
        }
        let current = self.prefs.get(&key).unwrap_or_default();
        self.fields = codec::decode(&current);
        self.register_rows();
        self.subscription = Some(self.prefs.subscribe(&key));

        info!(
            fields = self.fields.len(),
            rows = self.rows.len(),
            "Custom item fields initialized"
        );
        Ok(())
    }

    /// Stops watching the preference and releases every row. Safe to call
    /// repeatedly and after a failed [`initialize`](Self::initialize).
    pub fn teardown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.prefs.unsubscribe(subscription.token());
        }
        if !self.rows.is_empty() {
            info!(rows = self.rows.len(), "Removing custom item field rows");
        }
        self.unregister_rows();
    }

    pub fn is_initialized(&self) -> bool {
        self.subscription.is_some()
    }

    // ================================================================
    // Preference changes
    // ================================================================

    /// Replaces every row with rows for the fields encoded in `new_value`.
    pub fn on_preference_changed(&mut self, new_value: &str) {
        let fields = codec::decode(new_value);
        debug!(
            old = self.fields.len(),
            new = fields.len(),
            "Field preference changed, rebuilding rows"
        );
        self.fields = fields;
        self.unregister_rows();
        self.register_rows();
    }

    /// Applies every queued preference change, oldest first. Returns how
    /// many were applied.
    pub fn process_pending_changes(&mut self) -> usize {
        let pending = match self.subscription.as_mut() {
            Some(subscription) => subscription.drain(),
            None => return 0,
        };
        for value in &pending {
            self.on_preference_changed(value);
        }
        pending.len()
    }

    /// Waits for the next preference change and applies it. Returns `false`
    /// when the registry is not subscribed or the subscription has ended.
    pub async fn next_change(&mut self) -> bool {
        let Some(subscription) = self.subscription.as_mut() else {
            return false;
        };
        match subscription.next().await {
            Some(value) => {
                self.on_preference_changed(&value);
                true
            }
            None => false,
        }
    }

    // ================================================================
    // Rows
    // ================================================================

    fn row_spec(&self, field: &FieldDescriptor) -> InfoRowSpec {
        if !field.position.is_recognized() {
            warn!(
                field = %field.name,
                position = %field.position,
                "Unrecognized field position, placing row at the end"
            );
        }
        let position = field.position.or_fallback(FALLBACK_POSITION);
        InfoRowSpec {
            row_id: self.config.row_id(&field.name, &position),
            plugin_id: self.config.plugin_id.clone(),
            label: field.name.clone(),
            position,
            multiline: false,
            nowrap: false,
            editable: true,
            context: RowContext::new(field.name.clone(), Arc::clone(&self.store)),
        }
    }

    fn register_rows(&mut self) {
        let specs: Vec<InfoRowSpec> = self.fields.iter().map(|f| self.row_spec(f)).collect();
        for spec in specs {
            let row_id = spec.row_id.clone();
            match self.pane.register_info_row(spec) {
                Some(handle) => self.rows.push(handle),
                None => warn!(row_id = %row_id, "Host refused custom field row"),
            }
        }
    }

    fn unregister_rows(&mut self) {
        for handle in self.rows.drain(..) {
            if !self.pane.unregister_info_row(&handle) {
                debug!(row = %handle, "Row was already unregistered");
            }
        }
    }

    // ================================================================
    // Accessors
    // ================================================================

    /// Fields the current rows were built from.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Handles currently owned, in registration order.
    pub fn row_handles(&self) -> &[RowHandle] {
        &self.rows
    }

    pub fn config(&self) -> &PaneConfig {
        &self.config
    }

    pub fn pane(&self) -> &P {
        &self.pane
    }

    pub fn pane_mut(&mut self) -> &mut P {
        &mut self.pane
    }
}

impl<P: ItemPane> Drop for FieldRegistry<P> {
    fn drop(&mut self) {
        self.teardown();
    }
}
