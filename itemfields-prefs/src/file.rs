//! JSON-file backed preference store.
//!
//! The file holds one flat object of global preference name to string value:
//!
//! ```json
//! { "extensions.zotero-custom-item-fields.custom-field-data": "Shelf;start" }
//! ```
//!
//! Every write rewrites the whole file through a temporary sibling and a
//! rename, and only then updates memory and notifies subscribers, so a failed
//! write leaves both the file and the in-memory value untouched.

use crate::state::{lock, PreferenceState};
use crate::{PreferenceStore, PrefsResult, Subscription, SubscriptionToken};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};

pub struct FilePreferences {
    path: PathBuf,
    state: Mutex<PreferenceState>,
}

impl FilePreferences {
    /// Opens the store at `path`. A missing or blank file starts empty; a file
    /// that is not a JSON object of strings is an error.
    pub fn open(path: impl Into<PathBuf>) -> PrefsResult<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str::<BTreeMap<String, String>>(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No preferences file at {:?}, starting empty", path);
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };
        debug!(count = values.len(), "Loaded preferences from {:?}", path);
        Ok(Self {
            path,
            state: Mutex::new(PreferenceState::new(values)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> PrefsResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn write(&self, state: &mut PreferenceState, key: &str, value: &str) -> PrefsResult<()> {
        let mut next = state.values().clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        state.commit(key, value);
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.state).get(key)
    }

    fn set(&self, key: &str, value: &str) -> PrefsResult<()> {
        let mut state = lock(&self.state);
        if !state.is_change(key, value) {
            return Ok(());
        }
        self.write(&mut state, key, value)
    }

    fn init_default(&self, key: &str, default: &str) -> PrefsResult<bool> {
        let mut state = lock(&self.state);
        if state.contains(key) {
            return Ok(false);
        }
        self.write(&mut state, key, default)?;
        Ok(true)
    }

    fn subscribe(&self, key: &str) -> Subscription {
        lock(&self.state).subscribe(key)
    }

    fn unsubscribe(&self, token: SubscriptionToken) -> bool {
        lock(&self.state).unsubscribe(token)
    }
}
