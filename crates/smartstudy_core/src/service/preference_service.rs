//! Theme preference.

use crate::model::preferences::{Preferences, ThemeMode};
use crate::store::{RecordStore, StoreResult};
use log::info;

pub struct PreferenceService<'store> {
    store: &'store RecordStore,
}

impl<'store> PreferenceService<'store> {
    pub fn new(store: &'store RecordStore) -> Self {
        Self { store }
    }

    /// Saved mode, dark when nothing was saved yet.
    pub fn theme(&self) -> StoreResult<ThemeMode> {
        Ok(self.store.preferences()?.mode)
    }

    /// Flips and persists the mode; returns the new one.
    pub fn toggle_theme(&self) -> StoreResult<ThemeMode> {
        let mode = self.theme()?.toggled();
        self.store.save_preferences(&Preferences { mode })?;
        info!("event=toggle_theme module=preferences status=ok mode={mode:?}");
        Ok(mode)
    }
}
