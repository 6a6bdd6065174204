// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::SessionApi;
use crate::models::{Language, Theme, UpdateSessionRequest};

/// Key the preferences are kept under in durable client storage.
pub const STORAGE_KEY: &str = "cashlog.session";

/// Durable key/value storage on the client side.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalPreferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub language: Language,
}

/// Theme and language, saved locally on every change. The theme is also
/// mirrored to the backend; the language stays local.
pub struct SessionStore<S> {
    api: SessionApi,
    storage: S,
    prefs: LocalPreferences,
    error: Option<String>,
}

impl<S: PreferenceStorage> SessionStore<S> {
    /// Starts from whatever was last saved locally, or the defaults.
    pub fn restore(api: SessionApi, storage: S) -> Result<Self> {
        let prefs = match storage.read(STORAGE_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "ignoring unreadable saved preferences");
                LocalPreferences::default()
            }),
            None => LocalPreferences::default(),
        };
        Ok(Self {
            api,
            storage,
            prefs,
            error: None,
        })
    }

    pub fn preferences(&self) -> LocalPreferences {
        self.prefs
    }

    pub fn theme(&self) -> Theme {
        self.prefs.theme
    }

    pub fn language(&self) -> Language {
        self.prefs.language
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.prefs.theme = theme;
        self.persist()?;
        self.save_preferences();
        Ok(())
    }

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.prefs.language = language;
        self.persist()
    }

    /// Adopts the theme stored on the backend. Failures are logged and
    /// recorded; the local value is kept.
    pub fn load_preferences(&mut self) {
        match self.api.get_preferences() {
            Ok(remote) => {
                self.prefs.theme = remote.theme;
                if let Err(e) = self.persist() {
                    warn!(error = %e, "could not save preferences locally");
                }
            }
            Err(err) => {
                warn!(status = err.status, message = %err.message, "failed to load preferences");
                self.error = Some(err.message);
            }
        }
    }

    /// Pushes the current theme to the backend. Failures are logged and
    /// recorded, not returned.
    pub fn save_preferences(&mut self) {
        let request = UpdateSessionRequest::theme(self.prefs.theme);
        if let Err(err) = self.api.update_preferences(&request) {
            warn!(status = err.status, message = %err.message, "failed to save preferences");
            self.error = Some(err.message);
        }
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.prefs)?;
        self.storage.write(STORAGE_KEY, &raw)
    }
}
