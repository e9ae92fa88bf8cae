use std::path::Path;

use sled::Tree;
use tokio::task;
use tracing::debug;

use crate::core::error::AppError;
use crate::features::settings::dto::{Settings, StoredSettings};

pub const SETTINGS_TREE: &str = "settings";
pub const SETTINGS_KEY: &str = "congress-votes:settings";

/// Persists the user's selection as a single JSON blob.
pub struct SettingsStore {
    tree: Tree,
}

impl SettingsStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let db = sled::open(path).map_err(|err| {
            AppError::internal(format!(
                "failed to open settings database at {}: {err}",
                path.display()
            ))
        })?;
        let tree = db
            .open_tree(SETTINGS_TREE)
            .map_err(|err| AppError::internal(format!("failed to open settings tree: {err}")))?;

        Ok(Self::from_tree(tree))
    }

    pub fn from_tree(tree: Tree) -> Self {
        Self { tree }
    }

    /// Stored values merged over the defaults. Missing, unreadable or
    /// out-of-range data yields the defaults.
    pub async fn load(&self) -> Settings {
        let tree = self.tree.clone();
        let stored = task::spawn_blocking(move || tree.get(SETTINGS_KEY))
            .await
            .map_err(|err| err.to_string())
            .and_then(|result| result.map_err(|err| err.to_string()));

        let bytes = match stored {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Settings::default(),
            Err(error) => {
                debug!(target: "settings", %error, "settings lookup failed, using defaults");
                return Settings::default();
            }
        };

        let settings = match serde_json::from_slice::<StoredSettings>(&bytes) {
            Ok(stored) => stored.merge_over(Settings::default()),
            Err(error) => {
                debug!(target: "settings", %error, "stored settings are corrupt, using defaults");
                return Settings::default();
            }
        };

        match settings.validate() {
            Ok(()) => settings,
            Err(error) => {
                debug!(target: "settings", %error, "stored settings are out of range, using defaults");
                Settings::default()
            }
        }
    }

    pub async fn save(&self, settings: &Settings) -> Result<(), AppError> {
        let data = serde_json::to_vec(settings)
            .map_err(|err| AppError::internal(format!("failed to encode settings: {err}")))?;

        let tree = self.tree.clone();
        task::spawn_blocking(move || -> Result<(), AppError> {
            tree.insert(SETTINGS_KEY, data)
                .map_err(|err| AppError::internal(format!("failed to write settings: {err}")))?;
            Ok(())
        })
        .await
        .map_err(|err| AppError::internal(format!("settings task join error: {err}")))??;

        self.tree
            .flush_async()
            .await
            .map_err(|err| AppError::internal(format!("failed to flush settings: {err}")))?;

        Ok(())
    }
}
