//=========================================================================
// Settings Store
//=========================================================================
//
// Loads and saves the settings record against one XML file on disk.
//
// Load is self-healing: a missing file defers the save to shutdown,
// while an empty or malformed file is rewritten with defaults
// immediately. Parse failures are logged and consumed; only I/O
// failures surface to the caller.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::GameSettings;

//=== Constants ===========================================================

/// Filename used when no explicit path is given.
const SETTINGS_FILENAME: &str = "config.xml";

//=== Errors ==============================================================

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings serialization failed: {0}")]
    Xml(#[from] quick_xml::DeError),
}

//=== Settings Store ======================================================

/// Load/save endpoint for one settings file.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    //--- Construction -----------------------------------------------------

    /// Store bound to `config.xml` in the working directory.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(SETTINGS_FILENAME),
        }
    }

    /// Store bound to an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    //--- Load -------------------------------------------------------------

    /// Reads settings from disk.
    ///
    /// Missing file: returns defaults marked dirty so the first save
    /// (normally at shutdown) creates the file. Empty or malformed
    /// file: rewrites defaults to disk right away and returns them.
    pub fn load(&self) -> Result<GameSettings, SettingsError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                info!(
                    "No settings file at {:?}, using defaults until shutdown",
                    self.path
                );
                let mut settings = GameSettings::default();
                settings.dirty = true;
                return Ok(settings);
            }
            Err(error) => return Err(error.into()),
        };

        if contents.trim().is_empty() {
            info!("Settings file {:?} is empty, rewriting defaults", self.path);
            return self.rewrite_defaults();
        }

        match quick_xml::de::from_str::<GameSettings>(&contents) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", self.path);
                Ok(settings)
            }
            Err(error) => {
                warn!(
                    "Settings file {:?} is malformed ({}), rewriting defaults",
                    self.path, error
                );
                self.rewrite_defaults()
            }
        }
    }

    //--- Save -------------------------------------------------------------

    /// Writes settings to disk if anything changed.
    ///
    /// A clean record is a no-op. On success the dirty flag clears.
    pub fn save(&self, settings: &mut GameSettings) -> Result<(), SettingsError> {
        if !settings.dirty {
            debug!("Settings unchanged, skipping save");
            return Ok(());
        }

        let xml = quick_xml::se::to_string_with_root("GameSettings", settings)?;
        fs::write(&self.path, xml)?;
        settings.dirty = false;

        info!("Saved settings to {:?}", self.path);
        Ok(())
    }

    //--- Internal Helpers -------------------------------------------------

    fn rewrite_defaults(&self) -> Result<GameSettings, SettingsError> {
        let mut settings = GameSettings::default();
        settings.dirty = true;
        self.save(&mut settings)?;
        Ok(settings)
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicU32, Ordering};

    use crate::core::input::KeyCode;

    /// Unique temp file per test so parallel runs never collide.
    fn temp_store(tag: &str) -> SettingsStore {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let unique = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "cutlass-settings-{}-{}-{}.xml",
            tag,
            std::process::id(),
            unique
        ));
        let _ = fs::remove_file(&path);
        SettingsStore::with_path(path)
    }

    #[test]
    fn missing_file_defers_the_save() {
        let store = temp_store("missing");

        let settings = store.load().unwrap();
        assert_eq!(settings, {
            let mut expected = GameSettings::default();
            expected.dirty = true;
            expected
        });
        // the file only appears once save runs
        assert!(!store.path().exists());
    }

    #[test]
    fn empty_file_is_rewritten_immediately() {
        let store = temp_store("empty");
        fs::write(store.path(), "").unwrap();

        let settings = store.load().unwrap();
        assert!(!settings.is_dirty());

        let rewritten = fs::read_to_string(store.path()).unwrap();
        assert!(rewritten.contains("<PlayerName>Player</PlayerName>"));
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn malformed_file_is_rewritten_immediately() {
        let store = temp_store("corrupt");
        fs::write(store.path(), "<GameSettings><Pla").unwrap();

        let settings = store.load().unwrap();
        assert_eq!(settings.player_name(), "Player");
        assert!(!settings.is_dirty());

        let rewritten: GameSettings =
            quick_xml::de::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(rewritten, GameSettings::default());
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = temp_store("roundtrip");

        let mut settings = GameSettings::default();
        settings.set_player_name("Guybrush");
        settings.set_resolution_width(1920);
        settings.set_resolution_height(1080);
        settings.set_jump_key(KeyCode::KeyW);
        store.save(&mut settings).unwrap();
        assert!(!settings.is_dirty());

        let loaded = store.load().unwrap();
        assert_eq!(loaded.player_name(), "Guybrush");
        assert_eq!(loaded.resolution_width(), 1920);
        assert_eq!(loaded.resolution_height(), 1080);
        assert_eq!(loaded.jump_key(), KeyCode::KeyW);
        assert!(!loaded.is_dirty());
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn clean_settings_skip_the_save() {
        let store = temp_store("clean");

        let mut settings = GameSettings::default();
        store.save(&mut settings).unwrap();

        // no-op: nothing was dirty, nothing was written
        assert!(!store.path().exists());
    }
}
