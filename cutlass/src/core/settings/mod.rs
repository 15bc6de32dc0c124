//=========================================================================
// Game Settings
//=========================================================================
//
// Persistent game settings, stored as an XML document.
//
// Every setter marks the record dirty only when the value actually
// changes, so shutdown can skip the save entirely when nothing moved.
// Resolution-affecting setters additionally raise a second flag for
// the platform layer to apply display changes mid-session.
//
// Neither flag is serialized.
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::input::KeyCode;

//=== Module Declarations =================================================

mod store;

//=== Public API ==========================================================

pub use store::{SettingsStore, SettingsError};

//=== Constants ===========================================================

/// Minimum resolution width, used when no resolution is stored.
pub const MINIMUM_RESOLUTION_WIDTH: u32 = 1280;

/// Minimum resolution height, used when no resolution is stored.
pub const MINIMUM_RESOLUTION_HEIGHT: u32 = 720;

//=== Game Settings =======================================================

/// The player-facing settings record.
///
/// Fields are private so all mutation funnels through the setters and
/// the dirty flags stay truthful. Element names are PascalCase in the
/// XML document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GameSettings {
    player_name: String,
    resolution_width: u32,
    resolution_height: u32,
    is_fullscreen: bool,
    is_borderless: bool,
    locale: String,
    insults: bool,
    ocean_color: u32,
    sfx_volume: u32,
    music_volume: u32,
    controller_sensitivity: f32,
    jump_key: KeyCode,
    up_key: KeyCode,
    right_key: KeyCode,
    down_key: KeyCode,
    left_key: KeyCode,

    #[serde(skip)]
    dirty: bool,
    #[serde(skip)]
    resolution_dirty: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            player_name: String::from("Player"),
            resolution_width: 0,
            resolution_height: 0,
            is_fullscreen: false,
            is_borderless: false,
            locale: String::from("en-US"),
            insults: false,
            ocean_color: 0,
            sfx_volume: 80,
            music_volume: 60,
            controller_sensitivity: 0.5,
            jump_key: KeyCode::Space,
            up_key: KeyCode::ArrowUp,
            right_key: KeyCode::ArrowRight,
            down_key: KeyCode::ArrowDown,
            left_key: KeyCode::ArrowLeft,
            dirty: false,
            resolution_dirty: false,
        }
    }
}

impl GameSettings {
    //--- Getters ----------------------------------------------------------

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn resolution_width(&self) -> u32 {
        self.resolution_width
    }

    pub fn resolution_height(&self) -> u32 {
        self.resolution_height
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub fn is_borderless(&self) -> bool {
        self.is_borderless
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn insults(&self) -> bool {
        self.insults
    }

    pub fn ocean_color(&self) -> u32 {
        self.ocean_color
    }

    pub fn sfx_volume(&self) -> u32 {
        self.sfx_volume
    }

    pub fn music_volume(&self) -> u32 {
        self.music_volume
    }

    pub fn controller_sensitivity(&self) -> f32 {
        self.controller_sensitivity
    }

    pub fn jump_key(&self) -> KeyCode {
        self.jump_key
    }

    pub fn up_key(&self) -> KeyCode {
        self.up_key
    }

    pub fn right_key(&self) -> KeyCode {
        self.right_key
    }

    pub fn down_key(&self) -> KeyCode {
        self.down_key
    }

    pub fn left_key(&self) -> KeyCode {
        self.left_key
    }

    //--- Setters ----------------------------------------------------------

    pub fn set_player_name(&mut self, value: impl Into<String>) {
        let value = value.into();
        if self.player_name != value {
            self.dirty = true;
        }
        self.player_name = value;
    }

    pub fn set_resolution_width(&mut self, value: u32) {
        if self.resolution_width != value {
            self.dirty = true;
            self.resolution_dirty = true;
        }
        self.resolution_width = value;
    }

    pub fn set_resolution_height(&mut self, value: u32) {
        if self.resolution_height != value {
            self.dirty = true;
            self.resolution_dirty = true;
        }
        self.resolution_height = value;
    }

    pub fn set_fullscreen(&mut self, value: bool) {
        if self.is_fullscreen != value {
            self.dirty = true;
            self.resolution_dirty = true;
        }
        self.is_fullscreen = value;
    }

    pub fn set_borderless(&mut self, value: bool) {
        if self.is_borderless != value {
            self.dirty = true;
            self.resolution_dirty = true;
        }
        self.is_borderless = value;
    }

    pub fn set_locale(&mut self, value: impl Into<String>) {
        let value = value.into();
        if self.locale != value {
            self.dirty = true;
        }
        self.locale = value;
    }

    pub fn set_insults(&mut self, value: bool) {
        if self.insults != value {
            self.dirty = true;
        }
        self.insults = value;
    }

    pub fn set_ocean_color(&mut self, value: u32) {
        if self.ocean_color != value {
            self.dirty = true;
        }
        self.ocean_color = value;
    }

    pub fn set_sfx_volume(&mut self, value: u32) {
        if self.sfx_volume != value {
            self.dirty = true;
        }
        self.sfx_volume = value;
    }

    pub fn set_music_volume(&mut self, value: u32) {
        if self.music_volume != value {
            self.dirty = true;
        }
        self.music_volume = value;
    }

    pub fn set_controller_sensitivity(&mut self, value: f32) {
        if self.controller_sensitivity != value {
            self.dirty = true;
        }
        self.controller_sensitivity = value;
    }

    pub fn set_jump_key(&mut self, value: KeyCode) {
        if self.jump_key != value {
            self.dirty = true;
        }
        self.jump_key = value;
    }

    pub fn set_up_key(&mut self, value: KeyCode) {
        if self.up_key != value {
            self.dirty = true;
        }
        self.up_key = value;
    }

    pub fn set_right_key(&mut self, value: KeyCode) {
        if self.right_key != value {
            self.dirty = true;
        }
        self.right_key = value;
    }

    pub fn set_down_key(&mut self, value: KeyCode) {
        if self.down_key != value {
            self.dirty = true;
        }
        self.down_key = value;
    }

    pub fn set_left_key(&mut self, value: KeyCode) {
        if self.left_key != value {
            self.dirty = true;
        }
        self.left_key = value;
    }

    //--- Change Tracking --------------------------------------------------

    /// True when the record differs from what is on disk.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// True when resolution changes are waiting to be applied to the
    /// display.
    pub fn resolution_changes_to_apply(&self) -> bool {
        self.resolution_dirty
    }

    /// Called by the platform layer after applying display changes.
    pub fn clear_resolution_changes(&mut self) {
        self.resolution_dirty = false;
    }

    //--- Fallbacks --------------------------------------------------------

    /// Forces the resolution up to the engine minimum.
    ///
    /// Used at startup when the stored resolution is unset (0x0).
    pub fn set_minimum_graphics(&mut self) {
        self.set_resolution_width(MINIMUM_RESOLUTION_WIDTH);
        self.set_resolution_height(MINIMUM_RESOLUTION_HEIGHT);
    }
}

//=== Tests ===============================================================
