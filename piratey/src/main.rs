//=========================================================================
// Piratey
//
// A small piratical platformer on the cutlass engine layer. Loads the
// persisted settings (healing a missing or corrupt file), sizes the
// window from them, binds the keys they name, and runs the gameplay
// screen with a quit-confirmation popup on top.
//
//=========================================================================

//=== Module Declarations =================================================

mod actions;
mod messages;
mod scene_objects;
mod screens;

//=== External Dependencies ===============================================

use anyhow::Context;
use log::info;

//=== Internal Dependencies ===============================================

use cutlass::prelude::*;

use actions::{PirateAction, ScreenId};
use screens::{GameplayScreen, MessageBoxScreen};

//=== Entry Point =========================================================

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    //--- Settings ---------------------------------------------------------
    let store = SettingsStore::new();
    let mut settings = store
        .load()
        .with_context(|| format!("loading settings from {}", store.path().display()))?;

    // A fresh install carries no resolution; fall back to the minimum.
    if settings.resolution_width() == 0 || settings.resolution_height() == 0 {
        info!("No resolution configured, applying minimum graphics");
        settings.set_minimum_graphics();
    }
    settings.clear_resolution_changes();
    store
        .save(&mut settings)
        .context("persisting settings at startup")?;

    //--- Window -----------------------------------------------------------
    let window = WindowConfig {
        title: format!("Piratey — {}", settings.player_name()),
        width: settings.resolution_width(),
        height: settings.resolution_height(),
        fullscreen: settings.is_fullscreen(),
        borderless: settings.is_borderless(),
    };

    // Copied out so the init closure does not capture the settings.
    let left_key = settings.left_key();
    let right_key = settings.right_key();
    let jump_key = settings.jump_key();

    //--- Engine -----------------------------------------------------------
    EngineBuilder::<ScreenId, PirateAction>::new()
        .with_window(window)
        .build()
        .init(move |systems| {
            systems.input.bind_key(left_key, PirateAction::MoveLeft);
            systems.input.bind_key(right_key, PirateAction::MoveRight);
            systems.input.bind_key(jump_key, PirateAction::Jump);
            systems.input.bind_key(KeyCode::Enter, PirateAction::MenuAccept);
            systems.input.bind_key(KeyCode::Escape, PirateAction::MenuCancel);

            systems
                .scene_manager
                .register_default(ScreenId::Gameplay, GameplayScreen::new());
            systems
                .scene_manager
                .register_scene(ScreenId::MessageBox, MessageBoxScreen::new("Abandon ship?"));
        })
        .run();

    //--- Shutdown ---------------------------------------------------------
    store
        .save(&mut settings)
        .context("persisting settings at exit")?;

    info!("Fair winds.");
    Ok(())
}
