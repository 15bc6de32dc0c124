//=========================================================================
// Actions and Screens
//
// The game's input vocabulary and scene keys, as the engine's generic
// parameters. Movement bindings come from GameSettings at startup; menu
// bindings are fixed.
//
//=========================================================================

use cutlass::prelude::{Action, SceneKey};

//=== PirateAction ========================================================

/// Everything the player can ask the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PirateAction {
    MoveLeft,
    MoveRight,
    Jump,
    MenuAccept,
    MenuCancel,
}

impl Action for PirateAction {}

//=== ScreenId ============================================================

/// Keys for the registered screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Gameplay,
    MessageBox,
}

impl SceneKey for ScreenId {}
