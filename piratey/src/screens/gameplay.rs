//=========================================================================
// Gameplay Screen
//
// The main playing field. Owns the scene object registry and the
// texture catalog, translates actions into player commands, and drives
// the registry's per-tick passes while it is active.
//
// The quit flow runs through the message box popup: MenuCancel pushes
// the popup, and the popup's outcome arrives on the message bus one
// tick later. Accept clears the scene stack, which shuts the logic
// thread down.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::{debug, info};

//=== Internal Dependencies ===============================================

use cutlass::prelude::*;

use crate::actions::{PirateAction, ScreenId};
use crate::messages::{MessageBoxOutcome, PlayerCommand, PlayerMoved};
use crate::scene_objects::{Player, Scenery};

//=== GameplayScreen ======================================================

pub struct GameplayScreen {
    registry: ObjectRegistry,
    textures: TextureCatalog,

    /// Last reported player bounds, fed by `PlayerMoved` messages.
    player_bounds: Option<BoundingRect>,

    populated: bool,
}

impl GameplayScreen {
    pub fn new() -> Self {
        Self {
            registry: ObjectRegistry::new(),
            textures: TextureCatalog::new(),
            player_bounds: None,
            populated: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn player_bounds(&self) -> Option<BoundingRect> {
        self.player_bounds
    }

    #[cfg(test)]
    pub(crate) fn object_count(&self) -> usize {
        self.registry.len()
    }

    //--- Level Setup ------------------------------------------------------

    /// Builds the starting layout: a player above a deck platform.
    fn populate(&mut self) {
        let player_tex = self.textures.register(32, 48);
        let deck_tex = self.textures.register(640, 32);

        self.registry.add(Player::new(
            player_tex,
            Vec2::new(32.0, 48.0),
            Vec2::new(160.0, 120.0),
        ));
        self.registry.add(Scenery::new(
            BoundingRect::new(0.0, 400.0, 640.0, 32.0),
            deck_tex,
        ));

        self.populated = true;
        info!(target: "gameplay", "Level populated ({} objects)", self.registry.len());
    }

    //--- Message Handling -------------------------------------------------

    fn consume_popup_outcome(&mut self, context: &mut GlobalContext<ScreenId, PirateAction>) {
        let accepted = context
            .messages
            .read::<MessageBoxOutcome>()
            .iter()
            .any(|outcome| *outcome == MessageBoxOutcome::Accepted);
        let any = context.messages.has_messages::<MessageBoxOutcome>();
        context.messages.clear::<MessageBoxOutcome>();

        if accepted {
            info!(target: "gameplay", "Quit confirmed, clearing scene stack");
            context.scene_transitions.push(SceneTransition::Clear);
        } else if any {
            debug!(target: "gameplay", "Quit cancelled");
        }
    }

    fn track_player(&mut self, context: &mut GlobalContext<ScreenId, PirateAction>) {
        if let Some(moved) = context.messages.read::<PlayerMoved>().last() {
            self.player_bounds = Some(moved.0);
        }
        context.messages.clear::<PlayerMoved>();
    }
}

impl Default for GameplayScreen {
    fn default() -> Self {
        Self::new()
    }
}

//=== Scene Implementation ================================================

impl Scene<ScreenId, PirateAction> for GameplayScreen {
    fn on_enter(&mut self, _context: &mut GlobalContext<ScreenId, PirateAction>) {
        if !self.populated {
            self.populate();
        }
    }

    fn handle_input(&mut self, context: &mut GlobalContext<ScreenId, PirateAction>) {
        // Held movement, edge-triggered jump. Commands are consumed by
        // the player during the registry update below.
        if context.actions.is_down(PirateAction::MoveLeft) {
            context.messages.push(PlayerCommand::MoveLeft);
        }
        if context.actions.is_down(PirateAction::MoveRight) {
            context.messages.push(PlayerCommand::MoveRight);
        }
        if context.actions.is_triggered(PirateAction::Jump) {
            context.messages.push(PlayerCommand::Jump);
        }

        if context.actions.is_triggered(PirateAction::MenuCancel) {
            debug!(target: "gameplay", "Opening quit confirmation");
            context
                .scene_transitions
                .push(SceneTransition::Push(ScreenId::MessageBox));
        }
    }

    fn update(&mut self, context: &mut GlobalContext<ScreenId, PirateAction>) {
        self.consume_popup_outcome(context);

        self.registry.run_tick(context.tick, &mut context.messages);

        self.track_player(context);
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::time::Duration;

    fn context() -> GlobalContext<ScreenId, PirateAction> {
        GlobalContext::new(Duration::from_millis(16))
    }

    fn trigger(context: &mut GlobalContext<ScreenId, PirateAction>, actions: &[PirateAction]) {
        context.actions.refresh(actions, &HashSet::new());
    }

    fn hold(context: &mut GlobalContext<ScreenId, PirateAction>, actions: &[PirateAction]) {
        let held: HashSet<PirateAction> = actions.iter().copied().collect();
        context.actions.refresh(&[], &held);
    }

    #[test]
    fn entering_populates_the_level_once() {
        let mut screen = GameplayScreen::new();
        let mut context = context();

        screen.on_enter(&mut context);
        screen.on_enter(&mut context);

        assert_eq!(screen.object_count(), 2);
    }

    #[test]
    fn held_movement_publishes_commands() {
        let mut screen = GameplayScreen::new();
        let mut context = context();

        hold(&mut context, &[PirateAction::MoveRight]);
        screen.handle_input(&mut context);

        assert_eq!(
            context.messages.read::<PlayerCommand>(),
            &[PlayerCommand::MoveRight]
        );
    }

    #[test]
    fn jump_requires_a_fresh_press() {
        let mut screen = GameplayScreen::new();
        let mut context = context();

        // Held but not triggered: no jump command.
        hold(&mut context, &[PirateAction::Jump]);
        screen.handle_input(&mut context);
        assert!(!context.messages.has_messages::<PlayerCommand>());

        trigger(&mut context, &[PirateAction::Jump]);
        screen.handle_input(&mut context);
        assert_eq!(
            context.messages.read::<PlayerCommand>(),
            &[PlayerCommand::Jump]
        );
    }

    #[test]
    fn menu_cancel_opens_the_message_box() {
        let mut screen = GameplayScreen::new();
        let mut context = context();

        trigger(&mut context, &[PirateAction::MenuCancel]);
        screen.handle_input(&mut context);

        assert_eq!(
            context.scene_transitions.take(),
            vec![SceneTransition::Push(ScreenId::MessageBox)]
        );
    }

    #[test]
    fn accepted_outcome_clears_the_stack() {
        let mut screen = GameplayScreen::new();
        let mut context = context();

        context.messages.push(MessageBoxOutcome::Accepted);
        screen.update(&mut context);

        assert_eq!(context.scene_transitions.take(), vec![SceneTransition::Clear]);
        assert!(!context.messages.has_messages::<MessageBoxOutcome>());
    }

    #[test]
    fn cancelled_outcome_keeps_playing() {
        let mut screen = GameplayScreen::new();
        let mut context = context();

        context.messages.push(MessageBoxOutcome::Cancelled);
        screen.update(&mut context);

        assert!(context.scene_transitions.is_empty());
    }

    #[test]
    fn update_tracks_player_movement() {
        let mut screen = GameplayScreen::new();
        let mut context = context();

        screen.on_enter(&mut context);
        screen.update(&mut context);

        // Gravity pulled the player down, so it moved and reported.
        let bounds = screen.player_bounds().unwrap();
        assert!(bounds.top() > 120.0);
        assert!(!context.messages.has_messages::<PlayerMoved>());
    }
}
