//=========================================================================
// Message Box Screen
//
// Modal confirmation popup. Fades in over the screen below, accepts or
// cancels exactly once, fades out, then removes itself from the stack.
// The verdict travels over the message bus as a MessageBoxOutcome the
// frame it is decided, and the gameplay screen reads it on its next
// update.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use glam::Vec2;
use log::debug;

//=== Internal Dependencies ===============================================

use cutlass::prelude::*;

use crate::actions::{PirateAction, ScreenId};
use crate::messages::MessageBoxOutcome;

//=== Constants ===========================================================

const FADE_TIME: Duration = Duration::from_millis(200);

const USAGE_TEXT: &str = "\nSpace, Enter = ok\nEsc = cancel";

// Fixed glyph metrics for layout (no font backend).
const GLYPH_WIDTH: f32 = 10.0;
const LINE_HEIGHT: f32 = 20.0;

// Background border beyond the text itself.
const H_PAD: f32 = 32.0;
const V_PAD: f32 = 16.0;

//=== Layout ==============================================================

/// Where a renderer would put the popup for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MessageBoxLayout {
    pub text_position: Vec2,
    pub background: BoundingRect,
    pub alpha: f32,
}

/// Measures a multi-line message with the fixed glyph metrics.
fn measure_text(message: &str) -> Vec2 {
    let mut widest = 0;
    let mut lines = 0;
    for line in message.split('\n') {
        widest = widest.max(line.chars().count());
        lines += 1;
    }
    Vec2::new(widest as f32 * GLYPH_WIDTH, lines as f32 * LINE_HEIGHT)
}

//=== MessageBoxScreen ====================================================

pub struct MessageBoxScreen {
    message: String,
    transition: Transition,
    decided: bool,
}

impl MessageBoxScreen {
    /// A popup with the standard "ok / cancel" usage prompt appended.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_usage_text(message, true)
    }

    /// Lets the caller drop the usage prompt for self-explanatory text.
    pub fn with_usage_text(message: impl Into<String>, include_usage_text: bool) -> Self {
        let mut message = message.into();
        if include_usage_text {
            message.push_str(USAGE_TEXT);
        }

        Self {
            message,
            transition: Transition::new(FADE_TIME, FADE_TIME),
            decided: false,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Centers the text in the viewport and pads the background rect.
    pub fn layout(&self, viewport: Vec2) -> MessageBoxLayout {
        let text_size = measure_text(&self.message);
        let text_position = (viewport - text_size) / 2.0;

        MessageBoxLayout {
            text_position,
            background: BoundingRect::new(
                text_position.x - H_PAD,
                text_position.y - V_PAD,
                text_size.x + H_PAD * 2.0,
                text_size.y + V_PAD * 2.0,
            ),
            alpha: self.transition.alpha(),
        }
    }

    fn decide(
        &mut self,
        context: &mut GlobalContext<ScreenId, PirateAction>,
        outcome: MessageBoxOutcome,
    ) {
        debug!(target: "popup", "Message box decided: {:?}", outcome);

        // Single-shot: a stale outcome from a previous showing must not
        // double up with this one.
        context.messages.clear::<MessageBoxOutcome>();
        context.messages.push(outcome);

        self.decided = true;
        self.transition.begin_exit();
    }
}

//=== Scene Implementation ================================================

impl Scene<ScreenId, PirateAction> for MessageBoxScreen {
    fn on_enter(&mut self, _context: &mut GlobalContext<ScreenId, PirateAction>) {
        self.transition.restart();
        self.decided = false;
    }

    fn handle_input(&mut self, context: &mut GlobalContext<ScreenId, PirateAction>) {
        // The verdict is final; input during the exit fade is ignored.
        if self.decided {
            return;
        }

        // The jump key (Space by default) doubles as confirm here, per
        // the usage prompt.
        if context.actions.is_triggered(PirateAction::MenuAccept)
            || context.actions.is_triggered(PirateAction::Jump)
        {
            self.decide(context, MessageBoxOutcome::Accepted);
        } else if context.actions.is_triggered(PirateAction::MenuCancel) {
            self.decide(context, MessageBoxOutcome::Cancelled);
        }
    }

    fn update(&mut self, context: &mut GlobalContext<ScreenId, PirateAction>) {
        self.transition.update(context.tick);

        if self.transition.is_hidden() {
            context
                .scene_transitions
                .push(SceneTransition::Remove(ScreenId::MessageBox));
        }
    }

    fn is_popup(&self) -> bool {
        true
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const TICK: Duration = Duration::from_millis(50);

    fn context() -> GlobalContext<ScreenId, PirateAction> {
        GlobalContext::new(TICK)
    }

    fn trigger(context: &mut GlobalContext<ScreenId, PirateAction>, action: PirateAction) {
        context.actions.refresh(&[action], &HashSet::new());
    }

    fn entered_screen(context: &mut GlobalContext<ScreenId, PirateAction>) -> MessageBoxScreen {
        let mut screen = MessageBoxScreen::new("Abandon ship?");
        screen.on_enter(context);
        screen
    }

    #[test]
    fn usage_text_is_appended_by_default() {
        let screen = MessageBoxScreen::new("Abandon ship?");
        assert_eq!(screen.message(), "Abandon ship?\nSpace, Enter = ok\nEsc = cancel");

        let bare = MessageBoxScreen::with_usage_text("Abandon ship?", false);
        assert_eq!(bare.message(), "Abandon ship?");
    }

    #[test]
    fn accept_publishes_exactly_one_outcome() {
        let mut context = context();
        let mut screen = entered_screen(&mut context);

        trigger(&mut context, PirateAction::MenuAccept);
        screen.handle_input(&mut context);

        // Mashing the key during the exit fade changes nothing.
        trigger(&mut context, PirateAction::MenuCancel);
        screen.handle_input(&mut context);

        let outcomes = context.messages.read::<MessageBoxOutcome>();
        assert_eq!(outcomes, &[MessageBoxOutcome::Accepted]);
    }

    #[test]
    fn jump_key_doubles_as_accept() {
        let mut context = context();
        let mut screen = entered_screen(&mut context);

        trigger(&mut context, PirateAction::Jump);
        screen.handle_input(&mut context);

        let outcomes = context.messages.read::<MessageBoxOutcome>();
        assert_eq!(outcomes, &[MessageBoxOutcome::Accepted]);
    }

    #[test]
    fn cancel_publishes_cancelled() {
        let mut context = context();
        let mut screen = entered_screen(&mut context);

        trigger(&mut context, PirateAction::MenuCancel);
        screen.handle_input(&mut context);

        let outcomes = context.messages.read::<MessageBoxOutcome>();
        assert_eq!(outcomes, &[MessageBoxOutcome::Cancelled]);
    }

    #[test]
    fn removes_itself_once_the_fade_out_finishes() {
        let mut context = context();
        let mut screen = entered_screen(&mut context);

        // Fade in (200ms at 50ms ticks).
        for _ in 0..4 {
            screen.update(&mut context);
        }
        assert!(context.scene_transitions.is_empty());

        trigger(&mut context, PirateAction::MenuAccept);
        screen.handle_input(&mut context);

        // Fade out, then removal.
        for _ in 0..4 {
            screen.update(&mut context);
        }

        assert_eq!(
            context.scene_transitions.take(),
            vec![SceneTransition::Remove(ScreenId::MessageBox)]
        );
    }

    #[test]
    fn reentering_resets_the_verdict() {
        let mut context = context();
        let mut screen = entered_screen(&mut context);

        trigger(&mut context, PirateAction::MenuAccept);
        screen.handle_input(&mut context);
        context.messages.clear::<MessageBoxOutcome>();

        screen.on_enter(&mut context);
        trigger(&mut context, PirateAction::MenuCancel);
        screen.handle_input(&mut context);

        let outcomes = context.messages.read::<MessageBoxOutcome>();
        assert_eq!(outcomes, &[MessageBoxOutcome::Cancelled]);
    }

    #[test]
    fn layout_centers_text_and_pads_background() {
        let screen = MessageBoxScreen::with_usage_text("12345", false);
        let layout = screen.layout(Vec2::new(1280.0, 720.0));

        // 5 glyphs * 10px wide, one 20px line.
        assert_eq!(layout.text_position, Vec2::new(615.0, 350.0));
        assert_eq!(layout.background, BoundingRect::new(583.0, 334.0, 114.0, 52.0));
    }

    #[test]
    fn layout_alpha_follows_the_fade() {
        let mut context = context();
        let mut screen = entered_screen(&mut context);

        assert_eq!(screen.layout(Vec2::new(640.0, 480.0)).alpha, 0.0);

        screen.update(&mut context);
        let mid = screen.layout(Vec2::new(640.0, 480.0)).alpha;
        assert!(mid > 0.0 && mid < 1.0);
    }
}
