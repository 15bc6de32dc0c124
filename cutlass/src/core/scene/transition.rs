//=========================================================================
// Popup Transition
//=========================================================================
//
// Timed fade state machine for popup scenes.
//
// States:
//   TransitioningOn → Active        (fade in over on_duration)
//   TransitioningOff → Hidden       (fade out over off_duration)
//
// Position advances linearly per tick between 0.0 (hidden) and 1.0
// (fully shown). `alpha()` exposes the position for fade rendering.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::debug;

//=== Transition State ====================================================

/// Where a popup currently is in its fade lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    /// Fading in; position climbing toward 1.0.
    TransitioningOn,

    /// Fully shown and accepting input.
    Active,

    /// Fading out; position falling toward 0.0.
    TransitioningOff,

    /// Fully faded out; the scene should remove itself.
    Hidden,
}

//=== Transition ==========================================================

/// Timed fade driver for popup scenes.
///
/// A new transition starts in `TransitioningOn` at position 0.0.
/// Calling [`Transition::begin_exit`] flips it into `TransitioningOff`
/// from wherever the position currently is, so an early cancel fades
/// back out from a partial fade-in.
pub struct Transition {
    on_duration: Duration,
    off_duration: Duration,
    position: f32,
    state: TransitionState,
}

impl Transition {
    //--- Construction -----------------------------------------------------

    /// Creates a transition that fades in over `on_duration` and out
    /// over `off_duration`.
    pub fn new(on_duration: Duration, off_duration: Duration) -> Self {
        Self {
            on_duration,
            off_duration,
            position: 0.0,
            state: TransitionState::TransitioningOn,
        }
    }

    /// Resets the transition to the start of its fade-in.
    ///
    /// Used when a popup scene re-enters the stack.
    pub fn restart(&mut self) {
        self.position = 0.0;
        self.state = TransitionState::TransitioningOn;
    }

    //--- State Changes ----------------------------------------------------

    /// Begins the fade-out.
    ///
    /// No-op once the transition is already exiting or hidden.
    pub fn begin_exit(&mut self) {
        match self.state {
            TransitionState::TransitioningOn | TransitionState::Active => {
                debug!("Popup transition exiting from position {:.2}", self.position);
                self.state = TransitionState::TransitioningOff;
            }
            TransitionState::TransitioningOff | TransitionState::Hidden => {}
        }
    }

    /// Advances the fade by one tick.
    pub fn update(&mut self, tick: Duration) {
        match self.state {
            TransitionState::TransitioningOn => {
                self.position += Self::step(tick, self.on_duration);
                if self.position >= 1.0 {
                    self.position = 1.0;
                    self.state = TransitionState::Active;
                }
            }
            TransitionState::TransitioningOff => {
                self.position -= Self::step(tick, self.off_duration);
                if self.position <= 0.0 {
                    self.position = 0.0;
                    self.state = TransitionState::Hidden;
                }
            }
            TransitionState::Active | TransitionState::Hidden => {}
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Fade factor in `[0.0, 1.0]` for rendering.
    pub fn alpha(&self) -> f32 {
        self.position
    }

    /// True once the fade-out has completed.
    pub fn is_hidden(&self) -> bool {
        self.state == TransitionState::Hidden
    }

    /// True while the fade-out is in progress or finished.
    ///
    /// Popups stop accepting input as soon as this turns true.
    pub fn is_exiting(&self) -> bool {
        matches!(
            self.state,
            TransitionState::TransitioningOff | TransitionState::Hidden
        )
    }

    //--- Internal Helpers -------------------------------------------------

    fn step(tick: Duration, duration: Duration) -> f32 {
        if duration.is_zero() {
            // Zero-length fades complete in a single update
            return 1.0;
        }
        tick.as_secs_f32() / duration.as_secs_f32()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(50);
    const FADE: Duration = Duration::from_millis(200);

    #[test]
    fn reaches_active_after_exact_duration() {
        let mut transition = Transition::new(FADE, FADE);

        // 200ms fade at 50ms ticks: active on the 4th update
        for _ in 0..3 {
            transition.update(TICK);
            assert_eq!(transition.state(), TransitionState::TransitioningOn);
        }
        transition.update(TICK);
        assert_eq!(transition.state(), TransitionState::Active);
        assert_eq!(transition.alpha(), 1.0);
    }

    #[test]
    fn alpha_follows_position_linearly() {
        let mut transition = Transition::new(FADE, FADE);

        transition.update(TICK);
        assert!((transition.alpha() - 0.25).abs() < 1e-5);

        transition.update(TICK);
        assert!((transition.alpha() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn exit_fades_out_to_hidden() {
        let mut transition = Transition::new(FADE, FADE);
        for _ in 0..4 {
            transition.update(TICK);
        }
        assert_eq!(transition.state(), TransitionState::Active);

        transition.begin_exit();
        assert!(transition.is_exiting());
        for _ in 0..4 {
            assert!(!transition.is_hidden());
            transition.update(TICK);
        }
        assert!(transition.is_hidden());
        assert_eq!(transition.alpha(), 0.0);
    }

    #[test]
    fn exit_during_fade_in_resumes_from_current_position() {
        let mut transition = Transition::new(FADE, FADE);
        transition.update(TICK);
        let partial = transition.alpha();
        assert!(partial > 0.0 && partial < 1.0);

        transition.begin_exit();
        transition.update(TICK);
        assert!(transition.is_hidden());
    }

    #[test]
    fn zero_duration_completes_in_one_update() {
        let mut transition = Transition::new(Duration::ZERO, Duration::ZERO);
        transition.update(TICK);
        assert_eq!(transition.state(), TransitionState::Active);

        transition.begin_exit();
        transition.update(TICK);
        assert!(transition.is_hidden());
    }

    #[test]
    fn restart_returns_to_fade_in() {
        let mut transition = Transition::new(FADE, FADE);
        for _ in 0..4 {
            transition.update(TICK);
        }
        transition.begin_exit();
        for _ in 0..4 {
            transition.update(TICK);
        }
        assert!(transition.is_hidden());

        transition.restart();
        assert_eq!(transition.state(), TransitionState::TransitioningOn);
        assert_eq!(transition.alpha(), 0.0);
    }
}
