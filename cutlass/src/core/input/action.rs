//=========================================================================
// Action Trait
//=========================================================================
//
// Game-defined action trait.
//
// Actions are opaque identifiers routed by the engine and interpreted
// by the game. The engine never inspects them beyond equality/hashing.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for game-defined action enums.
///
/// Actions represent high-level gameplay commands (Jump, MoveLeft,
/// MenuAccept) mapped from raw inputs via the game's key bindings.
///
/// # Requirements
///
/// - `Copy + Eq + Hash`: cheap passing and set membership
/// - `Debug`: logging support
/// - `Send + 'static`: transfer across the platform/logic boundary
///
/// # Example
///
/// ```
/// use cutlass::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameAction { Jump, MoveLeft, MoveRight }
///
/// impl Action for GameAction {}
/// ```
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Jump,
        Shoot,
    }

    impl Action for TestAction {}

    #[test]
    fn action_is_copy_and_eq() {
        let action = TestAction::Jump;
        let copied = action;
        assert_eq!(action, copied);
        assert_ne!(TestAction::Jump, TestAction::Shoot);
    }

    #[test]
    fn action_deduplicates_in_hashset() {
        let mut set = HashSet::new();
        set.insert(TestAction::Jump);
        set.insert(TestAction::Jump);
        set.insert(TestAction::Shoot);

        assert_eq!(set.len(), 2);
        assert!(set.contains(&TestAction::Jump));
    }

    #[test]
    fn action_is_send_and_static() {
        fn assert_send<T: Send + 'static>() {}
        assert_send::<TestAction>();
    }
}
