//=========================================================================
// Messages
//
// Everything the game publishes on the engine's message bus. Producers
// of single-shot notifications clear their queue before pushing;
// consumers clear after reading. A message published late in one tick
// therefore survives until its consumer runs the next tick.
//
//=========================================================================

use cutlass::prelude::BoundingRect;

//=== Player Messages =====================================================

/// Movement requests from the gameplay screen to the player object.
///
/// Published each tick the corresponding action is down (movement) or
/// triggered (jump), consumed and cleared by the player's update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    MoveLeft,
    MoveRight,
    Jump,
}

/// Published after the player's position is integrated each tick.
///
/// Carries the post-move bounds so listeners (camera, gameplay screen)
/// never need a reference to the player itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerMoved(pub BoundingRect);

//=== Popup Messages ======================================================

/// The message box's verdict, published exactly once per showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageBoxOutcome {
    Accepted,
    Cancelled,
}
