//=========================================================================
// Scene Objects
//=========================================================================

mod player;
mod scenery;

pub use player::Player;
pub use scenery::Scenery;
