//=========================================================================
// Screens
//=========================================================================

mod gameplay;
mod message_box;

pub use gameplay::GameplayScreen;
pub use message_box::{MessageBoxLayout, MessageBoxScreen};
