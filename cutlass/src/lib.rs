//=========================================================================
// Cutlass Engine — Library Root
//
// This crate defines the public API surface of the Cutlass Engine.
//
// Responsibilities:
// - Expose the engine entry point (`Engine` / `EngineBuilder`)
// - Keep internal modules (like `platform` internals) hidden from users
// - Provide clean separation between the high-level engine facade
//   and lower-level subsystems (input, scenes, objects, OS integration)
//
// Typical usage:
// ```no_run
// use cutlass::prelude::*;
//
// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// enum Screen { Main }
// impl SceneKey for Screen {}
//
// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// enum Command { Jump }
// impl Action for Command {}
//
// fn main() {
//     EngineBuilder::<Screen, Command>::new().build().run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains all internal engine systems and logic (input, scenes,
// objects, settings). It is exposed publicly for engine-level
// extensibility, but normal application code will mostly use the
// top-level `Engine` facade and the prelude.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, Winit integration,
// event loop). Only `WindowConfig` escapes to the public surface.
//
// `engine` defines the main engine entry point and initialization logic.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
pub use platform::WindowConfig;
