//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for all engine subsystems running on the logic
// (non-platform) thread.
//
// Responsibilities:
// - Own and update the global systems (input, scenes) and context
// - Receive and process platform events via MPSC channel
// - Maintain deterministic pacing using a fixed tick rate (TPS)
// - Provide the execution backbone for simulation and game logic
//
// Notes:
// The orchestrator runs independently from the platform layer. It owns
// each subsystem directly and updates them at a fixed rate in a
// background thread. Communication with the platform occurs only
// through message passing (MPSC), ensuring isolation and thread safety.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod globals;
pub mod input;
pub mod message_bus;
pub mod object;
pub mod scene;
pub mod settings;
pub mod texture;

pub(crate) mod platform_bridge;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::info;

//=== Internal Modules ====================================================

use globals::{GlobalContext, GlobalSystems};
use input::Action;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use scene::SceneKey;

//=== CoreSystemsOrchestrator =============================================

/// Owns the logic-thread systems and drives them at a fixed tick rate.
pub(crate) struct CoreSystemsOrchestrator<S: SceneKey, A: Action> {
    systems: GlobalSystems<S, A>,
    context: GlobalContext<S, A>,
    tick: Duration,
}

impl<S: SceneKey, A: Action> CoreSystemsOrchestrator<S, A> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(tps: f64) -> Self {
        let tick = Duration::from_secs_f64(1.0 / tps);
        Self {
            systems: GlobalSystems::new(),
            context: GlobalContext::new(tick),
            tick,
        }
    }

    /// Hands the systems container to the game's init closure.
    pub(crate) fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalSystems<S, A>),
    {
        init_fn(&mut self.systems);
    }

    //--- Logic Thread -----------------------------------------------------

    /// Spawns the logic thread ticking all core systems at a fixed rate.
    ///
    /// Each tick:
    ///  1. Collects platform events into input batches
    ///  2. Updates global systems (input, scenes, transitions)
    ///  3. Sleeps to maintain fixed pacing
    ///  4. Exits cleanly on shutdown signal or an empty scene stack
    pub(crate) fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
    ) -> thread::JoinHandle<()> {
        let tick = self.tick;

        thread::spawn(move || {
            let mut systems = self.systems;
            let mut context = self.context;
            let mut collector = EventCollector::new(receiver);

            systems.start(&mut context);

            loop {
                let tick_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if let TickControl::Exit = collector.collect_frame() {
                    info!("Core thread exiting");
                    break;
                }
                context.frame_events = collector.take_batches();

                //--- Step 2: Update subsystems ------------------------------
                systems.update(&mut context);

                if systems.is_idle() {
                    info!("Scene stack empty, core thread exiting");
                    break;
                }

                //--- Step 3: Maintain deterministic pacing ------------------
                let elapsed = tick_start.elapsed();
                if elapsed < tick {
                    thread::sleep(tick - elapsed);
                }
            }
        })
    }
}
