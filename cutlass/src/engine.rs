//=========================================================================
// Cutlass Engine
//
// Main entry point and coordinator for the engine.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              └─ spawns threads
//         ├─ with_channel_capacity()    runs platform
//         └─ with_window()              blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalSystems;
use crate::core::input::Action;
use crate::core::platform_bridge::PlatformEvent;
use crate::core::scene::SceneKey;
use crate::core::CoreSystemsOrchestrator;
use crate::platform::{Platform, WindowConfig};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// Provides a fluent API for setting engine parameters before construction.
/// Engine systems are automatically initialized.
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Window**: 1280x720 windowed
///
/// # Examples
///
/// Simple usage with defaults:
/// ```no_run
/// use cutlass::EngineBuilder;
/// use cutlass::core::input::Action;
/// use cutlass::core::scene::SceneKey;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameScreen { Main }
/// impl SceneKey for GameScreen {}
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameAction { Jump }
/// impl Action for GameAction {}
///
/// EngineBuilder::<GameScreen, GameAction>::new().build().run();
/// ```
///
/// With initialization:
/// ```no_run
/// # use cutlass::EngineBuilder;
/// # use cutlass::core::input::Action;
/// # use cutlass::core::scene::SceneKey;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum GameScreen { Main }
/// # impl SceneKey for GameScreen {}
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum GameAction { Jump }
/// # impl Action for GameAction {}
///
/// EngineBuilder::<GameScreen, GameAction>::new()
///     .with_tps(120.0)
///     .build()
///     .init(|systems| {
///         // Bind input, register scenes...
///     })
///     .run();
/// ```
pub struct EngineBuilder<S: SceneKey, A: Action> {
    tps: f64,
    channel_capacity: usize,
    window: WindowConfig,
    _phantom: std::marker::PhantomData<(S, A)>,
}

impl<S: SceneKey, A: Action> EngineBuilder<S, A> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            window: WindowConfig::default(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// The logic thread maintains this update rate with a fixed timestep
    /// loop. Higher values give more responsive input at more CPU cost.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Larger values provide more buffering during frame spikes but
    /// increase memory usage.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the window configuration (title, size, fullscreen mode).
    ///
    /// Typically built from persisted game settings.
    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Builds the engine instance.
    ///
    /// Consumes the builder and produces a configured [`Engine`] ready for
    /// initialization or execution. Call [`Engine::init`] to initialize
    /// systems before running, or call [`Engine::run`] directly.
    pub fn build(self) -> Engine<S, A> {
        info!(
            "Building engine (TPS: {}, channel: {})",
            self.tps, self.channel_capacity
        );

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(self.tps),
            window: self.window,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl<S: SceneKey, A: Action> Default for EngineBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Cutlass Engine runtime.
///
/// The engine coordinates all subsystems and manages the main execution
/// loop. Create via [`EngineBuilder`] with `EngineBuilder::new().build()`.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem, SceneManager, MessageBus
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling
///
/// Communication: MPSC Channel (PlatformEvent)
/// ```
pub struct Engine<S: SceneKey, A: Action> {
    orchestrator: CoreSystemsOrchestrator<S, A>,
    window: WindowConfig,
    tps: f64,
    channel_capacity: usize,
}

impl<S: SceneKey, A: Action> Engine<S, A> {
    //--- Initialization ---------------------------------------------------

    /// Initializes engine systems before execution.
    ///
    /// Provides mutable access to [`GlobalSystems`] for configuring game
    /// systems (input bindings, scene registration) before the engine
    /// starts running. After calling [`Engine::run`] the engine consumes
    /// itself and cannot be reinitialized.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems<S, A>),
    {
        info!("Initializing engine systems");

        self.orchestrator.init_systems(init_fn);

        info!("Engine initialization complete");
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the engine runtime and blocks until the application exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates MPSC channel for platform → core communication
    /// 2. Spawns logic thread running at configured TPS
    /// 3. Runs platform event loop (blocks here)
    /// 4. On window close or empty scene stack: logic thread terminates
    ///
    /// # Thread Panic Handling
    ///
    /// If the logic thread panics, the error is logged and the platform
    /// continues running so the user can close the window normally.
    pub fn run(self) {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        info!("MPSC channel created (capacity: {})", self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, self.window);
        info!("Platform initialized, entering event loop");

        if let Err(e) = platform.run() {
            error!("Platform error: {:?}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        match core_handle.join() {
            Ok(()) => {
                info!("Core thread terminated cleanly");
            }
            Err(e) => {
                error!("Core thread panicked: {:?}", e);
            }
        }

        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScreen {
        Main,
    }

    impl SceneKey for TestScreen {}

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Jump,
    }

    impl Action for TestAction {}

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::<TestScreen, TestAction>::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::<TestScreen, TestAction>::new().with_tps(120.0);
        assert_eq!(builder.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::<TestScreen, TestAction>::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::<TestScreen, TestAction>::new().with_tps(-60.0);
    }

    #[test]
    fn builder_with_channel_capacity() {
        let builder = EngineBuilder::<TestScreen, TestAction>::new().with_channel_capacity(256);
        assert_eq!(builder.channel_capacity, 256);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::<TestScreen, TestAction>::new().with_channel_capacity(0);
    }

    #[test]
    fn builder_with_window() {
        let engine = EngineBuilder::<TestScreen, TestAction>::new()
            .with_window(WindowConfig {
                title: "Test".to_string(),
                width: 1920,
                height: 1080,
                fullscreen: true,
                borderless: false,
            })
            .build();

        assert_eq!(engine.window.width, 1920);
        assert!(engine.window.fullscreen);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::<TestScreen, TestAction>::new()
            .with_tps(120.0)
            .with_channel_capacity(256)
            .build();

        assert_eq!(engine.tps, 120.0);
        assert_eq!(engine.channel_capacity, 256);
    }
}
