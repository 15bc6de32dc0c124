//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the engine's core thread via MPSC.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  Core Systems    │
//  │   ↓                      │    │                  │
//  │  InputProcessor          │    │  InputSystem     │
//  │   ├─ Converts Winit      │    │  ↓               │
//  │   └─ Tracks modifiers    │    │  ActionState     │
//  │   ↓                      │    │  ↓               │
//  │  InputBuffer             │    │  Scene Stack     │
//  │   ├─ discrete: Vec<>     │    │                  │
//  │   └─ continuous: Set<>   │    └──────────────────┘
//  │   ↓                      │             ↑
//  │  RedrawRequested         │             │
//  │   ↓ (flush)              │             │
//  │  MPSC Channel ───────────┼─────────────┘
//  └──────────────────────────┘    PlatformEvent
//
//  Frame Boundary: RedrawRequested
//    → All buffered input sent atomically
//    → Core processes at fixed TPS (independent of refresh rate)
//    → Empty buffers NOT sent
// ```
//
// Responsibilities:
// - Create and manage the OS window from a WindowConfig
// - Poll Winit events at refresh rate
// - Convert Winit types → engine InputEvents
// - Buffer input until the frame boundary
// - Send batched events to the core thread
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Fullscreen, Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== WindowConfig ========================================================

/// Window creation parameters.
///
/// Supplied by the game at engine construction, typically derived from
/// persisted settings. Applied once when the window is created in
/// `resumed()`; runtime resolution changes require an engine restart.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Title bar text.
    pub title: String,

    /// Inner width in logical pixels (ignored when fullscreen).
    pub width: u32,

    /// Inner height in logical pixels (ignored when fullscreen).
    pub height: u32,

    /// Borderless fullscreen on the current monitor.
    pub fullscreen: bool,

    /// Windowed without decorations (ignored when fullscreen).
    pub borderless: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Cutlass Engine".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            borderless: false,
        }
    }
}

//=== Platform ============================================================

/// Window manager and input event aggregator.
///
/// Runs on the main thread (Winit requirement on macOS/iOS) and sends
/// batched events to the core thread via MPSC channel.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(sender, config)`
/// 2. **Execution**: `platform.run()` starts the event loop
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: User closes window → sends `WindowClosed` → exits
///
/// # Thread Safety
///
/// This type is NOT Send/Sync. Communication with the core thread occurs
/// exclusively via the MPSC sender.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Buffers discrete/continuous input until frame boundary.
    buffer: InputBuffer,

    /// Channel to send events to core thread.
    event_sender: Sender<PlatformEvent>,

    /// Converts Winit events to engine InputEvents.
    input_processor: InputProcessor,

    /// Window creation parameters, applied in `resumed()`.
    config: WindowConfig,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance with the given event sender.
    ///
    /// Does not create the window yet; that happens lazily in `resumed()`.
    pub fn new(event_sender: Sender<PlatformEvent>, config: WindowConfig) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
            config,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Starts the event loop (blocks until the window closes).
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if event loop creation or execution fails.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Flushes buffered input events to the core thread.
    ///
    /// Drains both buffers and sends them as a single
    /// [`PlatformEvent::Inputs`] message at each `RedrawRequested`. Empty
    /// buffers are not sent.
    ///
    /// If the channel is disconnected (core thread exited early), logs a
    /// warning and drops the events so the user can still close the window.
    fn flush_input_buffer(&mut self) {
        if let Some((discrete, continuous)) = self.buffer.drain() {
            let discrete_count = discrete.len();
            let continuous_count = continuous.len();

            trace!(
                target: "platform::input",
                "Flushing {} discrete + {} continuous events",
                discrete_count,
                continuous_count
            );

            if self
                .event_sender
                .send(PlatformEvent::Inputs { discrete, continuous })
                .is_err()
            {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    discrete_count + continuous_count
                );
            }
        }
    }

    /// Builds window attributes from the config.
    fn window_attributes(&self) -> WindowAttributes {
        let mut attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        if self.config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        } else if self.config.borderless {
            attrs = attrs.with_decorations(false);
        }

        attrs
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when the app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        match event_loop.create_window(self.window_attributes()) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.input_processor.update_modifiers(state.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self
                    .input_processor
                    .process_mouse_move(position.x as f32, position.y as f32);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push_discrete(event);
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(*button, *state);
                self.buffer.push_discrete(event);
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush all buffered input
                self.flush_input_buffer();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                // Ignore: Resized, Focused, etc.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
