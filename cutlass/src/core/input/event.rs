//=========================================================================
// Input Event Types
//
// Internal representation of low-level input events.
//
// This module abstracts platform-specific input (Winit today, anything
// else tomorrow) into a stable, engine-friendly format consumed by the
// input subsystem.
//
// Responsibilities:
// - Represent keyboard and mouse inputs in a portable way
// - Provide equality and hashing semantics for deduplication
// - Support modifier key combinations (Shift, Ctrl, Alt)
// - Enable event coalescing (multiple MouseMoved → last position)
//
// Event flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (persistent state + per-frame deltas)
//         ↓
//    Actions (high-level game input)
// ```
//
// `KeyCode` additionally derives serde traits: key bindings are part of
// the persisted settings record, so the code must survive a round-trip
// through the settings file.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== External Crates =====================================================

use serde::{Deserialize, Serialize};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// Abstracts platform-specific button representations into a stable,
/// portable enum. The `Other` variant covers side buttons, macro
/// buttons, and any non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons, macro keys).
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced:
/// `KeyA` is the same physical key on QWERTY and AZERTY layouts.
///
/// Coverage:
/// - Alphanumeric keys (A-Z, 0-9)
/// - Arrow keys
/// - Common special keys (Space, Enter, Escape, etc.)
///
/// Serializes by variant name (`Space`, `ArrowLeft`, ...), which is the
/// form key bindings take inside the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    /// Directional navigation keys
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    /// Spacebar
    Space,

    /// Return/Enter key
    Enter,

    /// Escape key
    Escape,

    /// Tab key
    Tab,

    /// Backspace key
    Backspace,

    /// Delete key
    Delete,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Events carry both the input type (key/button/mouse) and associated
/// data (which key, modifier state, position).
///
/// # Equality & Hashing Semantics
///
/// Events are compared by type + payload (key/button + modifiers).
/// Special case: `MouseMoved` events are equal regardless of
/// coordinates, allowing efficient coalescing (last position wins).
///
/// ```text
/// KeyDown{A, CTRL} == KeyDown{A, CTRL}       ✓
/// KeyDown{A, CTRL} == KeyDown{A, SHIFT}      ✗ (different mods)
/// KeyDown{A}       == KeyUp{A}               ✗ (different type)
/// MouseMoved{...}  == MouseMoved{...}        ✓ (always equal)
/// ```
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown {
        key: KeyCode,
        modifiers: Modifiers,
    },

    /// Key released.
    KeyUp {
        key: KeyCode,
        modifiers: Modifiers,
    },

    /// Mouse button pressed.
    MouseButtonDown {
        button: MouseButton,
        modifiers: Modifiers,
    },

    /// Mouse button released.
    MouseButtonUp {
        button: MouseButton,
        modifiers: Modifiers,
    },

    /// Mouse cursor moved to new position.
    ///
    /// Coordinates are in screen space (pixels, top-left origin).
    MouseMoved { x: f32, y: f32 },

    /// Unrecognized or unsupported event; silently ignored downstream.
    Unidentified,
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown { key: a, modifiers: ma }, KeyDown { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (KeyUp { key: a, modifiers: ma }, KeyUp { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (
                MouseButtonDown { button: a, modifiers: ma },
                MouseButtonDown { button: b, modifiers: mb },
            ) => a == b && ma == mb,
            (
                MouseButtonUp { button: a, modifiers: ma },
                MouseButtonUp { button: b, modifiers: mb },
            ) => a == b && ma == mb,
            // MouseMoved: coordinates ignored, always equal
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

/// Hashes discriminant + key/button + modifiers. Coordinates are NOT
/// hashed for MouseMoved (consistent with equality).
impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown { key, modifiers } | Self::KeyUp { key, modifiers } => {
                key.hash(state);
                modifiers.hash(state);
            }
            Self::MouseButtonDown { button, modifiers }
            | Self::MouseButtonUp { button, modifiers } => {
                button.hash(state);
                modifiers.hash(state);
            }
            // MouseMoved and Unidentified: only discriminant matters
            _ => {}
        }
    }
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt).
///
/// Used to distinguish key combinations like Ctrl+S from plain S.
/// The engine does not distinguish between left/right variants.
///
/// Modifiers must match exactly for a binding to trigger: a binding on
/// `Ctrl+S` will NOT match `Ctrl+Shift+S`, and a binding on plain `S`
/// will NOT match `Ctrl+S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Shift key held (either left or right).
    pub shift: bool,

    /// Ctrl key held (either left or right, Command on macOS).
    pub ctrl: bool,

    /// Alt key held (either left or right, Option on macOS).
    pub alt: bool,
}

//--- Modifier Constants --------------------------------------------------

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };

    /// Ctrl only.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
    };

    /// Alt only.
    pub const ALT: Self = Self {
        shift: false,
        ctrl: false,
        alt: true,
    };
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
