//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration, stack operations, and lifecycle.
//
// Scenes are stored in a HashMap by key and referenced via a stack
// of keys. This allows scenes to maintain state between activations.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::input::Action;

use super::{Scene, SceneKey};

//=== Scene Transition ====================================================

/// Encapsulates scene stack operations.
///
/// Scenes are managed via a stack-based system where transitions control
/// the flow between different game states (menus, gameplay, popups, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTransition<S: SceneKey> {
    /// Adds a new scene to the top of the stack.
    Push(S),

    /// Removes a specific scene from the stack by key.
    Remove(S),

    /// Replaces a specific scene with another scene.
    Replace(S, S),

    /// Clears all scenes from the stack.
    Clear,

    /// No transition occurs.
    Empty,
}

impl<S: SceneKey> Default for SceneTransition<S> {
    fn default() -> Self {
        Self::Empty
    }
}

//=== Scene Manager =======================================================

/// Manages scene lifecycle and stack-based scene switching.
///
/// Scenes are registered once and referenced by key. The scene stack
/// determines which scenes are active; the topmost scene alone
/// receives input.
pub struct SceneManager<S: SceneKey, A: Action> {
    scenes: HashMap<S, Box<dyn Scene<S, A>>>,
    stack: Vec<S>,
}

impl<S: SceneKey, A: Action> SceneManager<S, A> {
    //--- Construction -----------------------------------------------------

    /// Creates a new scene manager with an empty stack.
    ///
    /// Scenes must be registered and pushed via transitions before any
    /// scene updates occur.
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            stack: Vec::new(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene with the manager.
    ///
    /// Scenes must be registered before being pushed to the stack.
    /// The scene is automatically boxed for storage.
    pub fn register_scene<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S, A> + 'static,
    {
        if self.scenes.insert(key, Box::new(scene)).is_some() {
            warn!("Scene {:?} was already registered and has been replaced", key);
        }
    }

    /// Registers a scene and immediately adds it to the stack as the
    /// default scene.
    ///
    /// Convenience for initial setup during engine initialization. The
    /// `on_enter` hook runs when the engine starts.
    pub fn register_default<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S, A> + 'static,
    {
        self.register_scene(key, scene);

        if self.stack.contains(&key) {
            warn!("Scene {:?} is already in the stack", key);
        } else {
            debug!("Registered scene {:?} as default and added to stack", key);
            self.stack.push(key);
        }
    }

    /// Initializes the scene manager by calling on_enter on the initial scene.
    pub fn start(&mut self, context: &mut GlobalContext<S, A>) {
        if let Some(&initial) = self.stack.first() {
            debug!("Starting scene manager with initial scene: {:?}", initial);
            if let Some(scene) = self.scenes.get_mut(&initial) {
                scene.on_enter(context);
            } else {
                warn!("Initial scene {:?} not registered", initial);
            }
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Forwards input to the topmost scene.
    ///
    /// Scenes below the top never see input, so a popup's bindings
    /// cannot collide with the bindings of the scene it covers.
    pub fn handle_input(&mut self, context: &mut GlobalContext<S, A>) {
        if let Some(&top) = self.stack.last() {
            if let Some(scene) = self.scenes.get_mut(&top) {
                scene.handle_input(context);
            }
        }
    }

    /// Updates active scenes.
    ///
    /// Calls update on all popup scenes above (and including) the
    /// topmost non-popup scene, bottom-up.
    pub fn update(&mut self, context: &mut GlobalContext<S, A>) {
        if self.stack.is_empty() {
            return;
        }

        let scenes_to_update = self.collect_active_scenes();
        for key in scenes_to_update {
            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.update(context);
            }
        }
    }

    //--- Transition Processing --------------------------------------------

    /// Processes all queued scene transitions.
    ///
    /// Called at the tick boundary after scene updates. Transitions are
    /// processed in FIFO order, with on_enter/on_exit invoked for the
    /// affected scenes.
    pub fn process_transitions(&mut self, context: &mut GlobalContext<S, A>) {
        for transition in context.scene_transitions.take() {
            match transition {
                SceneTransition::Push(key) => self.push_internal(key, context),
                SceneTransition::Remove(key) => self.remove_internal(key, context),
                SceneTransition::Replace(old_key, new_key) => {
                    self.replace_internal(old_key, new_key, context)
                }
                SceneTransition::Clear => self.clear_internal(context),
                SceneTransition::Empty => {}
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Returns true if no scenes remain on the stack.
    pub fn is_stack_empty(&self) -> bool {
        self.stack.is_empty()
    }

    //--- Internal Helpers -------------------------------------------------

    fn push_internal(&mut self, key: S, context: &mut GlobalContext<S, A>) {
        if self.stack.contains(&key) {
            warn!("Scene {:?} is already in the stack, skipping push", key);
            return;
        }

        if !self.scenes.contains_key(&key) {
            warn!("Attempted to push unregistered scene {:?}", key);
            return;
        }

        debug!("Pushing scene {:?} onto stack", key);
        self.stack.push(key);

        if let Some(scene) = self.scenes.get_mut(&key) {
            scene.on_enter(context);
        }
    }

    fn remove_internal(&mut self, key: S, context: &mut GlobalContext<S, A>) {
        if let Some(pos) = self.stack.iter().position(|&k| k == key) {
            debug!("Removing scene {:?} from stack at position {}", key, pos);
            self.stack.remove(pos);

            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.on_exit(context);
            }
        } else {
            debug!("Scene {:?} not found in stack, skipping removal", key);
        }
    }

    fn replace_internal(&mut self, old_key: S, new_key: S, context: &mut GlobalContext<S, A>) {
        let Some(pos) = self.stack.iter().position(|&k| k == old_key) else {
            warn!("Scene {:?} not found in stack, skipping replacement", old_key);
            return;
        };

        if self.stack.contains(&new_key) {
            warn!("Scene {:?} is already in the stack, skipping replacement", new_key);
            return;
        }

        if !self.scenes.contains_key(&new_key) {
            warn!("Attempted to replace with unregistered scene {:?}", new_key);
            return;
        }

        debug!("Replacing scene {:?} with {:?} at position {}", old_key, new_key, pos);

        if let Some(scene) = self.scenes.get_mut(&old_key) {
            scene.on_exit(context);
        }

        self.stack[pos] = new_key;

        if let Some(scene) = self.scenes.get_mut(&new_key) {
            scene.on_enter(context);
        }
    }

    fn clear_internal(&mut self, context: &mut GlobalContext<S, A>) {
        debug!("Clearing all scenes from stack");

        for key in std::mem::take(&mut self.stack) {
            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.on_exit(context);
            }
        }
    }

    fn collect_active_scenes(&self) -> Vec<S> {
        let mut active = Vec::new();

        // Walk the stack top-down, stop at the first non-popup scene
        for &key in self.stack.iter().rev() {
            active.insert(0, key);

            if let Some(scene) = self.scenes.get(&key) {
                if !scene.is_popup() {
                    break;
                }
            }
        }

        active
    }
}

impl<S: SceneKey, A: Action> Default for SceneManager<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
