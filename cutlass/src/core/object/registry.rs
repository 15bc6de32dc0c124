//=========================================================================
// Object Registry
//=========================================================================
//
// Owns scene objects and drives the per-tick passes over them.
//
// Passes:
//   update_pass    — tick every Updateable
//   force_pass     — gravity and friction on every Movable
//   collision_pass — pairwise next-frame AABB sweep, notify both parties
//   integrate_pass — position += velocity, fire on_moved
//   draw_list      — visible Drawables sorted by draw order
//
// The collision pass snapshots bounds before delivering contacts, so
// every pair in a tick is judged against the same frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use glam::Vec2;
use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::message_bus::MessageBus;

use super::{
    BoundingRect, CollisionCategory, CollisionContact, CollisionSide, SceneObject, SpriteInstance,
};

//=== Physics Constants ===================================================

/// Downward acceleration per tick, scaled by each object's coefficient.
const GRAVITY_PER_TICK: f32 = 1.0;

/// Fraction of horizontal velocity lost per tick at coefficient 1.0.
const FRICTION_PER_TICK: f32 = 0.1;

//=== Scene Object Id =====================================================

/// Stable handle to an object in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneObjectId(u64);

//=== Collision Snapshot ==================================================

/// Per-object state captured at the start of the collision pass.
struct Snapshot {
    index: usize,
    current: BoundingRect,
    next: BoundingRect,
    side: CollisionSide,
    category: CollisionCategory,
    mask: CollisionCategory,
}

impl Snapshot {
    fn motion(&self) -> Vec2 {
        self.next.center() - self.current.center()
    }
}

/// Unit vector on the axis of least penetration, pointing the way `a`
/// should be pushed.
fn adjustment_direction(a: &Snapshot, b: &Snapshot, intersection: &BoundingRect) -> Vec2 {
    let relative = a.motion() - b.motion();

    if intersection.width() < intersection.height() {
        let sign = if relative.x != 0.0 {
            -relative.x.signum()
        } else {
            (a.next.center().x - b.next.center().x).signum()
        };
        Vec2::new(sign, 0.0)
    } else {
        let sign = if relative.y != 0.0 {
            -relative.y.signum()
        } else {
            (a.next.center().y - b.next.center().y).signum()
        };
        Vec2::new(0.0, sign)
    }
}

/// Side of the other party struck, given this party's adjustment.
fn struck_side(adjustment: Vec2) -> CollisionSide {
    if adjustment.x < 0.0 {
        CollisionSide::LEFT
    } else if adjustment.x > 0.0 {
        CollisionSide::RIGHT
    } else if adjustment.y < 0.0 {
        CollisionSide::TOP
    } else {
        CollisionSide::BOTTOM
    }
}

//=== Object Registry =====================================================

/// Owns boxed scene objects and runs the tick passes.
pub struct ObjectRegistry {
    objects: Vec<(SceneObjectId, Box<dyn SceneObject>)>,
    next_id: u64,
}

impl ObjectRegistry {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            next_id: 0,
        }
    }

    //--- Membership -------------------------------------------------------

    /// Adds an object and returns its handle.
    pub fn add<T>(&mut self, object: T) -> SceneObjectId
    where
        T: SceneObject + 'static,
    {
        let id = SceneObjectId(self.next_id);
        self.next_id += 1;
        self.objects.push((id, Box::new(object)));
        id
    }

    /// Removes an object by handle. Returns false if it was not present.
    pub fn remove(&mut self, id: SceneObjectId) -> bool {
        let before = self.objects.len();
        self.objects.retain(|(object_id, _)| *object_id != id);
        self.objects.len() != before
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    //--- Tick Driver ------------------------------------------------------

    /// Runs all passes for one tick, in order.
    pub fn run_tick(&mut self, tick: Duration, messages: &mut MessageBus) {
        self.update_pass(tick, messages);
        self.force_pass();
        self.collision_pass();
        self.integrate_pass(messages);
    }

    //--- Passes -----------------------------------------------------------

    /// Ticks every object that runs per-frame logic.
    pub fn update_pass(&mut self, tick: Duration, messages: &mut MessageBus) {
        for (_, object) in &mut self.objects {
            if let Some(updateable) = object.as_updateable() {
                updateable.update(tick, messages);
            }
        }
    }

    /// Applies gravity and friction to every movable object.
    pub fn force_pass(&mut self) {
        for (_, object) in &mut self.objects {
            if let Some(movable) = object.as_movable() {
                let mut velocity = movable.velocity();
                velocity.y += GRAVITY_PER_TICK * movable.gravity_coefficient();
                velocity.x *= 1.0 - FRICTION_PER_TICK * movable.friction_coefficient();
                movable.set_velocity(velocity);
            }
        }
    }

    /// Sweeps next-frame bounds pairwise and notifies both parties of
    /// each resolved contact.
    ///
    /// A contact reaches an object only when its category mask admits
    /// the other party's category and the struck side is one the other
    /// party accepts contacts on.
    pub fn collision_pass(&mut self) {
        let mut snapshots = Vec::new();
        for (index, (_, object)) in self.objects.iter().enumerate() {
            if let Some(collidable) = object.as_collidable() {
                snapshots.push(Snapshot {
                    index,
                    current: collidable.current_bounds(),
                    next: collidable.next_bounds(),
                    side: collidable.side(),
                    category: collidable.category(),
                    mask: collidable.category_mask(),
                });
            }
        }

        // (receiver index, contact, intersection, adjustment)
        let mut contacts: Vec<(usize, CollisionContact, BoundingRect, Vec2)> = Vec::new();

        for i in 0..snapshots.len() {
            for j in (i + 1)..snapshots.len() {
                let a = &snapshots[i];
                let b = &snapshots[j];

                let a_reacts = a.mask.intersects(b.category);
                let b_reacts = b.mask.intersects(a.category);
                if !a_reacts && !b_reacts {
                    continue;
                }

                let Some(intersection) = a.next.intersection(&b.next) else {
                    continue;
                };

                let adjustment = adjustment_direction(a, b, &intersection);
                let struck_on_b = struck_side(adjustment);
                let struck_on_a = struck_on_b.opposite();

                trace!(
                    target: "collision",
                    "Contact {:?}/{:?}, intersection {:?}, adjustment {:?}",
                    a.category, b.category, intersection, adjustment
                );

                if a_reacts && b.side.contains(struck_on_b) {
                    let contact = CollisionContact {
                        category: b.category,
                        side: struck_on_b,
                    };
                    contacts.push((a.index, contact, intersection, adjustment));
                }

                if b_reacts && a.side.contains(struck_on_a) {
                    let contact = CollisionContact {
                        category: a.category,
                        side: struck_on_a,
                    };
                    contacts.push((b.index, contact, intersection, -adjustment));
                }
            }
        }

        for (index, contact, intersection, adjustment) in contacts {
            if let Some(collidable) = self.objects[index].1.as_collidable_mut() {
                collidable.collision_detected(contact, intersection, adjustment);
            }
        }
    }

    /// Moves every movable by its velocity and fires moved callbacks.
    pub fn integrate_pass(&mut self, messages: &mut MessageBus) {
        for (_, object) in &mut self.objects {
            if let Some(movable) = object.as_movable() {
                let position = movable.position() + movable.velocity();
                movable.set_position(position);
                movable.on_moved(messages);
            }
        }
    }

    /// Collects visible sprites sorted back-to-front by draw order.
    pub fn draw_list(&self) -> Vec<SpriteInstance> {
        let mut ordered: Vec<(i32, SpriteInstance)> = self
            .objects
            .iter()
            .filter_map(|(_, object)| object.as_drawable())
            .filter(|drawable| drawable.is_visible())
            .map(|drawable| (drawable.draw_order(), drawable.sprite()))
            .collect();

        ordered.sort_by_key(|(order, _)| *order);
        ordered.into_iter().map(|(_, sprite)| sprite).collect()
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::object::{Collidable, Drawable, Movable, Updateable};
    use crate::core::texture::TextureCatalog;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    const TICK: Duration = Duration::from_millis(16);

    //--- Test Objects -----------------------------------------------------

    #[derive(Default)]
    struct CrateState {
        position: Vec2,
        velocity: Vec2,
        contacts: Vec<(CollisionContact, BoundingRect, Vec2)>,
        moves: usize,
    }

    /// Movable + collidable box whose state is observable from outside
    /// the registry through a shared handle.
    struct TestCrate {
        state: Arc<Mutex<CrateState>>,
        size: Vec2,
        gravity: f32,
        friction: f32,
        category: CollisionCategory,
        mask: CollisionCategory,
        side: CollisionSide,
    }

    impl TestCrate {
        fn new(position: Vec2, size: Vec2) -> (Self, Arc<Mutex<CrateState>>) {
            let state = Arc::new(Mutex::new(CrateState {
                position,
                ..CrateState::default()
            }));
            let object = Self {
                state: state.clone(),
                size,
                gravity: 0.0,
                friction: 0.0,
                category: CollisionCategory::GOOD,
                mask: CollisionCategory::SCENERY,
                side: CollisionSide::ALL,
            };
            (object, state)
        }
    }

    impl SceneObject for TestCrate {
        fn as_movable(&mut self) -> Option<&mut dyn Movable> {
            Some(self)
        }
        fn as_collidable(&self) -> Option<&dyn Collidable> {
            Some(self)
        }
        fn as_collidable_mut(&mut self) -> Option<&mut dyn Collidable> {
            Some(self)
        }
    }

    impl Movable for TestCrate {
        fn position(&self) -> Vec2 {
            self.state.lock().unwrap().position
        }
        fn set_position(&mut self, position: Vec2) {
            self.state.lock().unwrap().position = position;
        }
        fn velocity(&self) -> Vec2 {
            self.state.lock().unwrap().velocity
        }
        fn set_velocity(&mut self, velocity: Vec2) {
            self.state.lock().unwrap().velocity = velocity;
        }
        fn gravity_coefficient(&self) -> f32 {
            self.gravity
        }
        fn friction_coefficient(&self) -> f32 {
            self.friction
        }
        fn on_moved(&mut self, _messages: &mut MessageBus) {
            self.state.lock().unwrap().moves += 1;
        }
    }

    impl Collidable for TestCrate {
        fn current_bounds(&self) -> BoundingRect {
            BoundingRect::from_position_size(self.position(), self.size)
        }
        fn next_bounds(&self) -> BoundingRect {
            BoundingRect::from_position_size(self.position() + self.velocity(), self.size)
        }
        fn side(&self) -> CollisionSide {
            self.side
        }
        fn category(&self) -> CollisionCategory {
            self.category
        }
        fn category_mask(&self) -> CollisionCategory {
            self.mask
        }
        fn collision_detected(
            &mut self,
            contact: CollisionContact,
            intersection: BoundingRect,
            adjustment: Vec2,
        ) {
            self.state
                .lock()
                .unwrap()
                .contacts
                .push((contact, intersection, adjustment));
        }
    }

    /// Static platform that counts contacts it receives.
    struct TestPlatform {
        bounds: BoundingRect,
        side: CollisionSide,
        contacts: Arc<AtomicUsize>,
    }

    impl TestPlatform {
        fn new(bounds: BoundingRect) -> (Self, Arc<AtomicUsize>) {
            let contacts = Arc::new(AtomicUsize::new(0));
            let platform = Self {
                bounds,
                side: CollisionSide::ALL,
                contacts: contacts.clone(),
            };
            (platform, contacts)
        }
    }

    impl SceneObject for TestPlatform {
        fn as_collidable(&self) -> Option<&dyn Collidable> {
            Some(self)
        }
        fn as_collidable_mut(&mut self) -> Option<&mut dyn Collidable> {
            Some(self)
        }
    }

    impl Collidable for TestPlatform {
        fn current_bounds(&self) -> BoundingRect {
            self.bounds
        }
        fn next_bounds(&self) -> BoundingRect {
            self.bounds
        }
        fn side(&self) -> CollisionSide {
            self.side
        }
        fn category(&self) -> CollisionCategory {
            CollisionCategory::SCENERY
        }
        fn category_mask(&self) -> CollisionCategory {
            CollisionCategory::GOOD | CollisionCategory::BAD
        }
        fn collision_detected(
            &mut self,
            _contact: CollisionContact,
            _intersection: BoundingRect,
            _adjustment: Vec2,
        ) {
            self.contacts.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Updateable that counts ticks.
    struct Ticker {
        ticks: Arc<AtomicUsize>,
    }

    impl SceneObject for Ticker {
        fn as_updateable(&mut self) -> Option<&mut dyn Updateable> {
            Some(self)
        }
    }

    impl Updateable for Ticker {
        fn update(&mut self, _tick: Duration, _messages: &mut MessageBus) {
            self.ticks.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Drawable with a fixed order.
    struct TestSprite {
        order: i32,
        visible: bool,
        instance: SpriteInstance,
    }

    impl TestSprite {
        fn new(catalog: &mut TextureCatalog, order: i32, visible: bool) -> Self {
            Self {
                order,
                visible,
                instance: SpriteInstance {
                    texture: catalog.register(16, 16),
                    position: Vec2::new(order as f32, 0.0),
                    scale: Vec2::ONE,
                    rotation: 0.0,
                },
            }
        }
    }

    impl SceneObject for TestSprite {
        fn as_drawable(&self) -> Option<&dyn Drawable> {
            Some(self)
        }
    }

    impl Drawable for TestSprite {
        fn is_visible(&self) -> bool {
            self.visible
        }
        fn draw_order(&self) -> i32 {
            self.order
        }
        fn sprite(&self) -> SpriteInstance {
            self.instance
        }
    }

    //--- Membership Tests -------------------------------------------------

    #[test]
    fn add_and_remove_objects() {
        let mut registry = ObjectRegistry::new();
        let (first, _) = TestCrate::new(Vec2::ZERO, Vec2::ONE);
        let (second, _) = TestCrate::new(Vec2::ONE, Vec2::ONE);
        let a = registry.add(first);
        let b = registry.add(second);
        assert_eq!(registry.len(), 2);
        assert_ne!(a, b);

        assert!(registry.remove(a));
        assert!(!registry.remove(a));
        assert_eq!(registry.len(), 1);
    }

    //--- Force Tests ------------------------------------------------------

    #[test]
    fn gravity_scales_with_coefficient() {
        let mut registry = ObjectRegistry::new();
        let (mut falling, falling_state) = TestCrate::new(Vec2::ZERO, Vec2::ONE);
        falling.gravity = 1.0;
        let (floating, floating_state) = TestCrate::new(Vec2::new(100.0, 0.0), Vec2::ONE);
        registry.add(falling);
        registry.add(floating);

        registry.force_pass();

        assert_eq!(
            falling_state.lock().unwrap().velocity,
            Vec2::new(0.0, GRAVITY_PER_TICK)
        );
        assert_eq!(floating_state.lock().unwrap().velocity, Vec2::ZERO);
    }

    #[test]
    fn friction_decays_horizontal_velocity() {
        let mut registry = ObjectRegistry::new();
        let (mut sliding, state) = TestCrate::new(Vec2::ZERO, Vec2::ONE);
        sliding.friction = 1.0;
        state.lock().unwrap().velocity = Vec2::new(2.0, 0.0);
        registry.add(sliding);

        registry.force_pass();

        let velocity = state.lock().unwrap().velocity;
        assert!((velocity.x - 2.0 * (1.0 - FRICTION_PER_TICK)).abs() < 1e-6);
    }

    //--- Collision Tests --------------------------------------------------

    #[test]
    fn falling_object_is_pushed_up_off_scenery() {
        let mut registry = ObjectRegistry::new();
        let (falling, state) = TestCrate::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        state.lock().unwrap().velocity = Vec2::new(0.0, 15.0);
        registry.add(falling);
        // Platform top at y=20; object bottom reaches 25 next frame
        let (platform, platform_contacts) =
            TestPlatform::new(BoundingRect::new(-50.0, 20.0, 100.0, 10.0));
        registry.add(platform);

        registry.collision_pass();

        let state = state.lock().unwrap();
        assert_eq!(state.contacts.len(), 1);
        let (contact, intersection, adjustment) = state.contacts[0];
        assert_eq!(contact.category, CollisionCategory::SCENERY);
        assert_eq!(contact.side, CollisionSide::TOP);
        assert_eq!(adjustment, Vec2::new(0.0, -1.0));
        assert_eq!(intersection.top(), 20.0);
        assert_eq!(intersection.bottom(), 25.0);

        // both parties heard about it
        assert_eq!(platform_contacts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn category_mask_filters_contacts() {
        let mut registry = ObjectRegistry::new();
        let (mut hero, hero_state) = TestCrate::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        hero.mask = CollisionCategory::SCENERY;
        hero_state.lock().unwrap().velocity = Vec2::new(5.0, 0.0);

        // Another GOOD object directly in the path; neither reacts to GOOD
        let (mut friend, friend_state) = TestCrate::new(Vec2::new(8.0, 0.0), Vec2::new(10.0, 10.0));
        friend.mask = CollisionCategory::SCENERY;

        registry.add(hero);
        registry.add(friend);
        registry.collision_pass();

        assert!(hero_state.lock().unwrap().contacts.is_empty());
        assert!(friend_state.lock().unwrap().contacts.is_empty());
    }

    #[test]
    fn one_way_platform_ignores_side_hits() {
        let mut registry = ObjectRegistry::new();
        let (moving, state) = TestCrate::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        // Approaching from the left; next frame overlaps the platform's left edge
        state.lock().unwrap().velocity = Vec2::new(8.0, 0.0);
        registry.add(moving);

        let (mut platform, _) = TestPlatform::new(BoundingRect::new(15.0, -20.0, 10.0, 50.0));
        platform.side = CollisionSide::TOP;
        registry.add(platform);

        registry.collision_pass();

        // Struck side is LEFT, platform only accepts TOP
        assert!(state.lock().unwrap().contacts.is_empty());
    }

    #[test]
    fn non_overlapping_next_bounds_produce_no_contact() {
        let mut registry = ObjectRegistry::new();
        let (hovering, state) = TestCrate::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        registry.add(hovering);
        let (platform, platform_contacts) =
            TestPlatform::new(BoundingRect::new(-50.0, 20.0, 100.0, 10.0));
        registry.add(platform);

        registry.collision_pass();

        assert!(state.lock().unwrap().contacts.is_empty());
        assert_eq!(platform_contacts.load(Ordering::SeqCst), 0);
    }

    //--- Update / Integrate / Draw Tests ----------------------------------

    #[test]
    fn update_pass_ticks_updateables() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let mut registry = ObjectRegistry::new();
        registry.add(Ticker { ticks: ticks.clone() });

        let mut messages = MessageBus::new();
        registry.update_pass(TICK, &mut messages);
        registry.update_pass(TICK, &mut messages);

        assert_eq!(ticks.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn integrate_pass_moves_and_notifies() {
        let mut registry = ObjectRegistry::new();
        let (sliding, state) = TestCrate::new(Vec2::ZERO, Vec2::ONE);
        state.lock().unwrap().velocity = Vec2::new(3.0, -2.0);
        registry.add(sliding);

        let mut messages = MessageBus::new();
        registry.integrate_pass(&mut messages);

        let state = state.lock().unwrap();
        assert_eq!(state.position, Vec2::new(3.0, -2.0));
        assert_eq!(state.moves, 1);
    }

    #[test]
    fn draw_list_is_sorted_and_visible_only() {
        let mut catalog = TextureCatalog::new();
        let mut registry = ObjectRegistry::new();
        registry.add(TestSprite::new(&mut catalog, 5, true));
        registry.add(TestSprite::new(&mut catalog, 1, true));
        registry.add(TestSprite::new(&mut catalog, 3, false));

        let list = registry.draw_list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].position.x, 1.0);
        assert_eq!(list[1].position.x, 5.0);
    }
}
