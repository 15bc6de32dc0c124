//=========================================================================
// Player
//
// The one piratical protagonist. Moves on player commands from the
// gameplay screen, jumps once per landing, and lets the registry's
// collision pass push it out of scenery.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use glam::Vec2;

//=== Internal Dependencies ===============================================

use cutlass::prelude::*;

use crate::messages::{PlayerCommand, PlayerMoved};

//=== Constants ===========================================================

const MAX_HORIZONTAL_SPEED: f32 = 2.0;
const HORIZONTAL_ACCELERATION: f32 = 1.0;
const JUMP_IMPULSE: f32 = 20.0;

/// Glancing corner contacts thinner than this do not count as landing.
const LANDING_MIN_WIDTH: f32 = 2.0;

const FRAME_COUNT: u32 = 4;
const FRAME_DURATION: Duration = Duration::from_millis(100);

//=== Player ==============================================================

pub struct Player {
    texture: TexId,
    size: Vec2,

    position: Vec2,
    velocity: Vec2,
    scale: Vec2,
    rotation: f32,

    /// Set on jump, cleared by a wide-enough scenery landing.
    jumping: bool,

    frame: u32,
    frame_timer: Duration,

    visible: bool,
}

impl Player {
    pub fn new(texture: TexId, size: Vec2, position: Vec2) -> Self {
        Self {
            texture,
            size,
            position,
            velocity: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
            jumping: false,
            frame: 0,
            frame_timer: Duration::ZERO,
            visible: true,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_jumping(&self) -> bool {
        self.jumping
    }

    #[cfg(test)]
    pub(crate) fn current_frame(&self) -> u32 {
        self.frame
    }

    //--- Internal Helpers -------------------------------------------------

    fn apply_command(&mut self, command: PlayerCommand) -> bool {
        match command {
            PlayerCommand::MoveLeft => {
                self.velocity.x =
                    (self.velocity.x - HORIZONTAL_ACCELERATION).max(-MAX_HORIZONTAL_SPEED);
                false
            }
            PlayerCommand::MoveRight => {
                self.velocity.x =
                    (self.velocity.x + HORIZONTAL_ACCELERATION).min(MAX_HORIZONTAL_SPEED);
                false
            }
            PlayerCommand::Jump => true,
        }
    }

    fn advance_animation(&mut self, tick: Duration) {
        self.frame_timer += tick;
        while self.frame_timer >= FRAME_DURATION {
            self.frame_timer -= FRAME_DURATION;
            self.frame = (self.frame + 1) % FRAME_COUNT;
        }
    }
}

//=== Capability Implementations ==========================================

impl Updateable for Player {
    fn update(&mut self, tick: Duration, messages: &mut MessageBus) {
        let mut jump_requested = false;
        let commands: Vec<PlayerCommand> = messages.read::<PlayerCommand>().to_vec();
        messages.clear::<PlayerCommand>();

        for command in commands {
            jump_requested |= self.apply_command(command);
        }

        if jump_requested && !self.jumping {
            self.jumping = true;
            self.velocity.y -= JUMP_IMPULSE;
        }

        self.advance_animation(tick);
    }
}

impl Movable for Player {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn on_moved(&mut self, messages: &mut MessageBus) {
        // Single-shot: only the latest bounds matter to listeners.
        messages.clear::<PlayerMoved>();
        messages.push(PlayerMoved(self.current_bounds()));
    }
}

impl Collidable for Player {
    fn current_bounds(&self) -> BoundingRect {
        BoundingRect::from_position_size(self.position, self.size)
    }

    fn next_bounds(&self) -> BoundingRect {
        self.current_bounds().translated(self.velocity)
    }

    fn category(&self) -> CollisionCategory {
        CollisionCategory::GOOD
    }

    fn category_mask(&self) -> CollisionCategory {
        CollisionCategory::BAD | CollisionCategory::SCENERY
    }

    fn collision_detected(
        &mut self,
        contact: CollisionContact,
        intersection: BoundingRect,
        adjustment: Vec2,
    ) {
        if !contact.category.contains(CollisionCategory::SCENERY) {
            return;
        }

        // One axis at a time: the adjustment direction tells which face
        // of the scenery was struck, and the velocity is corrected so
        // next-frame bounds just touch it.
        let next = self.next_bounds();
        if adjustment.x > 0.0 {
            self.velocity.x += intersection.right() - next.left();
        } else if adjustment.x < 0.0 {
            self.velocity.x += intersection.left() - next.right();
        } else if adjustment.y > 0.0 {
            self.velocity.y += intersection.bottom() - next.top();
        } else if adjustment.y < 0.0 {
            if intersection.width() > LANDING_MIN_WIDTH {
                self.jumping = false;
            }
            self.velocity.y += intersection.top() - next.bottom();
        }
    }
}

impl Drawable for Player {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn draw_order(&self) -> i32 {
        0
    }

    fn sprite(&self) -> SpriteInstance {
        SpriteInstance {
            texture: self.texture,
            position: self.position,
            scale: self.scale,
            rotation: self.rotation,
        }
    }
}

impl SceneObject for Player {
    fn as_updateable(&mut self) -> Option<&mut dyn Updateable> {
        Some(self)
    }

    fn as_movable(&mut self) -> Option<&mut dyn Movable> {
        Some(self)
    }

    fn as_collidable(&self) -> Option<&dyn Collidable> {
        Some(self)
    }

    fn as_collidable_mut(&mut self) -> Option<&mut dyn Collidable> {
        Some(self)
    }

    fn as_drawable(&self) -> Option<&dyn Drawable> {
        Some(self)
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(16);

    fn player() -> Player {
        let mut textures = TextureCatalog::new();
        let texture = textures.register(32, 48);
        Player::new(texture, Vec2::new(32.0, 48.0), Vec2::new(100.0, 100.0))
    }

    fn tick_with(player: &mut Player, messages: &mut MessageBus, commands: &[PlayerCommand]) {
        for &command in commands {
            messages.push(command);
        }
        player.update(TICK, messages);
    }

    #[test]
    fn horizontal_speed_clamps_at_maximum() {
        let mut player = player();
        let mut messages = MessageBus::new();

        for _ in 0..5 {
            tick_with(&mut player, &mut messages, &[PlayerCommand::MoveRight]);
        }

        assert_eq!(player.velocity().x, MAX_HORIZONTAL_SPEED);

        for _ in 0..10 {
            tick_with(&mut player, &mut messages, &[PlayerCommand::MoveLeft]);
        }

        assert_eq!(player.velocity().x, -MAX_HORIZONTAL_SPEED);
    }

    #[test]
    fn jump_applies_impulse_exactly_once() {
        let mut player = player();
        let mut messages = MessageBus::new();

        tick_with(&mut player, &mut messages, &[PlayerCommand::Jump]);
        assert_eq!(player.velocity().y, -JUMP_IMPULSE);
        assert!(player.is_jumping());

        // Second press while airborne is ignored.
        tick_with(&mut player, &mut messages, &[PlayerCommand::Jump]);
        assert_eq!(player.velocity().y, -JUMP_IMPULSE);
    }

    #[test]
    fn commands_are_consumed_from_the_bus() {
        let mut player = player();
        let mut messages = MessageBus::new();

        tick_with(&mut player, &mut messages, &[PlayerCommand::MoveRight]);

        assert!(!messages.has_messages::<PlayerCommand>());
    }

    #[test]
    fn landing_clears_jump_and_stops_descent() {
        let mut player = player();
        let mut messages = MessageBus::new();

        tick_with(&mut player, &mut messages, &[PlayerCommand::Jump]);
        player.set_velocity(Vec2::new(0.0, 5.0));

        // Falling onto a platform whose top is 3 units into next bounds.
        let next = player.next_bounds();
        let intersection = BoundingRect::new(next.left(), next.bottom() - 3.0, next.width(), 3.0);

        player.collision_detected(
            CollisionContact {
                category: CollisionCategory::SCENERY,
                side: CollisionSide::TOP,
            },
            intersection,
            Vec2::new(0.0, -1.0),
        );

        assert!(!player.is_jumping());
        assert_eq!(player.velocity().y, 2.0);
    }

    #[test]
    fn narrow_corner_clip_keeps_jump_flag() {
        let mut player = player();
        let mut messages = MessageBus::new();

        tick_with(&mut player, &mut messages, &[PlayerCommand::Jump]);
        player.set_velocity(Vec2::new(0.0, 5.0));

        let next = player.next_bounds();
        let intersection = BoundingRect::new(next.right() - 1.0, next.bottom() - 3.0, 1.0, 3.0);

        player.collision_detected(
            CollisionContact {
                category: CollisionCategory::SCENERY,
                side: CollisionSide::TOP,
            },
            intersection,
            Vec2::new(0.0, -1.0),
        );

        assert!(player.is_jumping(), "Sub-threshold contact must not land");
    }

    #[test]
    fn wall_contact_cancels_horizontal_motion() {
        let mut player = player();
        player.set_velocity(Vec2::new(2.0, 0.0));

        // Running rightward into a wall overlapping 1.5 units.
        let next = player.next_bounds();
        let intersection = BoundingRect::new(next.right() - 1.5, next.top(), 1.5, next.height());

        player.collision_detected(
            CollisionContact {
                category: CollisionCategory::SCENERY,
                side: CollisionSide::LEFT,
            },
            intersection,
            Vec2::new(-1.0, 0.0),
        );

        assert_eq!(player.velocity().x, 0.5);
    }

    #[test]
    fn non_scenery_contacts_leave_velocity_alone() {
        let mut player = player();
        player.set_velocity(Vec2::new(0.0, 5.0));

        player.collision_detected(
            CollisionContact {
                category: CollisionCategory::BAD,
                side: CollisionSide::TOP,
            },
            BoundingRect::new(0.0, 0.0, 10.0, 10.0),
            Vec2::new(0.0, -1.0),
        );

        assert_eq!(player.velocity().y, 5.0);
    }

    #[test]
    fn moving_publishes_latest_bounds_only() {
        let mut player = player();
        let mut messages = MessageBus::new();

        player.on_moved(&mut messages);
        player.set_position(Vec2::new(200.0, 50.0));
        player.on_moved(&mut messages);

        let moved = messages.read::<PlayerMoved>();
        assert_eq!(moved.len(), 1);
        assert_eq!(moved[0].0, player.current_bounds());
    }

    #[test]
    fn animation_frames_advance_and_wrap() {
        let mut player = player();
        let mut messages = MessageBus::new();

        // 9 ticks of 100ms: frame should land on 9 % 4 == 1.
        for _ in 0..9 {
            player.update(Duration::from_millis(100), &mut messages);
        }

        assert_eq!(player.current_frame(), 1);
    }
}
