//! Player state and movement
//!
//! The player is a circle in the XZ plane with a look direction and simple
//! vertical motion (jump, gravity, ceiling clamp). Input arrives as an
//! already-translated `FrameIntent`; this module never touches input
//! devices and never draws.

use crate::collision::{self, CircleCollider};
use crate::game::types::FrameIntent;
use crate::geometry::{Vec3, WallSegment};

/// XZ collision radius.
pub const PLAYER_RADIUS: f32 = 0.30;

/// Camera height above the feet, also used for the ceiling clamp.
pub const PLAYER_EYE_HEIGHT: f32 = 1.80;

const GRAVITY: f32 = -18.0;
const JUMP_SPEED: f32 = 6.5;
const MOVE_SPEED: f32 = 5.0;
const RUN_MULTIPLIER: f32 = 1.8;
const PITCH_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;

pub struct Player {
    /// Feet position; `y == 0` when standing on the floor.
    pub position: Vec3,
    /// Horizontal look angle in radians; 0 looks toward +Z.
    pub yaw: f32,
    /// Vertical look angle in radians, clamped to just under +/-90 deg.
    pub pitch: f32,
    pub radius: f32,
    vertical_velocity: f32,
}

impl Player {
    /// Creates a player standing on the floor at the given XZ position.
    pub fn new(x: f32, z: f32) -> Self {
        Player {
            position: Vec3::new(x, 0.0, z),
            yaw: 0.0,
            pitch: 0.0,
            radius: PLAYER_RADIUS,
            vertical_velocity: 0.0,
        }
    }

    /// Unit forward direction projected onto the XZ plane.
    pub fn forward_xz(&self) -> (f32, f32) {
        (self.yaw.sin(), self.yaw.cos())
    }

    /// Unit strafe direction in the XZ plane (perpendicular to forward).
    pub fn right_xz(&self) -> (f32, f32) {
        (self.yaw.cos(), -self.yaw.sin())
    }

    /// Applies one frame of look and movement intent.
    ///
    /// XZ motion goes through the shared axis-separated collision rule
    /// (the same one pursuers use), so pushing diagonally into a wall
    /// slides along it. Vertical motion is plain ballistic integration
    /// with a floor at 0 and a ceiling that keeps the eye below the top
    /// of the walls.
    pub fn update(
        &mut self,
        intent: &FrameIntent,
        segments: &[WallSegment],
        wall_height: f32,
        dt: f32,
    ) {
        self.yaw += intent.yaw_delta;
        self.pitch = (self.pitch + intent.pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let (forward_x, forward_z) = self.forward_xz();
        let (right_x, right_z) = self.right_xz();
        let mut wish_x = forward_x * intent.move_forward + right_x * intent.strafe;
        let mut wish_z = forward_z * intent.move_forward + right_z * intent.strafe;

        let length = (wish_x * wish_x + wish_z * wish_z).sqrt();
        if length > 0.0001 {
            wish_x /= length;
            wish_z /= length;

            let speed = MOVE_SPEED * if intent.sprint { RUN_MULTIPLIER } else { 1.0 };
            let (x, z) = collision::resolve_movement(
                self.position.x,
                self.position.z,
                wish_x * speed * dt,
                wish_z * speed * dt,
                self.radius,
                segments,
            );
            self.position.x = x;
            self.position.z = z;
        }

        let on_ground = self.position.y <= 0.0001;
        if on_ground {
            self.position.y = 0.0;
            self.vertical_velocity = 0.0;
            if intent.jump {
                self.vertical_velocity = JUMP_SPEED;
            }
        } else {
            self.vertical_velocity += GRAVITY * dt;
        }
        self.position.y += self.vertical_velocity * dt;

        // Keep the eye under the ceiling.
        let ceiling = wall_height - PLAYER_EYE_HEIGHT;
        if self.position.y > ceiling {
            self.position.y = ceiling;
            if self.vertical_velocity > 0.0 {
                self.vertical_velocity = 0.0;
            }
        }
    }
}

impl CircleCollider for Player {
    fn center(&self) -> (f32, f32) {
        (self.position.x, self.position.z)
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent() -> FrameIntent {
        FrameIntent::default()
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut player = Player::new(0.0, 0.0);
        let mut look_up = intent();
        look_up.pitch_delta = 10.0;

        player.update(&look_up, &[], 4.0, 1.0 / 60.0);
        assert!(player.pitch <= PITCH_LIMIT);

        let mut look_down = intent();
        look_down.pitch_delta = -20.0;
        player.update(&look_down, &[], 4.0, 1.0 / 60.0);
        assert!(player.pitch >= -PITCH_LIMIT);
    }

    #[test]
    fn test_jump_rises_and_lands() {
        let mut player = Player::new(0.0, 0.0);
        let mut jump = intent();
        jump.jump = true;

        player.update(&jump, &[], 10.0, 1.0 / 60.0);
        assert!(player.position.y > 0.0);

        // Two simulated seconds is far longer than the jump arc; the
        // player must be back on the floor, exactly at zero.
        let idle = intent();
        for _ in 0..120 {
            player.update(&idle, &[], 10.0, 1.0 / 60.0);
        }
        assert_eq!(player.position.y, 0.0);
    }

    #[test]
    fn test_ceiling_clamps_jump() {
        let mut player = Player::new(0.0, 0.0);
        let mut jump = intent();
        jump.jump = true;

        let wall_height = 2.0;
        let ceiling = wall_height - PLAYER_EYE_HEIGHT;
        player.update(&jump, &[], wall_height, 1.0 / 60.0);
        let idle = intent();
        for _ in 0..60 {
            player.update(&idle, &[], wall_height, 1.0 / 60.0);
            assert!(player.position.y <= ceiling + 0.0001);
        }
    }

    #[test]
    fn test_forward_movement_follows_yaw() {
        let mut player = Player::new(0.0, 0.0);
        let mut forward = intent();
        forward.move_forward = 1.0;

        // Yaw 0 looks toward +Z, so walking forward for one second at
        // speed 5 lands near z = 5.
        for _ in 0..60 {
            player.update(&forward, &[], 4.0, 1.0 / 60.0);
        }
        assert!(player.position.x.abs() < 0.001);
        assert!((player.position.z - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_sprint_scales_speed() {
        let mut walker = Player::new(0.0, 0.0);
        let mut runner = Player::new(0.0, 0.0);

        let mut walk = intent();
        walk.move_forward = 1.0;
        let mut run = walk.clone();
        run.sprint = true;

        for _ in 0..60 {
            walker.update(&walk, &[], 4.0, 1.0 / 60.0);
            runner.update(&run, &[], 4.0, 1.0 / 60.0);
        }
        assert!((runner.position.z / walker.position.z - 1.8).abs() < 0.01);
    }
}
