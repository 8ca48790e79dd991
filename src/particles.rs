//! Fixed-capacity flame particle pools
//!
//! Each torch owns one `ParticleSystem`. The pool never grows past its
//! capacity, emission is paced by a fractional accumulator so the long-run
//! rate matches `emit_rate` regardless of frame-time jitter, and dead
//! particles are removed with an order-breaking swap (particles are
//! visually interchangeable, so ordering does not matter).

use crate::geometry::Vec3;
use rand::Rng;
use sdl2::pixels::Color;

/// Downward acceleration applied to every particle, world units per second
/// squared. Mild compared to real gravity so embers drift rather than drop.
const PARTICLE_GRAVITY: f32 = -2.0;

/// Particles spawn this far above the emitter point.
const SPAWN_HEIGHT_OFFSET: f32 = 0.25;

/// One flame particle. `size` and `color` only affect rendering; the
/// simulation reads nothing but position, velocity and lifetime.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Remaining lifetime in seconds; the particle dies at zero.
    pub life: f32,
    /// Total lifetime this particle started with.
    pub max_life: f32,
    pub size: f32,
    pub color: Color,
}

/// A fixed-capacity pool of flame particles tied to one emitter.
pub struct ParticleSystem {
    particles: Vec<Particle>,
    capacity: usize,
    emit_rate: f32,
    emit_accumulator: f32,
}

impl ParticleSystem {
    /// Creates an empty pool that will never hold more than `capacity`
    /// live particles, emitting `emit_rate` particles per second.
    pub fn new(capacity: usize, emit_rate: f32) -> Self {
        ParticleSystem {
            particles: Vec::with_capacity(capacity),
            capacity,
            emit_rate,
            emit_accumulator: 0.0,
        }
    }

    /// Live particles for rendering. Order is arbitrary.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles; always `<=` the pool capacity.
    pub fn active_count(&self) -> usize {
        self.particles.len()
    }

    /// Steps the pool by one frame: emit, integrate, expire.
    ///
    /// Emission accumulates `emit_rate * dt` fractionally and releases the
    /// whole part each frame, so sub-frame rates still average out right.
    /// The whole part is drained from the accumulator even when the pool
    /// is full; a full pool drops particles rather than deferring them.
    pub fn update(&mut self, emitter: Vec3, dt: f32, rng: &mut impl Rng) {
        self.emit_accumulator += self.emit_rate * dt;
        let to_emit = self.emit_accumulator as usize;
        self.emit_accumulator -= to_emit as f32;

        for _ in 0..to_emit {
            if self.particles.len() >= self.capacity {
                break;
            }
            self.particles.push(Self::spawn(emitter, rng));
        }

        let mut i = 0;
        while i < self.particles.len() {
            let particle = &mut self.particles[i];
            particle.velocity.y += PARTICLE_GRAVITY * dt;
            particle.position.x += particle.velocity.x * dt;
            particle.position.y += particle.velocity.y * dt;
            particle.position.z += particle.velocity.z * dt;
            particle.life -= dt;

            if particle.life <= 0.0 {
                // Swap-remove keeps the scan O(n) without shifting; the
                // slot is refilled by the last live particle, which still
                // needs this frame's check, so the index stays put.
                self.particles.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// Builds one new particle at the emitter with randomized velocity,
    /// lifetime, size and color inside the flame envelope.
    fn spawn(emitter: Vec3, rng: &mut impl Rng) -> Particle {
        let position = Vec3::new(
            emitter.x,
            emitter.y + SPAWN_HEIGHT_OFFSET,
            emitter.z,
        );
        // Small lateral jitter, definite upward bias.
        let velocity = Vec3::new(
            rng.gen_range(-0.2..0.2),
            rng.gen_range(0.2..0.8),
            rng.gen_range(-0.2..0.2),
        );

        Particle {
            position,
            velocity,
            life: 1.0,
            max_life: rng.gen_range(0.5..1.0),
            size: rng.gen_range(0.05..0.08),
            color: Color::RGB(255, rng.gen_range(150..200), 0),
        }
    }
}
