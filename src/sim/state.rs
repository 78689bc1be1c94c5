//! Sphere pool and physics world state
//!
//! The world owns a fixed number of sphere slots. Only the first `active`
//! slots are simulated and rendered; clearing just resets the count.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, ConfigResult};

/// A rigid sphere bouncing inside the arena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub pos: Vec3,
    pub vel: Vec3,
    pub radius: f32,
    pub mass: f32,
    /// RGB, cosmetic only
    pub color: Vec3,
    /// Frozen on the floor; skipped by the integrator until the pool is cleared
    pub at_rest: bool,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            pos: Vec3::ZERO,
            vel: Vec3::ZERO,
            radius: SPHERE_RADIUS_MIN,
            mass: SPHERE_MASS,
            color: Vec3::ONE,
            at_rest: false,
        }
    }
}

impl Sphere {
    pub fn new(pos: Vec3, vel: Vec3, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            ..Default::default()
        }
    }

    /// Random sphere fully inside an arena of half-width `half_width`
    pub fn random<R: Rng + ?Sized>(rng: &mut R, half_width: f32) -> Self {
        let radius = rng.random_range(SPHERE_RADIUS_MIN..SPHERE_RADIUS_MAX);
        let reach = half_width - radius;
        let pos = Vec3::new(
            rng.random_range(-reach..reach),
            rng.random_range(-reach..reach),
            rng.random_range(-reach..reach),
        );
        let speed = rng.random_range(SPHERE_SPEED_MIN..SPHERE_SPEED_MAX);
        let color = Vec3::new(
            rng.random_range(SPHERE_COLOR_MIN..SPHERE_COLOR_MAX),
            rng.random_range(SPHERE_COLOR_MIN..SPHERE_COLOR_MAX),
            rng.random_range(SPHERE_COLOR_MIN..SPHERE_COLOR_MAX),
        );

        Self {
            pos,
            vel: random_unit_vector(rng) * speed,
            radius,
            mass: SPHERE_MASS,
            color,
            at_rest: false,
        }
    }

    /// Stop the sphere for good
    pub fn freeze(&mut self) {
        self.vel = Vec3::ZERO;
        self.at_rest = true;
    }
}

/// Uniformly distributed direction on the unit sphere
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = rng.random::<f32>() * std::f32::consts::TAU;
    let z = rng.random::<f32>() * 2.0 - 1.0;
    let ring = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(theta.cos() * ring, theta.sin() * ring, z)
}

/// Arena and force parameters shared by every sphere
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    /// The arena spans [-half_width, half_width] on every axis
    pub half_width: f32,
    pub gravity: Vec3,
    /// Fraction of velocity kept per second
    pub drag: f32,
    /// Velocity scale applied after a wall bounce
    pub restitution: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            half_width: ARENA_HALF_WIDTH,
            gravity: GRAVITY,
            drag: DRAG,
            restitution: RESTITUTION,
        }
    }
}

impl PhysicsParams {
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.half_width.is_finite() || self.half_width <= SPHERE_RADIUS_MAX {
            return Err(ConfigError::ArenaTooSmall {
                half_width: self.half_width,
                radius: SPHERE_RADIUS_MAX,
            });
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::InvalidPhysicsParameter {
                name: "gravity",
                value: self.gravity.length(),
            });
        }
        if !(self.drag > 0.0 && self.drag <= 1.0) {
            return Err(ConfigError::InvalidPhysicsParameter {
                name: "drag",
                value: self.drag,
            });
        }
        if !(self.restitution >= 0.0 && self.restitution <= 1.0) {
            return Err(ConfigError::InvalidPhysicsParameter {
                name: "restitution",
                value: self.restitution,
            });
        }
        Ok(())
    }
}

/// Pool sizing for a world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolSettings {
    pub capacity: usize,
    /// Spheres spawned on creation and on reset
    pub initial: usize,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            capacity: MAX_SPHERES,
            initial: INITIAL_SPHERES,
        }
    }
}

/// The bouncing-spheres world, owned by the host
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    pub params: PhysicsParams,
    pub seed: u64,
    /// All slots, live or not; only `..active` are in play
    slots: Vec<Sphere>,
    active: usize,
    initial: usize,
    rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl PhysicsWorld {
    /// Create a world and spawn its initial spheres
    pub fn new(params: PhysicsParams, pool: PoolSettings, seed: u64) -> ConfigResult<Self> {
        params.validate()?;
        let initial = pool.initial.min(pool.capacity);

        let mut world = Self {
            params,
            seed,
            slots: vec![Sphere::default(); pool.capacity],
            active: 0,
            initial,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
        };
        for _ in 0..initial {
            world.spawn();
        }
        log::info!(
            "Physics world: {} of {} spheres, arena half-width {}",
            world.active,
            pool.capacity,
            params.half_width
        );
        Ok(world)
    }

    /// Live spheres in stable index order
    pub fn spheres(&self) -> &[Sphere] {
        &self.slots[..self.active]
    }

    pub fn spheres_mut(&mut self) -> &mut [Sphere] {
        &mut self.slots[..self.active]
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Spheres that have come to rest
    pub fn resting_count(&self) -> usize {
        self.spheres().iter().filter(|s| s.at_rest).count()
    }

    /// Activate the next slot with a random sphere. Returns its index, or
    /// `None` when the pool is full.
    pub fn spawn(&mut self) -> Option<usize> {
        if self.active >= self.slots.len() {
            log::debug!("Sphere pool full ({})", self.slots.len());
            return None;
        }
        let sphere = Sphere::random(&mut self.rng, self.params.half_width);
        Some(self.push(sphere))
    }

    /// Activate the next slot with the given sphere. The sphere must have a
    /// positive radius and lie entirely inside the arena. Returns `Ok(None)`
    /// when the pool is full.
    pub fn insert(&mut self, sphere: Sphere) -> ConfigResult<Option<usize>> {
        let m = self.params.half_width;
        if !sphere.radius.is_finite() || sphere.radius <= 0.0 || sphere.radius >= m {
            return Err(ConfigError::InvalidSphere {
                reason: "radius must be positive and smaller than the arena half-width",
            });
        }
        if !sphere.pos.is_finite() || !sphere.vel.is_finite() {
            return Err(ConfigError::InvalidSphere {
                reason: "position and velocity must be finite",
            });
        }
        if sphere.pos.abs().max_element() + sphere.radius > m {
            return Err(ConfigError::InvalidSphere {
                reason: "sphere must lie inside the arena",
            });
        }
        if self.active >= self.slots.len() {
            log::debug!("Sphere pool full ({})", self.slots.len());
            return Ok(None);
        }
        Ok(Some(self.push(sphere)))
    }

    /// Caller checks capacity
    fn push(&mut self, sphere: Sphere) -> usize {
        let idx = self.active;
        self.slots[idx] = sphere;
        self.active += 1;
        idx
    }

    /// Drop every sphere from play. Slots stay allocated.
    pub fn clear(&mut self) {
        if self.active > 0 {
            log::info!("Cleared {} spheres", self.active);
        }
        self.active = 0;
    }

    /// Clear and respawn the initial set
    pub fn reset(&mut self) {
        self.clear();
        for _ in 0..self.initial {
            self.spawn();
        }
    }
}
