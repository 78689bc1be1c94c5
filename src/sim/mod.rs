//! Bouncing-spheres simulation
//!
//! Frame-driven and deterministic for a given seed and dt sequence:
//! - Seeded RNG only
//! - Stable iteration order (by pool slot)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Wall, WallHit, earliest_wall_hit, reflect_velocity};
pub use state::{PhysicsParams, PhysicsWorld, PoolSettings, Sphere, random_unit_vector};
pub use tick::{TickInput, step, step_sphere, tick};
