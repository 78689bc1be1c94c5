//! Terrain Arena - procedural terrain and bouncing-sphere demo cores
//!
//! Core modules:
//! - `terrain`: Grid mesh synthesis, fault-method shaping, vertex normals
//! - `sim`: Sphere physics (integration, time-of-impact collisions, rest detection)
//! - `camera`: Flythrough camera for the terrain demo
//! - `logo`: "I" logo and swan animations
//! - `renderer`: GPU-ready vertex records handed to the host renderer
//! - `platform`: Browser bindings (wasm32 only)

pub mod camera;
pub mod error;
pub mod logo;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod terrain;

pub use error::{ConfigError, ConfigResult};
pub use settings::{RenderMode, Settings};

/// Demo configuration constants
pub mod consts {
    use glam::Vec3;

    /// Largest frame delta the host loop feeds the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Terrain grid defaults (128 cells across the [-1, 1] square)
    pub const TERRAIN_DIV: u32 = 128;
    pub const TERRAIN_MIN: f32 = -1.0;
    pub const TERRAIN_MAX: f32 = 1.0;

    /// Faulting defaults
    pub const FAULT_ITERATIONS: u32 = 200;
    pub const FAULT_INITIAL_DELTA: f32 = 0.01;
    pub const FAULT_HURST: f32 = 0.01;

    /// Arena half-width (the arena spans [-m, m] on every axis)
    pub const ARENA_HALF_WIDTH: f32 = 2.5;
    /// Sphere pool capacity
    pub const MAX_SPHERES: usize = 50;
    /// Spheres spawned when a world is created
    pub const INITIAL_SPHERES: usize = 10;

    pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);
    /// Fraction of velocity kept per second (v *= drag^dt)
    pub const DRAG: f32 = 0.7;
    /// Velocity scale applied after a wall reflection
    pub const RESTITUTION: f32 = 0.7;

    /// Floor contact tolerance for rest detection
    pub const REST_HEIGHT_TOLERANCE: f32 = 1e-3;
    /// Vertical displacement per tick below which a floor contact counts as rest
    pub const REST_MOTION_TOLERANCE: f32 = 5e-3;

    /// Spawn ranges
    pub const SPHERE_RADIUS_MIN: f32 = 0.2;
    pub const SPHERE_RADIUS_MAX: f32 = 0.4;
    pub const SPHERE_SPEED_MIN: f32 = 1.0;
    pub const SPHERE_SPEED_MAX: f32 = 5.0;
    pub const SPHERE_COLOR_MIN: f32 = 0.1;
    pub const SPHERE_COLOR_MAX: f32 = 0.9;
    pub const SPHERE_MASS: f32 = 1.0;

    /// Flythrough camera defaults
    pub const CAMERA_START: Vec3 = Vec3::new(0.0, -1.6, 0.63);
    pub const CAMERA_VIEW_DIR: Vec3 = Vec3::new(0.0, 0.2, -0.05);
    pub const CAMERA_SPEED: f32 = 3e-4;
    pub const CAMERA_SPEED_STEP: f32 = 1e-4;
    /// Degrees of pitch/roll applied per frame while a key is held
    pub const CAMERA_TURN_DEGREES: f32 = 1.0;

    /// Logo rotation speed (degrees per second)
    pub const LOGO_SPEED: f32 = 50.0;
}

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}
