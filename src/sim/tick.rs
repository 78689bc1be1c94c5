//! Per-frame physics step
//!
//! Each live sphere is advanced independently (walls only, no sphere-sphere
//! contact) in stable index order.

use glam::Vec3;

use super::collision::{earliest_wall_hit, reflect_velocity};
use super::state::{PhysicsParams, PhysicsWorld, Sphere};
use crate::consts::{REST_HEIGHT_TOLERANCE, REST_MOTION_TOLERANCE};

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Add one sphere (held key spawns one per frame)
    pub spawn: bool,
    /// Remove every sphere
    pub clear: bool,
}

/// Apply frame input, then advance the world by `dt` seconds
pub fn tick(world: &mut PhysicsWorld, input: &TickInput, dt: f32) {
    if input.spawn {
        world.spawn();
    }
    if input.clear {
        world.clear();
    }
    step(world, dt);
}

/// Advance every live sphere by `dt` seconds
pub fn step(world: &mut PhysicsWorld, dt: f32) {
    if !dt.is_finite() || dt <= 0.0 {
        log::warn!("Ignoring physics step with dt = {}", dt);
        return;
    }

    world.time_ticks += 1;
    let params = world.params;
    for sphere in world.spheres_mut() {
        step_sphere(sphere, dt, &params);
    }
}

/// Velocity after `t` seconds of drag (exponential decay) and gravity
#[inline]
fn integrate_velocity(vel: Vec3, t: f32, params: &PhysicsParams) -> Vec3 {
    vel * params.drag.powf(t) + params.gravity * t
}

/// Advance one sphere.
///
/// On a wall hit the sphere only travels up to the time of impact; the rest
/// of the step is dropped, so a sphere reaching a corner bounces off one wall
/// per frame.
pub fn step_sphere(sphere: &mut Sphere, dt: f32, params: &PhysicsParams) {
    if sphere.at_rest {
        return;
    }

    let old_pos = sphere.pos;
    let m = params.half_width;

    match earliest_wall_hit(old_pos, sphere.vel, sphere.radius, m, dt) {
        None => {
            sphere.pos = old_pos + sphere.vel * dt;
            sphere.vel = integrate_velocity(sphere.vel, dt, params);
        }
        Some(hit) => {
            sphere.pos = old_pos + sphere.vel * hit.time;
            let vel = integrate_velocity(sphere.vel, hit.time, params);
            sphere.vel = reflect_velocity(vel, hit.wall.inward_normal()) * params.restitution;
        }
    }

    // Keep the whole sphere inside the arena despite rounding
    let reach = Vec3::splat((m - sphere.radius).max(0.0));
    sphere.pos = sphere.pos.clamp(-reach, reach);

    let on_floor = (sphere.pos.y - sphere.radius + m).abs() < REST_HEIGHT_TOLERANCE;
    let settled = (sphere.pos.y - old_pos.y).abs() < REST_MOTION_TOLERANCE;
    if on_floor && settled {
        sphere.freeze();
    }
}
