//! Sphere vs. arena wall collision
//!
//! The arena is a cube bounded by six axis-aligned planes. A sphere moving
//! along a straight segment during one step may cross several of them; the
//! earliest time of impact wins.

use glam::Vec3;

/// One of the six arena walls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    PosX,
    PosY,
    PosZ,
    NegX,
    NegY,
    NegZ,
}

impl Wall {
    /// Enumeration order; earlier walls win ties
    pub const ALL: [Wall; 6] = [
        Wall::PosX,
        Wall::PosY,
        Wall::PosZ,
        Wall::NegX,
        Wall::NegY,
        Wall::NegZ,
    ];

    /// Axis index (0 = x, 1 = y, 2 = z)
    #[inline]
    pub fn axis(self) -> usize {
        match self {
            Wall::PosX | Wall::NegX => 0,
            Wall::PosY | Wall::NegY => 1,
            Wall::PosZ | Wall::NegZ => 2,
        }
    }

    /// +1 for the positive walls, -1 for the negative ones
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Wall::PosX | Wall::PosY | Wall::PosZ => 1.0,
            Wall::NegX | Wall::NegY | Wall::NegZ => -1.0,
        }
    }

    /// Surface normal pointing into the arena (used for reflection)
    pub fn inward_normal(self) -> Vec3 {
        let mut n = Vec3::ZERO;
        n[self.axis()] = -self.sign();
        n
    }

    /// Is a sphere at `pos` touching or past this wall?
    #[inline]
    pub fn penetrated(self, pos: Vec3, radius: f32, half_width: f32) -> bool {
        let a = self.axis();
        if self.sign() > 0.0 {
            pos[a] + radius >= half_width
        } else {
            pos[a] - radius <= -half_width
        }
    }

    /// Is `vel` carrying the sphere into this wall?
    #[inline]
    pub fn approaching(self, vel: Vec3) -> bool {
        vel[self.axis()] * self.sign() > 0.0
    }

    /// Time for a sphere starting at `pos` to reach this wall.
    ///
    /// Only meaningful when `approaching(vel)` holds; the velocity component
    /// is then non-zero.
    #[inline]
    pub fn time_of_impact(self, pos: Vec3, vel: Vec3, radius: f32, half_width: f32) -> f32 {
        let a = self.axis();
        let contact = self.sign() * (half_width - radius);
        (contact - pos[a]) / vel[a]
    }
}

/// Earliest wall contact within a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallHit {
    pub wall: Wall,
    /// Seconds after the start of the step, in `[0, dt]`
    pub time: f32,
}

/// Find the first wall a sphere hits while moving from `pos` along `vel` for `dt`.
///
/// A wall counts when the end-of-step position penetrates it and the sphere is
/// moving toward it. Spheres already overlapping a wall they are heading into
/// report an impact at time 0.
pub fn earliest_wall_hit(pos: Vec3, vel: Vec3, radius: f32, half_width: f32, dt: f32) -> Option<WallHit> {
    let next = pos + vel * dt;
    let mut best: Option<WallHit> = None;

    for wall in Wall::ALL {
        if !wall.penetrated(next, radius, half_width) || !wall.approaching(vel) {
            continue;
        }
        let t = wall.time_of_impact(pos, vel, radius, half_width);
        if !t.is_finite() {
            continue;
        }
        let t = t.clamp(0.0, dt);
        if best.is_none_or(|b| t < b.time) {
            best = Some(WallHit { wall, time: t });
        }
    }

    best
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec3, normal: Vec3) -> Vec3 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_normals_point_inward() {
        assert_eq!(Wall::PosX.inward_normal(), Vec3::NEG_X);
        assert_eq!(Wall::PosY.inward_normal(), Vec3::NEG_Y);
        assert_eq!(Wall::PosZ.inward_normal(), Vec3::NEG_Z);
        assert_eq!(Wall::NegX.inward_normal(), Vec3::X);
        assert_eq!(Wall::NegY.inward_normal(), Vec3::Y);
        assert_eq!(Wall::NegZ.inward_normal(), Vec3::Z);
    }

    #[test]
    fn test_no_hit_in_open_space() {
        let hit = earliest_wall_hit(Vec3::ZERO, Vec3::new(1.0, -2.0, 3.0), 0.2, 2.5, 0.1);
        assert!(hit.is_none());
    }

    #[test]
    fn test_time_of_impact_interpolates() {
        // Contact at x = 2.3; 0.3 away at speed 6 -> 0.05 s
        let hit = earliest_wall_hit(Vec3::new(2.0, 0.0, 0.0), Vec3::new(6.0, 0.0, 0.0), 0.2, 2.5, 0.1)
            .unwrap();
        assert_eq!(hit.wall, Wall::PosX);
        assert!((hit.time - 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_earliest_wall_wins() {
        // Floor reached at t = 0.02, x+ wall at t = 0.075
        let pos = Vec3::new(2.0, -2.1, 0.0);
        let vel = Vec3::new(4.0, -10.0, 0.0);
        let hit = earliest_wall_hit(pos, vel, 0.2, 2.5, 0.1).unwrap();
        assert_eq!(hit.wall, Wall::NegY);
        assert!((hit.time - 0.02).abs() < 1e-5);
    }

    #[test]
    fn test_tie_goes_to_enumeration_order() {
        // Corner approach: x+ and y+ are hit at the same instant
        let pos = Vec3::new(2.0, 2.0, 0.0);
        let vel = Vec3::new(5.0, 5.0, 0.0);
        let hit = earliest_wall_hit(pos, vel, 0.2, 2.5, 0.1).unwrap();
        assert_eq!(hit.wall, Wall::PosX);

        let pos = Vec3::new(-2.0, -2.0, 0.0);
        let vel = Vec3::new(-5.0, -5.0, 0.0);
        let hit = earliest_wall_hit(pos, vel, 0.2, 2.5, 0.1).unwrap();
        assert_eq!(hit.wall, Wall::NegX);
    }

    #[test]
    fn test_receding_sphere_is_not_hit() {
        // Overlapping the x+ wall but already moving away from it
        let pos = Vec3::new(2.35, 0.0, 0.0);
        let vel = Vec3::new(-0.1, 0.0, 0.0);
        assert!(earliest_wall_hit(pos, vel, 0.2, 2.5, 0.1).is_none());
    }

    #[test]
    fn test_zero_velocity_axis_never_divides() {
        // Resting against the floor with no vertical velocity
        let pos = Vec3::new(0.0, -2.3, 0.0);
        let vel = Vec3::new(1.0, 0.0, 0.0);
        assert!(earliest_wall_hit(pos, vel, 0.2, 2.5, 0.1).is_none());
    }

    #[test]
    fn test_overlap_reports_immediate_impact() {
        let pos = Vec3::new(0.0, 2.31, 0.0);
        let vel = Vec3::new(0.0, 1.0, 0.0);
        let hit = earliest_wall_hit(pos, vel, 0.2, 2.5, 0.1).unwrap();
        assert_eq!(hit.wall, Wall::PosY);
        assert_eq!(hit.time, 0.0);
    }

    #[test]
    fn test_reflect_velocity() {
        let v = Vec3::new(1.0, 4.0, -2.0);
        let n = Wall::PosY.inward_normal();
        let r = reflect_velocity(v, n);
        assert_eq!(r, Vec3::new(1.0, -4.0, -2.0));
        assert!((r.dot(n) + v.dot(n)).abs() < 1e-6);
    }
}
