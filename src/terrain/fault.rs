//! Fault-method terrain shaping
//!
//! Each iteration cuts the grid with a random vertical fault plane, raises
//! the vertices on one side and lowers the other. Displacement falls off with
//! distance from the plane and shrinks geometrically between iterations, so
//! early faults shape the large features and later ones add detail.

use glam::{Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::mesh::TerrainMesh;
use crate::consts::{FAULT_HURST, FAULT_INITIAL_DELTA, FAULT_ITERATIONS};
use crate::error::{ConfigError, ConfigResult};

/// Directions shorter than this are treated as degenerate
const MIN_DIRECTION_LENGTH: f32 = 1e-6;

/// Upper bound on the summed displacement of a fault schedule
const MAX_TOTAL_DISPLACEMENT: f32 = 1e6;

/// Faulting schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaultParams {
    pub iterations: u32,
    /// Displacement applied right at the fault plane on the first iteration
    pub initial_delta: f32,
    /// Roughness: delta is divided by 2^hurst after every iteration
    pub hurst: f32,
}

impl Default for FaultParams {
    fn default() -> Self {
        Self {
            iterations: FAULT_ITERATIONS,
            initial_delta: FAULT_INITIAL_DELTA,
            hurst: FAULT_HURST,
        }
    }
}

impl FaultParams {
    /// Rejects schedules whose displacements could overflow `f32`
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.initial_delta.is_finite() || self.initial_delta < 0.0 {
            return Err(ConfigError::InvalidFaultParameter {
                name: "initial_delta",
                value: self.initial_delta,
            });
        }
        // hurst >= 0 keeps delta non-increasing
        if !self.hurst.is_finite() || self.hurst < 0.0 {
            return Err(ConfigError::InvalidFaultParameter {
                name: "hurst",
                value: self.hurst,
            });
        }
        // Every vertex moves by at most initial_delta per iteration
        let worst = self.initial_delta as f64 * self.iterations as f64;
        if worst > MAX_TOTAL_DISPLACEMENT as f64 {
            return Err(ConfigError::InvalidFaultParameter {
                name: "initial_delta",
                value: self.initial_delta,
            });
        }
        Ok(())
    }

    /// Factor delta is multiplied by between iterations
    #[inline]
    pub fn decay(&self) -> f32 {
        2.0_f32.powf(-self.hurst)
    }
}

/// A vertical plane through `point` with horizontal normal `normal`
#[derive(Debug, Clone, Copy)]
pub struct FaultPlane {
    pub point: Vec2,
    pub normal: Vec2,
}

impl FaultPlane {
    /// Random point inside the grid bounds and a uniformly random direction
    pub fn random<R: Rng + ?Sized>(mesh: &TerrainMesh, rng: &mut R) -> Self {
        let b = &mesh.bounds;
        let point = Vec2::new(
            b.min_x + rng.random::<f32>() * b.width(),
            b.min_y + rng.random::<f32>() * b.height(),
        );
        let angle = rng.random::<f32>() * std::f32::consts::TAU;
        Self {
            point,
            normal: Vec2::new(angle.cos(), angle.sin()),
        }
    }
}

/// Shape the mesh in place. Normals are not touched; recompute them afterwards.
pub fn shape<R: Rng + ?Sized>(
    mesh: &mut TerrainMesh,
    params: &FaultParams,
    rng: &mut R,
) -> ConfigResult<()> {
    params.validate()?;

    let falloff_radius = mesh.bounds.width();
    let decay = params.decay();
    let mut delta = params.initial_delta;
    let mut skipped = 0u32;

    for _ in 0..params.iterations {
        if !delta.is_finite() {
            return Err(ConfigError::InvalidFaultParameter {
                name: "initial_delta",
                value: params.initial_delta,
            });
        }
        let plane = FaultPlane::random(mesh, rng);
        if !apply_fault(&mut mesh.positions, &plane, delta, falloff_radius) {
            skipped += 1;
        }
        delta *= decay;
    }

    if skipped > 0 {
        log::warn!("Skipped {} fault(s) with a degenerate direction", skipped);
    }
    Ok(())
}

/// Displace every vertex within `falloff_radius` of the plane.
///
/// Returns false (leaving the vertices untouched) when the plane normal is
/// too short to define a side.
pub fn apply_fault(positions: &mut [Vec3], plane: &FaultPlane, delta: f32, falloff_radius: f32) -> bool {
    let len = plane.normal.length();
    if !(len >= MIN_DIRECTION_LENGTH) || !(falloff_radius > 0.0) {
        return false;
    }

    for b in positions.iter_mut() {
        let side = plane.normal.dot(b.truncate() - plane.point);
        let r = side.abs() / len;
        if r >= falloff_radius {
            continue;
        }

        let t = r / falloff_radius;
        let f = delta * (1.0 - t * t).powi(2);
        if side < 0.0 {
            b.z -= f;
        } else {
            b.z += f;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::mesh::{GridBounds, generate};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn square_mesh(div: u32) -> TerrainMesh {
        generate(div, GridBounds::new(-1.0, 1.0, -1.0, 1.0)).unwrap()
    }

    #[test]
    fn test_fault_raises_one_side_lowers_other() {
        let mut positions = vec![
            Vec3::new(-0.5, 0.0, 0.0),
            Vec3::new(0.5, 0.0, 0.0),
            Vec3::new(0.0, 0.3, 0.0),
        ];
        let plane = FaultPlane {
            point: Vec2::ZERO,
            normal: Vec2::X,
        };
        assert!(apply_fault(&mut positions, &plane, 1.0, 2.0));

        // r = 0.5, R = 2 -> f = (1 - 1/16)^2
        let expected = (1.0_f32 - 0.0625).powi(2);
        assert!((positions[0].z + expected).abs() < 1e-6);
        assert!((positions[1].z - expected).abs() < 1e-6);
        // On the plane: dot == 0 counts as the raised side, full displacement
        assert!((positions[2].z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_fault_ignores_vertices_beyond_radius() {
        let mut positions = vec![Vec3::new(3.0, 0.0, 0.25)];
        let plane = FaultPlane {
            point: Vec2::ZERO,
            normal: Vec2::X,
        };
        apply_fault(&mut positions, &plane, 1.0, 2.0);
        assert_eq!(positions[0].z, 0.25);
    }

    #[test]
    fn test_unnormalized_direction_uses_true_distance() {
        let mut scaled = vec![Vec3::new(0.5, 0.0, 0.0)];
        let mut unit = scaled.clone();
        let p = Vec2::ZERO;
        apply_fault(&mut scaled, &FaultPlane { point: p, normal: Vec2::new(4.0, 0.0) }, 1.0, 2.0);
        apply_fault(&mut unit, &FaultPlane { point: p, normal: Vec2::X }, 1.0, 2.0);
        assert!((scaled[0].z - unit[0].z).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_direction_is_skipped() {
        let mut positions = vec![Vec3::new(0.5, 0.5, 0.0)];
        let plane = FaultPlane {
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
        };
        assert!(!apply_fault(&mut positions, &plane, 1.0, 2.0));
        assert_eq!(positions[0].z, 0.0);

        let nan_plane = FaultPlane {
            point: Vec2::ZERO,
            normal: Vec2::new(f32::NAN, 0.0),
        };
        assert!(!apply_fault(&mut positions, &nan_plane, 1.0, 2.0));
        assert_eq!(positions[0].z, 0.0);
    }

    #[test]
    fn test_shape_produces_relief() {
        let mut mesh = square_mesh(16);
        let mut rng = Pcg32::seed_from_u64(7);
        shape(&mut mesh, &FaultParams::default(), &mut rng).unwrap();

        assert!(mesh.max_elevation() > mesh.min_elevation());
        assert!(mesh.positions.iter().all(|p| p.z.is_finite()));
    }

    #[test]
    fn test_shape_keeps_grid_xy() {
        let flat = square_mesh(8);
        let mut mesh = flat.clone();
        let mut rng = Pcg32::seed_from_u64(3);
        shape(&mut mesh, &FaultParams::default(), &mut rng).unwrap();

        for (a, b) in flat.positions.iter().zip(&mesh.positions) {
            assert_eq!(a.truncate(), b.truncate());
        }
    }

    #[test]
    fn test_same_seed_same_terrain() {
        let mut a = square_mesh(8);
        let mut b = square_mesh(8);
        shape(&mut a, &FaultParams::default(), &mut Pcg32::seed_from_u64(42)).unwrap();
        shape(&mut b, &FaultParams::default(), &mut Pcg32::seed_from_u64(42)).unwrap();
        assert_eq!(a.positions, b.positions);
    }

    #[test]
    fn test_zero_iterations_leaves_grid_flat() {
        let mut mesh = square_mesh(4);
        let params = FaultParams {
            iterations: 0,
            ..Default::default()
        };
        shape(&mut mesh, &params, &mut Pcg32::seed_from_u64(1)).unwrap();
        assert_eq!(mesh.max_elevation(), 0.0);
        assert_eq!(mesh.min_elevation(), 0.0);
    }

    #[test]
    fn test_relief_bounded_by_total_displacement() {
        let params = FaultParams::default();
        let mut mesh = square_mesh(12);
        shape(&mut mesh, &params, &mut Pcg32::seed_from_u64(11)).unwrap();

        // Geometric series of per-iteration displacements
        let decay = params.decay();
        let total: f32 = (0..params.iterations)
            .map(|k| params.initial_delta * decay.powi(k as i32))
            .sum();
        assert!(mesh.max_elevation() <= total + 1e-4);
        assert!(mesh.min_elevation() >= -total - 1e-4);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let mut mesh = square_mesh(2);
        let params = FaultParams {
            hurst: f32::INFINITY,
            ..Default::default()
        };
        let err = shape(&mut mesh, &params, &mut Pcg32::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFaultParameter { name: "hurst", .. }));
    }

    #[test]
    fn test_negative_hurst_rejected() {
        // delta would double every iteration and overflow to inf, then NaN
        let mut mesh = square_mesh(8);
        let params = FaultParams {
            iterations: 200,
            initial_delta: 0.01,
            hurst: -1.0,
        };
        let err = shape(&mut mesh, &params, &mut Pcg32::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFaultParameter { name: "hurst", .. }));
        assert!(mesh.positions.iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn test_huge_initial_delta_rejected() {
        let params = FaultParams {
            iterations: 200,
            initial_delta: 1e37,
            hurst: 0.0,
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidFaultParameter { name: "initial_delta", .. })
        ));

        let negative = FaultParams {
            initial_delta: -0.5,
            ..Default::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_largest_allowed_schedule_stays_finite() {
        let mut mesh = square_mesh(8);
        let params = FaultParams {
            iterations: 100,
            initial_delta: 1e4,
            hurst: 0.0,
        };
        shape(&mut mesh, &params, &mut Pcg32::seed_from_u64(9)).unwrap();
        assert!(mesh.positions.iter().all(|p| p.z.is_finite()));
    }
}
