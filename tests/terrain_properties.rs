//! Property-based tests for terrain generation using proptest
//!
//! These tests verify mesh invariants hold across random grids and seeds:
//! - Vertex/face/edge counts follow the grid size
//! - Every index addresses a real vertex
//! - Faulting keeps heights finite and leaves x/y untouched
//! - Normals are unit length

use glam::Vec3;
use proptest::prelude::*;
use terrain_arena::terrain::{FaultParams, GridBounds, TerrainSettings, TerrainState, compute_normals, generate};

const NORMAL_TOLERANCE: f32 = 1e-5;

/// Bounds with a positive, finite extent on both axes
fn valid_bounds() -> impl Strategy<Value = GridBounds> {
    (-5.0f32..0.0, 0.1f32..10.0, -5.0f32..0.0, 0.1f32..10.0)
        .prop_map(|(min_x, w, min_y, h)| GridBounds::new(min_x, min_x + w, min_y, min_y + h))
}

fn fault_params() -> impl Strategy<Value = FaultParams> {
    (0u32..60, 0.001f32..0.05, 0.0f32..1.0).prop_map(|(iterations, initial_delta, hurst)| FaultParams {
        iterations,
        initial_delta,
        hurst,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_grid_counts(div in 1u32..40, bounds in valid_bounds()) {
        let mesh = generate(div, bounds).unwrap();
        let n = div as usize;

        prop_assert_eq!(mesh.vertex_count(), (n + 1) * (n + 1));
        prop_assert_eq!(mesh.face_count(), 2 * n * n);
        prop_assert_eq!(mesh.edges.len(), 3 * mesh.face_count());
    }

    #[test]
    fn test_indices_in_range(div in 1u32..40, bounds in valid_bounds()) {
        let mesh = generate(div, bounds).unwrap();
        let count = mesh.vertex_count() as u32;

        for face in &mesh.faces {
            prop_assert!(face.iter().all(|&i| i < count), "face {:?} out of range", face);
        }
        for edge in &mesh.edges {
            prop_assert!(edge.iter().all(|&i| i < count), "edge {:?} out of range", edge);
        }
    }

    #[test]
    fn test_faulted_terrain_is_finite(
        div in 1u32..24,
        bounds in valid_bounds(),
        fault in fault_params(),
        seed in any::<u64>(),
    ) {
        let settings = TerrainSettings { div, bounds, fault };
        let flat = generate(div, bounds).unwrap();
        let terrain = TerrainState::new(&settings, seed).unwrap();
        let mesh = terrain.mesh();

        prop_assert!(terrain.min_elevation().is_finite());
        prop_assert!(terrain.max_elevation().is_finite());
        prop_assert!(terrain.min_elevation() <= terrain.max_elevation());

        for (shaped, original) in mesh.positions.iter().zip(&flat.positions) {
            prop_assert!(shaped.is_finite());
            prop_assert_eq!(shaped.x, original.x);
            prop_assert_eq!(shaped.y, original.y);
        }
    }

    #[test]
    fn test_faulting_produces_relief(div in 2u32..24, seed in any::<u64>(), iterations in 1u32..40) {
        let settings = TerrainSettings {
            div,
            bounds: GridBounds::new(-1.0, 1.0, -1.0, 1.0),
            fault: FaultParams {
                iterations,
                ..Default::default()
            },
        };
        let terrain = TerrainState::new(&settings, seed).unwrap();
        prop_assert!(terrain.max_elevation() > terrain.min_elevation());
    }

    #[test]
    fn test_normals_unit_length(
        div in 1u32..24,
        bounds in valid_bounds(),
        fault in fault_params(),
        seed in any::<u64>(),
    ) {
        let settings = TerrainSettings { div, bounds, fault };
        let terrain = TerrainState::new(&settings, seed).unwrap();
        let mesh = terrain.mesh();

        prop_assert_eq!(mesh.normals.len(), mesh.vertex_count());
        for n in &mesh.normals {
            prop_assert!((n.length() - 1.0).abs() < NORMAL_TOLERANCE, "normal {:?} not unit", n);
        }
    }

    #[test]
    fn test_arbitrary_heights_give_unit_normals(
        heights in prop::collection::vec(-10.0f32..10.0, 16),
    ) {
        // 3x3 cells, random heights
        let mut mesh = generate(3, GridBounds::new(-1.0, 1.0, -1.0, 1.0)).unwrap();
        for (p, h) in mesh.positions.iter_mut().zip(&heights) {
            p.z = *h;
        }
        let normals = compute_normals(&mesh.positions, &mesh.faces);
        for n in normals {
            prop_assert!((n.length() - 1.0).abs() < NORMAL_TOLERANCE);
            prop_assert!(n.dot(Vec3::Z) > 0.0, "heightfield normal {:?} points down", n);
        }
    }
}

#[test]
fn test_same_seed_same_terrain() {
    let settings = TerrainSettings {
        div: 32,
        ..Default::default()
    };
    let a = TerrainState::new(&settings, 1234).unwrap();
    let b = TerrainState::new(&settings, 1234).unwrap();
    assert_eq!(a.position_data(), b.position_data());
    assert_eq!(a.normal_data(), b.normal_data());
}
