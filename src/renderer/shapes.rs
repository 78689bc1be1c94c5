//! Vertex and instance generation from simulation state

use glam::{Mat4, Vec3};

use super::vertex::{SphereInstance, TerrainVertex, Vertex};
use crate::logo::LogoShape;
use crate::sim::PhysicsWorld;
use crate::terrain::TerrainState;

/// Interleaved position/normal vertices for the terrain
pub fn terrain_vertices(terrain: &TerrainState) -> Vec<TerrainVertex> {
    let mesh = terrain.mesh();
    mesh.positions
        .iter()
        .zip(&mesh.normals)
        .map(|(p, n)| TerrainVertex {
            position: p.to_array(),
            normal: n.to_array(),
        })
        .collect()
}

/// Colored triangle list for `shape` at `time` seconds
pub fn logo_mesh(shape: LogoShape, time: f32) -> Vec<Vertex> {
    shape
        .vertices(time)
        .into_iter()
        .zip(shape.colors(time))
        .map(|(v, color)| Vertex::new(v.x, v.y, v.z, color))
        .collect()
}

/// Model matrix placing a unit sphere at `pos` with radius `radius`
#[inline]
pub fn sphere_model(pos: Vec3, radius: f32) -> Mat4 {
    Mat4::from_translation(pos) * Mat4::from_scale(Vec3::splat(radius))
}

/// One instance per live sphere, in pool order
pub fn sphere_instances(world: &PhysicsWorld) -> Vec<SphereInstance> {
    world
        .spheres()
        .iter()
        .map(|s| SphereInstance {
            model: sphere_model(s.pos, s.radius).to_cols_array_2d(),
            color: s.color.extend(1.0).to_array(),
        })
        .collect()
}
