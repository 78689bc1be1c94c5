//! Finished terrain owned by the host

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::fault::{FaultParams, shape};
use super::mesh::{GridBounds, TerrainMesh, generate};
use super::normals::compute_normals;
use crate::consts::{TERRAIN_DIV, TERRAIN_MAX, TERRAIN_MIN};
use crate::error::ConfigResult;

/// Everything needed to rebuild a terrain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
    pub div: u32,
    pub bounds: GridBounds,
    pub fault: FaultParams,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            div: TERRAIN_DIV,
            bounds: GridBounds::new(TERRAIN_MIN, TERRAIN_MAX, TERRAIN_MIN, TERRAIN_MAX),
            fault: FaultParams::default(),
        }
    }
}

impl TerrainSettings {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.div < 1 {
            return Err(crate::ConfigError::InvalidSubdivisions(self.div));
        }
        self.bounds.validate()?;
        self.fault.validate()
    }
}

/// Shaped terrain with normals and its elevation range
#[derive(Debug, Clone)]
pub struct TerrainState {
    /// Seed the faults were drawn from
    pub seed: u64,
    mesh: TerrainMesh,
    min_elevation: f32,
    max_elevation: f32,
}

impl TerrainState {
    /// Generate, shape and light a terrain. Same settings and seed give the same terrain.
    pub fn new(settings: &TerrainSettings, seed: u64) -> ConfigResult<Self> {
        settings.validate()?;

        let mut mesh = generate(settings.div, settings.bounds)?;
        log::info!(
            "Terrain: generated {} vertices, {} triangles, {} edges",
            mesh.vertex_count(),
            mesh.face_count(),
            mesh.edges.len()
        );

        let mut rng = Pcg32::seed_from_u64(seed);
        shape(&mut mesh, &settings.fault, &mut rng)?;
        log::info!(
            "Terrain: applied {} faults (seed {})",
            settings.fault.iterations,
            seed
        );

        mesh.normals = compute_normals(&mesh.positions, &mesh.faces);
        log::info!("Terrain: computed normals");

        let min_elevation = mesh.min_elevation();
        let max_elevation = mesh.max_elevation();
        log::debug!("Terrain elevation range [{}, {}]", min_elevation, max_elevation);

        Ok(Self {
            seed,
            mesh,
            min_elevation,
            max_elevation,
        })
    }

    pub fn mesh(&self) -> &TerrainMesh {
        &self.mesh
    }

    #[inline]
    pub fn min_elevation(&self) -> f32 {
        self.min_elevation
    }

    #[inline]
    pub fn max_elevation(&self) -> f32 {
        self.max_elevation
    }

    /// xyz triples, one per vertex
    pub fn position_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.mesh.positions)
    }

    /// Unit normal triples, one per vertex
    pub fn normal_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.mesh.normals)
    }

    /// Triangle list indices
    pub fn face_data(&self) -> &[u32] {
        bytemuck::cast_slice(&self.mesh.faces)
    }

    /// Line list indices for wireframe
    pub fn edge_data(&self) -> &[u32] {
        bytemuck::cast_slice(&self.mesh.edges)
    }
}
