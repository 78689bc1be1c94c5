//! Regular grid mesh synthesis
//!
//! A `div x div` grid over `[min_x, max_x] x [min_y, max_y]` with `(div+1)^2`
//! row-major vertices at z = 0, two triangles per cell and a line list for
//! wireframe rendering.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Axis-aligned X/Y extent of a terrain grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl GridBounds {
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Reject empty, inverted or non-finite ranges
    pub fn validate(&self) -> ConfigResult<()> {
        check_range("x", self.min_x, self.max_x)?;
        check_range("y", self.min_y, self.max_y)
    }
}

fn check_range(axis: &'static str, min: f32, max: f32) -> ConfigResult<()> {
    let range = max - min;
    if !min.is_finite() || !max.is_finite() || !range.is_finite() || range <= 0.0 {
        return Err(ConfigError::DegenerateBounds { axis, min, max });
    }
    Ok(())
}

/// Indexed triangle mesh of a terrain heightfield
#[derive(Debug, Clone)]
pub struct TerrainMesh {
    pub div: u32,
    pub bounds: GridBounds,
    /// Vertex positions, index `i * (div + 1) + j` for row `i`, column `j`
    pub positions: Vec<Vec3>,
    /// Per-vertex normals (empty until computed)
    pub normals: Vec<Vec3>,
    pub faces: Vec<[u32; 3]>,
    /// Three undirected edges per face; shared edges appear twice
    pub edges: Vec<[u32; 2]>,
}

impl TerrainMesh {
    /// Vertices per grid row
    #[inline]
    pub fn row_len(&self) -> u32 {
        self.div + 1
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Index of the vertex at grid row `i`, column `j`
    #[inline]
    pub fn vertex_index(&self, i: u32, j: u32) -> u32 {
        i * self.row_len() + j
    }

    /// Lowest z in the mesh (0 for an empty mesh)
    pub fn min_elevation(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| p.z)
            .reduce(f32::min)
            .unwrap_or(0.0)
    }

    /// Highest z in the mesh (0 for an empty mesh)
    pub fn max_elevation(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| p.z)
            .reduce(f32::max)
            .unwrap_or(0.0)
    }
}

/// Build a flat grid mesh
pub fn generate(div: u32, bounds: GridBounds) -> ConfigResult<TerrainMesh> {
    if div < 1 {
        return Err(ConfigError::InvalidSubdivisions(div));
    }
    bounds.validate()?;

    let row_len = div
        .checked_add(1)
        .and_then(|n| n.checked_mul(n).map(|_| n))
        .ok_or(ConfigError::GridTooLarge { div })?;

    let positions = grid_positions(div, &bounds);
    let faces = grid_faces(div);
    let edges = face_edges(&faces);

    log::debug!(
        "Grid {}x{}: {} vertices ({} per row), {} faces",
        div,
        div,
        positions.len(),
        row_len,
        faces.len()
    );

    Ok(TerrainMesh {
        div,
        bounds,
        positions,
        normals: Vec::new(),
        faces,
        edges,
    })
}

fn grid_positions(div: u32, bounds: &GridBounds) -> Vec<Vec3> {
    let delta_x = bounds.width() / div as f32;
    let delta_y = bounds.height() / div as f32;
    let row_len = (div + 1) as usize;

    let mut positions = Vec::with_capacity(row_len * row_len);
    for i in 0..=div {
        for j in 0..=div {
            positions.push(Vec3::new(
                bounds.min_x + delta_x * j as f32,
                bounds.min_y + delta_y * i as f32,
                0.0,
            ));
        }
    }
    positions
}

/// Two triangles per cell; base indices on the right edge of a row start no cell
fn grid_faces(div: u32) -> Vec<[u32; 3]> {
    let row_len = div + 1;
    let mut faces = Vec::with_capacity(2 * (div as usize) * (div as usize));

    for v in 0..row_len * div {
        if (v + 1) % row_len == 0 {
            continue;
        }
        faces.push([v, v + 1, v + row_len]);
        faces.push([v + 1, v + row_len + 1, v + row_len]);
    }
    faces
}

/// Line list for wireframe rendering
pub fn face_edges(faces: &[[u32; 3]]) -> Vec<[u32; 2]> {
    faces
        .iter()
        .flat_map(|&[a, b, c]| [[a, b], [b, c], [c, a]])
        .collect()
}
