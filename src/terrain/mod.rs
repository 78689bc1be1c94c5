//! Procedural terrain
//!
//! Built once at load time: flat grid -> fault shaping -> vertex normals.
//! The finished buffers are read-only and handed to the renderer every frame.

pub mod fault;
pub mod mesh;
pub mod normals;
pub mod state;

pub use fault::{FaultParams, FaultPlane, apply_fault, shape};
pub use mesh::{GridBounds, TerrainMesh, face_edges, generate};
pub use normals::{FALLBACK_NORMAL, compute_normals, face_normal};
pub use state::{TerrainSettings, TerrainState};
