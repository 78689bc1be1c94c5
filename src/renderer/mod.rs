//! Render handoff
//!
//! GPU-ready vertex records and `wgpu` buffer layouts. The host owns the
//! device, shaders and pipelines; this module only shapes the data.

pub mod shapes;
pub mod vertex;

pub use shapes::{logo_mesh, sphere_instances, sphere_model, terrain_vertices};
pub use vertex::{SphereInstance, TerrainVertex, Vertex};
