//! Per-vertex normals by face-normal accumulation
//!
//! Every face adds its unnormalized cross product to its three vertices, so
//! larger triangles weigh more. The sums are normalized at the end.

use glam::Vec3;

/// Normal used when a vertex accumulates nothing (no faces, or only
/// zero-area faces)
pub const FALLBACK_NORMAL: Vec3 = Vec3::Z;

/// Unnormalized face normal `(v2 - v1) x (v3 - v1)`
#[inline]
pub fn face_normal(v1: Vec3, v2: Vec3, v3: Vec3) -> Vec3 {
    (v2 - v1).cross(v3 - v1)
}

/// One unit normal per vertex
pub fn compute_normals(positions: &[Vec3], faces: &[[u32; 3]]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for &[a, b, c] in faces {
        let (a, b, c) = (a as usize, b as usize, c as usize);
        let n = face_normal(positions[a], positions[b], positions[c]);
        normals[a] += n;
        normals[b] += n;
        normals[c] += n;
    }

    let mut fallbacks = 0usize;
    for n in normals.iter_mut() {
        *n = n.try_normalize().unwrap_or_else(|| {
            fallbacks += 1;
            FALLBACK_NORMAL
        });
    }
    if fallbacks > 0 {
        log::debug!("{} vertex normal(s) fell back to +Z", fallbacks);
    }

    normals
}
