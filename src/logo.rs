//! Logo animations
//!
//! Two shapes are available. The "I" logo breathes with the elapsed time while
//! its model matrix slides, scales and spins it through a full turn. The swan
//! flaps its feet and wing, its reflection shimmers, and it drifts right as
//! the angle sweeps.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::LOGO_SPEED;
use crate::deg_to_rad;

/// Logo color (orange)
pub const LOGO_COLOR: [f32; 4] = [0.910, 0.290, 0.153, 1.0];

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Which animation the logo demo plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogoShape {
    #[default]
    I,
    Swan,
}

impl LogoShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogoShape::I => "i",
            LogoShape::Swan => "swan",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "i" => Some(LogoShape::I),
            "swan" => Some(LogoShape::Swan),
            _ => None,
        }
    }

    pub fn vertex_count(&self) -> usize {
        match self {
            LogoShape::I => LOGO_VERTEX_COUNT,
            LogoShape::Swan => SWAN_VERTEX_COUNT,
        }
    }

    /// Triangle-list positions at `time` seconds
    pub fn vertices(&self, time: f32) -> Vec<Vec3> {
        match self {
            LogoShape::I => logo_vertices(time),
            LogoShape::Swan => swan_vertices(time),
        }
    }

    /// One RGBA per vertex at `time` seconds
    pub fn colors(&self, time: f32) -> Vec<[f32; 4]> {
        match self {
            LogoShape::I => vec![LOGO_COLOR; LOGO_VERTEX_COUNT],
            LogoShape::Swan => swan_colors(time),
        }
    }
}

/// Which oscillator drives a vertex's x coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wave {
    Sin,
    Cos,
}

use Wave::{Cos, Sin};

/// (x scale, x wave, y scale); y always follows sin
const LOGO_SHAPE: [(f32, Wave, f32); 30] = [
    // Top bar, left cap
    (-0.30, Sin, 0.5),
    (-0.30, Sin, 0.3),
    (-0.15, Sin, 0.3),
    // Top bar
    (-0.30, Cos, 0.5),
    (-0.15, Cos, 0.3),
    (0.30, Cos, 0.5),
    (0.30, Cos, 0.5),
    (-0.15, Cos, 0.3),
    (0.15, Cos, 0.3),
    // Top bar, right cap
    (0.30, Sin, 0.5),
    (0.15, Sin, 0.3),
    (0.30, Sin, 0.3),
    // Stem
    (-0.15, Cos, 0.3),
    (-0.15, Cos, -0.3),
    (0.15, Cos, -0.3),
    (-0.15, Cos, 0.3),
    (0.15, Cos, 0.3),
    (0.15, Cos, -0.3),
    // Bottom bar, left cap
    (-0.30, Sin, -0.5),
    (-0.30, Sin, -0.3),
    (-0.15, Sin, -0.3),
    // Bottom bar
    (-0.30, Cos, -0.5),
    (-0.15, Cos, -0.3),
    (0.30, Cos, -0.5),
    (0.30, Cos, -0.5),
    (-0.15, Cos, -0.3),
    (0.15, Cos, -0.3),
    // Bottom bar, right cap
    (0.30, Sin, -0.5),
    (0.15, Sin, -0.3),
    (0.30, Sin, -0.3),
];

/// Number of vertices in the logo triangle list
pub const LOGO_VERTEX_COUNT: usize = LOGO_SHAPE.len();

/// Logo vertices (clip space, triangle list) at `time` seconds
pub fn logo_vertices(time: f32) -> Vec<Vec3> {
    let (s, c) = time.sin_cos();
    LOGO_SHAPE
        .iter()
        .map(|&(x, wave, y)| {
            let wx = match wave {
                Sin => s,
                Cos => c,
            };
            Vec3::new(x * wx, y * s, 0.0)
        })
        .collect()
}

/// (x, y, x weight, y weight): each vertex moves by weight * sin²(t) / 10
const SWAN_SHAPE: [(f32, f32, f32, f32); 63] = [
    // Head and neck
    (-0.6, 0.2, 0.0, 0.0),
    (-0.6, 0.3, 0.0, 0.0),
    (-0.5, 0.4, 0.0, 0.0),
    (-0.6, 0.2, 0.0, 0.0),
    (-0.5, 0.1, 0.0, 0.0),
    (-0.5, 0.4, 0.0, 0.0),
    (-0.5, 0.1, 0.0, 0.0),
    (-0.5, 0.4, 0.0, 0.0),
    (-0.4, 0.4, 0.0, 0.0),
    (-0.5, 0.1, 0.0, 0.0),
    (-0.4, 0.4, 0.0, 0.0),
    (-0.4, 0.1, 0.0, 0.0),
    (-0.4, 0.1, 0.0, 0.0),
    (-0.3, 0.2, 0.0, 0.0),
    (-0.4, 0.4, 0.0, 0.0),
    (-0.3, 0.2, 0.0, 0.0),
    (-0.3, 0.3, 0.0, 0.0),
    (-0.4, 0.4, 0.0, 0.0),
    // Body
    (-0.5, 0.1, 0.0, 0.0),
    (-0.4, 0.1, 0.0, 0.0),
    (-0.4, -0.1, 0.0, 0.0),
    (-0.5, 0.1, 0.0, 0.0),
    (-0.4, -0.1, 0.0, 0.0),
    (-0.5, -0.1, 0.0, 0.0),
    // Feet
    (-0.5, -0.1, 0.0, 0.0),
    (-0.5, -0.4, -1.0, 0.0),
    (-0.6, -0.4, 0.0, 1.0),
    (-0.4, -0.1, 0.0, 0.0),
    (-0.4, -0.4, 1.0, 0.0),
    (-0.3, -0.4, 0.0, 1.0),
    // Wing
    (-0.4, 0.1, 0.0, 0.0),
    (-0.2, 0.0, 0.0, -1.0),
    (-0.2, 0.1, 0.0, -1.0),
    // Tail
    (-0.5, 0.1, 0.0, 0.0),
    (-0.6, -0.1, 0.0, 0.0),
    (-0.7, -0.1, 0.0, 0.0),
    // Reflection
    (-0.3, -0.2, 0.0, -1.0),
    (-0.3, -0.1, 0.0, -1.0),
    (-0.2, 0.0, 0.0, -1.0),
    (-0.3, -0.2, 0.0, -1.0),
    (-0.2, -0.3, 0.0, -1.0),
    (-0.2, 0.0, 0.0, -1.0),
    (-0.2, -0.3, 0.0, -1.0),
    (-0.2, 0.0, 0.0, -1.0),
    (-0.1, 0.0, 0.0, -1.0),
    (-0.2, -0.3, 0.0, -1.0),
    (-0.1, 0.0, 0.0, -1.0),
    (-0.1, -0.3, 0.0, -1.0),
    (-0.1, -0.3, 0.0, -1.0),
    (0.0, -0.2, 0.0, -1.0),
    (-0.1, 0.0, 0.0, -1.0),
    (0.0, -0.2, 0.0, -1.0),
    (0.0, -0.1, 0.0, -1.0),
    (-0.1, 0.0, 0.0, -1.0),
    // Beak
    (-0.2, 0.2, 0.0, 0.0),
    (-0.3, 0.2, 0.0, 0.0),
    (-0.3, 0.3, 0.0, 0.0),
    // Eye
    (-0.4, 0.31, 0.0, 0.0),
    (-0.4, 0.29, 0.0, 0.0),
    (-0.41, 0.3, 0.0, 0.0),
    (-0.4, 0.31, 0.0, 0.0),
    (-0.4, 0.29, 0.0, 0.0),
    (-0.39, 0.3, 0.0, 0.0),
];

pub const SWAN_VERTEX_COUNT: usize = SWAN_SHAPE.len();

// Color bands in SWAN_SHAPE order
const SWAN_BODY_END: usize = 36;
const SWAN_REFLECTION_END: usize = 54;
const SWAN_BEAK_END: usize = 57;

/// Swan vertices (clip space, triangle list) at `time` seconds
pub fn swan_vertices(time: f32) -> Vec<Vec3> {
    let s = time.sin().powi(2) * 0.1;
    SWAN_SHAPE
        .iter()
        .map(|&(x, y, kx, ky)| Vec3::new(x + kx * s, y + ky * s, 0.0))
        .collect()
}

/// White body, shimmering reflection, orange beak, black eye
pub fn swan_colors(time: f32) -> Vec<[f32; 4]> {
    let (s, c) = time.sin_cos();
    let shimmer = [c * c, s * s, s * s, 1.0];
    (0..SWAN_VERTEX_COUNT)
        .map(|i| match i {
            _ if i < SWAN_BODY_END => WHITE,
            _ if i < SWAN_REFLECTION_END => shimmer,
            _ if i < SWAN_BEAK_END => LOGO_COLOR,
            _ => BLACK,
        })
        .collect()
}

/// Rotation angle state for the logo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoAnimation {
    pub shape: LogoShape,
    /// Current angle in degrees, [0, 360]
    pub angle: f32,
    /// Degrees per second
    pub speed: f32,
}

impl Default for LogoAnimation {
    fn default() -> Self {
        Self {
            shape: LogoShape::I,
            angle: 0.0,
            speed: LOGO_SPEED,
        }
    }
}

impl LogoAnimation {
    pub fn new(shape: LogoShape, speed: f32) -> Self {
        Self {
            shape,
            angle: 0.0,
            speed,
        }
    }

    /// Advance by `dt` seconds; the angle snaps back to 0 once it passes 360
    pub fn advance(&mut self, dt: f32) {
        if !dt.is_finite() {
            return;
        }
        self.angle += self.speed * dt;
        if self.angle > 360.0 || self.angle < 0.0 {
            self.angle = 0.0;
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        match self.shape {
            LogoShape::I => self.spin_matrix(),
            LogoShape::Swan => Mat4::from_translation(Vec3::new(self.angle / 360.0, 0.0, 0.0)),
        }
    }

    /// Slide left while shrinking for the first half turn, then come back
    /// from the right while growing; spin about Z the whole time.
    fn spin_matrix(&self) -> Mat4 {
        let a = self.angle;
        let (offset, scale) = if a <= 180.0 {
            (-a / 360.0, 1.2 * (1.0 - a / 360.0))
        } else {
            ((a - 360.0) / 360.0, 1.2 * a / 360.0)
        };

        Mat4::from_translation(Vec3::new(offset, 0.2, 0.0))
            * Mat4::from_scale(Vec3::new(scale, scale, 1.0))
            * Mat4::from_rotation_z(deg_to_rad(a))
    }
}
