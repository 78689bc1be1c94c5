//! Configuration errors
//!
//! Invalid grids, bounds and simulation parameters are rejected when a
//! terrain or world is built. Numerical trouble during a frame is corrected
//! in place instead and never surfaces here.

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("terrain needs at least 1 subdivision per axis (got {0})")]
    InvalidSubdivisions(u32),
    #[error("degenerate {axis} bounds [{min}, {max}]: range must be finite and positive")]
    DegenerateBounds { axis: &'static str, min: f32, max: f32 },
    #[error("a {div}x{div} grid has more vertices than a 32-bit index buffer can address")]
    GridTooLarge { div: u32 },
    #[error("invalid fault parameter `{name}`: {value}")]
    InvalidFaultParameter { name: &'static str, value: f32 },
    #[error("invalid physics parameter `{name}`: {value}")]
    InvalidPhysicsParameter { name: &'static str, value: f32 },
    #[error("arena half-width {half_width} cannot contain spheres of radius {radius}")]
    ArenaTooSmall { half_width: f32, radius: f32 },
    #[error("invalid sphere: {reason}")]
    InvalidSphere { reason: &'static str },
    #[error("settings storage unavailable: {0}")]
    Storage(String),
    #[error("invalid setting `{name}`: {value}")]
    InvalidSetting { name: &'static str, value: f32 },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
