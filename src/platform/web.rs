//! Browser bindings
//!
//! Each demo is a JS class owning its core state. Buffers are copied out as
//! typed arrays once per call; configuration errors become JS exceptions.

use js_sys::{Float32Array, Uint32Array};
use wasm_bindgen::prelude::*;

use crate::camera::{FlightCamera, FlightInput};
use crate::consts::MAX_FRAME_DT;
use crate::logo::{LogoAnimation, LogoShape};
use crate::renderer::{logo_mesh, sphere_instances};
use crate::settings::Settings;
use crate::sim::{PhysicsWorld, TickInput, tick};
use crate::terrain::TerrainState;
use crate::{ConfigError, RenderMode};

fn to_js(e: ConfigError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Explicit JSON wins; otherwise whatever LocalStorage holds
fn resolve_settings(json: Option<String>) -> Result<Settings, JsValue> {
    match json {
        Some(json) => Settings::from_json(&json).map_err(to_js),
        None => Ok(Settings::load()),
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }
    log::info!("Terrain Arena {} ready", env!("CARGO_PKG_VERSION"));
}

/// Persist settings JSON to LocalStorage
#[wasm_bindgen(js_name = saveSettings)]
pub fn save_settings(json: &str) -> Result<(), JsValue> {
    Settings::from_json(json).map_err(to_js)?.save().map_err(to_js)
}

/// Current settings (stored or default) as JSON
#[wasm_bindgen(js_name = loadSettings)]
pub fn load_settings() -> Result<String, JsValue> {
    Settings::load().to_json().map_err(to_js)
}

#[wasm_bindgen]
pub struct TerrainDemo {
    terrain: TerrainState,
    render_mode: RenderMode,
    fog: bool,
}

#[wasm_bindgen]
impl TerrainDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Result<TerrainDemo, JsValue> {
        let settings = resolve_settings(settings_json)?;
        let terrain = TerrainState::new(&settings.terrain, settings.terrain_seed).map_err(to_js)?;
        Ok(Self {
            terrain,
            render_mode: settings.render_mode,
            fog: settings.fog,
        })
    }

    pub fn positions(&self) -> Float32Array {
        Float32Array::from(self.terrain.position_data())
    }

    pub fn normals(&self) -> Float32Array {
        Float32Array::from(self.terrain.normal_data())
    }

    pub fn faces(&self) -> Uint32Array {
        Uint32Array::from(self.terrain.face_data())
    }

    pub fn edges(&self) -> Uint32Array {
        Uint32Array::from(self.terrain.edge_data())
    }

    #[wasm_bindgen(getter, js_name = minElevation)]
    pub fn min_elevation(&self) -> f32 {
        self.terrain.min_elevation()
    }

    #[wasm_bindgen(getter, js_name = maxElevation)]
    pub fn max_elevation(&self) -> f32 {
        self.terrain.max_elevation()
    }

    #[wasm_bindgen(getter, js_name = drawFaces)]
    pub fn draw_faces(&self) -> bool {
        self.render_mode.draws_faces()
    }

    #[wasm_bindgen(getter, js_name = drawEdges)]
    pub fn draw_edges(&self) -> bool {
        self.render_mode.draws_edges()
    }

    /// Accepts "polygon", "wirepoly" or "wireframe"
    #[wasm_bindgen(js_name = setRenderMode)]
    pub fn set_render_mode(&mut self, mode: &str) -> bool {
        match RenderMode::from_str(mode) {
            Some(m) => {
                self.render_mode = m;
                true
            }
            None => false,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn fog(&self) -> bool {
        self.fog
    }

    #[wasm_bindgen(setter)]
    pub fn set_fog(&mut self, fog: bool) {
        self.fog = fog;
    }
}

#[wasm_bindgen]
pub struct BounceDemo {
    world: PhysicsWorld,
}

#[wasm_bindgen]
impl BounceDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Result<BounceDemo, JsValue> {
        let settings = resolve_settings(settings_json)?;
        let world = PhysicsWorld::new(settings.physics, settings.pool, settings.physics_seed).map_err(to_js)?;
        Ok(Self { world })
    }

    /// One frame: apply the held keys, then step by `dt` seconds (capped)
    pub fn tick(&mut self, dt: f32, spawn: bool, clear: bool) {
        let input = TickInput { spawn, clear };
        tick(&mut self.world, &input, dt.min(MAX_FRAME_DT));
    }

    pub fn reset(&mut self) {
        self.world.reset();
    }

    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.world.active_count()
    }

    #[wasm_bindgen(getter, js_name = restingCount)]
    pub fn resting_count(&self) -> usize {
        self.world.resting_count()
    }

    /// 20 floats per live sphere: column-major model matrix, then RGBA
    pub fn instances(&self) -> Float32Array {
        let instances = sphere_instances(&self.world);
        Float32Array::from(bytemuck::cast_slice::<_, f32>(&instances))
    }

    /// xyz per live sphere
    pub fn positions(&self) -> Float32Array {
        let data: Vec<f32> = self.world.spheres().iter().flat_map(|s| s.pos.to_array()).collect();
        Float32Array::from(data.as_slice())
    }

    pub fn radii(&self) -> Float32Array {
        let data: Vec<f32> = self.world.spheres().iter().map(|s| s.radius).collect();
        Float32Array::from(data.as_slice())
    }
}

#[wasm_bindgen]
pub struct FlightDemo {
    camera: FlightCamera,
}

#[wasm_bindgen]
impl FlightDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Result<FlightDemo, JsValue> {
        let settings = resolve_settings(settings_json)?;
        Ok(Self {
            camera: FlightCamera::new(settings.flight),
        })
    }

    /// One frame of held controls
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        pitch_up: bool,
        pitch_down: bool,
        roll_left: bool,
        roll_right: bool,
        speed_up: bool,
        speed_down: bool,
        reset: bool,
    ) {
        let input = FlightInput {
            pitch_up,
            pitch_down,
            roll_left,
            roll_right,
            speed_up,
            speed_down,
            reset,
        };
        self.camera.update(&input);
    }

    /// Column-major 4x4
    #[wasm_bindgen(js_name = viewMatrix)]
    pub fn view_matrix(&self) -> Float32Array {
        Float32Array::from(&self.camera.view_matrix().to_cols_array()[..])
    }

    pub fn position(&self) -> Float32Array {
        Float32Array::from(&self.camera.position.to_array()[..])
    }

    #[wasm_bindgen(getter)]
    pub fn speed(&self) -> f32 {
        self.camera.speed
    }
}

#[wasm_bindgen]
pub struct LogoDemo {
    logo: LogoAnimation,
    time: f32,
}

#[wasm_bindgen]
impl LogoDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Result<LogoDemo, JsValue> {
        let settings = resolve_settings(settings_json)?;
        Ok(Self {
            logo: LogoAnimation::new(settings.logo_shape, settings.logo_speed),
            time: 0.0,
        })
    }

    pub fn advance(&mut self, dt: f32) {
        let dt = dt.min(MAX_FRAME_DT);
        self.time += dt;
        self.logo.advance(dt);
    }

    /// 7 floats per vertex: xyz, then RGBA
    pub fn vertices(&self) -> Float32Array {
        let verts = logo_mesh(self.logo.shape, self.time);
        Float32Array::from(bytemuck::cast_slice::<_, f32>(&verts))
    }

    #[wasm_bindgen(js_name = modelMatrix)]
    pub fn model_matrix(&self) -> Float32Array {
        Float32Array::from(&self.logo.model_matrix().to_cols_array()[..])
    }

    #[wasm_bindgen(getter)]
    pub fn angle(&self) -> f32 {
        self.logo.angle
    }

    #[wasm_bindgen(getter)]
    pub fn shape(&self) -> String {
        self.logo.shape.as_str().to_string()
    }

    /// Accepts "i" or "swan"; the angle restarts on a change
    #[wasm_bindgen(js_name = setShape)]
    pub fn set_shape(&mut self, shape: &str) -> bool {
        match LogoShape::from_str(shape) {
            Some(s) => {
                if s != self.logo.shape {
                    self.logo = LogoAnimation::new(s, self.logo.speed);
                }
                true
            }
            None => false,
        }
    }
}
