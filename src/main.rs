//! Terrain Arena entry point
//!
//! Native: builds a terrain and runs the bouncing-spheres world headless,
//! logging what happened. An optional argument names a settings JSON file.
//! Browser: the library's `platform::web` bindings are the entry point.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use terrain_arena::camera::{FlightCamera, FlightInput};
    use terrain_arena::consts::MAX_FRAME_DT;
    use terrain_arena::logo::LogoAnimation;
    use terrain_arena::sim::{PhysicsWorld, TickInput, tick};
    use terrain_arena::terrain::TerrainState;
    use terrain_arena::{ConfigResult, Settings};

    /// Simulated frames (two minutes at 60 Hz)
    const FRAMES: u32 = 60 * 120;
    const FRAME_DT: f32 = 1.0 / 60.0;

    pub fn run() -> ConfigResult<()> {
        let path = std::env::args().nth(1).map(PathBuf::from);
        let settings = Settings::load_from(path.as_deref())?;

        let terrain = TerrainState::new(&settings.terrain, settings.terrain_seed)?;
        log::info!(
            "Terrain ready: {} vertices, elevation [{:.4}, {:.4}]",
            terrain.mesh().vertex_count(),
            terrain.min_elevation(),
            terrain.max_elevation()
        );

        let mut camera = FlightCamera::new(settings.flight);
        for _ in 0..FRAMES {
            camera.update(&FlightInput::default());
        }
        log::info!("Camera after {} frames at {:?}", FRAMES, camera.position);

        let mut logo = LogoAnimation::new(settings.logo_shape, settings.logo_speed);
        for _ in 0..FRAMES {
            logo.advance(FRAME_DT);
        }
        log::info!(
            "Logo ({}) angle after {} frames: {:.1}",
            logo.shape.as_str(),
            FRAMES,
            logo.angle
        );

        let mut world = PhysicsWorld::new(settings.physics, settings.pool, settings.physics_seed)?;
        let idle = TickInput::default();
        let spawn = TickInput {
            spawn: true,
            ..Default::default()
        };
        for frame in 0..FRAMES {
            // Hold the spawn key for the first second
            let input = if frame < 60 { &spawn } else { &idle };
            tick(&mut world, input, FRAME_DT.min(MAX_FRAME_DT));
            if frame % 600 == 0 {
                log::debug!(
                    "frame {}: {} spheres, {} resting",
                    frame,
                    world.active_count(),
                    world.resting_count()
                );
            }
        }
        log::info!(
            "Physics after {} ticks: {} of {} spheres at rest",
            world.time_ticks,
            world.resting_count(),
            world.active_count()
        );

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Terrain Arena (native) starting...");

    if let Err(e) = native::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
