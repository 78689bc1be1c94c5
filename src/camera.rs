//! Flythrough camera for the terrain demo
//!
//! The camera always moves forward; the pilot only steers (pitch and roll)
//! and changes speed. One update per rendered frame.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::{CAMERA_SPEED, CAMERA_SPEED_STEP, CAMERA_START, CAMERA_TURN_DEGREES, CAMERA_VIEW_DIR};
use crate::deg_to_rad;

/// Held controls for one frame
#[derive(Debug, Clone, Default)]
pub struct FlightInput {
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    pub speed_up: bool,
    pub speed_down: bool,
    /// Return to the starting pose and speed
    pub reset: bool,
}

/// Tunables for the flythrough
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightSettings {
    pub start: Vec3,
    /// View direction before any rotation (need not be unit length)
    pub view_dir: Vec3,
    /// Distance flown per frame
    pub speed: f32,
    pub speed_step: f32,
    /// Degrees turned per frame while a control is held
    pub turn_degrees: f32,
}

impl Default for FlightSettings {
    fn default() -> Self {
        Self {
            start: CAMERA_START,
            view_dir: CAMERA_VIEW_DIR,
            speed: CAMERA_SPEED,
            speed_step: CAMERA_SPEED_STEP,
            turn_degrees: CAMERA_TURN_DEGREES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FlightCamera {
    pub settings: FlightSettings,
    pub position: Vec3,
    pub orientation: Quat,
    pub speed: f32,
}

impl FlightCamera {
    pub fn new(settings: FlightSettings) -> Self {
        Self {
            settings,
            position: settings.start,
            orientation: Quat::IDENTITY,
            speed: settings.speed,
        }
    }

    /// Back to the starting pose
    pub fn reset(&mut self) {
        self.position = self.settings.start;
        self.orientation = Quat::IDENTITY;
        self.speed = self.settings.speed;
    }

    /// Apply one frame of controls, then fly forward
    pub fn update(&mut self, input: &FlightInput) {
        let s = self.settings;

        if input.speed_up {
            self.speed += s.speed_step;
        }
        if input.speed_down {
            self.speed = (self.speed - s.speed_step).max(0.0);
        }
        if input.reset {
            self.reset();
        }

        let mut pitch = 0.0;
        let mut roll = 0.0;
        if input.pitch_up {
            pitch += s.turn_degrees;
        }
        if input.pitch_down {
            pitch -= s.turn_degrees;
        }
        if input.roll_left {
            roll -= s.turn_degrees;
        }
        if input.roll_right {
            roll += s.turn_degrees;
        }

        // x = pitch, y = roll (the view looks mostly along +Y), no yaw
        let delta = Quat::from_euler(EulerRot::ZYX, 0.0, deg_to_rad(roll), deg_to_rad(pitch));
        self.orientation = (self.orientation * delta).normalize();

        self.position += self.forward() * self.speed;
    }

    /// Unit direction the camera is flying in
    pub fn forward(&self) -> Vec3 {
        (self.orientation * self.settings.view_dir).normalize_or_zero()
    }

    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Right-handed look-at view matrix
    pub fn view_matrix(&self) -> Mat4 {
        let target = self.position + self.orientation * self.settings.view_dir;
        Mat4::look_at_rh(self.position, target, self.up())
    }
}

impl Default for FlightCamera {
    fn default() -> Self {
        Self::new(FlightSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_flight_moves_forward() {
        let mut cam = FlightCamera::default();
        cam.update(&FlightInput::default());

        let dir = CAMERA_VIEW_DIR.normalize();
        let expected = CAMERA_START + dir * CAMERA_SPEED;
        assert!((cam.position - expected).length() < 1e-6);
        assert!(cam.orientation.abs_diff_eq(Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn test_speed_controls() {
        let mut cam = FlightCamera::default();
        let faster = FlightInput {
            speed_up: true,
            ..Default::default()
        };
        cam.update(&faster);
        assert!((cam.speed - (CAMERA_SPEED + CAMERA_SPEED_STEP)).abs() < 1e-9);

        let slower = FlightInput {
            speed_down: true,
            ..Default::default()
        };
        for _ in 0..10 {
            cam.update(&slower);
        }
        assert_eq!(cam.speed, 0.0);
    }

    #[test]
    fn test_pitch_tilts_view() {
        let mut cam = FlightCamera::default();
        let up = FlightInput {
            pitch_up: true,
            ..Default::default()
        };
        let before = cam.forward();
        for _ in 0..30 {
            cam.update(&up);
        }
        let after = cam.forward();
        // Rotating about +X raises a +Y-facing view
        assert!(after.z > before.z);
        assert!((after.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_roll_turns_about_view_axis() {
        let mut cam = FlightCamera::default();
        let roll = FlightInput {
            roll_right: true,
            ..Default::default()
        };
        let before = cam.forward();
        for _ in 0..45 {
            cam.update(&roll);
        }
        let after = cam.forward();
        // Rolling about +Y keeps the y component and swings the dip sideways
        assert!((after.y - before.y).abs() < 1e-4);
        assert!(after.x.abs() > 0.1);
        assert!(cam.up().abs_diff_eq(Vec3::Y, 1e-5));
    }

    #[test]
    fn test_reset_restores_start() {
        let mut cam = FlightCamera::default();
        let input = FlightInput {
            pitch_up: true,
            roll_left: true,
            speed_up: true,
            ..Default::default()
        };
        for _ in 0..20 {
            cam.update(&input);
        }
        cam.update(&FlightInput {
            reset: true,
            ..Default::default()
        });
        assert!(cam.orientation.abs_diff_eq(Quat::IDENTITY, 1e-6));
        assert_eq!(cam.speed, CAMERA_SPEED);
        // Reset happens before this frame's forward motion
        let expected = CAMERA_START + CAMERA_VIEW_DIR.normalize() * CAMERA_SPEED;
        assert!((cam.position - expected).length() < 1e-6);
    }

    #[test]
    fn test_view_matrix_looks_forward() {
        let cam = FlightCamera::default();
        let view = cam.view_matrix();
        let ahead = cam.position + cam.forward();
        // In view space the camera looks down -Z
        let p = view.transform_point3(ahead);
        assert!(p.z < 0.0);
        assert!(p.x.abs() < 1e-5);
    }
}
