use bevy::input::mouse::MouseScrollUnit;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

use crate::constants::scene_layout::{
    CAMERA_INITIAL_DISTANCE, CAMERA_INITIAL_PITCH, CAMERA_INITIAL_YAW, CAMERA_MAX_DISTANCE,
    CAMERA_MAX_PITCH, CAMERA_MIN_DISTANCE, CAMERA_MIN_PITCH,
};

/// Orbit camera state: spherical coordinates around a fixed focus point.
#[derive(Resource)]
pub struct ViewportCamera {
    pub focus_point: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self {
            focus_point: Vec3::ZERO,
            yaw: CAMERA_INITIAL_YAW,
            pitch: CAMERA_INITIAL_PITCH,
            distance: CAMERA_INITIAL_DISTANCE,
        }
    }
}

impl ViewportCamera {
    /// Apply an orbit drag delta, clamping pitch to the allowed tilt range.
    pub fn orbit(&mut self, delta: Vec2) {
        let yaw_sens = 0.005;
        let pitch_sens = 0.005;
        self.yaw -= delta.x * yaw_sens;
        self.pitch += delta.y * pitch_sens;
        self.pitch = self.pitch.clamp(CAMERA_MIN_PITCH, CAMERA_MAX_PITCH);
    }

    /// Dolly towards or away from the focus, clamped to the distance range.
    pub fn zoom(&mut self, amount: f32) {
        let dolly_speed = self.distance * 0.1;
        self.distance = (self.distance - amount * dolly_speed)
            .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    /// Camera position derived from the current spherical coordinates.
    pub fn eye_position(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        self.focus_point
            + Vec3::new(
                horizontal * self.yaw.sin(),
                self.distance * self.pitch.sin(),
                horizontal * self.yaw.cos(),
            )
    }
}

/// Camera controller system: orbit on left-drag, dolly on scroll.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut viewport: ResMut<ViewportCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        viewport.orbit(mouse_delta);
    }

    // Mouse wheel scroll accumulation (line and pixel scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        viewport.zoom(scroll_accum);
    }

    *camera_transform = Transform::from_translation(viewport.eye_position())
        .looking_at(viewport.focus_point, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_is_clamped_to_distance_bounds() {
        let mut camera = ViewportCamera::default();
        for _ in 0..100 {
            camera.zoom(10.0);
        }
        assert_eq!(camera.distance, CAMERA_MIN_DISTANCE);
        for _ in 0..100 {
            camera.zoom(-10.0);
        }
        assert_eq!(camera.distance, CAMERA_MAX_DISTANCE);
    }

    #[test]
    fn pitch_never_drops_below_ground_plane() {
        let mut camera = ViewportCamera::default();
        for _ in 0..1000 {
            camera.orbit(Vec2::new(0.0, -50.0));
        }
        assert!(camera.pitch >= CAMERA_MIN_PITCH);
        assert!(camera.eye_position().y >= camera.focus_point.y);
    }

    #[test]
    fn pitch_is_capped_before_vertical() {
        let mut camera = ViewportCamera::default();
        for _ in 0..1000 {
            camera.orbit(Vec2::new(0.0, 50.0));
        }
        assert!(camera.pitch <= CAMERA_MAX_PITCH);
    }

    #[test]
    fn eye_position_keeps_configured_distance() {
        let mut camera = ViewportCamera::default();
        camera.orbit(Vec2::new(37.0, -12.0));
        let eye = camera.eye_position();
        assert!((eye.distance(camera.focus_point) - camera.distance).abs() < 1e-4);
    }
}
