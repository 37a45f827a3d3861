use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::math::EulerRot;
use bevy::prelude::*;
use constants::render_settings::{
    CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, CAMERA_START_POSITION,
};

/// Orbit camera state: the camera circles `focus_point` at `distance`.
#[derive(Resource, Debug, Clone)]
pub struct ViewportCamera {
    pub focus_point: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl ViewportCamera {
    /// Orbit that reproduces a camera placed at `position` looking at `focus_point`.
    pub fn looking_at(position: Vec3, focus_point: Vec3) -> Self {
        let offset = position - focus_point;
        let distance = offset.length().clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
        let direction = offset.normalize_or(Vec3::Z);

        Self {
            focus_point,
            distance,
            yaw: direction.x.atan2(direction.z),
            pitch: -direction.y.asin(),
        }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Camera transform for the current orbit.
    pub fn target_transform(&self) -> Transform {
        let rotation = self.rotation();
        Transform {
            translation: self.focus_point + rotation * Vec3::Z * self.distance,
            rotation,
            ..default()
        }
    }

    pub fn orbit(&mut self, delta: Vec2) {
        let yaw_sens = 0.0035;
        let pitch_sens = 0.0030;
        self.yaw -= delta.x * yaw_sens;
        self.pitch = (self.pitch - delta.y * pitch_sens).clamp(-1.55, 1.55);
    }

    /// Scale the orbit distance; positive `amount` moves closer.
    pub fn zoom(&mut self, amount: f32) {
        self.distance =
            (self.distance * (1.0 - amount * 0.1)).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self::looking_at(CAMERA_START_POSITION, Vec3::ZERO)
    }
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut viewport_camera: ResMut<ViewportCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    // Left drag orbits around the focus point
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        viewport_camera.orbit(mouse_delta);
    }

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        viewport_camera.zoom(scroll_accum);
    }

    // Keyboard movement of the focus point
    let mut move_input = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) { move_input.z -= 1.0; }
    if keyboard.pressed(KeyCode::KeyS) { move_input.z += 1.0; }
    if keyboard.pressed(KeyCode::KeyD) { move_input.x += 1.0; }
    if keyboard.pressed(KeyCode::KeyA) { move_input.x -= 1.0; }
    if keyboard.pressed(KeyCode::KeyE) { move_input.y += 1.0; } // Up
    if keyboard.pressed(KeyCode::KeyQ) { move_input.y -= 1.0; } // Down

    if move_input != Vec3::ZERO {
        let view_rot = viewport_camera.rotation();
        let forward = (view_rot * Vec3::Z).normalize();
        let right = (view_rot * Vec3::X).normalize();

        // Shift = faster, ctrl = slower
        let mut speed = (viewport_camera.distance * 0.5).clamp(0.5, 20.0);
        if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) { speed *= 3.5; }
        if keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]) { speed *= 0.25; }

        let world_delta = right * move_input.x + Vec3::Y * move_input.y + forward * move_input.z;
        viewport_camera.focus_point += world_delta.normalize() * speed * time.delta_secs();
    }

    let target = viewport_camera.target_transform();
    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target.translation, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target.rotation, lerp_speed);
}
