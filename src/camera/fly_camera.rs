use crate::config::CameraConfig;
use crate::math::{
    Matrix4, Vector2, Vector3, Vector4, perspective_projection, rotation_x, rotation_y,
    translation,
};

/// Keys and cursor as read at the start of a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Normalized cursor offset in `[-1, 1]`, positive right and up.
    pub cursor: Vector2,
}

/// Maps a cursor position in framebuffer pixels to `[-1, 1]` on both axes,
/// with +y pointing up.
pub fn cursor_offset(cursor_px: [f32; 2], framebuffer_size: (f32, f32)) -> Vector2 {
    Vector2::new(
        2.0 * (cursor_px[0] / framebuffer_size.0) - 1.0,
        1.0 - 2.0 * (cursor_px[1] / framebuffer_size.1),
    )
}

/// First-person camera. Only the eye position persists between frames;
/// yaw and pitch come straight from the cursor offset each frame, so the
/// look-around range is bounded by the window extent.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    pub view_position: Vector3,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub move_step: f32,
}

impl FlyCamera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            view_position: Vector3::from(config.start_position),
            fov: config.fov,
            near: config.near,
            far: config.far,
            move_step: config.move_step,
        }
    }

    /// Moves the eye for one frame of input.
    pub fn update(&mut self, input: &InputSnapshot) {
        let mut movement = Vector4::zero();
        if input.forward {
            *movement.z_mut() += 1.0;
        }
        if input.backward {
            *movement.z_mut() -= 1.0;
        }
        if input.right {
            *movement.x_mut() += 1.0;
        }
        if input.left {
            *movement.x_mut() -= 1.0;
        }

        // The local vector is normalized before the yaw is applied.
        if !movement.is_zero() {
            let direction = rotation_y(input.cursor.x()) * movement.normalize();
            self.view_position += Vector3::new(direction.x(), 0.0, direction.z()) * self.move_step;
        }

        if input.up {
            *self.view_position.y_mut() += self.move_step;
        }
        if input.down {
            *self.view_position.y_mut() -= self.move_step;
        }
    }

    /// World to clip space: projection * pitch * yaw * translation.
    pub fn view_projection(&self, cursor: Vector2, aspect_ratio: f32) -> Matrix4 {
        let projection = perspective_projection(self.fov, aspect_ratio, self.near, self.far);
        let pitch = rotation_x(-cursor.y());
        let yaw = rotation_y(-cursor.x());
        let eye = translation(
            -self.view_position.x(),
            -self.view_position.y(),
            -self.view_position.z(),
        );

        projection * pitch * yaw * eye
    }

    pub fn frame(&mut self, input: &InputSnapshot, aspect_ratio: f32) -> Matrix4 {
        self.update(input);
        let view_projection = self.view_projection(input.cursor, aspect_ratio);
        log::trace!(
            "camera at {:?}, cursor {:?}",
            self.view_position.as_array(),
            input.cursor.as_array()
        );
        view_projection
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PI;

    fn assert_position(camera: &FlyCamera, expected: [f32; 3]) {
        for (i, e) in expected.iter().enumerate() {
            assert!(
                (camera.view_position[i] - e).abs() < 1e-5,
                "{:?} != {:?}",
                camera.view_position,
                expected
            );
        }
    }

    #[test]
    fn test_forward_one_frame() {
        let mut camera = FlyCamera::default();
        camera.update(&InputSnapshot {
            forward: true,
            ..Default::default()
        });
        assert_position(&camera, [0.0, 0.0, 0.08]);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut camera = FlyCamera::default();
        camera.update(&InputSnapshot {
            forward: true,
            backward: true,
            left: true,
            right: true,
            up: true,
            down: true,
            cursor: Vector2::new(0.3, -0.2),
        });
        assert_eq!(camera.view_position, Vector3::zero());
    }

    #[test]
    fn test_diagonal_movement_is_normalized() {
        let mut camera = FlyCamera::default();
        camera.update(&InputSnapshot {
            forward: true,
            right: true,
            ..Default::default()
        });
        let step = 0.08 / 2.0_f32.sqrt();
        assert_position(&camera, [step, 0.0, step]);
        assert!((camera.view_position.length() - 0.08).abs() < 1e-6);
    }

    #[test]
    fn test_yaw_follows_horizontal_cursor() {
        let mut camera = FlyCamera::default();
        camera.update(&InputSnapshot {
            forward: true,
            cursor: Vector2::new(PI / 4.0, 0.0),
            ..Default::default()
        });
        let step = 0.08 * (PI / 4.0).sin();
        assert_position(&camera, [step, 0.0, step]);
    }

    #[test]
    fn test_vertical_cursor_does_not_tilt_movement() {
        let mut camera = FlyCamera::default();
        camera.update(&InputSnapshot {
            backward: true,
            cursor: Vector2::new(0.0, 0.9),
            ..Default::default()
        });
        assert_position(&camera, [0.0, 0.0, -0.08]);
    }

    #[test]
    fn test_up_and_down() {
        let mut camera = FlyCamera::default();
        let up = InputSnapshot {
            up: true,
            ..Default::default()
        };
        camera.update(&up);
        camera.update(&up);
        assert_position(&camera, [0.0, 0.16, 0.0]);

        camera.update(&InputSnapshot {
            down: true,
            left: true,
            ..Default::default()
        });
        assert_position(&camera, [-0.08, 0.08, 0.0]);
    }

    #[test]
    fn test_custom_step_and_start() {
        let config = CameraConfig {
            move_step: 0.5,
            start_position: [1.0, 2.0, 3.0],
            ..Default::default()
        };
        let mut camera = FlyCamera::new(&config);
        camera.update(&InputSnapshot {
            right: true,
            ..Default::default()
        });
        assert_position(&camera, [1.5, 2.0, 3.0]);
    }

    #[test]
    fn test_view_projection_centres_point_ahead() {
        let mut camera = FlyCamera::default();
        let input = InputSnapshot {
            forward: true,
            ..Default::default()
        };
        let vp = camera.frame(&input, 1.5);

        // A point straight ahead of the eye projects onto the screen centre.
        let ahead = Vector4::new(0.0, 0.0, 4.0, 1.0);
        let clip = vp * ahead;
        assert!(clip.x().abs() < 1e-5);
        assert!(clip.y().abs() < 1e-5);
        assert!((clip.w() - (4.0 - 0.08)).abs() < 1e-5);
    }

    #[test]
    fn test_view_projection_matches_composition() {
        let camera = FlyCamera {
            view_position: Vector3::new(1.0, -2.0, 0.5),
            ..Default::default()
        };
        let cursor = Vector2::new(0.25, -0.5);
        let expected = perspective_projection(PI / 2.0, 2.0, 0.1, 100.0)
            * rotation_x(0.5)
            * rotation_y(-0.25)
            * translation(-1.0, 2.0, -0.5);
        assert_eq!(camera.view_projection(cursor, 2.0), expected);
    }

    #[test]
    fn test_cursor_offset() {
        let size = (800.0, 600.0);
        assert_eq!(cursor_offset([400.0, 300.0], size), Vector2::new(0.0, 0.0));
        assert_eq!(cursor_offset([0.0, 0.0], size), Vector2::new(-1.0, 1.0));
        assert_eq!(cursor_offset([800.0, 600.0], size), Vector2::new(1.0, -1.0));
    }
}
