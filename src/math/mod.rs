mod matrix;
mod vector;

pub use matrix::{Matrix, Matrix2, Matrix3, Matrix4};
pub use vector::{Vector, Vector2, Vector3, Vector4};

pub const PI: f32 = std::f32::consts::PI;

/// Perspective projection with the camera looking down +Z. Clip-space depth
/// spans `[-w, w]` between the near and far planes.
///
/// `fov` is the vertical field of view in radians. Nothing is validated:
/// `near == far` or a zero `aspect_ratio` produce non-finite entries.
pub fn perspective_projection(fov: f32, aspect_ratio: f32, near: f32, far: f32) -> Matrix4 {
    let d = 1.0 / (fov * 0.5).tan();

    #[rustfmt::skip]
    let result = Matrix4::new(
        d / aspect_ratio, 0.0, 0.0, 0.0,
        0.0, d, 0.0, 0.0,
        0.0, 0.0, (far + near) / (far - near), 1.0,
        0.0, 0.0, -2.0 * far * near / (far - near), 0.0,
    );

    result
}

pub fn translation(x: f32, y: f32, z: f32) -> Matrix4 {
    #[rustfmt::skip]
    let result = Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        x, y, z, 1.0,
    );

    result
}

/// Rotation about the Y axis (yaw), angle in radians.
pub fn rotation_y(angle: f32) -> Matrix4 {
    let (sin, cos) = angle.sin_cos();

    #[rustfmt::skip]
    let result = Matrix4::new(
        cos, 0.0, -sin, 0.0,
        0.0, 1.0, 0.0, 0.0,
        sin, 0.0, cos, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    result
}

/// Rotation about the X axis (pitch), angle in radians.
pub fn rotation_x(angle: f32) -> Matrix4 {
    let (sin, cos) = angle.sin_cos();

    #[rustfmt::skip]
    let result = Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, cos, -sin, 0.0,
        0.0, sin, cos, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    result
}
