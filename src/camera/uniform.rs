use crate::math::Matrix4;

/// Uniform block bound as `u_projection` in the cube shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    projection: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            projection: Matrix4::identity().into(),
        }
    }

    pub fn update_projection(&mut self, view_projection: &Matrix4) {
        self.projection = view_projection.to_cols_array_2d();
    }

    pub fn projection(&self) -> &[[f32; 4]; 4] {
        &self.projection
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::translation;

    #[test]
    fn test_uniform_bytes_are_column_major() {
        let mut uniform = CameraUniform::new();
        uniform.update_projection(&translation(1.0, 2.0, 3.0));

        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&uniform));
        assert_eq!(floats.len(), 16);
        assert_eq!(&floats[12..], &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(floats, translation(1.0, 2.0, 3.0).flat_data());
    }

    #[test]
    fn test_new_uniform_is_identity() {
        assert_eq!(*CameraUniform::new().projection(), Matrix4::identity().to_cols_array_2d());
    }
}
