use wgpu::{BindGroup, Buffer, Device, Queue, RenderPipeline, Surface, SurfaceConfiguration};
use winit::keyboard::KeyCode;

use crate::camera::{CameraUniform, FlyCamera, InputSnapshot, cursor_offset};
use crate::texture::DepthTexture;

pub struct GpuContext {
    pub surface: Surface<'static>,
    pub device: Device,
    pub queue: Queue,
    pub config: SurfaceConfiguration,
    pub render_pipeline: RenderPipeline,
    pub depth: DepthTexture,
}

pub struct CameraBuffers {
    pub fly: FlyCamera,
    pub uniform: CameraUniform,
    pub uniform_buffer: Buffer,
    pub uniform_bind_group: BindGroup,
}

pub struct GeometryBuffers {
    pub vertex: Buffer,
    pub index: Buffer,
    pub count: u32,
}

/// Held keys and the last cursor position in physical pixels.
#[derive(Debug, Default)]
pub struct InputState {
    pub mouse_pos: [f32; 2],
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl InputState {
    /// Records a key transition. Returns false for keys the camera ignores.
    pub fn set_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let slot = match key {
            KeyCode::KeyW => &mut self.forward,
            KeyCode::KeyS => &mut self.backward,
            KeyCode::KeyA => &mut self.left,
            KeyCode::KeyD => &mut self.right,
            KeyCode::Space => &mut self.up,
            KeyCode::ShiftLeft => &mut self.down,
            _ => return false,
        };
        *slot = pressed;
        true
    }

    pub fn release_all(&mut self) {
        *self = Self {
            mouse_pos: self.mouse_pos,
            ..Self::default()
        };
    }

    pub fn snapshot(&self, framebuffer_size: (f32, f32)) -> InputSnapshot {
        InputSnapshot {
            forward: self.forward,
            backward: self.backward,
            left: self.left,
            right: self.right,
            up: self.up,
            down: self.down,
            cursor: cursor_offset(self.mouse_pos, framebuffer_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector2;

    #[test]
    fn test_key_bindings() {
        let mut input = InputState::default();
        assert!(input.set_key(KeyCode::KeyW, true));
        assert!(input.set_key(KeyCode::ShiftLeft, true));
        assert!(!input.set_key(KeyCode::KeyQ, true));

        let snapshot = input.snapshot((100.0, 100.0));
        assert!(snapshot.forward && snapshot.down);
        assert!(!snapshot.backward && !snapshot.up && !snapshot.left && !snapshot.right);

        input.set_key(KeyCode::KeyW, false);
        assert!(!input.snapshot((100.0, 100.0)).forward);
    }

    #[test]
    fn test_snapshot_normalizes_cursor() {
        let input = InputState {
            mouse_pos: [150.0, 25.0],
            ..Default::default()
        };
        let snapshot = input.snapshot((200.0, 100.0));
        assert_eq!(snapshot.cursor, Vector2::new(0.5, 0.5));
    }

    #[test]
    fn test_release_all_keeps_cursor() {
        let mut input = InputState::default();
        input.mouse_pos = [10.0, 20.0];
        input.set_key(KeyCode::KeyD, true);
        input.set_key(KeyCode::Space, true);
        input.release_all();
        assert!(!input.right && !input.up);
        assert_eq!(input.mouse_pos, [10.0, 20.0]);
    }
}
