use crate::app_state::State;
use crate::texture::DepthTexture;

use winit::event::*;
use winit::keyboard::PhysicalKey;

impl State {
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.gpu.config.width = new_size.width;
            self.gpu.config.height = new_size.height;
            self.gpu
                .surface
                .configure(&self.gpu.device, &self.gpu.config);
            self.gpu.depth = DepthTexture::new(&self.gpu.device, &self.gpu.config);
        }
    }

    /// Feeds a window event into the input state. Returns true when consumed.
    pub fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.input.mouse_pos = [position.x as f32, position.y as f32];
                true
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => self.input.set_key(*code, *state == ElementState::Pressed),
            WindowEvent::Focused(false) => {
                self.input.release_all();
                false
            }
            _ => false,
        }
    }
}
