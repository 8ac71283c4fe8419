use crate::app_state::State;

impl State {
    /// Advances the camera one frame and uploads the new `u_projection`.
    pub fn update(&mut self) {
        let framebuffer_size = (
            self.gpu.config.width as f32,
            self.gpu.config.height as f32,
        );
        let snapshot = self.input.snapshot(framebuffer_size);
        let view_projection = self.camera.fly.frame(&snapshot, self.aspect_ratio());

        self.camera.uniform.update_projection(&view_projection);
        self.gpu.queue.write_buffer(
            &self.camera.uniform_buffer,
            0,
            bytemuck::cast_slice(&[self.camera.uniform]),
        );
    }
}
