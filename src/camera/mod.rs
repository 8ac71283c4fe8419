mod fly_camera;
mod uniform;

pub use fly_camera::{FlyCamera, InputSnapshot, cursor_offset};
pub use uniform::CameraUniform;
