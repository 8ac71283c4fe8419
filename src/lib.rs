mod app;
mod app_state;
#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
mod event_handler;
mod mesh;
mod renderer;
mod shader;
mod state;
mod texture;
mod update_logic;
mod vertex;

pub mod camera;
pub mod config;
pub mod math;

// Re-export the main public interface
pub use app::run;
pub use vertex::Vertex;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() {
    if let Err(e) = run().await {
        log::error!("{:#}", e);
    }
}
