use anyhow::Context;
use std::borrow::Cow;
use std::path::Path;

pub const CUBE_SHADER: &str = include_str!("../data/shaders/cube_shader.wgsl");

/// Shader text from `path`, or the built-in cube shader.
pub fn load_source(path: Option<&Path>) -> anyhow::Result<Cow<'static, str>> {
    match path {
        Some(path) => {
            let source = std::fs::read_to_string(path).with_context(|| {
                format!("failed to open shader source file '{}'", path.display())
            })?;
            log::info!("Loaded shader source from {}", path.display());
            Ok(Cow::Owned(source))
        }
        None => Ok(Cow::Borrowed(CUBE_SHADER)),
    }
}

/// Compiles WGSL into a module, turning validation failures into errors.
pub async fn compile(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> anyhow::Result<wgpu::ShaderModule> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    if let Some(error) = device.pop_error_scope().await {
        log::error!("Shader '{}' failed to compile:\n{}", label, error);
        anyhow::bail!("failed to compile shader '{}': {}", label, error);
    }

    Ok(module)
}

/// Builds a render pipeline from compiled modules, turning validation
/// failures (mismatched entry points, bindings or layouts) into errors.
pub async fn link(
    device: &wgpu::Device,
    descriptor: &wgpu::RenderPipelineDescriptor<'_>,
) -> anyhow::Result<wgpu::RenderPipeline> {
    let label = descriptor.label.unwrap_or("render pipeline");

    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let pipeline = device.create_render_pipeline(descriptor);

    if let Some(error) = device.pop_error_scope().await {
        log::error!("Pipeline '{}' failed to link:\n{}", label, error);
        anyhow::bail!("failed to link pipeline '{}': {}", label, error);
    }

    Ok(pipeline)
}
