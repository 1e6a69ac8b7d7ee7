//! Shader compilation wrapper.
//!
//! Creates a WGSL module and applies the diagnostic policy: every message is
//! logged with its source position, and at least one error-kind message fails
//! the whole setup. Warnings alone do not abort.

use anyhow::{Result, bail};

/// Compiles `source` into a shader module, logging all diagnostics.
///
/// Retrieving compilation info is asynchronous under wgpu; like adapter and
/// device acquisition this is a one-time setup wait, so it is driven with
/// `pollster` rather than a runtime.
pub fn compile(device: &wgpu::Device, label: &str, source: &str) -> Result<wgpu::ShaderModule> {
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    let info = pollster::block_on(module.get_compilation_info());
    if info.messages.is_empty() {
        return Ok(module);
    }

    log::info!("shader compilation log for `{label}`:");

    let mut errors = 0usize;
    for msg in &info.messages {
        let (line, col) = msg
            .location
            .as_ref()
            .map(|loc| (loc.line_number, loc.line_position))
            .unwrap_or((0, 0));

        if msg.message_type == wgpu::CompilationMessageType::Error {
            errors += 1;
            log::error!("{line}:{col} - {}", msg.message);
        } else if msg.message_type == wgpu::CompilationMessageType::Warning {
            log::warn!("{line}:{col} - {}", msg.message);
        } else {
            log::info!("{line}:{col} - {}", msg.message);
        }
    }

    if errors > 0 {
        bail!("shader `{label}` failed to compile with {errors} error(s)");
    }

    Ok(module)
}
