//! Static triangle demo.
//!
//! One window, one pipeline, one mesh: clears to gray and draws a colored
//! triangle every frame the window is visible on screen.

use anyhow::Result;

use trigon_engine::core::{App, AppControl, FrameCtx};
use trigon_engine::device::GpuInit;
use trigon_engine::logging::{LoggingConfig, init_logging};
use trigon_engine::render::{CLEAR_COLOR, RenderCtx, TriangleRenderer};
use trigon_engine::window::{Runtime, RuntimeConfig};

#[derive(Default)]
struct TriangleApp {
    renderer: Option<TriangleRenderer>,
}

impl App for TriangleApp {
    fn on_ready(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        self.renderer = Some(TriangleRenderer::new(ctx)?);
        log::info!("triangle renderer ready");
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(renderer) = self.renderer.as_ref() else {
            return AppControl::Exit;
        };

        if ctx.time.frame_index % 600 == 0 {
            log::debug!("frame {} dt {:.4}s", ctx.time.frame_index, ctx.time.dt);
        }

        ctx.render(CLEAR_COLOR, |_rctx, target| renderer.render(target))
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "trigon triangle".to_string(),
        ..Default::default()
    };

    Runtime::run(config, GpuInit::default(), TriangleApp::default())
}
