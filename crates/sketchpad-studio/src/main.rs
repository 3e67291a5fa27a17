mod app;
mod config;
mod controls;

use sketchpad_engine::device::GpuInit;
use sketchpad_engine::logging::{init_logging, LoggingConfig};
use sketchpad_engine::window::Runtime;

use crate::app::SketchApp;
use crate::config::{runtime_config, CanvasConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    log::info!(
        "keys: 1-4 shape, R/G/B (+Shift) color, Up/Down size, Left/Right segments, \
         C clear, P cat face, Esc quit"
    );

    let app = SketchApp::new(CanvasConfig::default());

    if let Err(e) = Runtime::run(runtime_config(), GpuInit::default(), app) {
        log::error!("sketchpad stopped: {e:#}");
        return Err(e);
    }

    Ok(())
}
