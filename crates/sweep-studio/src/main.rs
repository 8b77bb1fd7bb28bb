//! Sweep: a rectangle gliding across the window at a constant speed,
//! independent of the frame rate, with a live FPS readout.

mod app;
mod gpu_canvas;

use anyhow::Result;

use sweep_anim::AnimationConfig;
use sweep_engine::device::GpuInit;
use sweep_engine::logging::{init_logging, LoggingConfig};
use sweep_engine::window::Runtime;

use crate::app::{runtime_config, SweepApp};

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = AnimationConfig::default();
    let runtime = runtime_config(&config);
    Runtime::run(runtime, GpuInit::default(), SweepApp::new(config))
}
