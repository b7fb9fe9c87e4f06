//! Raster Pong entry point
//!
//! Sets up logging and settings, picks a platform and runs the frame loop.
//! Build with `--features sdl` for a real window; otherwise the game runs
//! headless for a fixed number of frames.

use std::process::ExitCode;

use raster_pong::Settings;
use raster_pong::app;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Raster Pong starting...");

    let settings = Settings::load();

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Fatal: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "sdl")]
fn run(settings: &Settings) -> anyhow::Result<()> {
    use raster_pong::consts::{WIN_HEIGHT, WIN_WIDTH};
    use raster_pong::platform::SdlPlatform;

    let mut platform = SdlPlatform::new(WIN_WIDTH as u32, WIN_HEIGHT as u32)?;
    app::run(&mut platform, settings);
    Ok(())
}

#[cfg(not(feature = "sdl"))]
fn run(settings: &Settings) -> anyhow::Result<()> {
    use raster_pong::platform::HeadlessPlatform;

    log::info!(
        "Built without the `sdl` feature - running headless for {} frames",
        settings.headless_frames
    );
    let mut platform = HeadlessPlatform::new(settings.headless_frames);
    app::run(&mut platform, settings);
    Ok(())
}
