pub mod advisor;
pub mod app;
pub mod demo;
pub mod render;
pub mod settings;
pub mod state;

use app::{App, GameHost};
use winit::event_loop::EventLoop;

fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .try_init();
}

/// Run a host's render loop until its window closes. Exiting the event loop
/// tears the repaint chain down with it; no pending frame callback survives
/// the window.
pub fn run<H: GameHost + 'static>(host: H) -> Result<(), winit::error::EventLoopError> {
    init_logging();

    log::info!("Starting renderer");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(host);

    let result = event_loop.run_app(&mut app);

    if let Err(ref err) = result {
        log::error!("Application error: {}", err);
    }

    log::info!("Shutdown complete");

    result
}
