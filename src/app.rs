// app.rs
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::*,
    event_loop::ActiveEventLoop,
    keyboard::{Key, KeyCode, NamedKey, PhysicalKey},
    window::{Window, WindowId},
};

use crate::render::{Gpu, SceneRenderer};
use crate::state::{FrameInput, GameState};

/// Host side of the render loop. The host owns and mutates game state; the
/// renderer only ever reads the snapshot it is handed. Raw pointer and key
/// events are forwarded without interpretation.
pub trait GameHost {
    fn title(&self) -> &str {
        "rusted"
    }

    /// Advance host-side simulation by `dt` seconds.
    fn update(&mut self, dt: f32);

    fn state(&self) -> &GameState;

    fn frame_input(&self) -> FrameInput;

    /// Pointer-down on the render surface, raw screen coordinates.
    fn on_action(&mut self, x: f64, y: f64) {
        let _ = (x, y);
    }

    fn on_key(&mut self, key: KeyCode, pressed: bool) {
        let _ = (key, pressed);
    }
}

pub struct App<H: GameHost> {
    host: H,
    window: Option<Window>,
    window_id: Option<WindowId>,
    gpu: Option<Gpu>,
    scene: SceneRenderer,
    started: Instant,
    last_frame: Instant,
    cursor: PhysicalPosition<f64>,
    screenshot_pending: bool,
}

impl<H: GameHost> App<H> {
    pub fn new(host: H) -> Self {
        let now = Instant::now();
        Self {
            host,
            window: None,
            window_id: None,
            gpu: None,
            scene: SceneRenderer::new(),
            started: now,
            last_frame: now,
            cursor: PhysicalPosition::new(0.0, 0.0),
            screenshot_pending: false,
        }
    }

}

fn save_screenshot(scene: &SceneRenderer) {
    let frame = scene.frame();
    if frame.width() == 0 {
        return;
    }
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = format!("screenshot-{stamp}.png");
    match image::save_buffer(
        &path,
        frame.data(),
        frame.width(),
        frame.height(),
        image::ExtendedColorType::Rgba8,
    ) {
        Ok(()) => log::info!("Saved {path}"),
        Err(err) => log::warn!("Failed to save screenshot: {err}"),
    }
}

impl<H: GameHost> ApplicationHandler for App<H> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let res = &self.host.state().settings.resolution;
            let window = event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title(self.host.title())
                        .with_inner_size(PhysicalSize::new(res.width, res.height)),
                )
                .expect("create window");
            let id = window.id();

            let gpu = pollster::block_on(Gpu::new(&window));

            self.window = Some(window);
            self.window_id = Some(id);
            self.gpu = Some(gpu);
            self.last_frame = Instant::now();

            if let Some(w) = &self.window {
                w.request_redraw();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if Some(id) != self.window_id {
            return;
        }

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                gpu.resize(size);
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(w) = &self.window {
                    gpu.resize(w.inner_size());
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = position;
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.host.on_action(self.cursor.x, self.cursor.y);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.logical_key == Key::Named(NamedKey::Escape)
                    && event.state == ElementState::Pressed
                {
                    event_loop.exit();
                    return;
                }
                if event.logical_key == Key::Named(NamedKey::F12)
                    && event.state == ElementState::Pressed
                {
                    self.screenshot_pending = true;
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    if !event.repeat {
                        self.host
                            .on_key(code, event.state == ElementState::Pressed);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                // Cap dt so a stall doesn't turn into a teleport.
                let dt = (now - self.last_frame).as_secs_f32().min(0.1);
                self.last_frame = now;

                self.host.update(dt);

                let size = self
                    .window
                    .as_ref()
                    .map(|w| w.inner_size())
                    .unwrap_or_else(|| gpu.size());
                let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
                let input = self.host.frame_input();
                let frame =
                    self.scene
                        .render(self.host.state(), &input, size.width, size.height, now_ms);

                match gpu.present(frame) {
                    Ok(()) => {
                        if self.screenshot_pending {
                            self.screenshot_pending = false;
                            save_screenshot(&self.scene);
                        }
                    }
                    // A lost or outdated surface skips this frame only; the
                    // next one reconfigures and carries on.
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        gpu.resize(size);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of surface memory, shutting down");
                        event_loop.exit();
                    }
                    Err(err) => {
                        log::warn!("Dropped a frame: {err:?}");
                    }
                }

                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }
            _ => {}
        }
    }
}
