//! glTF scene viewer - main entry point.
//!
//! Sets up the scene (camera, lights), starts the configured model loads in
//! the background, and runs the render loop with damped orbit controls and
//! window-resize handling.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use viewer_core::{Timer, ViewerConfig};
use viewer_platform::{InputState, MouseButton, Window};
use viewer_renderer::Renderer;
use viewer_resources::AssetLoader;
use viewer_scene::{Camera, OrbitController, Scene, Transform};

/// Desktop glTF scene viewer.
#[derive(Parser, Debug)]
#[command(name = "viewer", version, about)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the directory model paths are resolved against.
    #[arg(long)]
    models_dir: Option<PathBuf>,
}

struct App {
    config: ViewerConfig,
    window: Option<Window>,
    renderer: Option<Renderer>,
    scene: Option<Scene>,
    camera: Option<Camera>,
    controls: Option<OrbitController>,
    loader: AssetLoader,
    /// Configured world transform for each requested model, by name.
    transforms: HashMap<String, Transform>,
    input: InputState,
    timer: Timer,
}

impl App {
    fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            window: None,
            renderer: None,
            scene: None,
            camera: None,
            controls: None,
            loader: AssetLoader::new(),
            transforms: HashMap::new(),
            input: InputState::new(),
            timer: Timer::new(),
        }
    }

    /// Build the scene, camera, and controls, and kick off the model loads.
    fn setup_scene(&mut self, window: &Window) {
        let scene = Scene::from_config(&self.config);
        let camera = Camera::from_config(&self.config.camera, window.aspect_ratio());
        let controls = OrbitController::new(
            &camera,
            glam::Vec3::from_array(self.config.camera.target),
            &self.config.orbit,
        );

        for entry in &self.config.models {
            self.transforms
                .insert(entry.name.clone(), Scene::entry_transform(entry));
            self.loader
                .request(entry.name.clone(), self.config.model_path(entry));
        }

        self.scene = Some(scene);
        self.camera = Some(camera);
        self.controls = Some(controls);
    }

    /// Insert any finished loads into the scene; log failures and continue.
    fn drain_loads(&mut self) {
        let (Some(scene), Some(renderer)) = (self.scene.as_mut(), self.renderer.as_mut()) else {
            return;
        };

        for outcome in self.loader.poll() {
            match outcome.result {
                Ok(model) => {
                    let transform = self
                        .transforms
                        .get(&outcome.name)
                        .copied()
                        .unwrap_or_default();
                    scene.add_model(outcome.name, model, transform);
                    if let Some(instance) = scene.instances().last() {
                        renderer.upload_model(instance);
                    }
                }
                Err(e) => {
                    error!("Failed to load '{}': {}", outcome.path.display(), e);
                }
            }
        }
    }

    /// One frame: advance the damped controls, then render.
    fn tick(&mut self) {
        self.drain_loads();

        let dt = self.timer.delta_secs();

        if let (Some(controls), Some(camera)) = (self.controls.as_mut(), self.camera.as_mut()) {
            if self.input.is_mouse_pressed(MouseButton::Left) {
                let (dx, dy) = self.input.cursor_delta();
                controls.rotate(dx, dy);
            }
            let scroll = self.input.scroll_delta();
            if scroll != 0.0 {
                controls.zoom(scroll);
            }
            controls.update(dt, camera);
        }
        self.input.begin_frame();

        if let (Some(renderer), Some(scene), Some(camera)) =
            (self.renderer.as_mut(), self.scene.as_ref(), self.camera.as_ref())
            && let Err(e) = renderer.render_frame(scene, camera)
        {
            error!("Render error: {:?}", e);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            match Window::new(
                event_loop,
                self.config.width,
                self.config.height,
                &self.config.title,
            ) {
                Ok(window) => match Renderer::new(&window) {
                    Ok(renderer) => {
                        self.setup_scene(&window);
                        info!("Initialization complete, entering main loop");
                        self.renderer = Some(renderer);
                        self.window = Some(window);
                    }
                    Err(e) => {
                        error!("Failed to create renderer: {:?}", e);
                        event_loop.exit();
                    }
                },
                Err(e) => {
                    error!("Failed to create window: {}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                // Minimized windows report a zero extent; skip those.
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(ref mut window) = self.window {
                    window.resize(size.width, size.height);
                    if let Some(ref mut camera) = self.camera {
                        camera.set_aspect(window.aspect_ratio());
                    }
                }
                if let Some(ref mut renderer) = self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.tick();
            }
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => self.input.on_mouse_pressed(button.into()),
                ElementState::Released => self.input.on_mouse_released(button.into()),
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.input
                    .on_cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 40.0,
                };
                self.input.on_scroll(lines);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    viewer_core::init_logging();

    let args = Args::parse();
    let mut config = match args.config {
        Some(path) => ViewerConfig::from_file(&path)?,
        None => ViewerConfig::default(),
    };
    if let Some(models_dir) = args.models_dir {
        config.models_dir = models_dir;
    }

    info!("Starting glTF viewer");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
