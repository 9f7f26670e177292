//! 2D light-ray shadow casting
//!
//! A luminous circle emits rays in all directions; each ray marches in fixed
//! steps until it leaves the canvas or is absorbed by an opaque circular
//! obstacle. Everything is drawn into a software canvas that is presented
//! with wgpu once per frame.
//!
//! Controls:
//! - Drag (any button held): move the light source

mod config;
mod physics;
mod renderer;
mod scene;

use common::{Canvas, GraphicsContext, COLOR_BLACK, COLOR_GRAY, COLOR_WHITE};
use config::SimConfig;
use glam::DVec2;
use physics::Bounds;
use renderer::CanvasRenderer;
use scene::Scene;
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::ControlFlow,
};

/// Tracks how many pointer buttons are currently held, so dragging works
/// with any button and survives overlapping press/release pairs
#[derive(Default)]
struct PointerState {
    buttons_held: u32,
}

impl PointerState {
    fn update(&mut self, state: ElementState) {
        match state {
            ElementState::Pressed => self.buttons_held += 1,
            ElementState::Released => self.buttons_held = self.buttons_held.saturating_sub(1),
        }
    }

    fn any_held(&self) -> bool {
        self.buttons_held > 0
    }
}

struct App {
    ctx: GraphicsContext,
    renderer: CanvasRenderer,
    canvas: Canvas,
    scene: Scene,
    config: SimConfig,
    pointer: PointerState,
}

impl App {
    fn new(ctx: GraphicsContext, config: SimConfig) -> Self {
        let renderer = CanvasRenderer::new(&ctx, config.width, config.height);
        let canvas = Canvas::new(config.width, config.height);
        let scene = Scene::new(config.light, config.obstacles.clone(), config.ray_count);

        log::info!(
            "scene ready: {} rays, {} obstacles",
            scene.rays.len(),
            scene.obstacles.len()
        );

        Self {
            ctx,
            renderer,
            canvas,
            scene,
            config,
            pointer: PointerState::default(),
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
    }

    /// Map a cursor position in window pixels to canvas coordinates. The
    /// canvas keeps its configured resolution when the window is resized.
    fn cursor_to_canvas(&self, x: f64, y: f64) -> DVec2 {
        let sx = self.config.width as f64 / self.ctx.size.width.max(1) as f64;
        let sy = self.config.height as f64 / self.ctx.size.height.max(1) as f64;
        DVec2::new(x * sx, y * sy)
    }

    fn handle_drag(&mut self, x: f64, y: f64) {
        let position = self.cursor_to_canvas(x, y);
        self.scene.move_light(position);
    }

    /// Redraw the frame into the canvas: background, obstacle disks, the
    /// light disk, then every ray path
    fn draw(&mut self) {
        let bounds = Bounds {
            width: self.config.width as f64,
            height: self.config.height as f64,
        };
        let canvas = &mut self.canvas;
        let scene = &self.scene;

        canvas.clear(COLOR_BLACK);

        for obstacle in &scene.obstacles {
            canvas.fill_circle(
                obstacle.center.as_vec2(),
                obstacle.radius as f32,
                COLOR_WHITE,
            );
        }
        canvas.fill_circle(
            scene.light.center.as_vec2(),
            scene.light.radius as f32,
            COLOR_WHITE,
        );

        for ray in &scene.rays {
            ray.march(&scene.obstacles, bounds, self.config.step_size, |p| {
                canvas.fill_rect(p.x as i32, p.y as i32, 1, 1, COLOR_GRAY);
            });
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.draw();

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.upload(&self.ctx.queue, &self.canvas);

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(&mut encoder, &view);

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = SimConfig::default();
    if let Err(e) = config.validate() {
        log::error!("invalid configuration: {e}");
        std::process::exit(1);
    }

    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        "Light Simulation - 2D Shadow Casting",
        config.width,
        config.height,
    ));

    let frame_delay = config.frame_delay;
    let mut app = App::new(ctx, config);

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::Resized(size) => app.resize(size),
                    WindowEvent::MouseInput { state, .. } => {
                        app.pointer.update(state);
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        if app.pointer.any_held() {
                            app.handle_drag(position.x, position.y);
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        match app.render() {
                            Ok(_) => {}
                            Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                            Err(e) => eprintln!("Render error: {:?}", e),
                        }
                        // Fixed frame-rate cap
                        std::thread::sleep(frame_delay);
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    app.ctx.window.request_redraw();
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_button_starts_and_ends_a_drag() {
        let mut pointer = PointerState::default();
        assert!(!pointer.any_held());

        // Right button alone is enough
        pointer.update(ElementState::Pressed);
        assert!(pointer.any_held());

        // A second button pressed, then one released: still dragging
        pointer.update(ElementState::Pressed);
        pointer.update(ElementState::Released);
        assert!(pointer.any_held());

        pointer.update(ElementState::Released);
        assert!(!pointer.any_held());

        // A stray release never underflows
        pointer.update(ElementState::Released);
        assert!(!pointer.any_held());
    }
}
