pub mod context;
pub mod error;
pub mod event_loop;
pub mod geometry;
pub mod graphics;
pub mod input;
pub mod logger;
pub mod time;

use context::Context;
use error::{EngineError, EngineResult};
use winit::{dpi::PhysicalSize, window::WindowBuilder};

pub use winit::event_loop::EventLoop;

/// A game driven by [`event_loop::run`].
///
/// `tick` advances the simulation by one frame, `render` queues the draw calls for that frame.
/// Both run once per iteration, in that order.
pub trait Runnable {
    fn tick(&mut self, ctx: &mut Context);
    fn render(&self, ctx: &mut Context);
}

pub struct ContextBuilder {
    title: String,
    width: u32,
    height: u32,
    target_fps: u32,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Logical screen size. Draw calls are expressed in this space regardless of the
    /// physical window size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_target_fps(mut self, target_fps: u32) -> Self {
        self.target_fps = target_fps;
        self
    }

    /// Opens the window and brings up the graphics backend.
    ///
    /// Anything acquired before a failure is dropped on the way out.
    pub fn build(self) -> EngineResult<(EventLoop<()>, Context)> {
        let event_loop = EventLoop::new();
        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(PhysicalSize::new(self.width, self.height))
            .with_resizable(false)
            .build(&event_loop)
            .map_err(EngineError::CreateWindow)?;

        let graphics = futures::executor::block_on(graphics::State::new(
            &window,
            self.width as f32,
            self.height as f32,
        ))?;

        log::info!(
            "created window '{}' ({}x{}, target {} fps)",
            self.title,
            self.width,
            self.height,
            self.target_fps
        );

        let ctx = Context::new(window, graphics, time::FrameClock::new(self.target_fps));
        Ok((event_loop, ctx))
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self {
            title: String::from("engine"),
            width: 1280,
            height: 720,
            target_fps: 60,
        }
    }
}
