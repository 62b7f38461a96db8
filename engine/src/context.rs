use winit::window::Window;

use crate::{graphics, input::Input, time::FrameClock};

/// Everything a [`crate::Runnable`] gets to touch during a frame.
pub struct Context {
    pub graphics: graphics::State,
    pub input: Input,
    pub time: FrameClock,
    quit: bool,
    // Fields drop in declaration order; the surface inside `graphics` must go before the window.
    window: Window,
}

impl Context {
    pub(crate) fn new(window: Window, graphics: graphics::State, time: FrameClock) -> Self {
        Self {
            graphics,
            input: Input::new(),
            time,
            quit: false,
            window,
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Asks the event loop to stop once the current frame is done.
    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
