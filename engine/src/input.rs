//! Window events -> engine input.
//!
//! Discrete events (quit, wheel) are queued until the game drains them, held keys are kept
//! as a [`Keyboard`] snapshot that the game can sample at any point of the frame.

use std::collections::HashSet;

use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

pub use winit::event::VirtualKeyCode as KeyCode;

/// Pixel scroll distance counted as one wheel notch.
pub const PIXELS_PER_LINE: f64 = 40.0;

/// Discrete input, consumed once per frame.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InputEvent {
    Quit,
    /// Wheel movement, positive `y` is away from the user.
    MouseWheel { x: f32, y: f32 },
}

/// Keys currently held down.
#[derive(Debug, Default, Clone)]
pub struct Keyboard {
    down: HashSet<KeyCode>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.down.contains(&key)
    }

    pub fn press(&mut self, key: KeyCode) {
        self.down.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.down.remove(&key);
    }
}

impl FromIterator<KeyCode> for Keyboard {
    fn from_iter<I: IntoIterator<Item = KeyCode>>(iter: I) -> Self {
        Keyboard {
            down: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Input {
    events: Vec<InputEvent>,
    keyboard: Keyboard,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// Takes every event queued since the last call.
    pub fn drain_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn key_changed(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => self.keyboard.press(key),
            ElementState::Released => self.keyboard.release(key),
        }
    }

    pub fn wheel(&mut self, delta: MouseScrollDelta) {
        let (x, y) = match delta {
            MouseScrollDelta::LineDelta(x, y) => (x, y),
            MouseScrollDelta::PixelDelta(pos) => (
                (pos.x / PIXELS_PER_LINE) as f32,
                (pos.y / PIXELS_PER_LINE) as f32,
            ),
        };
        self.push_event(InputEvent::MouseWheel { x, y });
    }

    /// Feeds a window event in. Returns `true` if it was consumed as input.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                self.push_event(InputEvent::Quit);
                true
            }
            WindowEvent::KeyboardInput { input, .. } => match input.virtual_keycode {
                Some(key) => {
                    self.key_changed(key, input.state);
                    true
                }
                None => false,
            },
            WindowEvent::MouseWheel { delta, .. } => {
                self.wheel(*delta);
                true
            }
            // Keys released while unfocused would otherwise stay held.
            WindowEvent::Focused(false) => {
                self.keyboard = Keyboard::new();
                true
            }
            _ => false,
        }
    }
}
