use engine::geometry::Rect;
use engine::input::{KeyCode, Keyboard};

use crate::config::Config;
use crate::map::Map;

/// The player sprite. It always moves forward along its heading; the keys only turn it and
/// make it dash.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Snake {
    /// Position and size on the map.
    pub body: Rect,
    /// Where it lands on screen. Size is carried between frames and rescaled by zoom steps.
    pub screen: Rect,
    /// Degrees, clockwise from the +x axis.
    pub heading: f32,
}

impl Snake {
    /// Sprite of `width` x `height` at the map center, facing right.
    pub fn new(map: &Map, width: f32, height: f32, viewport: &Rect) -> Self {
        let body = Rect::new(map.width / 2.0, map.height / 2.0, width, height);
        let screen = Rect::new(body.x - viewport.x, body.y - viewport.y, width, height);
        Snake {
            body,
            screen,
            heading: 0.0,
        }
    }

    /// Turns with Q/E and returns this frame's speed, multiplied while Space is held.
    ///
    /// Each direction stops at `config.max_heading` instead of wrapping around.
    pub fn steer(&mut self, keys: &Keyboard, dt: f32, config: &Config) -> f32 {
        let turn = config.snake_rotation_speed * dt;
        let max = config.max_heading;

        if keys.is_down(KeyCode::Q) && self.heading > -max {
            self.heading = (self.heading - turn).max(-max);
        }
        if keys.is_down(KeyCode::E) && self.heading < max {
            self.heading = (self.heading + turn).min(max);
        }

        if keys.is_down(KeyCode::Space) {
            config.snake_speed * config.dash_multiplier
        } else {
            config.snake_speed
        }
    }

    /// Moves along the heading at `speed` for `dt` seconds and keeps the body on the map.
    pub fn advance(&mut self, speed: f32, dt: f32, map: &Map) {
        let (sin, cos) = self.heading.to_radians().sin_cos();
        self.body.x += speed * dt * cos;
        self.body.y += speed * dt * sin;
        map.clamp(&mut self.body);
    }

    /// Places the screen rectangle relative to the viewport. Only the position is recomputed.
    pub fn project(&mut self, viewport: &Rect, zoom_factor: f32) {
        self.screen.x = (self.body.x - viewport.x) * zoom_factor;
        self.screen.y = (self.body.y - viewport.y) * zoom_factor;
    }
}
