//! Game tuning. Everything is fixed at compile time; [`Config`] carries the values into the
//! update and render code so they can be varied in tests.

pub const TITLE: &str = "Snake++";

/// Directory holding `map.png` and `snake.png` unless overridden on the command line.
pub const ASSET_DIR: &str = "assets";
pub const MAP_TEXTURE: &str = "map.png";
pub const SNAKE_TEXTURE: &str = "snake.png";

pub const CLEAR_COLOR: &str = "#000000";

pub const SCREEN_WIDTH: u32 = 1920;
pub const SCREEN_HEIGHT: u32 = 1080;
/// Height over width, shared by the screen and the viewport.
pub const ASPECT_RATIO: f32 = SCREEN_HEIGHT as f32 / SCREEN_WIDTH as f32;

/// Camera pan speed in map pixels per second.
pub const VIEWPORT_SPEED: f32 = 300.0;
/// Viewport width change per wheel notch, per second of frame time.
pub const ZOOM_SPEED: f32 = 6000.0;
/// Closest zoom, as a viewport height in map pixels.
pub const MIN_VIEWPORT_HEIGHT: f32 = 500.0;

/// Snake speed in map pixels per second.
pub const SNAKE_SPEED: f32 = 200.0;
/// Degrees per second.
pub const SNAKE_ROTATION_SPEED: f32 = 180.0;
pub const SNAKE_DASH_MULTIPLIER: f32 = 2.0;
/// Heading never leaves `[-MAX_HEADING, MAX_HEADING]`.
pub const MAX_HEADING: f32 = 360.0;

pub const TARGET_FPS: u32 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub aspect_ratio: f32,
    pub viewport_speed: f32,
    pub zoom_speed: f32,
    pub min_viewport_height: f32,
    pub snake_speed: f32,
    pub snake_rotation_speed: f32,
    pub dash_multiplier: f32,
    pub max_heading: f32,
    pub target_fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH as f32,
            screen_height: SCREEN_HEIGHT as f32,
            aspect_ratio: ASPECT_RATIO,
            viewport_speed: VIEWPORT_SPEED,
            zoom_speed: ZOOM_SPEED,
            min_viewport_height: MIN_VIEWPORT_HEIGHT,
            snake_speed: SNAKE_SPEED,
            snake_rotation_speed: SNAKE_ROTATION_SPEED,
            dash_multiplier: SNAKE_DASH_MULTIPLIER,
            max_heading: MAX_HEADING,
            target_fps: TARGET_FPS,
        }
    }
}
