use engine::geometry::Rect;
use engine::graphics::{self, color::Color, sprite::Flip, TextureId};

use crate::world::World;

/// Textures loaded at startup.
#[derive(Debug, Clone, Copy)]
pub struct Assets {
    pub map: TextureId,
    pub snake: TextureId,
}

/// Queues one frame: the viewport's slice of the map stretched over the screen, then the
/// snake turned to its heading.
pub fn draw(
    world: &World,
    assets: &Assets,
    clear_color: Color,
    graphics: &mut graphics::State,
) {
    graphics.clear_background(clear_color);

    let (screen_width, screen_height) = graphics.screen_size();
    let screen = Rect::new(0.0, 0.0, screen_width, screen_height);
    graphics.draw_texture(assets.map, Some(world.viewport), screen);

    graphics.draw_texture_rotated(
        assets.snake,
        None,
        world.snake.screen,
        world.snake.heading,
        Flip::None,
    );
}
