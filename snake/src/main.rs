mod camera;
mod config;
mod map;
mod render;
mod snake;
mod world;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context as _;
use engine::context::Context;
use engine::graphics::color::Color;
use engine::{EventLoop, Runnable};

use config::Config;
use map::Map;
use render::Assets;
use world::World;

fn main() -> ExitCode {
    engine::logger::init();

    let asset_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::ASSET_DIR));

    match setup(&asset_dir) {
        Ok((event_loop, ctx, game)) => engine::event_loop::run(event_loop, ctx, game),
        Err(e) => {
            log::error!("startup failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Opens the window and loads both textures. On failure everything acquired so far is
/// dropped before returning.
fn setup(asset_dir: &Path) -> anyhow::Result<(EventLoop<()>, Context, Game)> {
    let config = Config::default();

    let (event_loop, mut ctx) = engine::ContextBuilder::new()
        .with_title(config::TITLE)
        .with_size(config::SCREEN_WIDTH, config::SCREEN_HEIGHT)
        .with_target_fps(config.target_fps)
        .build()
        .context("failed to initialize window and renderer")?;

    log::info!("loading assets from '{}'", asset_dir.display());
    let map_texture = ctx
        .graphics
        .load_texture(asset_dir.join(config::MAP_TEXTURE))
        .context("failed to load map texture")?;
    let snake_texture = ctx
        .graphics
        .load_texture(asset_dir.join(config::SNAKE_TEXTURE))
        .context("failed to load snake texture")?;

    let (map_width, map_height) = ctx
        .graphics
        .texture_size(map_texture)
        .context("map texture vanished after loading")?;
    let (snake_width, snake_height) = ctx
        .graphics
        .texture_size(snake_texture)
        .context("snake texture vanished after loading")?;

    let clear_color = Color::from_hex(config::CLEAR_COLOR)
        .map_err(|e| anyhow::anyhow!("bad clear color '{}': {}", config::CLEAR_COLOR, e))?;

    let world = World::new(
        Map::new(map_width, map_height),
        snake_width,
        snake_height,
        &config,
    );

    let game = Game {
        world,
        assets: Assets {
            map: map_texture,
            snake: snake_texture,
        },
        clear_color,
        config,
    };

    Ok((event_loop, ctx, game))
}

struct Game {
    world: World,
    assets: Assets,
    clear_color: Color,
    config: Config,
}

impl Runnable for Game {
    fn tick(&mut self, ctx: &mut Context) {
        let events = ctx.input.drain_events();
        let dt = ctx.time.delta();

        self.world = world::update(self.world, &events, ctx.input.keyboard(), dt, &self.config);

        if !self.world.running {
            log::info!("quit requested, shutting down");
            ctx.quit();
        }
    }

    fn render(&self, ctx: &mut Context) {
        render::draw(
            &self.world,
            &self.assets,
            self.clear_color,
            &mut ctx.graphics,
        );
    }
}
