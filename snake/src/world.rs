use engine::geometry::Rect;
use engine::input::{InputEvent, Keyboard};

use crate::camera;
use crate::config::Config;
use crate::map::Map;
use crate::snake::Snake;

/// Everything that changes from one frame to the next.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct World {
    pub map: Map,
    /// Visible part of the map, in map pixels.
    pub viewport: Rect,
    pub snake: Snake,
    /// Cleared by a quit event; the frame that saw it still completes.
    pub running: bool,
}

impl World {
    /// Starting layout: viewport and snake both anchored at the map center, the viewport one
    /// screen in size.
    pub fn new(map: Map, snake_width: f32, snake_height: f32, config: &Config) -> Self {
        let viewport = Rect::new(
            map.width / 2.0,
            map.height / 2.0,
            config.screen_width,
            config.screen_height,
        );
        let snake = Snake::new(&map, snake_width, snake_height, &viewport);
        World {
            map,
            viewport,
            snake,
            running: true,
        }
    }
}

/// Advances `world` by one frame of `dt` seconds.
///
/// Queued events are applied first (quit, wheel zoom), then the held keys pan the camera and
/// steer the snake. The snake's screen position is refreshed last, against the final viewport.
pub fn update(
    mut world: World,
    events: &[InputEvent],
    keys: &Keyboard,
    dt: f32,
    config: &Config,
) -> World {
    for event in events {
        match *event {
            InputEvent::Quit => world.running = false,
            InputEvent::MouseWheel { y, .. } => camera::zoom(
                &mut world.viewport,
                &mut world.snake.screen,
                y,
                dt,
                config,
                &world.map,
            ),
        }
    }

    camera::pan(&mut world.viewport, keys, dt, config, &world.map);
    let zoom_factor = camera::zoom_factor(&world.viewport, config);

    let speed = world.snake.steer(keys, dt, config);
    world.snake.advance(speed, dt, &world.map);
    world.snake.project(&world.viewport, zoom_factor);

    debug_assert!(world.map.contains(&world.snake.body));
    world
}

#[cfg(test)]
mod test {
    use super::*;
    use engine::input::KeyCode;

    fn config() -> Config {
        Config {
            screen_width: 1920.0,
            screen_height: 1080.0,
            aspect_ratio: 0.5625,
            viewport_speed: 300.0,
            zoom_speed: 6000.0,
            min_viewport_height: 500.0,
            snake_speed: 200.0,
            snake_rotation_speed: 180.0,
            dash_multiplier: 2.0,
            max_heading: 360.0,
            target_fps: 60,
        }
    }

    /// Deterministic pseudo random numbers, enough to shake out input sequences.
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self) -> u32 {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (self.0 >> 33) as u32
        }

        fn chance(&mut self, percent: u32) -> bool {
            self.next() % 100 < percent
        }
    }

    #[test]
    fn test_initial_layout() {
        let world = World::new(Map::new(4000.0, 2000.0), 64.0, 32.0, &config());

        assert_eq!(world.viewport, Rect::new(2000.0, 1000.0, 1920.0, 1080.0));
        assert_eq!(world.snake.body, Rect::new(2000.0, 1000.0, 64.0, 32.0));
        assert_eq!(world.snake.screen, Rect::new(0.0, 0.0, 64.0, 32.0));
        assert!(world.running);
    }

    #[test]
    fn test_quit_still_finishes_the_frame() {
        let config = config();
        let world = World::new(Map::new(8000.0, 4000.0), 64.0, 32.0, &config);

        let next = update(world, &[InputEvent::Quit], &Keyboard::new(), 0.5, &config);

        assert!(!next.running);
        assert!((next.snake.body.x - (world.snake.body.x + 100.0)).abs() < 1e-3);
    }

    #[test]
    fn test_idle_frame_only_moves_the_snake() {
        let config = config();
        let world = World::new(Map::new(8000.0, 4000.0), 64.0, 32.0, &config);

        let next = update(world, &[], &Keyboard::new(), 1.0, &config);

        assert_eq!(next.viewport, world.viewport);
        assert_eq!(next.snake.heading, 0.0);
        assert!((next.snake.body.x - 4200.0).abs() < 1e-3);
        // 200 map pixels at a 1:1 zoom
        assert!((next.snake.screen.x - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_zoom_changes_projection() {
        let config = config();
        let world = World::new(Map::new(8000.0, 4000.0), 64.0, 32.0, &config);
        let wheel = InputEvent::MouseWheel { x: 0.0, y: -1.0 };

        let next = update(world, &[wheel], &Keyboard::new(), 0.016, &config);

        // Zoomed in: the viewport shrank and the sprite grew on screen
        assert!(next.viewport.w < world.viewport.w);
        assert!(next.snake.screen.w > world.snake.screen.w);
        let zoom = config.screen_width / next.viewport.w;
        let expected_x = (next.snake.body.x - next.viewport.x) * zoom;
        assert!((next.snake.screen.x - expected_x).abs() < 1e-3);
    }

    #[test]
    fn test_invariants_hold_for_arbitrary_input() {
        let config = config();
        let map = Map::new(4000.0, 2000.0);
        let mut world = World::new(map, 64.0, 32.0, &config);
        let mut rng = Lcg(0x5eed);
        let held_keys = [
            KeyCode::W,
            KeyCode::A,
            KeyCode::S,
            KeyCode::D,
            KeyCode::Q,
            KeyCode::E,
            KeyCode::Space,
        ];

        for _ in 0..5000 {
            let keys: Keyboard = held_keys
                .iter()
                .copied()
                .filter(|_| rng.chance(30))
                .collect();

            let mut events = Vec::new();
            while rng.chance(20) {
                let notches = (rng.next() % 7) as f32 - 3.0;
                events.push(InputEvent::MouseWheel { x: 0.0, y: notches });
            }

            let dt = (rng.next() % 100) as f32 / 1000.0;
            world = update(world, &events, &keys, dt, &config);

            let v = world.viewport;
            assert!(v.x >= 0.0 && v.y >= 0.0, "viewport off map: {:?}", v);
            assert!(v.right() <= map.width + 1e-2, "viewport off map: {:?}", v);
            assert!(v.bottom() <= map.height + 1e-2, "viewport off map: {:?}", v);
            assert!(v.h >= 500.0 - 1e-2 && v.h <= map.height + 1e-2, "bad height: {:?}", v);
            assert!((v.w * config.aspect_ratio - v.h).abs() < 0.5, "bad aspect: {:?}", v);

            assert!(map.contains(&world.snake.body), "snake off map: {:?}", world.snake.body);
            assert!(world.snake.heading.abs() <= 360.0);
            assert!(world.snake.screen.w.is_finite() && world.snake.screen.w > 0.0);
        }
    }
}
