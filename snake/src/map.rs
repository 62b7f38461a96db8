use engine::geometry::Rect;

/// Size of the map texture, in map pixels.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Map {
    pub width: f32,
    pub height: f32,
}

impl Map {
    pub fn new(width: f32, height: f32) -> Self {
        Map { width, height }
    }

    /// Moves `rect` back inside the map, one edge per axis; the near edge wins.
    /// Size is left alone.
    pub fn clamp(&self, rect: &mut Rect) {
        if rect.x < 0.0 {
            rect.x = 0.0;
        } else if rect.right() > self.width {
            rect.x = self.width - rect.w;
        }

        if rect.y < 0.0 {
            rect.y = 0.0;
        } else if rect.bottom() > self.height {
            rect.y = self.height - rect.h;
        }
    }

    pub fn contains(&self, rect: &Rect) -> bool {
        rect.x >= 0.0 && rect.y >= 0.0 && rect.right() <= self.width && rect.bottom() <= self.height
    }
}
