//! Textured quad geometry and per-frame batching.

use super::{buffers::Vertex, TextureId};
use crate::geometry::Rect;

/// Two triangles over the corners emitted by [`quad`].
pub const QUAD_INDICES: [u16; 6] = [
    0, 2, 3, // Top triangle
    3, 1, 0, // Bot triangle
];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Flip {
    None,
    Horizontal,
    Vertical,
    Both,
}

/// Normalized texture coordinates of `src` inside a `width` x `height` texture.
/// `None` selects the whole texture.
pub fn uv_rect(src: Option<Rect>, width: f32, height: f32) -> Rect {
    match src {
        Some(src) if width > 0.0 && height > 0.0 => Rect::new(
            src.x / width,
            src.y / height,
            src.w / width,
            src.h / height,
        ),
        _ => Rect::new(0.0, 0.0, 1.0, 1.0),
    }
}

/// Corners of `dst` rotated clockwise by `angle` degrees about its center, in the order
/// top left, top right, bottom left, bottom right.
pub fn quad(dst: Rect, uv: Rect, angle: f32, flip: Flip) -> [Vertex; 4] {
    let (cx, cy) = dst.center();
    let (hw, hh) = (dst.w / 2.0, dst.h / 2.0);
    // y points down, so a positive angle turns clockwise on screen
    let (sin, cos) = angle.to_radians().sin_cos();

    let (mut u0, mut u1) = (uv.x, uv.right());
    let (mut v0, mut v1) = (uv.y, uv.bottom());
    if matches!(flip, Flip::Horizontal | Flip::Both) {
        std::mem::swap(&mut u0, &mut u1);
    }
    if matches!(flip, Flip::Vertical | Flip::Both) {
        std::mem::swap(&mut v0, &mut v1);
    }

    let corner = |dx: f32, dy: f32, u: f32, v: f32| Vertex {
        position: [cx + dx * cos - dy * sin, cy + dx * sin + dy * cos, 0.0],
        tex_coords: [u, v],
    };

    [
        corner(-hw, -hh, u0, v0),
        corner(hw, -hh, u1, v0),
        corner(-hw, hh, u0, v1),
        corner(hw, hh, u1, v1),
    ]
}

/// A run of indices drawn with one texture bound.
#[derive(Debug, PartialEq, Clone)]
pub struct DrawCall {
    pub texture: TextureId,
    pub indices: std::ops::Range<u32>,
}

/// Geometry queued for the current frame.
#[derive(Debug, Default)]
pub struct SpriteBatch {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
    pub draw_calls: Vec<DrawCall>,
}

impl SpriteBatch {
    /// Appends a shape, offsetting its `indices` past the vertices already queued.
    /// Consecutive shapes using the same texture share a draw call.
    pub fn push_shape(&mut self, texture: TextureId, vertices: &[Vertex], indices: &[u16]) {
        let len = self.vertices.len() as u16;
        let start = self.indices.len() as u32;

        self.indices.extend(indices.iter().map(|i| *i + len));
        self.vertices.extend_from_slice(vertices);

        let end = self.indices.len() as u32;
        match self.draw_calls.last_mut() {
            Some(last) if last.texture == texture => last.indices.end = end,
            _ => self.draw_calls.push(DrawCall {
                texture,
                indices: start..end,
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.draw_calls.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.draw_calls.clear();
    }
}
