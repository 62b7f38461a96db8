use cgmath::Matrix4;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Fixed screen-space camera. Maps logical pixels (origin top left, y down) onto clip space,
/// so the game draws in the same coordinates whatever the window's physical size.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub width: f32,
    pub height: f32,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        // Bottom is `height` and top is 0 to flip y
        let proj = cgmath::ortho(0.0, self.width, self.height, 0.0, -1.0, 1.0);
        OPENGL_TO_WGPU_MATRIX * proj
    }
}
