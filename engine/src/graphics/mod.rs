pub mod buffers;
mod camera;
pub mod color;
pub mod render;
pub mod sprite;
mod texture;

use std::path::Path;

use camera::Camera;
use wgpu::util::DeviceExt;

use self::buffers::{Uniforms, Vertex};
use self::sprite::{Flip, SpriteBatch, QUAD_INDICES};
use self::texture::Texture;
use crate::error::{EngineError, EngineResult};
use crate::geometry::Rect;

/// Handle to a texture owned by [`State`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct TextureId(usize);

/// Renderer state. Fields drop top to bottom, which releases them in reverse order of
/// creation: textures and pipeline first, the surface last.
pub struct State {
    pub batch: SpriteBatch,
    pub background: Background,

    textures: Vec<Texture>,
    texture_bind_group_layout: wgpu::BindGroupLayout,

    render_pipeline: wgpu::RenderPipeline,
    uniform_bind_group: wgpu::BindGroup,
    // Only read through the bind group, kept so it lives as long as the pipeline
    #[allow(dead_code)]
    uniform_buffer: wgpu::Buffer,
    camera: Camera,

    queue: wgpu::Queue,
    pub device: wgpu::Device,
    config: wgpu::SurfaceConfiguration,
    surface: wgpu::Surface,
    pub size: winit::dpi::PhysicalSize<u32>,
}

impl State {
    /// `screen_width`/`screen_height` is the logical size draw calls are expressed in.
    pub async fn new(
        window: &winit::window::Window,
        screen_width: f32,
        screen_height: f32,
    ) -> EngineResult<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::Backends::PRIMARY);

        // Create the surface to draw on (from window, which we get from winit)
        let surface = unsafe { instance.create_surface(window) };

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(EngineError::NoAdapter)?;

        let info = adapter.get_info();
        log::info!("using adapter '{}' ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default(), None)
            .await
            .map_err(EngineError::RequestDevice)?;

        let format = surface
            .get_preferred_format(&adapter)
            .ok_or(EngineError::NoSurfaceFormat)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
        };

        surface.configure(&device, &config);
        log::debug!("configured surface {:?} {}x{}", format, size.width, size.height);

        let camera = Camera::new(screen_width, screen_height);

        let mut uniforms = Uniforms::new();
        uniforms.update_view_proj(&camera);

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Uniform Buffer"),
            contents: bytemuck::cast_slice(&[uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    // visible only to vertex stage shaders
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
                label: Some("Uniform Bind Group Layout"),
            });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some("Uniform Bind Group"),
        });

        let texture_bind_group_layout = Texture::bind_group_layout(&device);

        let shader = device.create_shader_module(&wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Render Pipeline Layout"),
                bind_group_layouts: &[&uniform_bind_group_layout, &texture_bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Render Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                }],
            }),
            // No culling, rotated quads may end up with either winding
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        Ok(Self {
            batch: SpriteBatch::default(),
            background: Background::default(),
            textures: Vec::new(),
            texture_bind_group_layout,
            render_pipeline,
            uniform_bind_group,
            uniform_buffer,
            camera,
            queue,
            device,
            config,
            surface,
            size,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Logical screen size draw calls are expressed in.
    pub fn screen_size(&self) -> (f32, f32) {
        (self.camera.width, self.camera.height)
    }

    /// Decodes the image at `path` and uploads it.
    pub fn load_texture(&mut self, path: impl AsRef<Path>) -> EngineResult<TextureId> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| EngineError::AssetLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let label = path.display().to_string();
        let texture = Texture::from_image(
            &self.device,
            &self.queue,
            &self.texture_bind_group_layout,
            &img,
            Some(&label),
        );
        log::info!(
            "loaded texture '{}' ({}x{})",
            label,
            texture.width,
            texture.height
        );

        self.textures.push(texture);
        Ok(TextureId(self.textures.len() - 1))
    }

    /// Pixel size of a loaded texture.
    pub fn texture_size(&self, id: TextureId) -> Option<(f32, f32)> {
        self.textures
            .get(id.0)
            .map(|t| (t.width as f32, t.height as f32))
    }

    fn texture(&self, id: TextureId) -> Option<&Texture> {
        self.textures.get(id.0)
    }
}

pub struct Background {
    pub color: wgpu::Color,
    pub should_clear: bool,
}

impl Background {
    pub fn clear(&mut self, color: wgpu::Color) {
        self.should_clear = true;
        self.color = color;
    }
    pub fn reset(&mut self) {
        self.should_clear = false;
    }
}

impl Default for Background {
    fn default() -> Self {
        Background {
            color: wgpu::Color::TRANSPARENT,
            should_clear: false,
        }
    }
}

impl State {
    pub fn clear_background(&mut self, color: color::Color) {
        self.background.clear(wgpu::Color::from(color));
    }

    /// Draws the `src` region of a texture (all of it when `None`) stretched over `dst`.
    pub fn draw_texture(&mut self, texture: TextureId, src: Option<Rect>, dst: Rect) {
        self.draw_texture_rotated(texture, src, dst, 0.0, Flip::None);
    }

    /// Like [`State::draw_texture`], rotated clockwise by `angle` degrees about the center of `dst`.
    pub fn draw_texture_rotated(
        &mut self,
        texture: TextureId,
        src: Option<Rect>,
        dst: Rect,
        angle: f32,
        flip: Flip,
    ) {
        let Some((width, height)) = self.texture_size(texture) else {
            log::warn!("draw with unknown texture {:?}", texture);
            return;
        };

        let uv = sprite::uv_rect(src, width, height);
        let vertices = sprite::quad(dst, uv, angle, flip);
        self.push_shape(texture, &vertices, &QUAD_INDICES);
    }

    /// Pushes a shape into this frame's batch. The batch is copied into GPU buffers in
    /// [`State::render`] and drawn in submission order.
    pub fn push_shape(&mut self, texture: TextureId, vertices: &[Vertex], indices: &[u16]) {
        self.batch.push_shape(texture, vertices, indices);
    }
}
