//! Immediate-style sprite renderer.
//!
//! Game code calls `draw(sprite)` any number of times between `begin_frame`
//! and `end_frame`. Each call records one quad (four vertices in strip
//! order) plus the texture to bind for it. `end_frame` streams every recorded
//! vertex into a single buffer and issues one draw per sprite, in call
//! order, so later calls paint over earlier ones. No batching, no sorting.

use std::collections::HashMap;
use std::path::Path;

use pe_core::graphics::Graphics;
use pe_core::math::{translate_x, translate_y};
use pe_core::quad::calculate_quad;
use pe_core::sprite::{Sprite, TextureId};
use pe_core::Vec2;

use crate::gpu_context::GpuContext;
use crate::sprite_pipeline::SpritePipeline;
use crate::texture::{DecodedImage, Texture, TextureFilter};
use crate::vertex::SpriteVertex;

/// #242424 in sRGB.
const CLEAR_GREY: f64 = 0.14;
const MISSING_TEXTURE_RGBA: [u8; 4] = [255, 0, 255, 255];

/// Destination corners in NDC paired with their source UVs, in strip order.
pub fn sprite_vertices(sprite: &Sprite, display: (u32, u32)) -> [SpriteVertex; 4] {
    let [u0, v0, u1, v1] = sprite.uv_rect();
    let uvs = [
        Vec2::new(u0, v0),
        Vec2::new(u1, v0),
        Vec2::new(u0, v1),
        Vec2::new(u1, v1),
    ];
    let strip = calculate_quad(sprite).strip();

    std::array::from_fn(|i| {
        let ndc = Vec2::new(
            translate_x(strip[i].x, display.0),
            translate_y(strip[i].y, display.1),
        );
        SpriteVertex::new(ndc, uvs[i])
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    pub texture: TextureId,
    pub first_vertex: u32,
}

/// CPU side of a frame: recorded vertices and one command per sprite.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub vertices: Vec<SpriteVertex>,
    pub commands: Vec<DrawCommand>,
}

impl FrameRecorder {
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.commands.clear();
    }

    /// Returns false when the sprite is skipped.
    pub fn record(&mut self, sprite: &Sprite, display: (u32, u32)) -> bool {
        if !sprite.visible || sprite.id.is_none() {
            return false;
        }
        let first_vertex = self.vertices.len() as u32;
        self.vertices
            .extend_from_slice(&sprite_vertices(sprite, display));
        self.commands.push(DrawCommand {
            texture: sprite.id,
            first_vertex,
        });
        true
    }
}

struct GpuSpriteTexture {
    texture: Texture,
    bind_group: wgpu::BindGroup,
}

pub struct Renderer {
    pub gpu: GpuContext,
    pipeline: SpritePipeline,
    filter: TextureFilter,
    display: (u32, u32),
    textures: HashMap<TextureId, GpuSpriteTexture>,
    next_texture_id: u32,
    recorder: FrameRecorder,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    frame: Option<(wgpu::SurfaceTexture, wgpu::TextureView)>,
}

impl Renderer {
    pub fn new(gpu: GpuContext, display: (u32, u32), pixel_art: bool) -> Self {
        let pipeline = SpritePipeline::new(&gpu.device, gpu.surface_format);
        let vertex_buffer = create_vertex_buffer(&gpu.device, 4);
        Self {
            gpu,
            pipeline,
            filter: TextureFilter::for_pixel_art(pixel_art),
            display,
            textures: HashMap::new(),
            next_texture_id: 1,
            recorder: FrameRecorder::default(),
            vertex_buffer,
            vertex_capacity: 4,
            frame: None,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn try_load_texture(&mut self, path: &Path) -> Result<Sprite, String> {
        let bytes = std::fs::read(path)
            .map_err(|e| format!("Failed to read texture '{}': {e}", path.display()))?;
        let label = path.to_string_lossy();
        let texture = Texture::from_bytes(
            &self.gpu.device,
            &self.gpu.queue,
            &bytes,
            &label,
            self.filter,
        )?;
        Ok(self.register(texture))
    }

    fn missing_texture(&mut self, label: &str) -> Sprite {
        let image = DecodedImage {
            rgba: MISSING_TEXTURE_RGBA.to_vec(),
            width: 1,
            height: 1,
        };
        let texture = Texture::from_image(
            &self.gpu.device,
            &self.gpu.queue,
            &image,
            label,
            self.filter,
        );
        self.register(texture)
    }

    fn register(&mut self, texture: Texture) -> Sprite {
        let id = TextureId(self.next_texture_id);
        self.next_texture_id += 1;
        let (width, height) = texture.size;
        let bind_group = self
            .pipeline
            .create_texture_bind_group(&self.gpu.device, &texture);
        self.textures.insert(
            id,
            GpuSpriteTexture {
                texture,
                bind_group,
            },
        );
        log::debug!("[TEX ID {}] Texture loaded ({}x{})", id.0, width, height);
        Sprite::new(id, width, height)
    }

    /// Acquire the next surface image and forget last frame's draws.
    pub fn begin_frame(&mut self) {
        self.recorder.clear();
        self.frame = self.gpu.acquire_frame();
    }

    /// Clear, draw every recorded sprite, and present.
    pub fn end_frame(&mut self) {
        let Some((output, view)) = self.frame.take() else {
            return;
        };

        self.ensure_vertex_capacity(self.recorder.vertices.len());
        if !self.recorder.vertices.is_empty() {
            self.gpu.queue.write_buffer(
                &self.vertex_buffer,
                0,
                bytemuck::cast_slice(&self.recorder.vertices),
            );
        }

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let grey = if self.gpu.surface_format.is_srgb() {
                CLEAR_GREY.powf(2.2)
            } else {
                CLEAR_GREY
            };
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Sprite Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: grey,
                            g: grey,
                            b: grey,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            render_pass.set_pipeline(&self.pipeline.render_pipeline);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

            for command in &self.recorder.commands {
                let Some(texture) = self.textures.get(&command.texture) else {
                    log::warn!(
                        "Skipping draw of unloaded texture id {}",
                        command.texture.0
                    );
                    continue;
                };
                render_pass.set_bind_group(0, &texture.bind_group, &[]);
                render_pass.draw(command.first_vertex..command.first_vertex + 4, 0..1);
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }

    fn ensure_vertex_capacity(&mut self, vertex_count: usize) {
        let needed = vertex_count.max(4);
        if needed > self.vertex_capacity {
            self.vertex_capacity = needed.next_power_of_two();
            self.vertex_buffer = create_vertex_buffer(&self.gpu.device, self.vertex_capacity);
        }
    }
}

impl Graphics for Renderer {
    fn load_texture(&mut self, path: &Path) -> Sprite {
        match self.try_load_texture(path) {
            Ok(sprite) => sprite,
            Err(err) => {
                log::error!("{err}. Substituting placeholder texture.");
                self.missing_texture(&path.to_string_lossy())
            }
        }
    }

    fn unload_texture(&mut self, sprite: &Sprite) {
        if sprite.id.is_none() {
            return;
        }
        if let Some(gpu_texture) = self.textures.remove(&sprite.id) {
            gpu_texture.texture.texture.destroy();
            log::debug!("[TEX ID {}] Unloaded texture data from VRAM", sprite.id.0);
        }
    }

    fn draw(&mut self, sprite: &Sprite) {
        if !self.recorder.record(sprite, self.display) {
            log::trace!("Skipped sprite with texture id {}", sprite.id.0);
        }
    }

    fn display_size(&self) -> (u32, u32) {
        self.display
    }
}

fn create_vertex_buffer(device: &wgpu::Device, vertex_capacity: usize) -> wgpu::Buffer {
    let byte_len = (vertex_capacity * std::mem::size_of::<SpriteVertex>()).max(1) as u64;
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Sprite Vertex Buffer"),
        size: byte_len,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
