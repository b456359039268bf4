pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::assets::Sprite;
use crate::camera::Camera;
use crate::draw_list::DrawList;
use crate::error::ClientError;
use crate::mesh::{create_rectangle, Mesh};
use game_core::{Aabb, Params};
use resources::{GameBuffers, SpriteTexture};
use wgpu::*;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,

    pub rect_pipeline: RenderPipeline,
    pub sprite_pipeline: RenderPipeline,

    pub camera_bind_group: BindGroup,
    pub sprite_bind_group: BindGroup,

    pub buffers: GameBuffers,
    #[allow(dead_code)]
    pub sprite_texture: SpriteTexture,
    pub quad: Mesh,
}

impl Renderer {
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        sprite: &Sprite,
    ) -> Result<Self, ClientError> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::orthographic(Params::SCREEN_WIDTH, Params::SCREEN_HEIGHT);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let sprite_texture = resources::create_sprite_texture(&ctx.device, &ctx.queue, sprite);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);
        let quad = create_rectangle(&ctx.device);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        let sprite_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Sprite Bind Group"),
            layout: &pipes.sprite_layout,
            entries: &[
                BindGroupEntry {
                    binding: 0,
                    resource: BindingResource::TextureView(&sprite_texture.view),
                },
                BindGroupEntry {
                    binding: 1,
                    resource: BindingResource::Sampler(&sprite_texture.sampler),
                },
            ],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            rect_pipeline: pipes.rect_pipeline,
            sprite_pipeline: pipes.sprite_pipeline,
            camera_bind_group,
            sprite_bind_group,
            buffers,
            sprite_texture,
            quad,
        })
    }

    /// The logical 320x240 screen stretches over whatever the canvas size is
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
        log::debug!("Surface resized to {}x{}", width, height);
    }

    pub fn draw(&mut self, list: &DrawList, sprite: Option<Aabb>) -> Result<(), ClientError> {
        draw::draw_frame(self, list, sprite)
    }
}
