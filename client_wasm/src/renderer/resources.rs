use crate::assets::Sprite;
use crate::camera::{Camera, CameraUniform};
use crate::draw_list::InstanceData;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Upper bound on rects per frame. Two three-digit scores and the paddles fit easily.
pub const MAX_INSTANCES: usize = 256;

pub struct GameBuffers {
    pub camera: Buffer,
    pub rects: Buffer,
    pub sprite: Buffer,
}

pub struct SpriteTexture {
    #[allow(dead_code)]
    pub texture: Texture,
    pub view: TextureView,
    pub sampler: Sampler,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    let instance_size = std::mem::size_of::<InstanceData>() as u64;

    let rects = device.create_buffer(&BufferDescriptor {
        label: Some("Rect Instance Buffer"),
        size: instance_size * MAX_INSTANCES as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let sprite = device.create_buffer(&BufferDescriptor {
        label: Some("Sprite Instance Buffer"),
        size: instance_size,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GameBuffers {
        camera: camera_buffer,
        rects,
        sprite,
    }
}

pub fn create_sprite_texture(device: &Device, queue: &Queue, sprite: &Sprite) -> SpriteTexture {
    let size = Extent3d {
        width: sprite.width,
        height: sprite.height,
        depth_or_array_layers: 1,
    };

    let texture = device.create_texture(&TextureDescriptor {
        label: Some("Ball Texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: TextureDimension::D2,
        format: TextureFormat::Rgba8UnormSrgb,
        usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: Origin3d::ZERO,
            aspect: TextureAspect::All,
        },
        &sprite.rgba,
        TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * sprite.width),
            rows_per_image: Some(sprite.height),
        },
        size,
    );

    let view = texture.create_view(&TextureViewDescriptor::default());

    // Nearest keeps the pixel-art edge when scaled up
    let sampler = device.create_sampler(&SamplerDescriptor {
        label: Some("Ball Sampler"),
        address_mode_u: AddressMode::ClampToEdge,
        address_mode_v: AddressMode::ClampToEdge,
        address_mode_w: AddressMode::ClampToEdge,
        mag_filter: FilterMode::Nearest,
        min_filter: FilterMode::Nearest,
        mipmap_filter: FilterMode::Nearest,
        ..Default::default()
    });

    SpriteTexture {
        texture,
        view,
        sampler,
    }
}
