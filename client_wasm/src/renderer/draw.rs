use super::resources::MAX_INSTANCES;
use super::Renderer;
use crate::draw_list::{DrawList, InstanceData, WHITE};
use crate::error::ClientError;
use game_core::Aabb;
use wgpu::*;

pub fn draw_frame(
    renderer: &mut Renderer,
    list: &DrawList,
    sprite: Option<Aabb>,
) -> Result<(), ClientError> {
    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| ClientError::Frame(format!("{:?}", e)))?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let rect_count = update_buffers(renderer, list, sprite);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass, rect_count, sprite.is_some());
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &Renderer, list: &DrawList, sprite: Option<Aabb>) -> u32 {
    let mut rects = list.instances();
    if rects.len() > MAX_INSTANCES {
        log::warn!("Dropping {} rects over the instance limit", rects.len() - MAX_INSTANCES);
        rects = &rects[..MAX_INSTANCES];
    }
    if !rects.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.rects, 0, bytemuck::cast_slice(rects));
    }

    if let Some(rect) = sprite {
        let instance = InstanceData {
            rect: [rect.pos.x, rect.pos.y, rect.size.x, rect.size.y],
            tint: WHITE,
        };
        renderer
            .queue
            .write_buffer(&renderer.buffers.sprite, 0, bytemuck::cast_slice(&[instance]));
    }

    rects.len() as u32
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass<'_>, rect_count: u32, with_sprite: bool) {
    let mesh = &renderer.quad;
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);

    if rect_count > 0 {
        pass.set_pipeline(&renderer.rect_pipeline);
        pass.set_vertex_buffer(1, renderer.buffers.rects.slice(..));
        pass.draw_indexed(0..mesh.index_count, 0, 0..rect_count);
    }

    if with_sprite {
        pass.set_pipeline(&renderer.sprite_pipeline);
        pass.set_bind_group(1, &renderer.sprite_bind_group, &[]);
        pass.set_vertex_buffer(1, renderer.buffers.sprite.slice(..));
        pass.draw_indexed(0..mesh.index_count, 0, 0..1);
    }
}
