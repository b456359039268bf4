use super::shaders::PONG_SHADER;
use crate::draw_list::InstanceData;
use crate::mesh::Vertex;
use wgpu::*;

pub struct PipelineState {
    pub rect_pipeline: RenderPipeline,
    pub sprite_pipeline: RenderPipeline,
    pub camera_layout: BindGroupLayout,
    pub sprite_layout: BindGroupLayout,
}

const VERTEX_ATTRIBUTES: [VertexAttribute; 1] = [VertexAttribute {
    offset: 0,
    shader_location: 0,
    format: VertexFormat::Float32x2,
}];

const INSTANCE_ATTRIBUTES: [VertexAttribute; 2] = [
    VertexAttribute {
        offset: 0,
        shader_location: 1,
        format: VertexFormat::Float32x4, // rect
    },
    VertexAttribute {
        offset: std::mem::size_of::<[f32; 4]>() as u64,
        shader_location: 2,
        format: VertexFormat::Float32x4, // tint
    },
];

fn buffer_layouts() -> [VertexBufferLayout<'static>; 2] {
    [
        VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRIBUTES,
        },
        VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceData>() as u64,
            step_mode: VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRIBUTES,
        },
    ]
}

fn quad_pipeline(
    device: &Device,
    label: &str,
    layout: &PipelineLayout,
    shader: &ShaderModule,
    fragment_entry: &str,
    format: TextureFormat,
) -> RenderPipeline {
    device.create_render_pipeline(&RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &buffer_layouts(),
            compilation_options: Default::default(),
        },
        fragment: Some(FragmentState {
            module: shader,
            entry_point: Some(fragment_entry),
            targets: &[Some(ColorTargetState {
                format,
                blend: Some(BlendState::ALPHA_BLENDING),
                write_mask: ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: PrimitiveState {
            topology: PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: FrontFace::Ccw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: None,
        multisample: MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

pub fn create_pipelines(device: &Device, format: TextureFormat) -> PipelineState {
    let camera_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: Some("Camera Bind Group Layout"),
        entries: &[BindGroupLayoutEntry {
            binding: 0,
            visibility: ShaderStages::VERTEX,
            ty: BindingType::Buffer {
                ty: BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });

    let sprite_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: Some("Sprite Bind Group Layout"),
        entries: &[
            BindGroupLayoutEntry {
                binding: 0,
                visibility: ShaderStages::FRAGMENT,
                ty: BindingType::Texture {
                    multisampled: false,
                    view_dimension: TextureViewDimension::D2,
                    sample_type: TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            BindGroupLayoutEntry {
                binding: 1,
                visibility: ShaderStages::FRAGMENT,
                ty: BindingType::Sampler(SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });

    let shader = device.create_shader_module(ShaderModuleDescriptor {
        label: Some("Pong Shader"),
        source: ShaderSource::Wgsl(PONG_SHADER.into()),
    });

    let rect_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("Rect Pipeline Layout"),
        bind_group_layouts: &[&camera_layout],
        push_constant_ranges: &[],
    });

    let sprite_pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("Sprite Pipeline Layout"),
        bind_group_layouts: &[&camera_layout, &sprite_layout],
        push_constant_ranges: &[],
    });

    let rect_pipeline = quad_pipeline(
        device,
        "Rect Pipeline",
        &rect_layout,
        &shader,
        "fs_main",
        format,
    );
    let sprite_pipeline = quad_pipeline(
        device,
        "Sprite Pipeline",
        &sprite_pipeline_layout,
        &shader,
        "fs_sprite",
        format,
    );

    PipelineState {
        rect_pipeline,
        sprite_pipeline,
        camera_layout,
        sprite_layout,
    }
}
