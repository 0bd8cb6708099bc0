use crate::constants::{CLEAR_COLOR, DEPTH_FORMAT};
use crate::texture::DepthTexture;
use relief_core::constants::*;
use relief_core::mesh;
use relief_core::{Camera, CaseGeometry, ComposedScene, SurfaceBlend, SurfaceVariant, SCENE_WGSL};
use std::sync::{Arc, Mutex};
use web_sys as web;

mod helpers;
mod mesh_buffers;
mod shadow;
mod targets;

use mesh_buffers::GpuMesh;
use shadow::ShadowMap;
use targets::DepthTarget;

pub(crate) use helpers::{create_texture_2d, write_rgba8};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct GlobalsUniform {
    view_proj: [[f32; 4]; 4],
    light_view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    sun: [f32; 4],
    ambient: [f32; 4],
    case_half: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ObjectUniform {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    material: [f32; 4],
    relief: [f32; 4],
}

/// Uniform buffer + bind group for one drawn object (group 1).
struct ObjectBinding {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,
    shadow: ShadowMap,

    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    object_bgl: wgpu::BindGroupLayout,
    depth_sampler: wgpu::Sampler,
    // 1x1 white, bound while no depth map is installed
    fallback_tex: wgpu::Texture,
    fallback_view: wgpu::TextureView,
    bound_depth_version: Option<u64>,

    case_object: ObjectBinding,
    relief_object: ObjectBinding,
    case_mesh: GpuMesh,
    relief_mesh: GpuMesh,

    case_pipeline: wgpu::RenderPipeline,
    // indexed by SurfaceVariant::index
    relief_pipelines: Vec<wgpu::RenderPipeline>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    device_error: Arc<Mutex<Option<String>>>,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        case: &CaseGeometry,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!("request_device error: {:?}", e))?;

        let device_error = Arc::new(Mutex::new(None::<String>));
        {
            let sink = device_error.clone();
            device.on_uncaptured_error(Box::new(move |e: wgpu::Error| {
                log::error!("[render] device error: {}", e);
                if let Ok(mut slot) = sink.lock() {
                    slot.get_or_insert_with(|| e.to_string());
                }
            }));
        }

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });

        // group 0: per-frame globals
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[helpers::uniform_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<GlobalsUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        // group 1: object uniform + depth map
        let vf = wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT;
        let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[
                helpers::uniform_entry(0, vf),
                helpers::texture_entry(
                    1,
                    vf,
                    wgpu::TextureSampleType::Float { filterable: true },
                ),
                helpers::sampler_entry(2, vf, wgpu::SamplerBindingType::Filtering),
            ],
        });
        let depth_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("depth_map_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });
        let (fallback_tex, fallback_view) = helpers::create_texture_2d(
            &device,
            "depth_map_fallback",
            1,
            1,
            wgpu::TextureFormat::Rgba8Unorm,
            wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        );
        helpers::write_rgba8(&queue, &fallback_tex, 1, 1, &[255, 255, 255, 255]);

        let case_object =
            create_object_binding(&device, &object_bgl, &depth_sampler, &fallback_view, "case");
        let relief_object = create_object_binding(
            &device,
            &object_bgl,
            &depth_sampler,
            &fallback_view,
            "relief",
        );

        // group 2: shadow map (main pass only)
        let shadow_bgl = shadow::create_bind_group_layout(&device);
        let shadow_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("shadow_layout"),
            bind_group_layouts: &[&globals_bgl, &object_bgl],
            push_constant_ranges: &[],
        });
        let shadow = ShadowMap::new(
            &device,
            &relief_core::Lights::default().shadow,
            &shadow_bgl,
            &shadow_layout,
            &shader,
        );

        let scene_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_layout"),
            bind_group_layouts: &[&globals_bgl, &object_bgl, &shadow_bgl],
            push_constant_ranges: &[],
        });
        let case_pipeline = helpers::make_scene_pipeline(
            &device,
            "case_pipeline",
            &scene_layout,
            &shader,
            "vs_case",
            "fs_case",
            format,
            DEPTH_FORMAT,
            Some(wgpu::Face::Back),
            SurfaceBlend::Opaque,
        );
        let relief_pipelines = SurfaceVariant::ALL
            .iter()
            .map(|variant| {
                helpers::make_scene_pipeline(
                    &device,
                    variant.label(),
                    &scene_layout,
                    &shader,
                    "vs_relief",
                    variant.fragment_entry(),
                    format,
                    DEPTH_FORMAT,
                    None,
                    variant.blend(),
                )
            })
            .collect();

        let case_mesh = GpuMesh::upload(&device, "case_mesh", &mesh::cuboid(case.size()));
        let relief_mesh = GpuMesh::upload(
            &device,
            "relief_mesh",
            &mesh::plane(1.0, 1.0, RELIEF_SEGMENTS, RELIEF_SEGMENTS),
        );

        let depth = DepthTarget::new(&device, width, height);
        log::info!("[render] WebGPU ready {}x{} {:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            shadow,
            globals_buffer,
            globals_bg,
            object_bgl,
            depth_sampler,
            fallback_tex,
            fallback_view,
            bound_depth_version: None,
            case_object,
            relief_object,
            case_mesh,
            relief_mesh,
            case_pipeline,
            relief_pipelines,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
            device_error,
        })
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Rebind the relief's depth map when the slot version moved.
    pub fn sync_depth_texture(&mut self, version: u64, texture: Option<&DepthTexture>) {
        if self.bound_depth_version == Some(version) {
            return;
        }
        let view = texture.map(|t| t.view()).unwrap_or(&self.fallback_view);
        self.relief_object.bind_group = create_object_bind_group(
            &self.device,
            &self.object_bgl,
            &self.relief_object.buffer,
            &self.depth_sampler,
            view,
            "relief",
        );
        self.bound_depth_version = Some(version);
        let source = if texture.is_some() {
            "textured"
        } else {
            "fallback"
        };
        log::debug!("[render] depth map bound (v{}, {})", version, source);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    pub fn render(&mut self, scene: &ComposedScene, camera: &Camera) -> anyhow::Result<()> {
        if let Some(message) = self.device_error.lock().ok().and_then(|mut e| e.take()) {
            anyhow::bail!("GPU error: {}", message);
        }
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("[render] surface lost/outdated; reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => return Ok(()),
            Err(e) => anyhow::bail!("surface error: {:?}", e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.write_uniforms(scene, camera);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            // The case receives but does not cast.
            let mut spass = self.shadow.begin_pass(&mut encoder);
            if scene.relief.visible {
                spass.set_pipeline(&self.shadow.relief_pipeline);
                spass.set_bind_group(0, &self.globals_bg, &[]);
                spass.set_bind_group(1, &self.relief_object.bind_group, &[]);
                self.relief_mesh.draw(&mut spass);
            }
        }
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            rpass.set_bind_group(2, &self.shadow.bind_group, &[]);

            rpass.set_pipeline(&self.case_pipeline);
            rpass.set_bind_group(1, &self.case_object.bind_group, &[]);
            self.case_mesh.draw(&mut rpass);

            if scene.relief.visible {
                rpass.set_pipeline(&self.relief_pipelines[scene.relief.variant.index()]);
                rpass.set_bind_group(1, &self.relief_object.bind_group, &[]);
                self.relief_mesh.draw(&mut rpass);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn write_uniforms(&self, scene: &ComposedScene, camera: &Camera) {
        let lights = &scene.lights;
        let half = scene.case.size * 0.5;
        let sun = lights.sun_direction();
        let globals = GlobalsUniform {
            view_proj: camera.view_projection().to_cols_array_2d(),
            light_view_proj: lights.sun_view_projection().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
            sun: sun.extend(lights.sun_intensity).to_array(),
            ambient: [lights.ambient_intensity, 0.0, 0.0, 0.0],
            case_half: [half.x, half.z, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let case = ObjectUniform {
            model: scene.case.model.to_cols_array_2d(),
            color: [scene.case.color[0], scene.case.color[1], scene.case.color[2], 1.0],
            material: [CASE_ROUGHNESS, 0.0, 0.0, 0.0],
            relief: [0.0; 4],
        };
        self.queue
            .write_buffer(&self.case_object.buffer, 0, bytemuck::bytes_of(&case));

        let relief = &scene.relief;
        let relief_uniform = ObjectUniform {
            model: relief.model.to_cols_array_2d(),
            color: [RELIEF_COLOR[0], RELIEF_COLOR[1], RELIEF_COLOR[2], 1.0],
            material: [RELIEF_ROUGHNESS, RELIEF_METALNESS, 0.0, 0.0],
            relief: [
                relief.displacement_scale,
                if relief.textured { 1.0 } else { 0.0 },
                1.0 / RELIEF_SEGMENTS as f32,
                0.0,
            ],
        };
        self.queue.write_buffer(
            &self.relief_object.buffer,
            0,
            bytemuck::bytes_of(&relief_uniform),
        );
    }
}

impl Drop for GpuState {
    fn drop(&mut self) {
        self.fallback_tex.destroy();
    }
}

fn create_object_binding(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    view: &wgpu::TextureView,
    label: &str,
) -> ObjectBinding {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<ObjectUniform>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = create_object_bind_group(device, layout, &buffer, sampler, view, label);
    ObjectBinding { buffer, bind_group }
}

fn create_object_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    buffer: &wgpu::Buffer,
    sampler: &wgpu::Sampler,
    view: &wgpu::TextureView,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
