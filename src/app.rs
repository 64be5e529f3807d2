// src/app.rs

use std::sync::Arc;

use anyhow::{anyhow, Context};
use log::{info, warn};
use winit::{event::WindowEvent, window::Window};

use fraction_shapes::config::DEFAULT_BASE_SIZE;
use fraction_shapes::{FractionFigure, Mesh, Point2, RenderStyle, SceneLayout, Tolerance};

use crate::rendering_lib::renderer::Renderer;
use crate::rendering_lib::shader::WGSL_SHADER_SOURCE;
use crate::ui::{build_ui, ControlPanel};

pub struct FractionApp {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    scale_factor: f64,
    renderer: Renderer,
    panel: ControlPanel,
    tolerance: Tolerance,
    mesh: Mesh,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl FractionApp {
    pub async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone()).context("creating window surface")?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow!("no GPU adapter can present to this window"))?;
        info!("using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    label: None,
                },
                None,
            )
            .await
            .context("requesting GPU device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow!("surface reports no texture formats"))?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = Renderer::new(
            &device,
            config.format,
            WGSL_SHADER_SOURCE,
            config.width as f32,
            config.height as f32,
        );

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, config.format, None, 1);

        let mut app = Self {
            surface,
            device,
            queue,
            config,
            size,
            scale_factor: window.scale_factor(),
            renderer,
            panel: ControlPanel::default(),
            tolerance: Tolerance::default(),
            mesh: Mesh::new(),
            egui_ctx,
            egui_state,
            egui_renderer,
        };
        app.regenerate();
        Ok(app)
    }

    pub fn get_size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.size
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.regenerate();
        }
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
        self.regenerate();
    }

    /// Shape centered in the window, sized in logical pixels.
    fn layout(&self) -> SceneLayout {
        SceneLayout {
            center: Point2::new(self.config.width as f64 / 2.0, self.config.height as f64 / 2.0),
            base_size: DEFAULT_BASE_SIZE * self.scale_factor,
        }
    }

    fn style(&self) -> RenderStyle {
        let defaults = RenderStyle::default();
        RenderStyle {
            stroke_width: defaults.stroke_width * self.scale_factor,
            shade_color: self.panel.shade_color,
            ..defaults
        }
    }

    /// Rebuilds the figure from the panel and uploads its mesh.
    fn regenerate(&mut self) {
        let request = match self.panel.request() {
            Ok(request) => request,
            Err(err) => {
                warn!("ignoring control panel state: {err}");
                return;
            }
        };
        let figure = FractionFigure::build(&request, &self.layout(), self.tolerance);
        self.mesh.clear();
        self.mesh.append_figure(&figure, &self.style());
        self.renderer.upload_mesh(&self.device, &self.queue, &self.mesh);
    }

    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        let raw_input = self.egui_state.take_egui_input(window);
        let mut changed = false;
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            changed = build_ui(ctx, &mut self.panel);
        });
        if changed {
            self.regenerate();
        }

        let output_texture = self.surface.get_current_texture()?;
        let view = output_texture.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Main Command Encoder"),
        });

        let [r, g, b, a] = RenderStyle::default().background.map(f64::from);
        self.renderer.render_frame(
            &self.queue,
            &mut encoder,
            &view,
            self.config.width as f32,
            self.config.height as f32,
            wgpu::Color { r, g, b, a },
        );

        self.egui_state.handle_platform_output(window, full_output.platform_output);
        let tris = self.egui_ctx.tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: window.scale_factor() as f32,
        };
        self.egui_renderer.update_buffers(&self.device, &self.queue, &mut encoder, &tris, &screen_descriptor);
        {
            let mut gui_render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("GUI Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations { load: wgpu::LoadOp::Load, store: wgpu::StoreOp::Store },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            self.egui_renderer.render(&mut gui_render_pass, &tris, &screen_descriptor);
        }
        for tex_id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(tex_id);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output_texture.present();
        Ok(())
    }

    /// Returns true when egui consumed the event.
    pub fn handle_window_event(&mut self, event: &WindowEvent, window: &Window) -> bool {
        self.egui_state.on_window_event(window, event).consumed
    }
}
