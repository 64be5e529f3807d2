// src/main.rs

pub mod app;
pub mod rendering_lib;
pub mod ui;

use std::sync::Arc;

use log::{error, warn};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::WindowBuilder,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use app::FractionApp;

fn init_logging() {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            console_log::init_with_level(log::Level::Warn).expect("Couldn't initialize logger");
        } else {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        }
    }
}

async fn try_run() -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Fraction Shapes")
            .with_inner_size(winit::dpi::LogicalSize::new(800, 600))
            .build(&event_loop)?,
    );

    #[cfg(target_arch = "wasm32")]
    {
        use winit::platform::web::WindowExtWebSys;
        web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| {
                let dst = doc.get_element_by_id("wasm-viewport")?;
                let canvas = web_sys::Element::from(window.canvas()?);
                dst.append_child(&canvas).ok()?;
                Some(())
            })
            .ok_or_else(|| anyhow::anyhow!("could not attach the canvas to #wasm-viewport"))?;
    }

    let mut app_state = FractionApp::new(window.clone()).await?;

    event_loop.run(move |event, target: &EventLoopWindowTarget<()>| {
        target.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
                if !app_state.handle_window_event(event, &window) {
                    match event {
                        WindowEvent::CloseRequested => target.exit(),
                        WindowEvent::Resized(physical_size) => app_state.resize(*physical_size),
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            app_state.set_scale_factor(*scale_factor);
                        }
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                match app_state.render(&window) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        app_state.resize(app_state.get_size());
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        error!("GPU out of memory, exiting");
                        target.exit();
                    }
                    Err(e) => warn!("surface error: {e:?}"),
                }

                if !target.exiting() {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    })?;
    Ok(())
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub async fn run() {
    init_logging();
    if let Err(err) = try_run().await {
        error!("{err:#}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {}
