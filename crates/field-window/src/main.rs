// File: crates/field-window/src/main.rs
// Summary: Windowed field viewer; renders FieldChart frames to a window via RGBA blit (CPU) using winit + softbuffer.
// Controls: mouse wheel zooms about the view centre, 0 or Home resets the zoom, R reloads the charge file, Esc quits.

use anyhow::{anyhow, Result};
use field_core::{read_charges_text, FieldChart, FieldConfig, PlotError, RenderAdapter, Session, ZoomDirection};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, KeyboardInput, MouseScrollDelta, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const TITLE: &str = "Electrostatic field";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Args: <charges file> [config.toml]
    let mut args = std::env::args().skip(1);
    let charges_path = PathBuf::from(args.next().ok_or_else(|| anyhow!("usage: field-window <charges> [config.toml]"))?);
    let config = match args.next() {
        Some(p) => FieldConfig::from_file(p)?,
        None => FieldConfig::default(),
    };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(winit::dpi::LogicalSize::new(config.render.width as f64, config.render.height as f64))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut chart = FieldChart::new(config.render.to_options());
    let size = window.inner_size();
    chart.resize(size.width as i32, size.height as i32);
    let mut session = Session::new(config.zoom);

    match plot_file(&mut session, &mut chart, &config, &charges_path) {
        Ok(()) => window.set_title(&format!("{TITLE} - {}", charges_path.display())),
        Err(e) => report(&window, &e),
    }

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    let (w, h) = (new_size.width.max(1), new_size.height.max(1));
                    chart.resize(w as i32, h as i32);
                    if let Err(e) = chart.redraw() {
                        error!("redraw failed: {e:#}");
                    }
                    window.request_redraw();
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let dy = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y as f64,
                        MouseScrollDelta::PixelDelta(p) => p.y,
                    };
                    let Some(direction) = ZoomDirection::from_wheel(dy) else { return };
                    match session.request_zoom(direction, &mut chart) {
                        Ok(true) => window.request_redraw(),
                        Ok(false) => {}
                        Err(e) => report(&window, &e),
                    }
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Escape => *cf = ControlFlow::Exit,
                    VirtualKeyCode::Key0 | VirtualKeyCode::Home => match session.reset_view(&mut chart) {
                        Ok(true) => window.request_redraw(),
                        Ok(false) => {}
                        Err(e) => report(&window, &e),
                    },
                    VirtualKeyCode::R => {
                        // a failed reload keeps the previous plot on screen
                        match plot_file(&mut session, &mut chart, &config, &charges_path) {
                            Ok(()) => {
                                info!(path = %charges_path.display(), "reloaded");
                                window.set_title(&format!("{TITLE} - {}", charges_path.display()));
                            }
                            Err(e) => report(&window, &e),
                        }
                        window.request_redraw();
                    }
                    _ => {}
                },
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&mut surface, &chart) {
                    error!("present failed: {e:#}");
                }
            }
            _ => {}
        }
    });
}

fn plot_file(session: &mut Session, chart: &mut FieldChart, config: &FieldConfig, path: &Path) -> Result<(), PlotError> {
    let text = read_charges_text(path)?;
    session.submit(&config.plot_inputs(text), chart)
}

fn report(window: &winit::window::Window, e: &PlotError) {
    error!("{e:#}");
    window.set_title(&format!("{TITLE} - error: {e}"));
}

/// Blit the last frame as 0RGB u32 pixels.
fn present(surface: &mut softbuffer::Surface, chart: &FieldChart) -> Result<()> {
    let Some(frame) = chart.frame() else { return Ok(()) };
    let (w, h) = (frame.width.max(1) as u32, frame.height.max(1) as u32);
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else { return Ok(()) };
    surface.resize(nw, nh).map_err(|e| anyhow!("resize: {e}"))?;

    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e}"))?;
    for (dst, px) in buffer.iter_mut().zip(frame.pixels.chunks_exact(4)) {
        let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
        *dst = (r << 16) | (g << 8) | b;
    }
    buffer.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
