use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
};

use crate::{context::Context, Runnable};

/// Runs `game` until it asks to quit. Never returns.
///
/// One frame is: measure delta, `tick`, `render`, present, then sleep off the rest of the
/// frame budget. A quit request is honoured after the frame that made it has been presented.
pub fn run<R>(event_loop: EventLoop<()>, mut ctx: Context, mut game: R) -> !
where
    R: Runnable + 'static,
{
    // Texture loading happened since the clock was created
    ctx.time.reset();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == ctx.window().id() => {
                if !ctx.input.handle_window_event(event) {
                    match event {
                        WindowEvent::Resized(size) => ctx.graphics.resize(*size),
                        WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                            // new_inner_size is &&mut so we have to dereference it twice
                            ctx.graphics.resize(**new_inner_size);
                        }
                        _ => {}
                    }
                }
            }
            Event::MainEventsCleared => {
                ctx.window().request_redraw();
            }
            Event::RedrawRequested(window_id) if window_id == ctx.window().id() => {
                ctx.time.begin_frame();

                game.tick(&mut ctx);
                game.render(&mut ctx);

                match ctx.graphics.render() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        log::warn!("surface lost, reconfiguring");
                        let size = ctx.graphics.size;
                        ctx.graphics.resize(size);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("out of GPU memory, shutting down");
                        ctx.quit();
                    }
                    Err(e) => log::warn!("dropped frame: {:?}", e),
                }

                if ctx.should_quit() {
                    *control_flow = ControlFlow::Exit;
                    return;
                }

                ctx.time.pace();
            }
            Event::LoopDestroyed => log::info!("event loop finished"),
            _ => {}
        }
    })
}
