use jester::{trace_init, App, Event, Landed};
use winit::event_loop;

#[tokio::main]
async fn main() -> Landed<()> {
    trace_init();
    let event_loop = event_loop::EventLoop::<Event>::with_user_event().build()?;
    event_loop.set_control_flow(event_loop::ControlFlow::Wait);
    let mut app = App::new(event_loop.create_proxy());
    event_loop.run_app(&mut app)?;
    // Let the voice finish its sentence.
    app.retire().shutdown().await?;
    Ok(())
}
