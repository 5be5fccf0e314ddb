use crate::Canvas;

/// User events posted to the event loop through its proxy.
///
/// * `Access` carries requests from assistive technology, relayed by [`accesskit_winit`].
/// * `Canvas` delivers the GPU surface once the async setup in [`Canvas::new`] finishes.
#[derive(derive_more::From)]
pub enum Event {
    #[from(accesskit_winit::Event)]
    Access(accesskit_winit::Event),
    #[from(Canvas)]
    Canvas(Canvas),
}
