use crate::{view, Act, Blunder, Board, Canvas, Cmd, Landed};
use std::sync::Arc;
use winit::{event::WindowEvent, window};

/// The `lens` module provides the [`Lens`] struct, which holds the window and everything needed
/// to show the joke in it.
///
/// # Representing window state with `Lens`
///
/// A lens pairs the [`winit`] window with three views of the same [`Board`]:
///
/// * the egui context and its winit glue, which turn window events into egui input and egui
///   output into paint jobs,
/// * the [`Canvas`], which puts the paint jobs on screen once the GPU is ready,
/// * the [`accesskit_winit::Adapter`], which carries the [`crate::Nav`] tree to screen readers.
#[derive(derive_getters::Getters)]
pub struct Lens {
    pub adapter: accesskit_winit::Adapter,
    #[getter(skip)]
    canvas: Option<Canvas>,
    context: egui::Context,
    #[getter(skip)]
    state: egui_winit::State,
    window: Arc<window::Window>,
}

impl Lens {
    pub fn new(adapter: accesskit_winit::Adapter, window: Arc<window::Window>) -> Self {
        let context = egui::Context::default();
        context.set_visuals(egui::Visuals::dark());
        let state = egui_winit::State::new(
            context.clone(),
            egui::ViewportId::ROOT,
            &*window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        Self {
            adapter,
            canvas: None,
            context,
            state,
            window,
        }
    }

    /// Installs the canvas built for this window, and asks for the first frame.
    pub fn attach(&mut self, canvas: Canvas) {
        self.state
            .set_max_texture_side(canvas.max_texture_side());
        self.canvas = Some(canvas);
        self.window.request_redraw();
        tracing::trace!("Canvas attached.");
    }

    /// Feeds a window event to accesskit and egui.  Redraws when egui wants one, and returns
    /// `true` when egui put the event to use, so one key press is never also a command.
    ///
    /// egui claims every key while any widget has focus.  We have no text fields, so a key press
    /// only counts as used when a button is focused and the key is one egui acts on, see
    /// [`Cmd::yields_to_focus`].
    pub fn on_window_event(&mut self, event: &WindowEvent) -> bool {
        self.adapter.process_event(&self.window, event);
        let response = self.state.on_window_event(&self.window, event);
        if response.repaint {
            self.window.request_redraw();
        }
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.has_focus() && Cmd::yields_to_focus(&event.logical_key)
            }
            _ => response.consumed,
        }
    }

    /// Whether some widget holds keyboard focus.
    pub fn has_focus(&self) -> bool {
        self.context.memory(|memory| memory.focused().is_some())
    }

    pub fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.resize(size);
        }
        self.window.request_redraw();
    }

    /// The `frame` method runs the egui view over `board` and paints the result.  Returns the act
    /// for any button clicked during the frame.
    ///
    /// A lost or outdated surface is reconfigured and redrawn, a timeout skips the frame.  Running
    /// out of GPU memory is the one failure we pass up.
    #[tracing::instrument(skip_all)]
    pub fn frame(&mut self, board: &Board) -> Landed<Option<Act>> {
        let canvas = match self.canvas.as_mut() {
            Some(canvas) => canvas,
            None => return Ok(None),
        };
        let input = self.state.take_egui_input(&self.window);
        let mut act = None;
        let output = self.context.run(input, |ctx| {
            act = view::stage(ctx, board);
        });
        self.state
            .handle_platform_output(&self.window, output.platform_output);
        let jobs = self
            .context
            .tessellate(output.shapes, output.pixels_per_point);
        match canvas.render(&jobs, &output.textures_delta, output.pixels_per_point) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                canvas.resize(self.window.inner_size());
                self.window.request_redraw();
            }
            Err(wgpu::SurfaceError::Timeout) => {
                // Ignore timeouts.
                tracing::trace!("Frame timed out.");
            }
            Err(e) => return Err(Blunder::Frame(e)),
        }
        if act.is_some() {
            self.window.request_redraw();
        }
        Ok(act)
    }
}
