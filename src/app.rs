use crate::{catalog, Act, Blunder, Board, Canvas, Catalog, Cmd, Cue, Event, Landed, Lens, Nav};
use crate::{Routine, Session, Settings, Voice};
use rand::SeedableRng;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::{
    dpi,
    event::{self, WindowEvent},
    event_loop, window,
};

/// Name of the configuration file, without extension, read from the working directory.
pub const CONFIG_NAME: &str = "Jester";

/// The `app` module contains the `App` struct, which holds the parent-level top view of the
/// application state.
///
/// # Telling jokes with Jester
///
/// The `App` struct owns the [`Routine`], the state of the show, and the [`Lens`] through which
/// the user watches it.  Every way of asking for something (a button, a key, a screen reader
/// action) becomes an [`Act`], which we hand to [`Routine::perform`].  The [`Cue`] that comes
/// back tells us whether to redraw, do nothing, or close up shop.
///
/// ### Fields
///
/// * The `cmd` field holds the [`Cmd`] struct, which maps keyboard inputs to acts.
/// * The `lens` field holds the window, once [`ApplicationHandler::resumed`] has created it.
/// * The `nav` field holds the [`Nav`] accessibility tree layout.
/// * The `proxy` field holds the [`event_loop::EventLoopProxy`] used to post the finished
///   [`Canvas`] back from its async setup.
/// * The `routine` field holds the [`Routine`].
/// * The `settings` field holds the [`Settings`] read from `Jester.toml`.
pub struct App {
    cmd: Cmd,
    lens: Option<Lens>,
    nav: Nav,
    proxy: event_loop::EventLoopProxy<Event>,
    routine: Routine,
    settings: Settings,
}

impl App {
    /// Creates an instance of `App` from the configuration in `Jester.toml`, see
    /// [`App::with_config`].
    pub fn new(proxy: event_loop::EventLoopProxy<Event>) -> Self {
        let config = Settings::read(CONFIG_NAME);
        Self::with_config(proxy, &config)
    }

    /// Reads settings and key bindings from `config`, loads the joke file and starts the speech
    /// worker.  Tells the first joke straight away unless `tell_on_start` is off.
    ///
    /// Must be called from within a [`tokio`] runtime, for the sake of the speech worker.
    #[tracing::instrument(skip_all)]
    pub fn with_config(proxy: event_loop::EventLoopProxy<Event>, config: &config::Config) -> Self {
        let settings = Settings::or_default(config);
        let cmd = Cmd::from(config);
        tracing::trace!("{:?}", cmd);
        let catalog = Catalog::load(&catalog::resolve(settings.jokes()));
        let voice = settings.speech().voice();
        let mut routine = Routine::new(
            Session::new(catalog),
            voice,
            rand::rngs::StdRng::from_entropy(),
        );
        if *settings.tell_on_start() {
            routine.tell();
        }
        let nav = Nav::new(settings.title());
        Self {
            cmd,
            lens: None,
            nav,
            proxy,
            routine,
            settings,
        }
    }

    fn board(&self) -> Board {
        Board::new(self.settings.heading(), self.routine.session())
    }

    /// The `request_window` method creates the window and its [`Lens`], then spawns the async
    /// [`App::request_canvas`] to connect the GPU.
    ///
    /// [`accesskit_winit`] wants the window invisible until its adapter exists, so we build it
    /// hidden and show it after.
    ///
    /// Will [`Blunder::Window`] when [`event_loop::ActiveEventLoop::create_window`] fails.
    #[tracing::instrument(skip_all)]
    pub fn request_window(&mut self, event_loop: &event_loop::ActiveEventLoop) -> Landed<()> {
        let attr = window::Window::default_attributes()
            .with_title(self.settings.title())
            .with_inner_size(dpi::LogicalSize::new(
                *self.settings.width(),
                *self.settings.height(),
            ))
            .with_visible(false);
        let window = event_loop.create_window(attr)?;
        let adapter = accesskit_winit::Adapter::with_event_loop_proxy(&window, self.proxy.clone());
        window.set_visible(true);
        let window = Arc::new(window);
        tracing::trace!("Window created: {:?}", window.id());

        let proxy = self.proxy.clone();
        let target = Arc::clone(&window);
        tokio::spawn(async move {
            match Self::request_canvas(proxy, target).await {
                Ok(_) => tracing::trace!("Canvas created."),
                Err(e) => tracing::warn!("Canvas not created: {e}"),
            }
        });
        self.lens = Some(Lens::new(adapter, window));
        Ok(())
    }

    pub async fn request_canvas(
        proxy: event_loop::EventLoopProxy<Event>,
        window: Arc<window::Window>,
    ) -> Landed<()> {
        let canvas = Canvas::new(window).await?;
        proxy
            .send_event(Event::Canvas(canvas))
            .map_err(|_| Blunder::ProxyClosed)?;
        Ok(())
    }

    /// The `act` method performs `act` on the routine and follows the resulting [`Cue`].
    #[tracing::instrument(skip(self, event_loop))]
    pub fn act(&mut self, act: Act, event_loop: &event_loop::ActiveEventLoop) {
        match self.routine.perform(act) {
            Cue::Refresh => self.refresh(),
            Cue::Idle => tracing::trace!("Nothing to show."),
            Cue::Exit => event_loop.exit(),
        }
    }

    /// Pushes the current board to the accessibility tree and asks the window for a new frame.
    fn refresh(&mut self) {
        let board = self.board();
        if let Some(lens) = self.lens.as_mut() {
            let nav = &self.nav;
            lens.adapter.update_if_active(|| nav.tree(&board));
            lens.window().request_redraw();
        }
    }

    /// The `keyboard_input` method takes incoming key presses and translates them to an [`Act`]
    /// using the [`Cmd::act`] method.  Held keys repeat without us, so we ignore repeats.
    #[tracing::instrument(skip_all)]
    pub fn keyboard_input(
        &mut self,
        event: &event::KeyEvent,
        event_loop: &event_loop::ActiveEventLoop,
    ) {
        if !event.state.is_pressed() || event.repeat {
            return;
        }
        match self.cmd.act(event) {
            Some(act) => {
                tracing::trace!("Act detected: {act}");
                self.act(act, event_loop);
            }
            // No crime here.
            None => tracing::trace!("Unbound key: {:?}", event.logical_key),
        }
    }

    /// Ends the application, handing back the [`Voice`] so `main` can let it finish talking.
    pub fn retire(self) -> Voice {
        self.routine.retire()
    }
}

/// The impl for `ApplicationHandler` is boiled down to as little as possible.
/// * The `resumed` method creates the window the first time it is called.
/// * The `user_event` method answers accessibility requests and installs the [`Canvas`].
/// * The `window_event` method passes every event through the [`Lens`] first, then closes on
///   [`WindowEvent::CloseRequested`], dispatches unconsumed key presses to
///   [`App::keyboard_input`], and draws on [`WindowEvent::RedrawRequested`].
impl ApplicationHandler<Event> for App {
    #[tracing::instrument(skip_all)]
    fn resumed(&mut self, event_loop: &event_loop::ActiveEventLoop) {
        if self.lens.is_some() {
            return;
        }
        if let Err(e) = self.request_window(event_loop) {
            tracing::error!("{e}");
            event_loop.exit();
        }
    }

    #[tracing::instrument(skip_all)]
    fn user_event(&mut self, event_loop: &event_loop::ActiveEventLoop, event: Event) {
        match event {
            Event::Access(access) => match access.window_event {
                accesskit_winit::WindowEvent::InitialTreeRequested => {
                    let board = self.board();
                    if let Some(lens) = self.lens.as_mut() {
                        let nav = &self.nav;
                        lens.adapter.update_if_active(|| nav.tree(&board));
                    }
                }
                accesskit_winit::WindowEvent::ActionRequested(accesskit::ActionRequest {
                    action,
                    target,
                    ..
                }) => {
                    if let Some(act) = self.nav.act(action, target) {
                        self.act(act, event_loop);
                    }
                }
                accesskit_winit::WindowEvent::AccessibilityDeactivated => {}
            },
            Event::Canvas(canvas) => match self.lens.as_mut() {
                Some(lens) => lens.attach(canvas),
                None => tracing::warn!("Canvas arrived without a window."),
            },
        }
    }

    #[tracing::instrument(skip_all)]
    fn window_event(
        &mut self,
        event_loop: &event_loop::ActiveEventLoop,
        id: window::WindowId,
        event: WindowEvent,
    ) {
        let lens = match self.lens.as_mut() {
            Some(lens) if lens.window().id() == id => lens,
            _ => return,
        };
        let consumed = lens.on_window_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                tracing::trace!("Closing Window={id:?}");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event,
                is_synthetic: false,
                ..
            } if !consumed => self.keyboard_input(&event, event_loop),
            WindowEvent::RedrawRequested => {
                let board = Board::new(self.settings.heading(), self.routine.session());
                match lens.frame(&board) {
                    Ok(Some(act)) => self.act(act, event_loop),
                    Ok(None) => {}
                    Err(e) => {
                        tracing::error!("{e}");
                        event_loop.exit();
                    }
                }
            }
            WindowEvent::Resized(size) => lens.resize(size),
            _ => {}
        }
    }
}
