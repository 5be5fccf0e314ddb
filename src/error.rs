/// The `Blunder` enum collects the ways the show can go wrong.
///
/// Most of these never reach the user.  A missing joke file is not a blunder at all (we tell the
/// placeholder joke instead), and a speech failure only earns a warning in the logs.  The variants
/// that do escape are the ones that stop the window from opening in the first place.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum Blunder {
    #[display("Could not read configuration: {_0}")]
    Config(config::ConfigError),
    #[display("Event loop failed: {_0}")]
    EventLoop(winit::error::EventLoopError),
    #[display("Could not create window: {_0}")]
    Window(winit::error::OsError),
    #[display("Could not create surface: {_0}")]
    Surface(wgpu::CreateSurfaceError),
    #[display("Could not request device: {_0}")]
    Device(wgpu::RequestDeviceError),
    #[display("Could not draw frame: {_0}")]
    Frame(wgpu::SurfaceError),
    #[display("No graphics adapter is compatible with the window surface.")]
    #[from(ignore)]
    NoAdapter,
    #[display("The event loop closed before the message arrived.")]
    #[from(ignore)]
    ProxyClosed,
    #[display("Speech queue is full.")]
    #[from(ignore)]
    QueueFull,
    #[display("Speech worker is not listening.")]
    #[from(ignore)]
    Hushed,
    #[display("Speech worker stopped unexpectedly: {_0}")]
    Worker(tokio::task::JoinError),
    #[display("Speech failed: {message}")]
    #[from(ignore)]
    Speech { message: String },
    #[display("IO error: {_0}")]
    Io(std::io::Error),
    #[cfg(feature = "native-tts")]
    #[display("Text-to-speech engine error: {_0}")]
    Tts(tts::Error),
}

impl Blunder {
    pub fn speech(message: impl Into<String>) -> Self {
        Self::Speech {
            message: message.into(),
        }
    }
}

/// Alias for results that either land or bomb with a [`Blunder`].
pub type Landed<T> = Result<T, Blunder>;
