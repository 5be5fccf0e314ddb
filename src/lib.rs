//! The `jester` crate is a desktop joke teller.  It reads a setup aloud, waits for you to ask for
//! the punchline, then reads that too.
//!
//! Jokes come from a plain text file, one per line, with a question mark between the setup and
//! the punchline:
//!
//! ```text
//! Why did the chicken cross the road? To get to the other side.
//! ```
//!
//! Here is a link list to the main pieces:
//!
//! 1. Reading the joke file - [`Catalog`]
//!     * [`Joke::parse`]
//!     * [`Catalog::load`]
//! 2. Keeping track of the current joke - [`Session`]
//!     * [`Session::pick`]
//!     * [`Session::reveal`]
//! 3. Running the show - [`Routine`]
//!     * [`Routine::perform`]
//! 4. Reading aloud without blocking the window - [`Voice`]
//!     * [`Voice::spawn`]
//!     * [`Voice::say`]
//!     * [`Voice::shutdown`]
//! 5. Putting it all in a window - [`App`]
//!     * [`Lens`], [`Canvas`] and [`view::stage`] for what you see.
//!     * [`Nav`] for what a screen reader sees.
//!     * [`Cmd`] and [`Act`] for what you can press.
//!
//! The primary entry point for the program is the [`App`] struct.  To use the library, we create a
//! [`winit::event_loop::EventLoop`] carrying our [`Event`] type, pass its proxy to [`App::new`],
//! and pass the app to [`winit::event_loop::EventLoop::run_app`].  When the loop exits,
//! [`App::retire`] hands back the [`Voice`] so we can wait for it to finish speaking.
//!
//! Settings and key bindings come from an optional `Jester.toml` in the working directory, read
//! with the [`config`] crate.  See [`Settings`] and [`Cmd`].
//!
//! We decorate the main function with `#[tokio::main]`, using [`tokio`] for our runtime.  The
//! GPU setup runs as a spawned task, and the speech worker runs on the blocking pool.
mod act;
mod app;
mod canvas;
pub mod catalog;
mod cmd;
mod error;
mod event;
mod id;
mod joke;
mod lens;
mod nav;
mod routine;
mod session;
mod settings;
pub mod speech;
mod utils;
pub mod view;

/// Since this is a small application, we lift all user-facing data types and functions to the parent namespace
/// for ease of access.
pub use act::Act;
pub use app::{App, CONFIG_NAME};
pub use canvas::Canvas;
pub use catalog::Catalog;
pub use cmd::Cmd;
pub use error::{Blunder, Landed};
pub use event::Event;
pub use id::Counter;
pub use joke::{Joke, MISSING_PUNCHLINE, MISSING_SETUP};
pub use lens::Lens;
pub use nav::Nav;
pub use routine::{Cue, Routine};
pub use session::{Session, Stage};
pub use settings::{Backend, Settings, SpeechSettings};
pub use speech::{Mimic, Mute, Speaker, Utterance, Voice};
#[cfg(feature = "native-tts")]
pub use speech::Native;
pub use utils::trace_init;
pub use view::Board;
