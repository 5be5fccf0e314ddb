use crate::{Act, Session, Voice};
use rand::rngs::StdRng;
use rand::Rng;

/// What the window should do after an [`Act`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum_macros::Display)]
pub enum Cue {
    /// The session changed, redraw the window and refresh the accessibility tree.
    Refresh,
    /// Nothing changed.
    Idle,
    /// Close the window and end the program.
    Exit,
}

/// The `Routine` struct is the state of the show: the [`Session`], the dice we roll to pick a
/// joke, and the [`Voice`] that reads it out.
///
/// The [`crate::App`] owns the routine and touches it only from the event loop thread.  Each act
/// runs exactly one session transition and queues at most one utterance.  Speech never holds up
/// the routine, if the voice cannot take the text we log it and carry on.
#[derive(Debug, derive_getters::Getters)]
pub struct Routine<R = StdRng> {
    session: Session,
    #[getter(skip)]
    rng: R,
    voice: Voice,
}

impl<R: Rng> Routine<R> {
    pub fn new(session: Session, voice: Voice, rng: R) -> Self {
        Self {
            session,
            rng,
            voice,
        }
    }

    /// The `perform` method dispatches an [`Act`] and tells the caller what to do about it.
    #[tracing::instrument(skip(self))]
    pub fn perform(&mut self, act: Act) -> Cue {
        match act {
            Act::Tell | Act::Next => self.tell(),
            Act::Reveal => self.reveal(),
            Act::Quit => {
                tracing::trace!("Requesting exit.");
                Cue::Exit
            }
            Act::Be => {
                tracing::trace!("Taking it easy.");
                Cue::Idle
            }
        }
    }

    /// Picks a joke and reads the setup.
    pub fn tell(&mut self) -> Cue {
        let setup = self.session.pick(&mut self.rng).setup().clone();
        tracing::info!("{setup}");
        self.speak(setup);
        Cue::Refresh
    }

    /// Shows and reads the punchline, when there is one waiting.
    pub fn reveal(&mut self) -> Cue {
        match self.session.reveal() {
            Some(joke) => {
                let punchline = joke.punchline().clone();
                tracing::info!("{punchline}");
                self.speak(punchline);
                Cue::Refresh
            }
            None => Cue::Idle,
        }
    }

    fn speak(&self, text: String) {
        if let Err(e) = self.voice.say(text) {
            tracing::warn!("Not spoken: {e}");
        }
    }

    /// Ends the routine, handing back the [`Voice`] so the caller can shut it down.
    pub fn retire(self) -> Voice {
        self.voice
    }
}
