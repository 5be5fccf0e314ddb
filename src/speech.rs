use crate::{Blunder, Landed};
use tokio::sync::mpsc;
use tokio::task;

/// The `Speaker` trait covers anything that can read text aloud.
///
/// Speakers live on the speech worker and nowhere else, so they need not be `Send`.  A speaker
/// may block for as long as the utterance takes.  The UI never waits on it.
pub trait Speaker: 'static {
    fn speak(&mut self, text: &str) -> Landed<()>;

    /// Waits for any audio still playing after [`Speaker::speak`] returned.  The worker calls
    /// this once before it stops.
    fn finish(&mut self) -> Landed<()> {
        Ok(())
    }
}

/// Messages sent from the UI to the speech worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Utterance {
    Say(String),
    /// Stop after everything queued ahead of this message has been spoken.
    Hush,
}

/// The `Voice` struct is the UI's handle on the speech worker: the sending half of a bounded
/// queue, and the task draining it.
///
/// We create the worker with [`Voice::spawn`], feed it with [`Voice::say`] and stop it with
/// [`Voice::shutdown`].  The worker runs on the [`tokio`] blocking pool because speech engines
/// tend to block until the audio finishes.
#[derive(Debug)]
pub struct Voice {
    tx: mpsc::Sender<Utterance>,
    worker: task::JoinHandle<()>,
}

impl Voice {
    /// The `spawn` method starts the speech worker with room for `capacity` pending utterances.
    ///
    /// The `summon` closure builds the speaker on the worker itself.  If summoning fails, we log
    /// the failure and the worker stops, after which [`Voice::say`] reports [`Blunder::Hushed`].
    ///
    /// Must be called from within a [`tokio`] runtime.
    #[tracing::instrument(skip(summon))]
    pub fn spawn<S, F>(capacity: usize, summon: F) -> Self
    where
        S: Speaker,
        F: FnOnce() -> Landed<S> + Send + 'static,
    {
        let (tx, mut rx) = mpsc::channel(capacity.max(1));
        let worker = task::spawn_blocking(move || {
            let mut speaker = match summon() {
                Ok(speaker) => speaker,
                Err(e) => {
                    tracing::warn!("Speaker unavailable: {e}");
                    return;
                }
            };
            tracing::trace!("Speech worker listening.");
            while let Some(utterance) = rx.blocking_recv() {
                match utterance {
                    Utterance::Say(text) => {
                        if let Err(e) = speaker.speak(&text) {
                            tracing::warn!("{e}");
                        }
                    }
                    Utterance::Hush => break,
                }
            }
            if let Err(e) = speaker.finish() {
                tracing::warn!("{e}");
            }
            tracing::trace!("Speech worker stopped.");
        });
        Self { tx, worker }
    }

    /// The `say` method queues `text` for speech without waiting.  A full queue means the user is
    /// clicking faster than we can talk, and the text is dropped with [`Blunder::QueueFull`].
    pub fn say(&self, text: impl Into<String>) -> Landed<()> {
        match self.tx.try_send(Utterance::Say(text.into())) {
            Ok(()) => Ok(()),
            Err(mpsc::error::TrySendError::Full(_)) => Err(Blunder::QueueFull),
            Err(mpsc::error::TrySendError::Closed(_)) => Err(Blunder::Hushed),
        }
    }

    /// The `shutdown` method lets the worker finish what is already queued, then stops it and
    /// waits for it to exit.
    #[tracing::instrument(skip_all)]
    pub async fn shutdown(self) -> Landed<()> {
        if self.tx.send(Utterance::Hush).await.is_err() {
            tracing::trace!("Speech worker already stopped.");
        }
        drop(self.tx);
        self.worker.await?;
        Ok(())
    }
}

/// The `Mimic` speaker hands text to an external program, by default `espeak-ng` (or `say` on
/// macOS), and waits for it to finish talking.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new, derive_getters::Getters)]
pub struct Mimic {
    program: String,
    args: Vec<String>,
}

impl Speaker for Mimic {
    fn speak(&mut self, text: &str) -> Landed<()> {
        tracing::trace!("{} says: {text}", self.program);
        let status = std::process::Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdout(std::process::Stdio::null())
            .status()?;
        if status.success() {
            Ok(())
        } else {
            Err(Blunder::speech(format!("{} exited with {status}", self.program)))
        }
    }
}

/// The `Mute` speaker only writes what it would have said to the log.
#[derive(Debug, Default, Copy, Clone)]
pub struct Mute;

impl Speaker for Mute {
    fn speak(&mut self, text: &str) -> Landed<()> {
        tracing::info!("(silently) {text}");
        Ok(())
    }
}

/// The `Native` speaker drives the platform speech engine through the [`tts`] crate.
#[cfg(feature = "native-tts")]
pub struct Native {
    tts: tts::Tts,
    interrupt: bool,
}

#[cfg(feature = "native-tts")]
impl Native {
    /// Opens the platform engine and picks a voice.  We take the first voice whose name contains
    /// `prefer`, falling back on the first female voice, falling back on whatever the engine
    /// chose for us.
    pub fn new(prefer: &str, interrupt: bool) -> Landed<Self> {
        let mut tts = tts::Tts::default()?;
        let prefer = prefer.to_lowercase();
        if let Ok(voices) = tts.voices() {
            let chosen = voices
                .iter()
                .find(|voice| voice.name().to_lowercase().contains(&prefer))
                .or_else(|| {
                    voices
                        .iter()
                        .find(|voice| matches!(voice.gender(), Some(tts::Gender::Female)))
                });
            if let Some(voice) = chosen {
                tracing::trace!("Voice selected: {}", voice.name());
                tts.set_voice(voice)?;
            }
        }
        Ok(Self { tts, interrupt })
    }
}

#[cfg(feature = "native-tts")]
impl Speaker for Native {
    fn speak(&mut self, text: &str) -> Landed<()> {
        self.tts.speak(text, self.interrupt)?;
        Ok(())
    }

    /// The engine speaks in the background, so dropping it early cuts off the last utterance.
    /// We poll until it falls silent, on engines that can tell us.
    fn finish(&mut self) -> Landed<()> {
        if !self.tts.supported_features().is_speaking {
            return Ok(());
        }
        while self.tts.is_speaking()? {
            std::thread::sleep(std::time::Duration::from_millis(50));
        }
        Ok(())
    }
}
