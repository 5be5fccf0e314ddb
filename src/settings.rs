use crate::{speech, Landed, Voice};
use std::path::PathBuf;

/// The `Settings` struct holds everything `Jester.toml` can change, apart from key bindings,
/// which go to [`crate::Cmd`].
///
/// Every field has a default, so an absent file, or a file with only a few lines in it, still
/// produces a complete set of settings.  The defaults recreate the look of the original Alexa
/// joke assistant.
#[derive(
    Debug,
    Clone,
    PartialEq,
    serde::Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[serde(default)]
#[setters(prefix = "with_", into)]
pub struct Settings {
    /// Window title.
    title: String,
    /// Heading shown above the joke.
    heading: String,
    /// Path to the joke file.
    jokes: PathBuf,
    /// Tell a joke as soon as the program starts.
    tell_on_start: bool,
    width: u32,
    height: u32,
    speech: SpeechSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Alexa - Tell me a Joke".to_string(),
            heading: "Alexa Joke Assistant".to_string(),
            jokes: PathBuf::from("randomJokes.txt"),
            tell_on_start: true,
            width: 500,
            height: 320,
            speech: SpeechSettings::default(),
        }
    }
}

impl Settings {
    /// The `read` method loads the configuration file called `name` (any extension the [`config`]
    /// crate understands, so `Jester.toml` for a name of `Jester`).
    ///
    /// A missing file is fine, and leaves every setting at its default.  A file that fails to
    /// parse earns a warning and also leaves every setting at its default, so a typo in the
    /// config never keeps the jokes from coming.
    #[tracing::instrument]
    pub fn read(name: &str) -> config::Config {
        match config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .build()
        {
            Ok(config) => {
                tracing::trace!("Config read.");
                config
            }
            Err(e) => {
                tracing::warn!("Could not read config from file: {e}");
                config::Config::default()
            }
        }
    }

    /// Deserializes settings from an already loaded configuration.
    pub fn from_config(config: &config::Config) -> Landed<Self> {
        let settings = config.clone().try_deserialize::<Self>()?;
        Ok(settings)
    }

    /// Like [`Settings::from_config`], but falls back on the defaults with a warning.
    pub fn or_default(config: &config::Config) -> Self {
        match Self::from_config(config) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("{e}, using default settings.");
                Self::default()
            }
        }
    }
}

/// Which speech backend reads the jokes aloud.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, serde::Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// An external program, see [`speech::Mimic`].
    #[default]
    Command,
    /// The platform engine, when built with the `native-tts` feature.
    Native,
    /// No speech.
    Mute,
}

/// The `[speech]` table of `Jester.toml`.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct SpeechSettings {
    backend: Backend,
    /// Program run by the command backend.
    program: String,
    /// Arguments placed before the text.
    args: Vec<String>,
    /// Preferred voice for the native backend, matched against voice names.
    prefer: String,
    /// Cut off the current utterance when a new one arrives (native backend only).
    interrupt: bool,
    /// Utterances allowed to wait in the queue.
    capacity: usize,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        let (program, args) = if cfg!(target_os = "macos") {
            ("say", Vec::new())
        } else {
            ("espeak-ng", vec!["-v".to_string(), "en+f3".to_string()])
        };
        Self {
            backend: Backend::default(),
            program: program.to_string(),
            args,
            prefer: "female".to_string(),
            interrupt: false,
            capacity: 8,
        }
    }
}

impl SpeechSettings {
    /// The `voice` method starts a [`Voice`] on the configured backend.
    #[tracing::instrument(skip_all)]
    pub fn voice(&self) -> Voice {
        tracing::info!("Speech backend: {}", self.backend);
        match self.backend {
            Backend::Command => {
                let mimic = speech::Mimic::new(self.program.clone(), self.args.clone());
                Voice::spawn(self.capacity, move || Ok(mimic))
            }
            Backend::Native => self.native(),
            Backend::Mute => Voice::spawn(self.capacity, || Ok(speech::Mute)),
        }
    }

    #[cfg(feature = "native-tts")]
    fn native(&self) -> Voice {
        let prefer = self.prefer.clone();
        let interrupt = self.interrupt;
        Voice::spawn(self.capacity, move || {
            speech::Native::new(&prefer, interrupt)
        })
    }

    #[cfg(not(feature = "native-tts"))]
    fn native(&self) -> Voice {
        tracing::warn!("Built without native-tts, falling back on {}.", self.program);
        let mimic = speech::Mimic::new(self.program.clone(), self.args.clone());
        Voice::spawn(self.capacity, move || Ok(mimic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn from_toml(toml: &str) -> Landed<Settings> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        Settings::from_config(&config)
    }

    #[test]
    fn empty_config_gives_defaults() {
        assert_eq!(from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let settings = from_toml(
            r#"
            jokes = "/tmp/puns.txt"
            tell_on_start = false

            [speech]
            backend = "mute"
            capacity = 2
            "#,
        )
        .unwrap();
        assert_eq!(settings.jokes(), &PathBuf::from("/tmp/puns.txt"));
        assert!(!settings.tell_on_start());
        assert_eq!(settings.title(), "Alexa - Tell me a Joke");
        assert_eq!(*settings.speech().backend(), Backend::Mute);
        assert_eq!(*settings.speech().capacity(), 2);
        assert_eq!(settings.speech().prefer(), "female");
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config::Config::builder()
            .add_source(config::File::from_str(
                "width = \"wide\"",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        assert!(Settings::from_config(&config).is_err());
        assert_eq!(Settings::or_default(&config), Settings::default());
    }

    #[test]
    fn reads_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Jester.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "heading = \"Dad Jokes\"").unwrap();
        let name = dir.path().join("Jester");
        let config = Settings::read(name.to_str().unwrap());
        let settings = Settings::or_default(&config);
        assert_eq!(settings.heading(), "Dad Jokes");
    }

    #[test]
    fn missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let name = dir.path().join("Nowhere");
        let config = Settings::read(name.to_str().unwrap());
        assert_eq!(Settings::or_default(&config), Settings::default());
    }

    #[test]
    fn setters_override() {
        let settings = Settings::default().with_heading("Puns");
        assert_eq!(settings.heading(), "Puns");
    }
}
