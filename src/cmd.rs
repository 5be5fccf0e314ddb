use crate::Act;
use std::collections::HashMap;
use std::str::FromStr;
use winit::keyboard::{Key, NamedKey};

/// The `Cmd` struct maps key names to an [`Act`].
///
/// Keys and values play reversed roles in the `[keys]` table of `Jester.toml` and in this struct.
/// The configuration reads naturally as "act = key", (`reveal = "p"`), while on a key press we
/// need to go from key to act.  The [`From<&config::Config>`] impl flips the table around.
///
/// Key names are compared in lower case.  Printable keys use the character they produce, named
/// keys use their [`winit::keyboard::NamedKey`] variant name, so `"space"`, `"escape"` and
/// `"enter"` all work.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Cmd {
    keys: HashMap<String, Act>,
}

impl Cmd {
    /// Binds `key` to `act`, replacing any earlier binding for the same key.
    pub fn bind(&mut self, key: &str, act: Act) {
        self.keys.insert(key.to_lowercase(), act);
    }

    /// Looks up the act bound to the key called `name`.
    pub fn lookup(&self, name: &str) -> Option<Act> {
        self.keys.get(&name.to_lowercase()).copied()
    }

    /// The `act` method translates a key event into an [`Act`], if the key is bound.
    pub fn act(&self, event: &winit::event::KeyEvent) -> Option<Act> {
        let name = Self::key_name(&event.logical_key)?;
        self.lookup(&name)
    }

    /// Keys egui acts on itself while a button has focus: Space and Enter press the button, Tab
    /// moves focus along.  Every other key stays with us, focus or no focus.
    pub fn yields_to_focus(key: &Key) -> bool {
        matches!(
            key,
            Key::Named(NamedKey::Space | NamedKey::Enter | NamedKey::Tab)
        )
    }

    pub fn key_name(key: &Key) -> Option<String> {
        match key {
            Key::Named(named) => Some(format!("{named:?}")),
            Key::Character(text) => Some(text.to_string()),
            _ => None,
        }
    }
}

/// The bindings we use when `Jester.toml` says nothing about keys.
impl Default for Cmd {
    fn default() -> Self {
        let mut cmd = Self {
            keys: HashMap::new(),
        };
        cmd.bind("t", Act::Tell);
        cmd.bind("p", Act::Reveal);
        cmd.bind("Space", Act::Reveal);
        cmd.bind("n", Act::Next);
        cmd.bind("Escape", Act::Quit);
        cmd
    }
}

/// Each entry of the `[keys]` table names an act, and gives either one key or a list of keys.
/// Entries naming an act we do not know are logged and skipped.  An act listed in the table loses
/// its default bindings, acts left out of the table keep theirs.
impl From<&config::Config> for Cmd {
    fn from(config: &config::Config) -> Self {
        let mut cmd = Self::default();
        let table = match config.get_table("keys") {
            Ok(table) => table,
            Err(_) => {
                tracing::trace!("No key table, using default keys.");
                return cmd;
            }
        };
        for (name, value) in table {
            let act = match Act::from_str(&name) {
                Ok(act) => act,
                Err(_) => {
                    tracing::warn!("Unknown act in key table: {name}");
                    continue;
                }
            };
            let keys = match value.clone().into_array() {
                Ok(list) => list
                    .into_iter()
                    .filter_map(|value| value.into_string().ok())
                    .collect::<Vec<String>>(),
                Err(_) => match value.into_string() {
                    Ok(key) => vec![key],
                    Err(e) => {
                        tracing::warn!("Could not read keys for {act}: {e}");
                        continue;
                    }
                },
            };
            cmd.keys.retain(|_, bound| *bound != act);
            for key in keys {
                cmd.bind(&key, act);
            }
        }
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(toml: &str) -> config::Config {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
    }

    #[test]
    fn defaults_cover_every_button() {
        let cmd = Cmd::default();
        assert_eq!(cmd.lookup("t"), Some(Act::Tell));
        assert_eq!(cmd.lookup("P"), Some(Act::Reveal));
        assert_eq!(cmd.lookup("space"), Some(Act::Reveal));
        assert_eq!(cmd.lookup("n"), Some(Act::Next));
        assert_eq!(cmd.lookup("Escape"), Some(Act::Quit));
        assert_eq!(cmd.lookup("x"), None);
    }

    #[test]
    fn names_winit_keys() {
        let key = Key::Named(NamedKey::Escape);
        assert_eq!(Cmd::key_name(&key).as_deref(), Some("Escape"));
        let key = Key::Character("j".into());
        assert_eq!(Cmd::key_name(&key).as_deref(), Some("j"));
    }

    #[test]
    fn focus_takes_only_button_keys() {
        assert!(Cmd::yields_to_focus(&Key::Named(NamedKey::Space)));
        assert!(Cmd::yields_to_focus(&Key::Named(NamedKey::Enter)));
        assert!(Cmd::yields_to_focus(&Key::Named(NamedKey::Tab)));
        assert!(!Cmd::yields_to_focus(&Key::Named(NamedKey::Escape)));
        assert!(!Cmd::yields_to_focus(&Key::Character("t".into())));
        assert!(!Cmd::yields_to_focus(&Key::Character("n".into())));
    }

    #[test]
    fn reads_key_table() {
        let cmd = Cmd::from(&config(
            r#"
            [keys]
            tell = "j"
            reveal = ["Enter", "r"]
            heckle = "h"
            "#,
        ));
        assert_eq!(cmd.lookup("j"), Some(Act::Tell));
        assert_eq!(cmd.lookup("t"), None);
        assert_eq!(cmd.lookup("enter"), Some(Act::Reveal));
        assert_eq!(cmd.lookup("r"), Some(Act::Reveal));
        assert_eq!(cmd.lookup("p"), None);
        assert_eq!(cmd.lookup("h"), None);
        // Untouched acts keep their defaults.
        assert_eq!(cmd.lookup("n"), Some(Act::Next));
    }

    #[test]
    fn missing_table_uses_defaults() {
        assert_eq!(Cmd::from(&config("title = \"Jokes\"")), Cmd::default());
    }
}
