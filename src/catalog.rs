use crate::Joke;
use rand::Rng;
use std::path::{Path, PathBuf};

/// The `Catalog` struct holds every joke available for telling, in file order.
///
/// A catalog is never empty.  When the joke file is missing, unreadable, or simply has nothing
/// funny in it, the catalog holds the single placeholder from [`Joke::missing`], so that picking a
/// joke always succeeds and the user learns where to look.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Deref)]
pub struct Catalog(Vec<Joke>);

impl Catalog {
    /// The `load` method reads the joke file at `path`.  Failure to read the file is not an error
    /// from the caller's point of view: we log a warning and fall back on the placeholder catalog.
    ///
    /// Bytes that are not valid UTF-8 become replacement characters, so one bad line never costs
    /// us the rest of the file.
    #[tracing::instrument]
    pub fn load(path: &Path) -> Self {
        match std::fs::read(path) {
            Ok(bytes) => {
                let catalog = Self::parse(&String::from_utf8_lossy(&bytes));
                tracing::info!("Loaded {} jokes from {}.", catalog.len(), path.display());
                catalog
            }
            Err(e) => {
                tracing::warn!("Could not read jokes from {}: {e}", path.display());
                Self::missing()
            }
        }
    }

    /// Parses the contents of a joke file, one joke per line.  Lines without a question mark are
    /// skipped without comment.
    pub fn parse(text: &str) -> Self {
        let jokes = text.lines().filter_map(Joke::parse).collect::<Vec<Joke>>();
        if jokes.is_empty() {
            tracing::warn!("No jokes found in file.");
        }
        Self::from(jokes)
    }

    /// The placeholder catalog.
    pub fn missing() -> Self {
        Self(vec![Joke::missing()])
    }

    /// The `sample` method returns the index of a joke chosen uniformly at random.  Draws are
    /// independent, so the same joke can come up twice in a row.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.0.len())
    }
}

impl From<Vec<Joke>> for Catalog {
    fn from(jokes: Vec<Joke>) -> Self {
        if jokes.is_empty() {
            Self::missing()
        } else {
            Self(jokes)
        }
    }
}

/// The `resolve` function locates the joke file.  A relative `path` is tried against the working
/// directory first, then against the directory holding the running executable, so the program
/// finds a joke file shipped alongside it no matter where it was launched from.
///
/// When neither candidate exists we return `path` unchanged and let [`Catalog::load`] report it.
pub fn resolve(path: &Path) -> PathBuf {
    if path.is_absolute() || path.exists() {
        return path.to_path_buf();
    }
    let beside = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(path)));
    match beside {
        Some(candidate) if candidate.exists() => {
            tracing::trace!("Found jokes beside executable: {}", candidate.display());
            candidate
        }
        _ => path.to_path_buf(),
    }
}
