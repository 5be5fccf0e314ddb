/// The `Joke` struct pairs a setup with its punchline.
///
/// A setup always ends with a question mark, which is also how we find the seam between the two
/// halves in the joke file.  The punchline carries no surrounding whitespace.  Both halves are
/// fixed once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct Joke {
    setup: String,
    punchline: String,
}

/// Setup of the placeholder joke told when no real jokes are available.
pub const MISSING_SETUP: &str = "Joke file not found!";
/// Punchline of the placeholder joke told when no real jokes are available.
pub const MISSING_PUNCHLINE: &str = "Please check randomJokes.txt";

impl Joke {
    /// The `parse` method reads a single line of the joke file.
    ///
    /// Returns [`None`] when the line holds no question mark, which is how we skip blank lines and
    /// commentary.  Otherwise we split at the *first* question mark only, so the punchline may
    /// contain further question marks of its own.  The mark itself stays with the setup.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (setup, punchline) = line.split_once('?')?;
        Some(Self {
            setup: format!("{setup}?"),
            punchline: punchline.trim().to_string(),
        })
    }

    /// The placeholder joke, standing in for an empty or missing catalog.
    pub fn missing() -> Self {
        Self {
            setup: MISSING_SETUP.to_string(),
            punchline: MISSING_PUNCHLINE.to_string(),
        }
    }

    pub fn is_missing(&self) -> bool {
        self.setup == MISSING_SETUP && self.punchline == MISSING_PUNCHLINE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_question_mark() {
        let joke = Joke::parse("A? B? C").unwrap();
        assert_eq!(joke.setup(), "A?");
        assert_eq!(joke.punchline(), "B? C");
    }

    #[test]
    fn trims_both_halves() {
        let joke = Joke::parse("  Why did the chicken cross the road?   To get to the other side. \r")
            .unwrap();
        assert_eq!(joke.setup(), "Why did the chicken cross the road?");
        assert_eq!(joke.punchline(), "To get to the other side.");
    }

    #[test]
    fn skips_lines_without_question_mark() {
        assert!(Joke::parse("No question mark here").is_none());
        assert!(Joke::parse("").is_none());
    }

    #[test]
    fn bare_question_mark_has_empty_punchline() {
        let joke = Joke::parse("?").unwrap();
        assert_eq!(joke.setup(), "?");
        assert!(joke.punchline().is_empty());
    }

    #[test]
    fn placeholder_is_recognized() {
        let joke = Joke::missing();
        assert!(joke.is_missing());
        assert!(!Joke::parse("Knock knock? Who's there").unwrap().is_missing());
    }
}
