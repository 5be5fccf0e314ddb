use crate::{Catalog, Joke};
use rand::Rng;

/// The `Stage` enum tracks how far into the current joke we are.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Stage {
    /// No joke has been picked yet.
    #[default]
    AwaitingSetup,
    /// The setup is showing and the punchline is still hidden.
    SetupShown,
    /// The punchline is showing.  Only a new pick leaves this stage.
    PunchlineShown,
}

/// The `Session` struct holds the catalog, the joke currently on screen and the reveal stage.
///
/// There are exactly two transitions, [`Session::pick`] and [`Session::reveal`].  Everything else
/// is a read-only view for the display.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct Session {
    catalog: Catalog,
    #[getter(skip)]
    current: Option<usize>,
    #[getter(skip)]
    stage: Stage,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            current: None,
            stage: Stage::AwaitingSetup,
        }
    }

    /// The `pick` method draws a joke from the catalog, hides any punchline left over from the
    /// previous joke, and moves to [`Stage::SetupShown`].  Returns the new joke so the caller can
    /// read the setup aloud.
    #[tracing::instrument(skip_all)]
    pub fn pick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Joke {
        let idx = self.catalog.sample(rng);
        tracing::trace!("Joke {idx} picked.");
        self.current = Some(idx);
        self.stage = Stage::SetupShown;
        &self.catalog[idx]
    }

    /// The `reveal` method shows the punchline of the current joke.
    ///
    /// Only valid from [`Stage::SetupShown`].  From any other stage this does nothing and returns
    /// [`None`]: before the first pick there is no punchline to show, and once shown, the punchline
    /// stays put until the next pick.
    #[tracing::instrument(skip_all)]
    pub fn reveal(&mut self) -> Option<&Joke> {
        if self.stage != Stage::SetupShown {
            tracing::trace!("Nothing to reveal from {}.", self.stage);
            return None;
        }
        self.stage = Stage::PunchlineShown;
        self.current()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn current(&self) -> Option<&Joke> {
        self.current.and_then(|idx| self.catalog.get(idx))
    }

    /// Setup text for display, empty before the first pick.
    pub fn setup(&self) -> &str {
        self.current().map(|joke| joke.setup().as_str()).unwrap_or_default()
    }

    /// Punchline text for display, empty until revealed.
    pub fn punchline(&self) -> &str {
        match (self.stage, self.current()) {
            (Stage::PunchlineShown, Some(joke)) => joke.punchline().as_str(),
            _ => "",
        }
    }

    pub fn can_reveal(&self) -> bool {
        self.stage == Stage::SetupShown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> Session {
        Session::new(Catalog::parse(
            "Why did the chicken cross the road? To get to the other side.\n\
             What do you call a fish with no eyes? A fsh!\n\
             What do you call a bear with no teeth? A gummy bear.",
        ))
    }

    #[test]
    fn starts_awaiting_setup() {
        let session = session();
        assert_eq!(session.stage(), Stage::AwaitingSetup);
        assert!(session.current().is_none());
        assert!(session.setup().is_empty());
        assert!(session.punchline().is_empty());
        assert!(!session.can_reveal());
    }

    #[test]
    fn reveal_before_pick_is_a_no_op() {
        let mut session = session();
        assert!(session.reveal().is_none());
        assert_eq!(session.stage(), Stage::AwaitingSetup);
    }

    #[test]
    fn pick_then_reveal() {
        let mut session = session();
        let mut rng = StdRng::seed_from_u64(1);
        let picked = session.pick(&mut rng).clone();
        assert!(session.catalog().contains(&picked));
        assert_eq!(session.stage(), Stage::SetupShown);
        assert_eq!(session.setup(), picked.setup());
        assert!(session.punchline().is_empty());
        assert!(session.can_reveal());

        let revealed = session.reveal().cloned();
        assert_eq!(revealed.as_ref(), Some(&picked));
        assert_eq!(session.stage(), Stage::PunchlineShown);
        assert_eq!(session.punchline(), picked.punchline());
        assert!(!session.can_reveal());
    }

    #[test]
    fn second_reveal_does_nothing() {
        let mut session = session();
        let mut rng = StdRng::seed_from_u64(2);
        session.pick(&mut rng);
        assert!(session.reveal().is_some());
        assert!(session.reveal().is_none());
        assert_eq!(session.stage(), Stage::PunchlineShown);
    }

    #[test]
    fn next_pick_hides_punchline() {
        let mut session = session();
        let mut rng = StdRng::seed_from_u64(3);
        session.pick(&mut rng);
        session.reveal();
        let picked = session.pick(&mut rng).clone();
        assert_eq!(session.stage(), Stage::SetupShown);
        assert!(session.punchline().is_empty());
        let revealed = session.reveal().map(|joke| joke.punchline().clone());
        assert_eq!(revealed.as_ref(), Some(picked.punchline()));
    }

    #[test]
    fn placeholder_session_still_picks() {
        let mut session = Session::new(Catalog::parse("nothing to see"));
        let mut rng = StdRng::seed_from_u64(4);
        assert!(session.pick(&mut rng).is_missing());
    }
}
