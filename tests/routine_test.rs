use jester::{Act, Catalog, Cue, Landed, Routine, Session, Speaker, Stage, Voice};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::sync::{Arc, Mutex};

const SAMPLE: &str = "Why did the chicken cross the road? To get to the other side.\n\
                      No question mark here\n\
                      What do you call a fish with no eyes? A fsh!\n";

#[derive(Clone, Default)]
struct Transcript(Arc<Mutex<Vec<String>>>);

impl Transcript {
    fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Speaker for Transcript {
    fn speak(&mut self, text: &str) -> Landed<()> {
        self.0.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

fn routine(catalog: Catalog, transcript: &Transcript) -> Routine<StdRng> {
    let speaker = transcript.clone();
    let voice = Voice::spawn(64, move || Ok(speaker));
    Routine::new(Session::new(catalog), voice, StdRng::seed_from_u64(42))
}

#[tokio::test]
async fn tell_then_reveal_reads_both_halves() {
    let transcript = Transcript::default();
    let mut routine = routine(Catalog::parse(SAMPLE), &transcript);

    assert_eq!(routine.perform(Act::Tell), Cue::Refresh);
    let joke = routine.session().current().cloned().unwrap();
    assert!(routine.session().catalog().contains(&joke));

    assert_eq!(routine.perform(Act::Reveal), Cue::Refresh);
    assert_eq!(routine.session().punchline(), joke.punchline());

    routine.retire().shutdown().await.unwrap();
    assert_eq!(
        transcript.lines(),
        vec![joke.setup().clone(), joke.punchline().clone()]
    );
}

#[tokio::test]
async fn reveal_without_a_joke_says_nothing() {
    let transcript = Transcript::default();
    let mut routine = routine(Catalog::parse(SAMPLE), &transcript);

    assert_eq!(routine.perform(Act::Reveal), Cue::Idle);
    assert_eq!(routine.session().stage(), Stage::AwaitingSetup);

    routine.retire().shutdown().await.unwrap();
    assert!(transcript.lines().is_empty());
}

#[tokio::test]
async fn punchline_is_read_once() {
    let transcript = Transcript::default();
    let mut routine = routine(Catalog::parse(SAMPLE), &transcript);

    routine.perform(Act::Tell);
    assert_eq!(routine.perform(Act::Reveal), Cue::Refresh);
    assert_eq!(routine.perform(Act::Reveal), Cue::Idle);

    routine.retire().shutdown().await.unwrap();
    assert_eq!(transcript.lines().len(), 2);
}

#[tokio::test]
async fn next_joke_hides_the_punchline() {
    let transcript = Transcript::default();
    let mut routine = routine(Catalog::parse(SAMPLE), &transcript);

    routine.perform(Act::Tell);
    routine.perform(Act::Reveal);
    assert_eq!(routine.perform(Act::Next), Cue::Refresh);
    assert_eq!(routine.session().stage(), Stage::SetupShown);
    assert!(routine.session().punchline().is_empty());
    let setup = routine.session().setup().to_string();

    routine.retire().shutdown().await.unwrap();
    let lines = transcript.lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2], setup);
}

#[tokio::test]
async fn quit_and_be() {
    let transcript = Transcript::default();
    let mut routine = routine(Catalog::parse(SAMPLE), &transcript);

    assert_eq!(routine.perform(Act::Be), Cue::Idle);
    assert_eq!(routine.perform(Act::Quit), Cue::Exit);

    routine.retire().shutdown().await.unwrap();
    assert!(transcript.lines().is_empty());
}

#[tokio::test]
async fn missing_file_tells_the_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let transcript = Transcript::default();
    let catalog = Catalog::load(&dir.path().join("randomJokes.txt"));
    let mut routine = routine(catalog, &transcript);

    routine.perform(Act::Tell);
    routine.perform(Act::Reveal);

    routine.retire().shutdown().await.unwrap();
    assert_eq!(
        transcript.lines(),
        vec![
            jester::MISSING_SETUP.to_string(),
            jester::MISSING_PUNCHLINE.to_string()
        ]
    );
}

#[tokio::test]
async fn many_picks_stay_in_catalog() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{SAMPLE}").unwrap();
    let catalog = Catalog::load(file.path());
    assert_eq!(catalog.len(), 2);

    let transcript = Transcript::default();
    let mut routine = routine(catalog.clone(), &transcript);
    for _ in 0..20 {
        routine.perform(Act::Tell);
        let joke = routine.session().current().cloned().unwrap();
        assert!(catalog.contains(&joke));
        assert!(joke.setup().ends_with('?'));
        routine.perform(Act::Reveal);
        assert_eq!(routine.session().punchline(), joke.punchline());
    }

    routine.retire().shutdown().await.unwrap();
    assert_eq!(transcript.lines().len(), 40);
}
