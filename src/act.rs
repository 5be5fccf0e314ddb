/// The `Act` enum lists the things a user can ask of the joke teller.
///
/// Acts arrive from three directions: buttons in the window, key presses mapped through
/// [`crate::Cmd`], and default actions requested by assistive technology through
/// [`crate::Nav`].  All three end up in [`crate::Routine::perform`].
///
/// Names parse case-insensitively from their snake case form, so the `[keys]` table in
/// `Jester.toml` can say `reveal = "p"`.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Act {
    /// Pick a joke and read the setup aloud.
    Tell,
    /// Show and read the punchline of the current joke.
    Reveal,
    /// Same as [`Act::Tell`], offered as its own button for after the punchline.
    Next,
    /// Close the window and end the program.
    Quit,
    /// Do nothing.
    Be,
}
