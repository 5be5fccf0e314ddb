use crate::{Act, Session};
use egui::{Color32, RichText};

pub const BACKDROP: Color32 = Color32::from_rgb(0x1E, 0x1E, 0x1E);
pub const GOLD: Color32 = Color32::from_rgb(0xFF, 0xD7, 0x00);
pub const LIGHT_GREEN: Color32 = Color32::from_rgb(0x90, 0xEE, 0x90);
pub const GREEN: Color32 = Color32::from_rgb(0x1D, 0xB9, 0x54);
pub const ORANGE: Color32 = Color32::from_rgb(0xFF, 0xA5, 0x00);
pub const STEEL_BLUE: Color32 = Color32::from_rgb(0x46, 0x82, 0xB4);
pub const ALARM_RED: Color32 = Color32::from_rgb(0xFF, 0x4C, 0x4C);

pub const TELL_LABEL: &str = "Alexa tell me a Joke";
pub const REVEAL_LABEL: &str = "Show Punchline";
pub const NEXT_LABEL: &str = "Next Joke";
pub const QUIT_LABEL: &str = "Quit";

/// The `Board` struct is a snapshot of what the window should show for one frame.
///
/// The display never reads the [`Session`] directly.  We take a fresh board after every act, and
/// both the egui view in [`stage`] and the accessibility tree in [`crate::Nav`] draw from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_getters::Getters)]
pub struct Board {
    heading: String,
    setup: String,
    punchline: String,
    #[getter(skip)]
    can_reveal: bool,
}

impl Board {
    pub fn new(heading: &str, session: &Session) -> Self {
        Self {
            heading: heading.to_string(),
            setup: session.setup().to_string(),
            punchline: session.punchline().to_string(),
            can_reveal: session.can_reveal(),
        }
    }

    /// Whether the "Show Punchline" button is live.
    pub fn can_reveal(&self) -> bool {
        self.can_reveal
    }
}

fn button(text: &str, fill: Color32, ink: Color32) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text).size(16.0).strong().color(ink))
        .fill(fill)
        .min_size(egui::vec2(0.0, 32.0))
}

/// The `stage` function lays out the window: heading, setup, punchline, the three joke buttons in
/// a row, and the quit button beneath them.
///
/// Returns the act for the button clicked this frame, if any.
pub fn stage(ctx: &egui::Context, board: &Board) -> Option<Act> {
    let mut act = None;
    let frame = egui::Frame::none()
        .fill(BACKDROP)
        .inner_margin(egui::Margin::same(20.0));
    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(board.heading())
                    .size(22.0)
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.add_space(20.0);
            ui.label(RichText::new(board.setup()).size(18.0).color(GOLD));
            ui.add_space(10.0);
            ui.label(RichText::new(board.punchline()).size(18.0).color(LIGHT_GREEN));
            ui.add_space(20.0);
            ui.horizontal_wrapped(|ui| {
                if ui
                    .add(button(TELL_LABEL, GREEN, Color32::WHITE))
                    .clicked()
                {
                    act = Some(Act::Tell);
                }
                if ui
                    .add_enabled(
                        board.can_reveal(),
                        button(REVEAL_LABEL, ORANGE, Color32::BLACK),
                    )
                    .clicked()
                {
                    act = Some(Act::Reveal);
                }
                if ui
                    .add(button(NEXT_LABEL, STEEL_BLUE, Color32::WHITE))
                    .clicked()
                {
                    act = Some(Act::Next);
                }
            });
            ui.add_space(10.0);
            if ui
                .add(button(QUIT_LABEL, ALARM_RED, Color32::WHITE))
                .clicked()
            {
                act = Some(Act::Quit);
            }
        });
    });
    act
}
