use crate::view::{NEXT_LABEL, QUIT_LABEL, REVEAL_LABEL, TELL_LABEL};
use crate::{Act, Board, Counter};

/// Centralizes information related to the navigation tree, the view of the window we give to
/// screen readers through [`accesskit`].
///
/// The tree mirrors the egui layout: a window holding the heading, the setup and punchline
/// labels, and one button per [`Act`].  The joke labels are polite live regions, so a screen
/// reader announces a new setup or punchline as it appears.
///
/// # Fields
///
/// * app_name - Application name delivered to the screen reader.
/// * window, heading, setup, punchline - Node ids for the window and its labels.
/// * tell, reveal, next, quit - Node ids for the buttons.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct Nav {
    app_name: String,
    window: accesskit::NodeId,
    heading: accesskit::NodeId,
    setup: accesskit::NodeId,
    punchline: accesskit::NodeId,
    tell: accesskit::NodeId,
    reveal: accesskit::NodeId,
    next: accesskit::NodeId,
    quit: accesskit::NodeId,
}

impl Nav {
    pub fn new(app_name: &str) -> Self {
        let mut id = Counter::default();
        Self {
            app_name: app_name.to_string(),
            window: id.node_id(),
            heading: id.node_id(),
            setup: id.node_id(),
            punchline: id.node_id(),
            tell: id.node_id(),
            reveal: id.node_id(),
            next: id.node_id(),
            quit: id.node_id(),
        }
    }

    /// Returns a [`accesskit::TreeUpdate`] containing the full information for the tree.
    ///
    /// Focus rests on "Show Punchline" while it is live, otherwise on the tell button, so that a
    /// keyboard or screen reader user always lands on the next useful thing to press.
    pub fn tree(&self, board: &Board) -> accesskit::TreeUpdate {
        let mut tree = accesskit::Tree::new(self.window);
        tree.app_name = Some(self.app_name.clone());
        let focus = if board.can_reveal() {
            self.reveal
        } else {
            self.tell
        };
        accesskit::TreeUpdate {
            nodes: self.nodes(board),
            tree: Some(tree),
            focus,
        }
    }

    /// Renders every node for the current `board`.
    pub fn nodes(&self, board: &Board) -> Vec<(accesskit::NodeId, accesskit::Node)> {
        vec![
            (self.window, self.root()),
            (self.heading, Self::label(board.heading(), None)),
            (
                self.setup,
                Self::label(board.setup(), Some(accesskit::Live::Polite)),
            ),
            (
                self.punchline,
                Self::label(board.punchline(), Some(accesskit::Live::Polite)),
            ),
            (self.tell, Self::button(TELL_LABEL, true)),
            (self.reveal, Self::button(REVEAL_LABEL, board.can_reveal())),
            (self.next, Self::button(NEXT_LABEL, true)),
            (self.quit, Self::button(QUIT_LABEL, true)),
        ]
    }

    /// The `act` method translates an accessibility action on node `target` into an [`Act`].
    /// Only the default action (a click) on one of our buttons counts.
    pub fn act(&self, action: accesskit::Action, target: accesskit::NodeId) -> Option<Act> {
        if action != accesskit::Action::Default {
            return None;
        }
        match target {
            id if id == self.tell => Some(Act::Tell),
            id if id == self.reveal => Some(Act::Reveal),
            id if id == self.next => Some(Act::Next),
            id if id == self.quit => Some(Act::Quit),
            _ => None,
        }
    }

    fn root(&self) -> accesskit::Node {
        let mut builder = accesskit::NodeBuilder::new(accesskit::Role::Window);
        builder.set_children(vec![
            self.heading,
            self.setup,
            self.punchline,
            self.tell,
            self.reveal,
            self.next,
            self.quit,
        ]);
        builder.set_name(self.app_name.clone());
        builder.build()
    }

    /// Generates a message using the [`accesskit::Role::Label`] role.
    pub fn label(text: &str, live: Option<accesskit::Live>) -> accesskit::Node {
        let mut builder = accesskit::NodeBuilder::new(accesskit::Role::Label);
        builder.set_name(text);
        if let Some(live) = live {
            builder.set_live(live);
        }
        builder.build()
    }

    /// Generates a clickable [`accesskit::Role::Button`], flagged disabled unless `enabled`.
    pub fn button(text: &str, enabled: bool) -> accesskit::Node {
        let mut builder = accesskit::NodeBuilder::new(accesskit::Role::Button);
        builder.set_name(text);
        if enabled {
            builder.add_action(accesskit::Action::Default);
        } else {
            builder.set_disabled();
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, Session};
    use rand::SeedableRng;

    fn node(update: &accesskit::TreeUpdate, id: accesskit::NodeId) -> &accesskit::Node {
        &update
            .nodes
            .iter()
            .find(|(node_id, _)| *node_id == id)
            .unwrap()
            .1
    }

    #[test]
    fn tree_mirrors_board() {
        let nav = Nav::new("Jester");
        let mut session = Session::new(Catalog::parse("Why? Because."));
        let update = nav.tree(&Board::new("Heading", &session));
        assert_eq!(update.nodes.len(), 8);
        assert_eq!(update.tree.as_ref().unwrap().root, *nav.window());
        assert_eq!(update.focus, *nav.tell());
        assert!(node(&update, *nav.reveal()).is_disabled());
        assert_eq!(node(&update, *nav.heading()).name(), Some("Heading"));

        let mut rng = rand::rngs::StdRng::seed_from_u64(9);
        session.pick(&mut rng);
        let update = nav.tree(&Board::new("Heading", &session));
        assert_eq!(update.focus, *nav.reveal());
        assert!(!node(&update, *nav.reveal()).is_disabled());
        assert_eq!(node(&update, *nav.setup()).name(), Some("Why?"));
        assert_eq!(node(&update, *nav.window()).children().len(), 7);
    }

    #[test]
    fn clicks_map_to_acts() {
        let nav = Nav::new("Jester");
        let click = accesskit::Action::Default;
        assert_eq!(nav.act(click, *nav.tell()), Some(Act::Tell));
        assert_eq!(nav.act(click, *nav.reveal()), Some(Act::Reveal));
        assert_eq!(nav.act(click, *nav.next()), Some(Act::Next));
        assert_eq!(nav.act(click, *nav.quit()), Some(Act::Quit));
        assert_eq!(nav.act(click, *nav.setup()), None);
        assert_eq!(nav.act(accesskit::Action::Focus, *nav.tell()), None);
    }
}
