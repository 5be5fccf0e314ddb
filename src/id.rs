/// Hands out [`accesskit::NodeId`] values in sequence, starting from one.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Deref,
    derive_more::DerefMut,
)]
pub struct Counter(u64);

impl Counter {
    pub fn node_id(&mut self) -> accesskit::NodeId {
        self.0 += 1;
        accesskit::NodeId(self.0)
    }
}
