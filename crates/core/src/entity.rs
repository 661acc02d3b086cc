//! Identity of stored records.

/// A record whose identity survives changes to its other fields.
pub trait Entity {
    /// Identifier; its `Eq` decides whether two records are the same one.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;

    /// True if both records carry the same identity, whatever else differs.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
