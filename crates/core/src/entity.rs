//! Entity trait: identity + continuity across edits.

/// Entity marker + minimal interface.
///
/// Saved seller profiles and invoice lines are edited in place and looked up
/// by id, so they are entities; amounts and buyer details are plain values.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
