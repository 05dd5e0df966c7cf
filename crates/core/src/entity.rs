//! Entity trait: records with a stable identity.

/// Something addressed by its id rather than its contents.
///
/// Two `Item`s with the same `ItemId` are the same stock line even if their
/// price or quantity differ.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
