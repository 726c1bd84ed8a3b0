//! Entity trait: records that are identified by a key rather than by value.

/// A record with a stable identifier.
///
/// Two entities with the same id are the same record, even if other fields
/// differ. Keyed containers use `id()` as their lookup key.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
