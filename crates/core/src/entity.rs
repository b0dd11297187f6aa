//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Repositories key stored entities by `Id`, so the identifier must never
/// change once the entity exists.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
