//! Entity trait: identity + continuity across state changes.

use std::collections::HashSet;

/// Entity marker + minimal interface.
///
/// Two entities with the same identifier are the same record, even when
/// their other attributes differ (e.g. an item before and after an edit).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// Position of the entity identified by `id`, if present.
pub fn position_of<E: Entity>(entities: &[E], id: E::Id) -> Option<usize> {
    entities.iter().position(|e| e.id() == id)
}

/// First identifier that occurs more than once, in iteration order.
pub fn first_duplicate_id<'a, E, I>(entities: I) -> Option<E::Id>
where
    E: Entity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut seen = HashSet::new();
    entities.into_iter().map(Entity::id).find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row {
        key: u32,
        label: &'static str,
    }

    impl Entity for Row {
        type Id = u32;

        fn id(&self) -> u32 {
            self.key
        }
    }

    fn rows(keys: &[u32]) -> Vec<Row> {
        keys.iter().map(|&key| Row { key, label: "x" }).collect()
    }

    #[test]
    fn identity_ignores_other_attributes() {
        let before = Row { key: 4, label: "old" };
        let after = Row { key: 4, label: "new" };
        assert_ne!(before.label, after.label);
        assert_eq!(before.id(), after.id());
    }

    #[test]
    fn finds_position_by_id() {
        let rows = rows(&[3, 9, 5]);
        assert_eq!(position_of(&rows, 9), Some(1));
        assert_eq!(position_of(&rows, 7), None);
    }

    #[test]
    fn reports_first_repeated_id() {
        assert_eq!(first_duplicate_id(&rows(&[1, 2, 3])), None);
        assert_eq!(first_duplicate_id(&rows(&[1, 5, 2, 5, 1])), Some(5));
    }
}
