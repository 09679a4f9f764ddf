// ── Optimistic reorder primitives ──
//
// Pure list operations for the drag protocol. The splice is applied to
// the in-memory, currently loaded page only; positions for items on
// other pages are never touched, so reordering across page boundaries
// is unsupported by contract.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::model::{EntityId, Positioned, Resource};

/// Move the dragged item into the target's slot: remove it from its
/// current index and reinsert it at the target's index, shifting the
/// target (and everything after it) down by one.
///
/// Returns `false` — leaving the sequence unchanged — if either id is
/// not on the loaded page.
pub(crate) fn splice_to_target<T: Resource>(
    items: &mut Vec<Arc<T>>,
    dragged: &EntityId,
    target: &EntityId,
) -> bool {
    let Some(from) = items.iter().position(|i| i.id() == dragged) else {
        return false;
    };
    if dragged == target {
        return true;
    }

    let item = items.remove(from);
    match items.iter().position(|i| i.id() == target) {
        Some(to) => {
            items.insert(to, item);
            true
        }
        None => {
            // Target vanished (concurrent refetch); restore the dragged item.
            items.insert(from, item);
            false
        }
    }
}

/// Dense position assignment for the final in-memory order:
/// `position[i] = i + 1`, keyed by id for the batched commit.
pub(crate) fn position_map<T: Positioned>(items: &[Arc<T>]) -> BTreeMap<String, u32> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let position = u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1);
            (item.id().to_string(), position)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::banner::Banner;
    use chrono::Utc;

    fn banner(id: &str, position: u32) -> Arc<Banner> {
        Arc::new(Banner {
            id: EntityId::from(id),
            title: format!("banner {id}"),
            image_url: format!("https://cdn.curio.market/{id}.png"),
            link_url: None,
            position,
            active: true,
            created_at: Utc::now(),
        })
    }

    fn ids(items: &[Arc<Banner>]) -> Vec<String> {
        items.iter().map(|b| b.id.to_string()).collect()
    }

    #[test]
    fn drag_index_two_onto_index_zero() {
        let mut items: Vec<_> = (0..5).map(|i| banner(&format!("b{i}"), i + 1)).collect();

        let moved = splice_to_target(
            &mut items,
            &EntityId::from("b2"),
            &EntityId::from("b0"),
        );

        assert!(moved);
        assert_eq!(ids(&items), ["b2", "b0", "b1", "b3", "b4"]);
    }

    #[test]
    fn drag_forward_takes_target_slot() {
        let mut items: Vec<_> = (0..4).map(|i| banner(&format!("b{i}"), i + 1)).collect();

        splice_to_target(&mut items, &EntityId::from("b0"), &EntityId::from("b2"));

        assert_eq!(ids(&items), ["b1", "b2", "b0", "b3"]);
    }

    #[test]
    fn missing_target_restores_order() {
        let mut items: Vec<_> = (0..3).map(|i| banner(&format!("b{i}"), i + 1)).collect();
        let before = ids(&items);

        let moved = splice_to_target(&mut items, &EntityId::from("b1"), &EntityId::from("gone"));

        assert!(!moved);
        assert_eq!(ids(&items), before);
    }

    #[test]
    fn drag_onto_itself_is_a_noop() {
        let mut items: Vec<_> = (0..3).map(|i| banner(&format!("b{i}"), i + 1)).collect();
        let before = ids(&items);

        assert!(splice_to_target(
            &mut items,
            &EntityId::from("b1"),
            &EntityId::from("b1")
        ));
        assert_eq!(ids(&items), before);
    }

    #[test]
    fn position_map_is_index_plus_one() {
        let items = vec![banner("b2", 9), banner("b0", 9), banner("b1", 9)];

        let map = position_map(&items);

        assert_eq!(map.get("b2"), Some(&1));
        assert_eq!(map.get("b0"), Some(&2));
        assert_eq!(map.get("b1"), Some(&3));
    }
}
