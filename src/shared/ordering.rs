//! Drag-and-drop list reordering.
//!
//! Display order for portfolio cards, carousel images and expertise areas
//! is a dense zero-based `sort_order` column. Every mutation that changes
//! list length or order must leave exactly one item per slot in `0..N-1`.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReorderError {
    #[error("Source index {index} is out of bounds for list of length {len}")]
    SourceOutOfBounds { index: usize, len: usize },

    #[error("Target index {index} is out of bounds for list of length {len}")]
    TargetOutOfBounds { index: usize, len: usize },
}

/// Moves the element at `source` to `target`, preserving the relative
/// order of everything else.
///
/// Returns `true` when the list actually changed. `source == target`,
/// an empty list, or a single-item list is a no-op so callers can skip
/// the write entirely.
pub fn move_item<T>(items: &mut Vec<T>, source: usize, target: usize) -> Result<bool, ReorderError> {
    let len = items.len();

    // Nothing to move; not an error, just nothing to do.
    if len == 0 {
        return Ok(false);
    }

    if source >= len {
        return Err(ReorderError::SourceOutOfBounds { index: source, len });
    }
    if target >= len {
        return Err(ReorderError::TargetOutOfBounds { index: target, len });
    }
    if source == target {
        return Ok(false);
    }

    let moved = items.remove(source);
    items.insert(target, moved);

    Ok(true)
}

/// Assigns each slot its index, restoring the dense `0..N-1` sequence.
/// Returns the positions whose value actually changed, so persistence
/// can touch only dirty rows.
pub fn resequence(sort_orders: &mut [i32]) -> Vec<usize> {
    let mut changed = Vec::new();

    for (index, slot) in sort_orders.iter_mut().enumerate() {
        let expected = index as i32;
        if *slot != expected {
            *slot = expected;
            changed.push(index);
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_forward_preserves_relative_order() {
        let mut items = vec!["a", "b", "c", "d", "e"];

        let changed = move_item(&mut items, 1, 3).unwrap();

        assert!(changed);
        assert_eq!(items, vec!["a", "c", "d", "b", "e"]);
    }

    #[test]
    fn move_backward_preserves_relative_order() {
        let mut items = vec!["a", "b", "c", "d", "e"];

        let changed = move_item(&mut items, 3, 0).unwrap();

        assert!(changed);
        assert_eq!(items, vec!["d", "a", "b", "c", "e"]);
    }

    #[test]
    fn move_to_same_position_is_noop() {
        let mut items = vec![10, 20, 30];

        let changed = move_item(&mut items, 1, 1).unwrap();

        assert!(!changed);
        assert_eq!(items, vec![10, 20, 30]);
    }

    #[test]
    fn single_item_list_is_noop() {
        let mut items = vec![42];

        let changed = move_item(&mut items, 0, 0).unwrap();

        assert!(!changed);
        assert_eq!(items, vec![42]);
    }

    #[test]
    fn empty_list_is_noop() {
        let mut items: Vec<i32> = vec![];

        let changed = move_item(&mut items, 0, 0).unwrap();

        assert!(!changed);
        assert!(items.is_empty());
    }

    #[test]
    fn empty_list_ignores_stale_indices() {
        let mut items: Vec<i32> = vec![];

        let changed = move_item(&mut items, 4, 1).unwrap();

        assert!(!changed);
        assert!(items.is_empty());
    }

    #[test]
    fn source_out_of_bounds_is_rejected() {
        let mut items = vec![1, 2, 3];

        let result = move_item(&mut items, 3, 0);

        assert_eq!(
            result,
            Err(ReorderError::SourceOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn target_out_of_bounds_is_rejected() {
        let mut items = vec![1, 2, 3];

        let result = move_item(&mut items, 0, 5);

        assert_eq!(
            result,
            Err(ReorderError::TargetOutOfBounds { index: 5, len: 3 })
        );
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn moved_list_is_a_permutation() {
        let original = vec![7, 3, 9, 1, 5, 8];

        for source in 0..original.len() {
            for target in 0..original.len() {
                let mut items = original.clone();
                move_item(&mut items, source, target).unwrap();

                let mut sorted_before = original.clone();
                let mut sorted_after = items.clone();
                sorted_before.sort();
                sorted_after.sort();

                assert_eq!(sorted_before, sorted_after);
                assert_eq!(items[target], original[source]);
            }
        }
    }

    #[test]
    fn resequence_restores_dense_sequence() {
        let mut orders = vec![0, 2, 3, 7];

        let changed = resequence(&mut orders);

        assert_eq!(orders, vec![0, 1, 2, 3]);
        assert_eq!(changed, vec![1, 2, 3]);
    }

    #[test]
    fn resequence_on_already_dense_list_changes_nothing() {
        let mut orders = vec![0, 1, 2];

        let changed = resequence(&mut orders);

        assert_eq!(orders, vec![0, 1, 2]);
        assert!(changed.is_empty());
    }

    #[test]
    fn resequence_on_empty_list_changes_nothing() {
        let mut orders: Vec<i32> = vec![];

        assert!(resequence(&mut orders).is_empty());
    }
}
