//! Property tests for the ordered list editor's edit algebra.

use ordlist_core::{ListEditor, ListError};
use ordlist_test_utils::{list_and_bad_index, list_and_index};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_remove_shrinks_by_one_and_keeps_order((items, index) in list_and_index()) {
        let mut list = ListEditor::from_items(items.clone());
        let removed = list.remove_at(index).unwrap();

        let mut expected = items.clone();
        let expected_removed = expected.remove(index);
        prop_assert_eq!(removed, expected_removed);
        prop_assert_eq!(list.len(), items.len() - 1);
        prop_assert_eq!(list.into_vec(), expected);
    }

    #[test]
    fn prop_boundary_moves_are_noops(items in prop::collection::vec(any::<u8>(), 1..32)) {
        let mut list = ListEditor::from_items(items.clone());
        list.move_up(0).unwrap();
        list.move_down(items.len() - 1).unwrap();
        prop_assert_eq!(list.into_vec(), items);
    }

    #[test]
    fn prop_move_up_then_down_restores((items, index) in list_and_index()) {
        prop_assume!(index > 0);
        let mut list = ListEditor::from_items(items.clone());
        list.move_up(index).unwrap();
        list.move_down(index - 1).unwrap();
        prop_assert_eq!(list.into_vec(), items);
    }

    #[test]
    fn prop_append_then_remove_last_restores(
        items in prop::collection::vec(any::<u8>(), 0..32),
        extra in any::<u8>(),
    ) {
        let mut list = ListEditor::from_items(items.clone());
        list.append(extra).unwrap();
        let last = list.len() - 1;
        prop_assert_eq!(list.remove_at(last), Ok(extra));
        prop_assert_eq!(list.into_vec(), items);
    }

    #[test]
    fn prop_out_of_range_fails_without_mutation((items, index) in list_and_bad_index()) {
        let len = items.len();
        let expected = ListError::IndexOutOfRange { index, len };
        let mut list = ListEditor::from_items(items.clone());

        prop_assert_eq!(list.remove_at(index), Err(expected.clone()));
        prop_assert_eq!(list.move_up(index), Err(expected.clone()));
        prop_assert_eq!(list.move_down(index), Err(expected.clone()));
        prop_assert_eq!(list.replace_at(index, 0), Err(expected));
        prop_assert_eq!(
            list.insert_at(index + 1, 0),
            Err(ListError::IndexOutOfRange { index: index + 1, len })
        );
        prop_assert_eq!(list.into_vec(), items);
    }

    #[test]
    fn prop_snapshot_unaffected_by_later_edits((items, index) in list_and_index()) {
        let mut list = ListEditor::from_items(items.clone());
        let snapshot = list.snapshot();
        list.remove_at(index).unwrap();
        prop_assert_eq!(snapshot.into_vec(), items);
    }
}
