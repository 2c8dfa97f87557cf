//! Contract conformance helpers.
//!
//! These functions verify that a container satisfies the behaviour the
//! [`List`] and [`Stack`] contracts promise. Each helper builds a fresh
//! container through `Default`, drives a `SIZE`-element workload and
//! panics with a descriptive message on the first violation.

use indexmap::IndexSet;
use unroll_core::{ContainerError, List, Stack};

/// Workload size used by every helper.
pub const SIZE: i32 = 100;

const LEN: usize = SIZE as usize;

/// Assert that pushing `SIZE` values gives `size() == SIZE` and the last
/// pushed value on top, and that `clear` empties the stack.
pub fn assert_stack_push_top_clear<S: Stack<i32> + Default>() {
    let mut stack = S::default();
    for i in 0..SIZE {
        stack.push(i);
    }
    assert_eq!(stack.size(), LEN, "size after {SIZE} pushes");
    assert_eq!(stack.top(), Ok(&(SIZE - 1)), "top after {SIZE} pushes");

    stack.clear();
    assert_eq!(stack.size(), 0, "size after clear");
    assert_eq!(stack.top(), Err(ContainerError::Empty), "top after clear");
}

/// Assert that values pop in reverse push order and that the emptied
/// stack can be filled again.
pub fn assert_stack_pops_in_reverse<S: Stack<i32> + Default>() {
    let mut stack = S::default();
    for i in 0..SIZE {
        stack.push(i);
    }
    for i in (0..SIZE).rev() {
        assert_eq!(stack.pop(), Ok(i), "pop should return values in reverse");
    }
    assert_eq!(stack.pop(), Err(ContainerError::Empty), "pop on empty stack");
    assert_eq!(stack.size(), 0);

    for i in 0..SIZE {
        stack.push(i);
    }
    assert_eq!(stack.size(), LEN, "stack reusable after draining");
}

/// Run every stack check.
pub fn run_stack_conformance<S: Stack<i32> + Default>() {
    assert_stack_push_top_clear::<S>();
    assert_stack_pops_in_reverse::<S>();
}

/// Assert that `push_front` makes each value findable at index 0.
pub fn assert_list_push_front_finds_at_front<L: List<i32> + Default>() {
    let mut list = L::default();
    for i in 0..SIZE {
        list.push_front(i);
        assert!(list.contains(&i), "contains({i}) after push_front");
        assert_eq!(list.find(&i), 0, "find({i}) after push_front");
    }
    for i in 0..SIZE {
        assert_eq!(list.at(LEN - 1 - i as usize), Ok(&i));
    }
}

/// Assert that `insert` in the middle lands at the requested index and
/// `erase` takes it back out.
pub fn assert_list_insert_erase_middle<L: List<i32> + Default>() {
    let mut list = L::default();
    for i in 0..SIZE - 1 {
        list.push_front(i);
    }
    let middle = LEN / 2;
    assert_eq!(list.insert(SIZE, middle), Ok(()));
    assert_eq!(list.at(middle), Ok(&SIZE), "inserted value at index {middle}");
    assert_eq!(list.size(), LEN);
    assert_eq!(list.erase(middle), Ok(SIZE), "erase returns inserted value");
    assert_eq!(list.size(), LEN - 1);

    for i in 0..SIZE - 1 {
        assert_eq!(list.pop_back(), Ok(i), "pop_back after push_front");
        assert!(!list.contains(&i), "contains({i}) after removal");
        assert_eq!(list.find(&i), list.size(), "find({i}) after removal");
    }
    assert_eq!(list.size(), 0);
}

/// Assert that `push_back` keeps insertion order for `at` and `find`.
pub fn assert_list_push_back_preserves_order<L: List<i32> + Default>() {
    let mut list = L::default();
    for i in 0..SIZE {
        list.push_back(i);
        assert!(list.contains(&i));
        assert_eq!(list.find(&i), i as usize, "find({i}) after push_back");
    }
    assert_eq!(list.size(), LEN);
    for i in 0..SIZE {
        let index = list.find(&i);
        assert_eq!(list.at(index), Ok(&i), "at(find({i}))");
    }
}

/// Assert that `pop_front` drains in insertion order.
pub fn assert_list_pop_front_in_order<L: List<i32> + Default>() {
    let mut list = L::default();
    for i in 0..SIZE {
        list.push_back(i);
    }
    for i in 0..SIZE {
        assert_eq!(list.pop_front(), Ok(i), "pop_front order");
        assert!(!list.contains(&i));
        assert_eq!(list.find(&i), list.size());
    }
    assert_eq!(list.pop_front(), Err(ContainerError::Empty));
    assert_eq!(list.size(), 0);
}

/// Assert that indices past the end are rejected and leave the list as
/// it was.
pub fn assert_list_rejects_out_of_range<L: List<i32> + Default>() {
    let mut list = L::default();
    assert_eq!(list.at(0), Err(ContainerError::out_of_range(0, 0)));
    assert_eq!(list.pop_back(), Err(ContainerError::Empty));
    for i in 0..SIZE {
        list.push_back(i);
    }
    assert_eq!(list.at(LEN), Err(ContainerError::out_of_range(LEN, LEN)));
    assert_eq!(
        list.insert(-1, LEN + 1),
        Err(ContainerError::out_of_range(LEN + 1, LEN))
    );
    assert_eq!(list.erase(LEN), Err(ContainerError::out_of_range(LEN, LEN)));
    assert_eq!(list.size(), LEN, "rejected calls must not change size");
    assert_eq!(list.at(LEN - 1), Ok(&(SIZE - 1)));
}

/// Assert that `clear` empties the list and that refilling reproduces the
/// sequence of a fresh list.
pub fn assert_list_clear_then_refill<L: List<i32> + Default>() {
    let mut list = L::default();
    for i in 0..SIZE {
        list.push_back(i);
    }
    list.clear();
    assert_eq!(list.size(), 0, "size after clear");
    assert!(!list.contains(&0));

    for i in 0..SIZE {
        list.push_back(i);
    }
    let mut fresh = L::default();
    for i in 0..SIZE {
        fresh.push_back(i);
    }
    for i in 0..LEN {
        assert_eq!(list.at(i), fresh.at(i), "refilled list differs at {i}");
    }
}

/// Assert that `find`/`contains` agree with an insertion-ordered set of
/// live values while elements are removed from both ends.
pub fn assert_list_membership_tracks_model<L: List<i32> + Default>() {
    let mut list = L::default();
    let mut live = IndexSet::new();
    for i in 0..SIZE {
        list.push_back(i);
        live.insert(i);
    }
    for round in 0..SIZE {
        let removed = if round % 2 == 0 {
            let value = list.pop_front().expect("list still has elements");
            assert!(live.shift_remove(&value), "pop_front returned {value} twice");
            value
        } else {
            let value = list.pop_back().expect("list still has elements");
            assert!(live.shift_remove(&value), "pop_back returned {value} twice");
            value
        };
        assert!(!list.contains(&removed));
        for probe in [0, removed + 1, SIZE / 2, SIZE - 1] {
            let expected = live.get_index_of(&probe).unwrap_or(live.len());
            assert_eq!(list.find(&probe), expected, "find({probe}) in round {round}");
        }
    }
    assert!(live.is_empty());
    assert_eq!(list.size(), 0);
}

/// Run every list check.
pub fn run_list_conformance<L: List<i32> + Default>() {
    assert_list_push_front_finds_at_front::<L>();
    assert_list_insert_erase_middle::<L>();
    assert_list_push_back_preserves_order::<L>();
    assert_list_pop_front_in_order::<L>();
    assert_list_rejects_out_of_range::<L>();
    assert_list_clear_then_refill::<L>();
    assert_list_membership_tracks_model::<L>();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::VecList;

    #[test]
    fn reference_list_conforms() {
        run_list_conformance::<VecList<i32>>();
    }

    #[test]
    fn reference_stack_conforms() {
        run_stack_conformance::<VecList<i32>>();
    }
}
