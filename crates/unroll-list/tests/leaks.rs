//! Leak and release checks: every element that enters a list is dropped
//! exactly once, and drained nodes are returned as the list shrinks.

use unroll_list::UnrolledList;
use unroll_test_utils::{DropLedger, Tracked, SIZE};

type List = UnrolledList<Tracked, 4>;

const LEN: usize = SIZE as usize;

fn filled(ledger: &DropLedger) -> List {
    (0..SIZE).map(|i| ledger.track(i)).collect()
}

#[test_log::test]
fn push_pop_cycles_do_not_grow_the_chain() {
    let ledger = DropLedger::new();
    let mut list = List::new();

    for _ in 0..2 {
        for i in 0..SIZE {
            list.push_back(ledger.track(i));
        }
        assert_eq!(list.len(), LEN);
        assert_eq!(list.node_count(), LEN.div_ceil(4));

        for i in (0..SIZE).rev() {
            assert_eq!(list.pop_back().map(|t| t.value()), Ok(i));
        }
        assert_eq!(list.node_count(), 1);
        assert_eq!(ledger.live(), 0);
    }
    assert_eq!(ledger.created(), 2 * LEN);
}

#[test]
fn dropping_a_list_drops_every_element() {
    let ledger = DropLedger::new();
    let list = filled(&ledger);
    assert_eq!(ledger.live(), LEN);
    drop(list);
    assert_eq!(ledger.live(), 0);
}

#[test_log::test]
fn clear_drops_every_element() {
    let ledger = DropLedger::new();
    let mut list = filled(&ledger);
    list.clear();
    assert_eq!(ledger.live(), 0);
    assert_eq!(list.node_count(), 1);

    list.extend((0..SIZE).map(|i| ledger.track(i)));
    assert_eq!(ledger.live(), LEN);
}

#[test]
fn front_and_middle_removal_drop_once() {
    let ledger = DropLedger::new();
    let mut list = filled(&ledger);

    let front = list.pop_front().unwrap();
    assert_eq!(front.value(), 0);
    drop(front);
    let middle = list.erase(40).unwrap();
    assert_eq!(middle.value(), 41);
    drop(middle);

    assert_eq!(ledger.live(), LEN - 2);
    assert_eq!(list.len(), LEN - 2);
    assert_eq!(list.node_count(), (LEN - 2).div_ceil(4));
}

#[test]
fn insert_and_push_front_keep_counts_consistent() {
    let ledger = DropLedger::new();
    let mut list = filled(&ledger);
    list.push_front(ledger.track(-1));
    list.insert(ledger.track(-2), 50).unwrap();
    assert_eq!(list.len(), LEN + 2);
    assert_eq!(list.at(0).map(Tracked::value), Ok(-1));
    assert_eq!(list.at(50).map(Tracked::value), Ok(-2));
    drop(list);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn rejected_insert_drops_the_value() {
    let ledger = DropLedger::new();
    let mut list = filled(&ledger);
    assert!(list.insert(ledger.track(7), LEN + 1).is_err());
    assert_eq!(ledger.live(), LEN);
}

#[test]
fn partially_consumed_into_iter_releases_the_rest() {
    let ledger = DropLedger::new();
    let mut iter = filled(&ledger).into_iter();
    for i in 0..10 {
        assert_eq!(iter.next().map(|t| t.value()), Some(i));
    }
    assert_eq!(ledger.live(), LEN - 10);
    drop(iter);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn clones_are_released_independently() {
    let ledger = DropLedger::new();
    let original = filled(&ledger);
    let mut copy = original.clone();
    assert_eq!(ledger.live(), 2 * LEN);

    copy.clear();
    assert_eq!(ledger.live(), LEN);
    assert_eq!(original.len(), LEN);
    assert_eq!(original.at(LEN - 1).map(Tracked::value), Ok(SIZE - 1));
    drop(original);
    assert_eq!(ledger.live(), 0);
}
