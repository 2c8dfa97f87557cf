//! Runs the shared List/Stack conformance workloads over several node
//! capacities, including the calculated one.

use unroll_list::{unrolled, UnrolledList};
use unroll_test_utils::{run_list_conformance, run_stack_conformance};

type Fitted = unrolled!(i32);

#[test]
fn fitted_capacity_list_conforms() {
    run_list_conformance::<Fitted>();
}

#[test]
fn fitted_capacity_stack_conforms() {
    run_stack_conformance::<Fitted>();
}

#[test]
fn single_slot_nodes_conform() {
    run_list_conformance::<UnrolledList<i32, 1>>();
    run_stack_conformance::<UnrolledList<i32, 1>>();
}

#[test]
fn small_nodes_conform() {
    run_list_conformance::<UnrolledList<i32, 2>>();
    run_list_conformance::<UnrolledList<i32, 7>>();
    run_stack_conformance::<UnrolledList<i32, 3>>();
}

#[test]
fn capacity_larger_than_workload_conforms() {
    run_list_conformance::<UnrolledList<i32, 128>>();
}
