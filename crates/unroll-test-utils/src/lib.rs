//! Test utilities for unroll containers.
//!
//! Provides generic conformance checks for the [`List`] and [`Stack`]
//! contracts ([`conformance`]), a drop-counting element type for leak
//! checks ([`DropLedger`], [`Tracked`]) and a `Vec`-backed reference
//! container ([`VecList`]).
//!
//! [`List`]: unroll_core::List
//! [`Stack`]: unroll_core::Stack

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod conformance;
pub mod ledger;
pub mod reference;

pub use conformance::{run_list_conformance, run_stack_conformance, SIZE};
pub use ledger::{DropLedger, Tracked};
pub use reference::VecList;
