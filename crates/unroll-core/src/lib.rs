//! Core traits and error types for the unroll collections.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! capability contracts that sequence containers fulfil ([`List`],
//! [`Stack`]) and the [`ContainerError`] they report.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

pub use error::ContainerError;
pub use traits::{List, Stack};
