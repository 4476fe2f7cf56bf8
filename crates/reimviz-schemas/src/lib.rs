//! Schema definitions for the reimbursement case dataset.
//!
//! This crate contains the data structures shared across the chart
//! pipeline: the case records as they appear in `public_cases.json` and
//! the column-oriented [`Dataset`] projection the renderers consume.
//!
//! The schemas are designed to be:
//! - **Faithful**: field names match the source JSON exactly
//! - **Read-only**: records are never mutated after load
//! - **Lockstep**: the projected series stay index-aligned with the
//!   original record order

mod case;
mod dataset;
#[cfg(test)]
mod testutil;

#[doc(inline)]
pub use case::*;
#[doc(inline)]
pub use dataset::*;
