//! Parts inventory module.
//!
//! A part is either bought from a supplier or pulled from a vehicle being
//! disassembled. Its stock quantity can never drop below zero.

pub mod part;

pub use part::{Part, Provenance};
