#![doc = include_str!("../README.md")]

mod entry;
pub use entry::Entry;

mod error;
pub use error::UnknownLabel;

mod label;
pub use label::WireLabel;

mod macros;

// false-positive: only referenced from `wire_label_enum!` expansions
use serde as _;

#[cfg(test)]
mod tests;
