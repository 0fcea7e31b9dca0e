//! Row sources: producers of the textual rows an insert call consumes.
//!
//! The reference source is [`TsvSource`]; anything that can yield ordered
//! name-to-text mappings can implement
//! [`RowSource`](crate::core::traits::RowSource).

mod tsv;

pub use tsv::TsvSource;
