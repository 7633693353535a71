// crates/core/src/filter/mod.rs
//! Record filters. Each filter decides for every record first and only then
//! removes the rejected ones, so a failing filter never half-applies.

pub mod date;
pub mod text;

pub use date::DateRangeFilter;
pub use text::TextFilter;
