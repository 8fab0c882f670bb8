//! Domain services for the booking wizard
//!
//! Everything here is a synchronous pure computation over in-memory data:
//! the filter predicate engine, the bounded comparison set, and the wizard
//! step progression. No IO, no hidden observer graph; the host re-derives
//! the filtered list whenever relevant state changes.

pub mod compare;
pub mod filter;
pub mod wizard;

pub use compare::{ComparisonSet, MAX_COMPARE};
pub use filter::{
    price_bounds, visible_skips, FilterConfig, PriceRange, SizeRange, DEFAULT_PRICE_RANGE,
    DEFAULT_SIZE_RANGE,
};
