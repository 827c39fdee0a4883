//! In-memory storage primitives
//!
//! [`OrderedStore`] keeps children densely positioned inside their
//! containers; [`Catalog`] holds the top-level containers themselves.

mod catalog;
mod ordered;

pub use catalog::{Catalog, Record};
pub use ordered::{slot, Entry, OrderedStore};
