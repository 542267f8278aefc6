//! Domain layer for Content Ordering
//!
//! - Entities: items, analyses, reports
//! - Errors: configuration and strategy failure types
//! - Invariants: checkable properties of orderings

pub mod entities;
pub mod errors;
pub mod invariants;
