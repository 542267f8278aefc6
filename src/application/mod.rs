//! Application layer for Content Ordering

pub mod service;
