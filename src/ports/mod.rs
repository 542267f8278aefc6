//! Ports module for Content Ordering

pub mod inbound;
