//! Pot-based rating computation and ranking
//!
//! This module holds the sequential rating engine and the standings sort
//! that turns its output into the ranked table.

pub mod engine;
pub mod standings;

// Re-export commonly used items
pub use engine::RatingEngine;
pub use standings::rank;
