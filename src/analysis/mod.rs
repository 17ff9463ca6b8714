//! Batch result analysis

/// Aggregate statistics over finished games
pub mod statistics;
