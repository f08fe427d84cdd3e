//! # sGVI Parallel
//!
//! Worker-pool strategies for processing independent regions.
//!
//! Regions share only read-only inputs, so a batch maps region indices
//! through a [`ProcessingMode`] and collects the results in index order.

pub mod strategy;

pub use strategy::{num_cpus, ParallelStrategy, ProcessingMode};
