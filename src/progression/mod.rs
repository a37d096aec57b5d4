//! This module contains the core progression logic: turning pickups into
//! rewards, climbing the experience ladder, spending stat points and ranking
//! users against each other.
//!
//! Nothing in here performs I/O. Callers hand in the state to mutate.

pub mod allocation;
pub mod engine;
pub mod friends;
pub mod leveling;
pub mod ranking;
pub mod rewards;
pub mod summary;
