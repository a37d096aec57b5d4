//! This module acts as a central hub for all data-access logic.
//! Storage is an in-memory mock; submodules are reached via their full path,
//! e.g., `database::profile::get_or_create_profile`.

pub mod activity;
pub mod catalog;
pub mod friends;
pub mod init;
pub mod leaderboard;
pub mod models;
pub mod profile;

pub use init::MemoryStore;
