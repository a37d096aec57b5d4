//! Service layer between the Discord commands and the in-memory store.

pub mod progress;
pub mod ranking;
pub mod repository;

pub use repository::ProgressRepository;
