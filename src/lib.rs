//! Blog Cache - A blog post API with an in-memory TTL cache
//!
//! Serves posts by id, slug, list and page through a read-through cache
//! that is invalidated on every write.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod tasks;

pub use api::AppState;
pub use cache::{PostCache, TtlCache};
pub use config::Config;
pub use service::PostService;
pub use tasks::{spawn_sweep_task, SweepHandle};
