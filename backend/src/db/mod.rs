//! Record store for dashboard data.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  View layer (external renderer)                         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Screens (screens/*) - per-screen view state + DTOs      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Services (services/*) - filtering, metrics, intake      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │ record slices
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  RecordStore trait (repository) - data access           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! Stores are built by [`RepositoryFactory`] from a seed document or from
//! `dashboard.toml`.

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one record store backend feature.");

pub mod factory;
pub mod repositories;
pub mod repository;

pub use factory::RepositoryFactory;
pub use repositories::LocalRepository;
pub use repository::{ErrorContext, RecordStore, RepositoryError, RepositoryResult};
